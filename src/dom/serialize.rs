//! Serialization surface
//!
//! Nodes write themselves into an `io::Write` sink. `OutputSettings` carries
//! the formatting knobs; raw data nodes write their payload verbatim and
//! ignore indentation.

use std::io;

/// Formatting settings for document output.
#[derive(Debug, Clone)]
pub struct OutputSettings {
    /// Emit newlines and indentation between nodes
    pub pretty_print: bool,
    /// Spaces per depth level when pretty-printing
    pub indent_width: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            pretty_print: false,
            indent_width: 2,
        }
    }
}

impl OutputSettings {
    /// Write the indentation for `depth`, if pretty-printing
    pub fn write_indent<W: io::Write + ?Sized>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        if self.pretty_print {
            for _ in 0..depth * self.indent_width {
                out.write_all(b" ")?;
            }
        }
        Ok(())
    }
}

/// Rendering contract every node kind implements.
pub trait NodeRender {
    /// Fixed node name tag (e.g. `"#data"`)
    fn node_name(&self) -> &'static str;

    /// Write this node's serialized form into `out`
    fn render(
        &mut self,
        out: &mut dyn io::Write,
        depth: usize,
        settings: &OutputSettings,
    ) -> io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_disabled_by_default() {
        let settings = OutputSettings::default();
        let mut out = Vec::new();
        settings.write_indent(&mut out, 3).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_indent_when_pretty() {
        let settings = OutputSettings {
            pretty_print: true,
            indent_width: 2,
        };
        let mut out = Vec::new();
        settings.write_indent(&mut out, 3).unwrap();
        assert_eq!(out, b"      ");
    }
}
