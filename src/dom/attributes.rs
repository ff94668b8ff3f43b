//! Ordered attribute store
//!
//! A small key/value byte-string map preserving insertion order, as node
//! attributes appear in document order. Lookup is a linear scan; attribute
//! counts are small in practice.

/// One attribute: a name and a byte-string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: Vec<u8>,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Attribute name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value bytes
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Attribute value as UTF-8, if valid
    pub fn value_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }
}

/// Insertion-ordered key/value store for genuine node attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    items: Vec<Attribute>,
}

impl Attributes {
    /// Create an empty store
    pub fn new() -> Self {
        Attributes { items: Vec::new() }
    }

    /// Number of attributes
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if `name` is present
    pub fn has_key(&self, name: &str) -> bool {
        self.items.iter().any(|a| a.name == name)
    }

    /// Insert or replace; replacement keeps the original position
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) {
        let name = name.into();
        match self.items.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value.into(),
            None => self.items.push(Attribute::new(name, value)),
        }
    }

    /// Append bytes to an existing value, or create the entry
    pub fn append_value(&mut self, name: &str, bytes: &[u8]) {
        match self.items.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value.extend_from_slice(bytes),
            None => self.items.push(Attribute::new(name, bytes)),
        }
    }

    /// View a value without copying
    pub fn view_value(&self, name: &str) -> Option<&[u8]> {
        self.items.iter().find(|a| a.name == name).map(|a| a.value())
    }

    /// Remove an attribute, returning its value
    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
        let idx = self.items.iter().position(|a| a.name == name)?;
        Some(self.items.remove(idx).value)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_view() {
        let mut attrs = Attributes::new();
        attrs.put("class", b"code".to_vec());
        assert!(attrs.has_key("class"));
        assert_eq!(attrs.view_value("class"), Some(b"code" as &[u8]));
        assert_eq!(attrs.view_value("id"), None);
    }

    #[test]
    fn test_put_replaces_in_place() {
        let mut attrs = Attributes::new();
        attrs.put("a", b"1".to_vec());
        attrs.put("b", b"2".to_vec());
        attrs.put("a", b"3".to_vec());
        assert_eq!(attrs.len(), 2);
        let names: Vec<&str> = attrs.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(attrs.view_value("a"), Some(b"3" as &[u8]));
    }

    #[test]
    fn test_append_value_extends() {
        let mut attrs = Attributes::new();
        attrs.append_value("data", b"abc");
        attrs.append_value("data", b"def");
        assert_eq!(attrs.view_value("data"), Some(b"abcdef" as &[u8]));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut attrs = Attributes::new();
        attrs.put("z", b"".to_vec());
        attrs.put("a", b"".to_vec());
        attrs.put("m", b"".to_vec());
        let names: Vec<&str> = attrs.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn test_remove() {
        let mut attrs = Attributes::new();
        attrs.put("id", b"x".to_vec());
        assert_eq!(attrs.remove("id"), Some(b"x".to_vec()));
        assert!(!attrs.has_key("id"));
        assert_eq!(attrs.remove("id"), None);
    }
}
