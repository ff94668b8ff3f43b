//! Entity decoding for encoded text payloads
//!
//! Two entry points:
//! - `decode_text`: lenient, keeps anything it cannot decode, `Cow` zero-copy
//!   when no references are present
//! - `unescape`: strict, rejects malformed character references
//!
//! Uses memchr for the ampersand fast path.

use super::error::DecodeError;
use memchr::memchr;
use std::borrow::Cow;

/// Longest reference body we bother scanning for a terminating `;`.
const MAX_REFERENCE_LEN: usize = 32;

/// Decode entity references leniently.
///
/// Returns `Borrowed` when the input contains no `&` (zero-copy). Anything
/// that does not parse as a reference is copied through unchanged.
pub fn decode_text(input: &[u8]) -> Cow<'_, [u8]> {
    if memchr(b'&', input).is_none() {
        return Cow::Borrowed(input);
    }
    let mut out = Vec::with_capacity(input.len());
    // Lenient mode cannot fail.
    let _ = decode_into(input, &mut out, false);
    Cow::Owned(out)
}

/// Decode entity references strictly.
///
/// Malformed numeric character references fail with a `DecodeError` carrying
/// the byte offset of the offending `&`. Unknown named references are kept
/// as-is, matching how raw markup text is handled in practice.
pub fn unescape(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if memchr(b'&', input).is_none() {
        return Ok(input.to_vec());
    }
    let mut out = Vec::with_capacity(input.len());
    decode_into(input, &mut out, true)?;
    Ok(out)
}

/// Shared decode loop for both modes.
fn decode_into(input: &[u8], out: &mut Vec<u8>, strict: bool) -> Result<(), DecodeError> {
    let mut pos = 0;
    while pos < input.len() {
        let rel = match memchr(b'&', &input[pos..]) {
            Some(rel) => rel,
            None => {
                out.extend_from_slice(&input[pos..]);
                break;
            }
        };
        let at = pos + rel;
        out.extend_from_slice(&input[pos..at]);

        let window_end = input.len().min(at + MAX_REFERENCE_LEN);
        match memchr(b';', &input[at + 1..window_end]) {
            Some(semi_rel) => {
                let semi = at + 1 + semi_rel;
                let body = &input[at + 1..semi];
                match decode_reference(body) {
                    Ok(Some(c)) => {
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                        pos = semi + 1;
                    }
                    Ok(None) => {
                        // Unknown named reference, keep verbatim.
                        out.extend_from_slice(&input[at..=semi]);
                        pos = semi + 1;
                    }
                    Err(()) => {
                        if strict {
                            return Err(DecodeError::InvalidCharacterReference(at));
                        }
                        out.extend_from_slice(&input[at..=semi]);
                        pos = semi + 1;
                    }
                }
            }
            None => {
                let numeric = input.get(at + 1) == Some(&b'#');
                if strict && numeric {
                    return Err(DecodeError::UnterminatedReference(at));
                }
                // Bare ampersand, keep it and move on.
                out.push(b'&');
                pos = at + 1;
            }
        }
    }
    Ok(())
}

/// Decode one reference body (between `&` and `;`).
///
/// `Ok(Some(c))` on success, `Ok(None)` for unknown named references,
/// `Err(())` for malformed numeric references.
fn decode_reference(body: &[u8]) -> Result<Option<char>, ()> {
    match body.first() {
        Some(b'#') => decode_numeric(&body[1..]).map(Some),
        Some(_) => Ok(named_entity(body)),
        None => Ok(None),
    }
}

/// Decode a numeric character reference body (after `#`).
fn decode_numeric(digits: &[u8]) -> Result<char, ()> {
    let codepoint = match digits.first() {
        Some(b'x') | Some(b'X') => {
            let hex = std::str::from_utf8(&digits[1..]).map_err(|_| ())?;
            u32::from_str_radix(hex, 16).map_err(|_| ())?
        }
        Some(_) => {
            let dec = std::str::from_utf8(digits).map_err(|_| ())?;
            dec.parse::<u32>().map_err(|_| ())?
        }
        None => return Err(()),
    };
    char::from_u32(codepoint).ok_or(())
}

/// Named references recognized in raw text.
fn named_entity(name: &[u8]) -> Option<char> {
    Some(match name {
        b"lt" => '<',
        b"gt" => '>',
        b"amp" => '&',
        b"quot" => '"',
        b"apos" => '\'',
        b"nbsp" => '\u{00A0}',
        b"copy" => '\u{00A9}',
        b"reg" => '\u{00AE}',
        b"mdash" => '\u{2014}',
        b"ndash" => '\u{2013}',
        b"hellip" => '\u{2026}',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_references_is_borrowed() {
        let result = decode_text(b"plain text");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), b"plain text");
    }

    #[test]
    fn test_named_references() {
        let result = decode_text(b"&lt;a&gt; &amp; &quot;b&quot;");
        assert_eq!(result.as_ref(), b"<a> & \"b\"");
    }

    #[test]
    fn test_numeric_decimal_and_hex() {
        assert_eq!(decode_text(b"&#65;&#x42;").as_ref(), b"AB");
    }

    #[test]
    fn test_unknown_reference_kept() {
        assert_eq!(decode_text(b"&bogus;").as_ref(), b"&bogus;");
    }

    #[test]
    fn test_bare_ampersand_kept() {
        assert_eq!(decode_text(b"a & b").as_ref(), b"a & b");
    }

    #[test]
    fn test_unescape_ok() {
        assert_eq!(unescape(b"&lt;p&gt;").unwrap(), b"<p>");
    }

    #[test]
    fn test_unescape_rejects_bad_numeric() {
        let err = unescape(b"ab&#xZZ;cd").unwrap_err();
        assert_eq!(err, DecodeError::InvalidCharacterReference(2));
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn test_unescape_rejects_surrogate() {
        assert!(unescape(b"&#xD800;").is_err());
    }

    #[test]
    fn test_unescape_rejects_unterminated_numeric() {
        let err = unescape(b"&#65").unwrap_err();
        assert_eq!(err, DecodeError::UnterminatedReference(0));
    }

    #[test]
    fn test_lenient_keeps_bad_numeric() {
        assert_eq!(decode_text(b"&#xZZ;").as_ref(), b"&#xZZ;");
    }

    #[test]
    fn test_multibyte_output() {
        let result = decode_text(b"&#x1F600;");
        assert_eq!(std::str::from_utf8(result.as_ref()).unwrap(), "\u{1F600}");
    }
}
