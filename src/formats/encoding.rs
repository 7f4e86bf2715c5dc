//! Encoding normalization for raw manifest bytes.
//!
//! Windows-authored `requirements.txt` files frequently carry a byte-order
//! mark and may be UTF-16 rather than UTF-8. The scanner would otherwise see
//! garbage, so all content passes through here before line splitting.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::traits::ParseError;

/// Decodes manifest content into text, honoring a leading byte-order mark.
///
/// A UTF-8, UTF-16LE, or UTF-16BE BOM selects the decoder and is stripped
/// from the output. Without a BOM the bytes are passed through as UTF-8,
/// lossily, so stray invalid sequences degrade to replacement characters
/// instead of aborting the scan.
///
/// # Errors
///
/// Returns [`ParseError::Decode`] if a BOM is present but the remaining
/// bytes are malformed under the encoding it declares.
pub fn decode(content: &[u8]) -> Result<Cow<'_, str>, ParseError> {
    match Encoding::for_bom(content) {
        Some((encoding, _bom_length)) => {
            let (text, had_errors) = encoding.decode_with_bom_removal(content);
            if had_errors {
                return Err(ParseError::Decode(format!(
                    "content is not valid {}",
                    encoding.name()
                )));
            }
            Ok(text)
        }
        None => Ok(String::from_utf8_lossy(content)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le_with_bom(s: &str) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in s.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    fn utf16be_with_bom(s: &str) -> Vec<u8> {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in s.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        bytes
    }

    #[test]
    fn test_plain_utf8_passes_through() {
        let text = decode(b"requests==2.31.0\n").unwrap();
        assert_eq!(text, "requests==2.31.0\n");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let text = decode(b"\xEF\xBB\xBFidna==3.4\n").unwrap();
        assert_eq!(text, "idna==3.4\n");
    }

    #[test]
    fn test_utf16le_bom_decodes() {
        let bytes = utf16le_with_bom("numpy==1.24.0\n");
        let text = decode(&bytes).unwrap();
        assert_eq!(text, "numpy==1.24.0\n");
    }

    #[test]
    fn test_utf16be_bom_decodes() {
        let bytes = utf16be_with_bom("numpy==1.24.0\n");
        let text = decode(&bytes).unwrap();
        assert_eq!(text, "numpy==1.24.0\n");
    }

    #[test]
    fn test_truncated_utf16_is_a_decode_error() {
        // UTF-16LE BOM followed by an odd number of bytes
        let bytes = vec![0xFF, 0xFE, 0x61, 0x00, 0x62];
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, ParseError::Decode(_)));
    }

    #[test]
    fn test_invalid_utf8_without_bom_is_lossy_not_fatal() {
        let text = decode(b"flask==2.0.1 \xFF junk\n").unwrap();
        assert!(text.contains("flask==2.0.1"));
    }
}
