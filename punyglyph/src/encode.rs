//! Thin wrapper around the [`idna`] crate that turns a Unicode domain
//! into its ASCII-compatible encoding (ACE), and back.
//!
//! Rejections carry a reason so that callers can log why a candidate was
//! dropped. The reason never influences whether a candidate is kept;
//! only success of [`encode`] does.
use crate::constants::{IDNA_CONFIG, MAX_LABEL_LEN};

#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("domain cannot be processed as IDNA (domain {domain:?}, reason {reason})")]
    Disallowed { domain: String, reason: String },

    #[error("empty label in domain {domain:?}")]
    EmptyLabel { domain: String },

    #[error("label too long (domain {domain:?}, label {label:?}, {len} octets)")]
    LabelTooLong {
        domain: String,
        label: String,
        len: usize,
    },
}

/// Encode a Unicode domain into its ASCII-compatible form, where every
/// non-ASCII label becomes an `xn--` punycode label.
///
/// Every label of the result is verified against the DNS label length
/// limit; nothing is ever truncated. The total length of the name is not
/// limited.
pub fn encode(domain: &str) -> Result<String, EncodeError> {
    let ascii = IDNA_CONFIG
        .to_ascii(domain)
        .map_err(|errors| EncodeError::Disallowed {
            domain: domain.to_string(),
            reason: format!("{errors:?}"),
        })?;

    verify_label_lengths(domain, &ascii)?;

    Ok(ascii)
}

/// Decode an ACE domain back into Unicode. Labels that are not punycode
/// are passed through as-is.
pub fn decode(domain: &str) -> Result<String, EncodeError> {
    let (unicode, result) = IDNA_CONFIG.to_unicode(domain);

    result.map_err(|errors| EncodeError::Disallowed {
        domain: domain.to_string(),
        reason: format!("{errors:?}"),
    })?;

    Ok(unicode)
}

fn verify_label_lengths(domain: &str, ascii: &str) -> Result<(), EncodeError> {
    // A single trailing dot denotes the root and is not a label of its own.
    let fqdn = ascii.strip_suffix('.').unwrap_or(ascii);

    for label in fqdn.split('.') {
        if label.is_empty() {
            return Err(EncodeError::EmptyLabel {
                domain: domain.to_string(),
            });
        }

        if label.len() > MAX_LABEL_LEN {
            return Err(EncodeError::LabelTooLong {
                domain: domain.to_string(),
                label: label.to_string(),
                len: label.len(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii_passthrough() {
        assert_eq!(encode("example.com").unwrap(), "example.com");
    }

    #[test]
    fn test_encode_unicode_label() {
        let encoded = encode("ex\u{0430}mple.com").unwrap();

        assert!(encoded.starts_with("xn--"));
        assert!(encoded.ends_with(".com"));
        assert!(encoded.is_ascii());
    }

    #[test]
    fn test_encode_rejects_disallowed_code_point() {
        // Private use code points are disallowed.
        assert!(matches!(
            encode("exa\u{e000}mple.com"),
            Err(EncodeError::Disallowed { .. })
        ));
    }

    #[test]
    fn test_encode_allows_underscore() {
        assert_eq!(encode("my_site.com").unwrap(), "my_site.com");
        assert_eq!(
            encode("my_s\u{0456}te.com").unwrap(),
            "xn--my_ste-svf.com"
        );
    }

    #[test]
    fn test_encode_allows_edge_hyphens() {
        assert_eq!(encode("-example.com").unwrap(), "-example.com");
        assert_eq!(encode("example-.com").unwrap(), "example-.com");
        assert_eq!(
            encode("-ex\u{0430}mple.com").unwrap(),
            "xn---exmple-4fg.com"
        );
    }

    #[test]
    fn test_encode_maps_sharp_s() {
        assert_eq!(encode("stra\u{00df}e.com").unwrap(), "strasse.com");
        assert_eq!(
            encode("str\u{0430}\u{00df}e.com").unwrap(),
            "xn--strsse-5nf.com"
        );
    }

    #[test]
    fn test_encode_rejects_long_label() {
        let label = "a".repeat(MAX_LABEL_LEN + 1);

        assert!(matches!(
            encode(&format!("{label}.com")),
            Err(EncodeError::LabelTooLong { len, .. }) if len == MAX_LABEL_LEN + 1
        ));
    }

    #[test]
    fn test_encode_rejects_label_too_long_after_punycode() {
        // 63 characters fits, but the xn-- form of it does not.
        let label = format!("{}\u{0430}", "a".repeat(MAX_LABEL_LEN - 1));

        assert!(matches!(
            encode(&format!("{label}.com")),
            Err(EncodeError::LabelTooLong { .. })
        ));
    }

    #[test]
    fn test_encode_allows_long_domain() {
        let label = "a".repeat(MAX_LABEL_LEN);
        let domain = [label.as_str(); 5].join(".");

        assert_eq!(encode(&domain).unwrap(), domain);
    }

    #[test]
    fn test_encode_rejects_empty_label() {
        assert!(matches!(
            encode("example..com"),
            Err(EncodeError::EmptyLabel { .. })
        ));
    }

    #[test]
    fn test_encode_allows_root_dot() {
        assert_eq!(encode("example.com.").unwrap(), "example.com.");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let domain = "\u{0441}\u{043e}m\u{0456}c.com";
        let encoded = encode(domain).unwrap();

        assert_eq!(decode(&encoded).unwrap(), domain);
    }
}
