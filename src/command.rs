//! Inbound command grammar.
//!
//! One line of text, colon-delimited:
//! - `e:<key>:<message>` encrypts `<message>` under `<key>`
//! - `d:<key>:<token>` decrypts `<token>` under `<key>`
//!
//! The payload may itself contain `:` characters; only the first two
//! delimiters are structural. Anything else is `Invalid`.

/// A classified inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Encrypt { key: String, payload: String },
    Decrypt { key: String, ciphertext: String },
    Invalid,
}

impl Command {
    /// Parse one line of text.
    ///
    /// Total: unparseable input yields `Invalid`, never an error or a
    /// panic. Empty key or payload segments still parse; rejecting them
    /// is the relay's job so the user gets a targeted message.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.splitn(3, ':');
        let (Some(tag), Some(key), Some(rest)) = (parts.next(), parts.next(), parts.next())
        else {
            return Self::Invalid;
        };

        match tag {
            "e" => Self::Encrypt {
                key: key.to_string(),
                payload: rest.to_string(),
            },
            "d" => Self::Decrypt {
                key: key.to_string(),
                ciphertext: rest.to_string(),
            },
            _ => Self::Invalid,
        }
    }
}

/// Validate a transit key name.
///
/// Key names are interpolated into the Vault URL path, so they must be
/// non-empty and contain only lowercase ASCII letters or digits.
pub fn validate_key_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encrypt() {
        assert_eq!(
            Command::parse("e:mykey:hello"),
            Command::Encrypt {
                key: "mykey".to_string(),
                payload: "hello".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_decrypt() {
        assert_eq!(
            Command::parse("d:mykey:vault:v1:abc"),
            Command::Decrypt {
                key: "mykey".to_string(),
                ciphertext: "vault:v1:abc".to_string(),
            }
        );
    }

    #[test]
    fn test_payload_keeps_embedded_colons() {
        assert_eq!(
            Command::parse("e:mykey:hello:world"),
            Command::Encrypt {
                key: "mykey".to_string(),
                payload: "hello:world".to_string(),
            }
        );
    }

    #[test]
    fn test_fewer_than_three_segments_is_invalid() {
        assert_eq!(Command::parse(""), Command::Invalid);
        assert_eq!(Command::parse("hello"), Command::Invalid);
        assert_eq!(Command::parse("e:onlykey"), Command::Invalid);
        assert_eq!(Command::parse("no delimiters at all"), Command::Invalid);
    }

    #[test]
    fn test_unknown_prefix_is_invalid() {
        assert_eq!(Command::parse("x:foo:bar"), Command::Invalid);
        assert_eq!(Command::parse("enc:foo:bar"), Command::Invalid);
        assert_eq!(Command::parse(":foo:bar"), Command::Invalid);
    }

    #[test]
    fn test_empty_segments_still_parse() {
        // The relay rejects these with targeted guidance.
        assert_eq!(
            Command::parse("e::payload"),
            Command::Encrypt {
                key: String::new(),
                payload: "payload".to_string(),
            }
        );
        assert_eq!(
            Command::parse("e:mykey:"),
            Command::Encrypt {
                key: "mykey".to_string(),
                payload: String::new(),
            }
        );
    }

    #[test]
    fn test_valid_key_names() {
        assert!(validate_key_name("mykey"));
        assert!(validate_key_name("key123"));
        assert!(validate_key_name("0"));
    }

    #[test]
    fn test_invalid_key_names() {
        // Empty
        assert!(!validate_key_name(""));

        // Uppercase
        assert!(!validate_key_name("MyKey"));

        // Symbols and whitespace
        assert!(!validate_key_name("my-key"));
        assert!(!validate_key_name("my key"));
        assert!(!validate_key_name("my_key"));
        assert!(!validate_key_name("key/../../etc"));
    }
}
