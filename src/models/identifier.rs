//! Unique-identifier derivation.
//!
//! A fresh 128-bit UUID is folded to 64 bits by XORing its halves and
//! formatted as hyphen-segmented lowercase hex. The fold halves the entropy;
//! that is intentional, to keep the printed code short, and 64 bits remain
//! far beyond collision range at label-production scale.

use std::fmt;
use uuid::Uuid;

/// Compact printable identifier derived from a random 128-bit value.
///
/// Always 18 characters: 16 lowercase hex digits in 8-4-4 segments joined by
/// hyphens, e.g. `08080808-0808-0818`. Derivation is deterministic over the
/// source bytes, so the same 128-bit value always yields the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    /// Derives an identifier from a freshly generated random UUID.
    ///
    /// Uniqueness, not secrecy, is the requirement here; the v4 UUID source
    /// provides 122 random bits, 64 of which survive the fold.
    #[must_use]
    pub fn random() -> Self {
        Self::from_bytes(Uuid::new_v4().as_bytes())
    }

    /// Folds 16 source bytes to 8 and formats them.
    ///
    /// The first eight bytes are XORed with the last eight, in that order,
    /// and the result is rendered as 16 lowercase hex digits with hyphens
    /// inserted after digit 8 and digit 12.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut hex = String::with_capacity(16);
        for i in 0..8 {
            hex.push_str(&format!("{:02x}", bytes[i] ^ bytes[i + 8]));
        }

        Self(format!("{}-{}-{}", &hex[..8], &hex[8..12], &hex[12..]))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 16] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
        0x10,
    ];

    #[test]
    fn test_known_vector() {
        // 01^09=08, ..., 07^0f=08, 08^10=18
        let id = Identifier::from_bytes(&SAMPLE);
        assert_eq!(id.as_str(), "08080808-0808-0818");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            Identifier::from_bytes(&SAMPLE),
            Identifier::from_bytes(&SAMPLE)
        );
    }

    #[test]
    fn test_shape() {
        let id = Identifier::from_bytes(&[0xff; 16]);
        let s = id.as_str();

        assert_eq!(s.len(), 18);
        assert_eq!(&s[8..9], "-");
        assert_eq!(&s[13..14], "-");
        assert!(s
            .chars()
            .all(|c| c == '-' || c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_all_ff_folds_to_zero() {
        // Identical halves cancel out under XOR.
        let id = Identifier::from_bytes(&[0xff; 16]);
        assert_eq!(id.as_str(), "00000000-0000-0000");
    }

    #[test]
    fn test_random_values_differ() {
        assert_ne!(Identifier::random(), Identifier::random());
    }
}
