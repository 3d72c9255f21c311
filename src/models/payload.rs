//! The payload string encoded into the QR code.

use std::fmt;

use crate::models::{Category, Identifier};

/// Data embedded in the scannable code: `<prefix>-<letter>-<identifier>`.
///
/// With the default `SFM` prefix and an 18-character identifier the payload
/// is 24 bytes, comfortably inside QR version 3 at error-correction level Q.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    category: Category,
    identifier: Identifier,
    value: String,
}

impl Payload {
    /// Assembles the payload string from its parts.
    #[must_use]
    pub fn new(prefix: &str, category: Category, identifier: Identifier) -> Self {
        let value = format!("{}-{}-{}", prefix, category.letter(), identifier);

        Self {
            category,
            identifier,
            value,
        }
    }

    /// The category letter embedded in the payload.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The identifier embedded in the payload.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// The full payload string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Payload length in bytes, as reported in the diagnostic output.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// True if the payload string is empty (never the case for assembled payloads).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
