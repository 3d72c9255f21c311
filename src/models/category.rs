//! Category letters marking the kind of labeled object.

use std::fmt;
use std::str::FromStr;

/// Kind of object a label is attached to.
///
/// Encoded into the QR payload and the human-readable label line as a single
/// uppercase letter. `Any` is the wildcard used when the caller does not
/// care about the distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// `X` - any kind of object (wildcard, the default)
    #[default]
    Any,
    /// `I` - a single item
    Item,
    /// `C` - a container holding items
    Container,
    /// `L` - a storage location
    Location,
}

impl Category {
    /// The single uppercase letter embedded in payload and label text.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Any => 'X',
            Self::Item => 'I',
            Self::Container => 'C',
            Self::Location => 'L',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses a single category letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" => Ok(Self::Any),
            "I" | "i" => Ok(Self::Item),
            "C" | "c" => Ok(Self::Container),
            "L" | "l" => Ok(Self::Location),
            _ => Err(format!(
                "invalid category letter '{s}' (expected X=any, I=item, C=container, L=location)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert_eq!(Category::Any.letter(), 'X');
        assert_eq!(Category::Item.letter(), 'I');
        assert_eq!(Category::Container.letter(), 'C');
        assert_eq!(Category::Location.letter(), 'L');
    }

    #[test]
    fn test_parse_uppercase() {
        assert_eq!("X".parse::<Category>().unwrap(), Category::Any);
        assert_eq!("I".parse::<Category>().unwrap(), Category::Item);
        assert_eq!("C".parse::<Category>().unwrap(), Category::Container);
        assert_eq!("L".parse::<Category>().unwrap(), Category::Location);
    }

    #[test]
    fn test_parse_lowercase() {
        assert_eq!("x".parse::<Category>().unwrap(), Category::Any);
        assert_eq!("l".parse::<Category>().unwrap(), Category::Location);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("B".parse::<Category>().is_err());
        assert!("XI".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_default_is_wildcard() {
        assert_eq!(Category::default(), Category::Any);
    }

    #[test]
    fn test_display_matches_letter() {
        assert_eq!(Category::Item.to_string(), "I");
    }
}
