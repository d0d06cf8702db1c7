//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner
//! based approach. Node ids are compared on every edge lookup and embedded
//! into SVG clip-path ids, so they are interned once and copied as symbols.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// # Examples
///
/// ```
/// use coronet_core::identifier::Id;
///
/// let rain = Id::new("rain");
/// let sprinkler = Id::new("sprinkler");
///
/// assert_ne!(rain, sprinkler);
/// assert_eq!(rain, "rain");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Returns a string usable as an SVG element id fragment.
    ///
    /// Characters outside `[A-Za-z0-9_-]` are replaced with underscores so
    /// the result is always a valid id, whatever the caller named the node.
    pub fn to_id_safe_string(self) -> String {
        self.to_string()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("rain");
        let id2 = Id::new("rain");
        let id3 = Id::new("sprinkler");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "rain");
    }

    #[test]
    fn test_display() {
        let id = Id::new("wet_grass");
        assert_eq!(format!("{}", id), "wet_grass");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "season".into();
        let id2 = Id::new("season");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_copy_trait() {
        let id1 = Id::new("copy_test");
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_eq!(id1, "copy_test");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_id_safe_string() {
        assert_eq!(Id::new("wet grass").to_id_safe_string(), "wet_grass");
        assert_eq!(Id::new("a.b/c").to_id_safe_string(), "a_b_c");
        assert_eq!(Id::new("plain-id_9").to_id_safe_string(), "plain-id_9");
    }
}
