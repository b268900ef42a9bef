//! Key module - positions in the decision tree
//!
//! A key spells out the path from the root: every "yes" step appends `1`
//! and every "no" step appends `0`. Keys are never generated any other way,
//! so two distinct parents can never claim the same child slot.

use std::fmt;

/// Key of the root prompt
pub const ROOT_KEY: &str = "0";

/// Suffix appended to a key to reach its "yes" child
pub const YES_SUFFIX: char = '1';

/// Suffix appended to a key to reach its "no" child
pub const NO_SUFFIX: char = '0';

/// Derive the key of the "yes" child of `key`
///
/// # Examples
///
/// ```
/// use guessing_domain::derive_yes_key;
///
/// assert_eq!(derive_yes_key("0"), "01");
/// ```
pub fn derive_yes_key(key: &str) -> String {
    let mut child = String::with_capacity(key.len() + 1);
    child.push_str(key);
    child.push(YES_SUFFIX);
    child
}

/// Derive the key of the "no" child of `key`
///
/// # Examples
///
/// ```
/// use guessing_domain::derive_no_key;
///
/// assert_eq!(derive_no_key("0"), "00");
/// ```
pub fn derive_no_key(key: &str) -> String {
    let mut child = String::with_capacity(key.len() + 1);
    child.push_str(key);
    child.push(NO_SUFFIX);
    child
}

/// Identifier of a prompt's position in the tree
///
/// Wraps the raw key string. Any string is accepted so that stale or
/// garbled keys coming from callers simply fail lookup instead of being
/// rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PromptKey(String);

impl PromptKey {
    /// Create a key from a raw string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The root sentinel key (`"0"`)
    pub fn root() -> Self {
        Self(ROOT_KEY.to_string())
    }

    /// Key of this node's "yes" child
    pub fn yes(&self) -> Self {
        Self(derive_yes_key(&self.0))
    }

    /// Key of this node's "no" child
    pub fn no(&self) -> Self {
        Self(derive_no_key(&self.0))
    }

    /// Key of the parent node, if this key was derived from one
    pub fn parent(&self) -> Option<Self> {
        let mut chars = self.0.chars();
        chars.next_back()?;
        let rest = chars.as_str();
        if rest.is_empty() {
            None
        } else {
            Some(Self(rest.to_string()))
        }
    }

    /// Number of derivation steps between the root and this key
    ///
    /// Keys grow by one character per level and are never compacted.
    pub fn depth(&self) -> usize {
        self.0.chars().count().saturating_sub(1)
    }

    /// Check whether this is the root key
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_KEY
    }

    /// Get key as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the raw string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromptKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PromptKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for PromptKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: derivation is plain suffixing
        #[test]
        fn test_derivation_appends_suffix(key in ".*") {
            prop_assert_eq!(derive_yes_key(&key), format!("{}1", key));
            prop_assert_eq!(derive_no_key(&key), format!("{}0", key));
        }

        /// Property: derivation has no hidden state
        #[test]
        fn test_derivation_is_deterministic(key in "[01]{0,32}") {
            prop_assert_eq!(derive_yes_key(&key), derive_yes_key(&key));
            prop_assert_eq!(derive_no_key(&key), derive_no_key(&key));
        }

        /// Property: a parent's two child slots never coincide, and distinct
        /// parents never share a child slot
        #[test]
        fn test_derivation_is_injective(a in "[01]{1,24}", b in "[01]{1,24}") {
            prop_assert_ne!(derive_yes_key(&a), derive_no_key(&a));
            if a != b {
                prop_assert_ne!(derive_yes_key(&a), derive_yes_key(&b));
                prop_assert_ne!(derive_no_key(&a), derive_no_key(&b));
            }
        }

        /// Property: parent() undoes either derivation
        #[test]
        fn test_parent_inverts_derivation(key in "[01]{1,24}") {
            let key = PromptKey::new(key);
            prop_assert_eq!(key.yes().parent(), Some(key.clone()));
            prop_assert_eq!(key.no().parent(), Some(key.clone()));
            prop_assert_eq!(key.yes().depth(), key.depth() + 1);
        }
    }
}
