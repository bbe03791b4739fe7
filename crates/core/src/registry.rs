//! Names known in advance to take a value.

use indexmap::IndexSet;
use serde::Deserialize;

use crate::token::trim_leading_dashes;

/// The set of pre-registered parameter names.
///
/// Names are stored without leading dashes, so `-j`, `--j` and `j` all
/// register the same entry. Registration is additive and idempotent.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Vec<String>")]
pub struct Registry {
    names: IndexSet<String>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single name.
    pub fn register(&mut self, name: &str) -> &mut Self {
        let _ = self.names.insert(trim_leading_dashes(name).to_string());
        self
    }

    /// Registers every name in `names`, typically the aliases of one option.
    ///
    /// ```
    /// use argsift_core::registry::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry.register_all(["-j", "--jobs"]);
    /// assert!(registry.is_registered("j"));
    /// assert!(registry.is_registered("jobs"));
    /// ```
    pub fn register_all<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.register(name.as_ref());
        }
        self
    }

    /// Membership test on an already-stripped name.
    #[must_use]
    pub fn is_registered(&self, stripped_name: &str) -> bool {
        self.names.contains(stripped_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Registry {
    fn from(names: Vec<String>) -> Self {
        let mut registry = Self::new();
        registry.register_all(names);
        registry
    }
}

impl<S: AsRef<str>> FromIterator<S> for Registry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.register_all(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_strips_dashes() {
        let mut registry = Registry::new();
        registry.register("--threads");

        assert!(registry.is_registered("threads"));
        assert!(!registry.is_registered("--threads"));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = Registry::new();
        registry.register("j").register("-j").register("--j");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["j"]);
    }

    #[test]
    fn test_register_all_keeps_order() {
        let registry: Registry = ["--out", "-j", "level"].into_iter().collect();

        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["out", "j", "level"]);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_registered(""));
    }
}
