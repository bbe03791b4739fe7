//! Read-only queries over a finished [`Store`].
//!
//! Lookups never fail outright. A missing flag is `false`; a missing
//! parameter or positional comes back as a [`Value`] in the "not found"
//! state, which only turns into an [`Error`] when it is parsed without a
//! default.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt::Display;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::store::Store;
use crate::token::trim_leading_dashes;

/// Where a [`Value`] was looked up, kept for the error it reports when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    Param(String),
    Positional { index: usize, len: usize },
}

/// A conversion handle over one looked-up string.
///
/// Holds the recorded text, if any, plus an optional caller-supplied default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<'a> {
    raw: Option<&'a str>,
    default: Option<Cow<'a, str>>,
    origin: Origin,
}

impl<'a> Value<'a> {
    fn new(raw: Option<&'a str>, origin: Origin) -> Self {
        Self {
            raw,
            default: None,
            origin,
        }
    }

    #[must_use]
    fn or_default(mut self, default: impl Display) -> Self {
        self.default = Some(Cow::Owned(default.to_string()));
        self
    }

    /// True if the lookup found a recorded value (defaults do not count).
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.raw.is_some()
    }

    /// The recorded text, or the default when nothing was recorded.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.raw.or(self.default.as_deref())
    }

    /// Converts the value to `T`.
    ///
    /// The recorded text is tried first. If nothing was recorded, or the text
    /// does not convert, the default supplied at lookup is converted instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParam`] or [`Error::PositionalOutOfRange`] when
    /// nothing was recorded and no default was given, and
    /// [`Error::Conversion`] when neither the text nor the default converts.
    pub fn parse<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw_error = match self.raw {
            Some(raw) => match convert::<T>(raw) {
                Ok(value) => return Ok(value),
                Err(e) => Some(e),
            },
            None => None,
        };

        if let Some(default) = self.default.as_deref() {
            if let Some(e) = &raw_error {
                debug!("{e}; falling back to default `{default}`");
            }
            return convert::<T>(default);
        }

        Err(raw_error.unwrap_or_else(|| self.missing_error()))
    }

    /// Converts the value to `T`, returning `default` on any failure.
    pub fn parse_or<T>(&self, default: T) -> T
    where
        T: FromStr,
        T::Err: Display,
    {
        self.parse().unwrap_or(default)
    }

    fn missing_error(&self) -> Error {
        match &self.origin {
            Origin::Param(name) => Error::MissingParam(name.clone()),
            Origin::Positional { index, len } => Error::PositionalOutOfRange {
                index: *index,
                len: *len,
            },
        }
    }
}

fn convert<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|e| Error::conversion_error(raw, type_name::<T>(), e.to_string()))
}

/// All values recorded for one parameter name, in encounter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamGroup<'a> {
    name: &'a str,
    values: &'a [String],
}

impl<'a> ParamGroup<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&'a str> {
        self.values.first().map(String::as_str)
    }

    /// The value at `index` within this group as a conversion handle.
    #[must_use]
    pub fn get(&self, index: usize) -> Value<'a> {
        Value::new(
            self.values.get(index).map(String::as_str),
            Origin::Param(self.name.to_string()),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        self.values.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for ParamGroup<'a> {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.values
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl Store {
    /// True if `name` was given as a flag at least once.
    ///
    /// ```
    /// use argsift_core::classifier::Parser;
    ///
    /// let store = Parser::new().parse(["prog", "-v", "--verbose"]);
    /// assert!(store.has_flag("--verbose"));
    /// assert!(!store.has_flag("quiet"));
    /// ```
    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        let name = trim_leading_dashes(name);
        self.flags.iter().any(|flag| flag == name)
    }

    /// True if any of `names` was given as a flag.
    #[must_use]
    pub fn has_any_flag(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_flag(name))
    }

    /// How many times `name` was given as a flag.
    #[must_use]
    pub fn flag_count(&self, name: &str) -> usize {
        let name = trim_leading_dashes(name);
        self.flags.iter().filter(|flag| *flag == name).count()
    }

    /// The first value recorded for `name`.
    #[must_use]
    pub fn param(&self, name: &str) -> Value<'_> {
        let name = trim_leading_dashes(name);
        Value::new(
            self.params
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str),
            Origin::Param(name.to_string()),
        )
    }

    /// The first value recorded for `name`, with a default used when the
    /// parameter is absent or does not convert.
    #[must_use]
    pub fn param_or(&self, name: &str, default: impl Display) -> Value<'_> {
        self.param(name).or_default(default)
    }

    /// The first value of the first name in `names` that was recorded.
    ///
    /// ```
    /// use argsift_core::classifier::Parser;
    ///
    /// let store = Parser::new().parse(["prog", "--jobs=8"]);
    /// assert_eq!(store.param_any(&["-j", "--jobs"]).parse::<u32>().unwrap(), 8);
    /// ```
    #[must_use]
    pub fn param_any(&self, names: &[&str]) -> Value<'_> {
        names
            .iter()
            .map(|name| self.param(name))
            .find(Value::is_found)
            .unwrap_or_else(|| {
                let joined = names
                    .iter()
                    .map(|name| trim_leading_dashes(name))
                    .collect::<Vec<_>>()
                    .join("|");
                Value::new(None, Origin::Param(joined))
            })
    }

    #[must_use]
    pub fn param_any_or(&self, names: &[&str], default: impl Display) -> Value<'_> {
        self.param_any(names).or_default(default)
    }

    /// Every value recorded for `name`, in encounter order.
    #[must_use]
    pub fn param_group<'a>(&'a self, name: &'a str) -> ParamGroup<'a> {
        let name = trim_leading_dashes(name);
        ParamGroup {
            name,
            values: self.params.get(name).map(Vec::as_slice).unwrap_or_default(),
        }
    }

    /// The positional argument at `index`, counted among positionals only.
    #[must_use]
    pub fn positional(&self, index: usize) -> Value<'_> {
        Value::new(
            self.positionals.get(index).map(String::as_str),
            Origin::Positional {
                index,
                len: self.positionals.len(),
            },
        )
    }

    #[must_use]
    pub fn positional_or(&self, index: usize, default: impl Display) -> Value<'_> {
        self.positional(index).or_default(default)
    }

    /// Positional arguments in encounter order.
    pub fn positionals(&self) -> impl Iterator<Item = &str> {
        self.positionals.iter().map(String::as_str)
    }

    /// Number of positional arguments; flags and params are not counted.
    #[must_use]
    pub fn positional_count(&self) -> usize {
        self.positionals.len()
    }

    /// True if at least one positional argument was recorded.
    #[must_use]
    pub fn has_positionals(&self) -> bool {
        !self.positionals.is_empty()
    }
}
