//! Classifier heuristics.

use serde::{Deserialize, Serialize};

/// How an option-like token that is not pre-registered is treated when a
/// non-option token follows it.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnregisteredOption {
    /// Record the option as a bare flag; the following token stays positional.
    #[default]
    PreferFlag,
    /// Take the following non-option token as the option's value.
    PreferParam,
}

/// Independent switches controlling classification.
///
/// The default prefers flags for unregistered options, splits `--name=value`
/// tokens, does not expand `-abc` clusters, and skips the program name.
///
/// ```
/// use argsift_core::mode::{Mode, UnregisteredOption};
///
/// let mode = Mode::default()
///     .with_unregistered(UnregisteredOption::PreferParam)
///     .with_single_dash_is_multiflag(true);
///
/// assert!(mode.split_on_equals);
/// assert!(mode.single_dash_is_multiflag);
/// ```
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(default)]
pub struct Mode {
    pub unregistered: UnregisteredOption,
    pub split_on_equals: bool,
    pub single_dash_is_multiflag: bool,
    /// Classify the first token too instead of skipping it as the program name.
    pub parse_argv0: bool,
}

impl Default for Mode {
    fn default() -> Self {
        Self {
            unregistered: UnregisteredOption::PreferFlag,
            split_on_equals: true,
            single_dash_is_multiflag: false,
            parse_argv0: false,
        }
    }
}

impl Mode {
    #[must_use]
    pub fn with_unregistered(mut self, unregistered: UnregisteredOption) -> Self {
        self.unregistered = unregistered;
        self
    }

    #[must_use]
    pub fn with_split_on_equals(mut self, split_on_equals: bool) -> Self {
        self.split_on_equals = split_on_equals;
        self
    }

    #[must_use]
    pub fn with_single_dash_is_multiflag(mut self, single_dash_is_multiflag: bool) -> Self {
        self.single_dash_is_multiflag = single_dash_is_multiflag;
        self
    }

    #[must_use]
    pub fn with_parse_argv0(mut self, parse_argv0: bool) -> Self {
        self.parse_argv0 = parse_argv0;
        self
    }

    #[must_use]
    pub fn prefers_param(&self) -> bool {
        self.unregistered == UnregisteredOption::PreferParam
    }
}
