//! The result of one classification pass.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Serialize;

/// What a single input token was classified as.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Flag,
    /// A `-abc` token expanded into one flag per letter.
    FlagCluster,
    /// A `-abc` cluster whose last letter is a registered parameter: every
    /// letter but the last is a flag, and the last is a parameter name.
    FlagClusterParam,
    /// The name half of a parameter whose value is the next token.
    ParamName,
    ParamValue,
    /// A `--name=value` token carrying both halves.
    InlineParam,
    Positional,
}

impl Display for TokenKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            TokenKind::Flag => "flag",
            TokenKind::FlagCluster => "flag cluster",
            TokenKind::FlagClusterParam => "flag cluster + param name",
            TokenKind::ParamName => "param name",
            TokenKind::ParamValue => "param value",
            TokenKind::InlineParam => "inline param",
            TokenKind::Positional => "positional",
        })
    }
}

#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct Classified {
    pub token: String,
    pub kind: TokenKind,
}

/// Flags, parameters and positional arguments recorded from a token sequence.
///
/// Only the classifier writes to a `Store`; everything public is read-only.
/// See the accessor methods for the query surface.
#[derive(Serialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct Store {
    pub(crate) flags: Vec<String>,
    pub(crate) params: IndexMap<String, Vec<String>>,
    pub(crate) positionals: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) trace: Vec<Classified>,
}

impl Store {
    pub(crate) fn add_flag(&mut self, name: &str) {
        self.flags.push(name.to_string());
    }

    pub(crate) fn add_param(&mut self, name: &str, value: &str) {
        self.params
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub(crate) fn add_positional(&mut self, token: &str) {
        self.positionals.push(token.to_string());
    }

    pub(crate) fn record(&mut self, token: &str, kind: TokenKind) {
        self.trace.push(Classified {
            token: token.to_string(),
            kind,
        });
    }

    /// Every flag occurrence in encounter order, duplicates included.
    #[must_use]
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Every parameter name with all of its values, in first-seen order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// One entry per consumed input token, in input order.
    #[must_use]
    pub fn trace(&self) -> &[Classified] {
        &self.trace
    }

    /// Drops the per-token trace, keeping only the classified data.
    #[must_use]
    pub fn without_trace(mut self) -> Self {
        self.trace = Vec::new();
        self
    }
}
