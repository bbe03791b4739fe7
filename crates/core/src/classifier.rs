//! The single-pass token classifier.
//!
//! Each token is decided with at most one token of lookahead:
//!
//! 1. Tokens that are not option-like (see [`is_option`]) become positionals,
//!    unless an earlier option already consumed them as its value.
//! 2. `--name=value` is split at the first `=` when `split_on_equals` is set.
//! 3. `-abc` becomes flags `a`, `b`, `c` when `single_dash_is_multiflag` is set
//!    and `abc` is not registered. A registered last letter keeps its value.
//! 4. A registered name takes the next non-option token as its value, or an
//!    empty value when there is none.
//! 5. An unregistered name is a flag, or with
//!    [`UnregisteredOption::PreferParam`](crate::mode::UnregisteredOption)
//!    takes the next non-option token as its value.
//!
//! `-` and `--` get no stdin or end-of-options treatment; each is a flag with
//! an empty name.

use std::iter::Peekable;

use log::{debug, trace};

use crate::mode::Mode;
use crate::registry::Registry;
use crate::store::{Store, TokenKind};
use crate::token::{is_option, is_single_dash, trim_leading_dashes};

/// Classifies `tokens` into a [`Store`].
///
/// Unless `mode.parse_argv0` is set, the first token is taken to be the
/// program name and skipped.
///
/// # Examples
///
/// ```
/// use argsift_core::classifier::classify;
/// use argsift_core::mode::Mode;
/// use argsift_core::registry::Registry;
///
/// let store = classify(
///     ["prog", "--verbose", "--out=result.txt", "42", "-q"],
///     &Registry::new(),
///     &Mode::default(),
/// );
///
/// assert!(store.has_flag("verbose"));
/// assert!(store.has_flag("q"));
/// assert_eq!(store.param("out").as_str(), Some("result.txt"));
/// assert_eq!(store.positional(0).as_str(), Some("42"));
/// ```
pub fn classify<I, S>(tokens: I, registry: &Registry, mode: &Mode) -> Store
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let skip = usize::from(!mode.parse_argv0);
    let mut tokens = tokens.into_iter().skip(skip).peekable();
    let mut store = Store::default();

    while let Some(token) = tokens.next() {
        let token = token.as_ref();

        if !is_option(token) {
            trace!("`{token}` is positional");
            store.add_positional(token);
            store.record(token, TokenKind::Positional);
            continue;
        }

        if mode.split_on_equals {
            if let Some((name, value)) = token.split_once('=') {
                trace!("`{token}` split into param `{name}` = `{value}`");
                store.add_param(trim_leading_dashes(name), value);
                store.record(token, TokenKind::InlineParam);
                continue;
            }
        }

        let mut name = trim_leading_dashes(token);
        let mut name_kind = TokenKind::ParamName;

        if mode.single_dash_is_multiflag
            && is_single_dash(token)
            && name.chars().count() > 1
            && !registry.is_registered(name)
        {
            match split_cluster(name, registry) {
                (letters, Some(last)) => {
                    trace!("`{token}` expanded into flags `{letters}` and param `{last}`");
                    add_cluster_flags(&mut store, letters);
                    name = last;
                    name_kind = TokenKind::FlagClusterParam;
                }
                (letters, None) => {
                    trace!("`{token}` expanded into flags `{letters}`");
                    add_cluster_flags(&mut store, letters);
                    store.record(token, TokenKind::FlagCluster);
                    continue;
                }
            }
        }

        if registry.is_registered(name) {
            let value = take_value(&mut tokens);
            store.record(token, name_kind);
            match value {
                Some(value) => {
                    let value = value.as_ref();
                    trace!("registered `{name}` takes `{value}`");
                    store.add_param(name, value);
                    store.record(value, TokenKind::ParamValue);
                }
                None => {
                    trace!("registered `{name}` has no value, recording it empty");
                    store.add_param(name, "");
                }
            }
            continue;
        }

        if mode.prefers_param() {
            if let Some(value) = take_value(&mut tokens) {
                let value = value.as_ref();
                trace!("unregistered `{name}` takes `{value}`");
                store.add_param(name, value);
                store.record(token, TokenKind::ParamName);
                store.record(value, TokenKind::ParamValue);
                continue;
            }
        }

        trace!("`{token}` is a flag");
        store.add_flag(name);
        store.record(token, TokenKind::Flag);
    }

    debug!(
        "Classified {} flag(s), {} param name(s), {} positional(s)",
        store.flags.len(),
        store.params.len(),
        store.positionals.len()
    );

    store
}

/// Consumes the next token if it exists and is not option-like.
fn take_value<I, S>(tokens: &mut Peekable<I>) -> Option<S>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    tokens.next_if(|next| !is_option(next.as_ref()))
}

/// Splits a flag cluster into the letters recorded as flags and, when the
/// last letter is a registered parameter, that letter.
fn split_cluster<'a>(cluster: &'a str, registry: &Registry) -> (&'a str, Option<&'a str>) {
    match cluster.char_indices().last() {
        Some((index, _)) if registry.is_registered(&cluster[index..]) => {
            (&cluster[..index], Some(&cluster[index..]))
        }
        _ => (cluster, None),
    }
}

fn add_cluster_flags(store: &mut Store, letters: &str) {
    let mut buffer = [0; 4];
    for letter in letters.chars() {
        store.add_flag(letter.encode_utf8(&mut buffer));
    }
}

/// A [`Registry`] and a [`Mode`] ready to classify token sequences.
///
/// ```
/// use argsift_core::classifier::Parser;
///
/// let store = Parser::new().register("-j").parse(["prog", "-j", "4"]);
/// assert_eq!(store.param("j").parse::<u8>().unwrap(), 4);
/// assert!(!store.has_positionals());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    registry: Registry,
    mode: Mode,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_registry(registry: Registry, mode: Mode) -> Self {
        Self { registry, mode }
    }

    #[must_use]
    pub fn register(mut self, name: &str) -> Self {
        self.registry.register(name);
        self
    }

    #[must_use]
    pub fn register_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.registry.register_all(names);
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn current_mode(&self) -> &Mode {
        &self.mode
    }

    pub fn parse<I, S>(&self, tokens: I) -> Store
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        classify(tokens, &self.registry, &self.mode)
    }
}
