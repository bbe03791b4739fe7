//! Command-line argument parsing for the `asift` binary.
//!
//! These are the inspector's own options, parsed with `clap`. The token
//! sequence being inspected follows `--` and is passed through untouched.

use clap::{Parser, ValueEnum};

/// Output format for the classified tokens.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable sections
    #[default]
    Text,
    /// YAML document of flags, params and positionals
    Yaml,
}

/// Command-line arguments for the argsift inspector.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argsift_cli::cli_args::Args;
///
/// let args = Args::parse_from(["asift", "-r", "-j", "--", "prog", "-j", "4"]);
/// assert_eq!(args.registered, vec!["-j"]);
/// assert_eq!(args.tokens, vec!["prog", "-j", "4"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the profile YAML holding registered names and mode switches.
    ///
    /// If not provided, `~/.argsift/profile.yml` is used when it exists.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Pre-register a parameter name that always takes a value.
    ///
    /// Can be repeated; leading dashes are ignored.
    #[arg(
        long = "register",
        short = 'r',
        action = clap::ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub registered: Vec<String>,

    /// Let an unregistered option take the following non-option token as its value.
    #[arg(long, action)]
    pub prefer_param: bool,

    /// Keep `--name=value` tokens whole instead of splitting them at `=`.
    #[arg(long, action)]
    pub no_split_on_equals: bool,

    /// Expand `-abc` into the flags `a`, `b` and `c`.
    #[arg(long, action)]
    pub multiflag: bool,

    /// Classify the first token too instead of skipping it as the program name.
    #[arg(long, action)]
    pub parse_argv0: bool,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Show how each token was classified.
    #[arg(long, short = 'e', action)]
    pub explain: bool,

    /// Only print the values recorded for these parameter names.
    #[arg(
        long = "get",
        short = 'g',
        action = clap::ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub queries: Vec<String>,

    /// The token sequence to classify, given after `--`.
    #[arg(last = true)]
    pub tokens: Vec<String>,
}
