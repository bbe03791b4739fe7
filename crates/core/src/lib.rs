//! argsift Core Library
//!
//! This crate classifies a raw command-line token sequence into flags, named
//! parameters and positional arguments without a declared grammar. Unknown
//! options are accepted and classified heuristically; pre-registering the
//! names that take a value resolves the ambiguous `--name value` case.
//!
//! # Key Features
//!
//! - **Registry**: Names known in advance to take a value
//! - **Classifier**: A single pass with one token of lookahead, tuned by [`mode::Mode`]
//! - **Store**: Repeated flags, multi-valued parameters and ordered positionals
//! - **Accessors**: Flag checks, lookups and typed conversion with defaults
//! - **Profiles**: Registered names and mode switches loaded from YAML
//!
//! # Examples
//!
//! ```
//! use argsift_core::classifier::Parser;
//!
//! let store = Parser::new()
//!     .register("--threads")
//!     .parse(["prog", "--threads", "8", "-v", "-v", "input.txt"]);
//!
//! assert_eq!(store.param_or("threads", 1).parse::<u32>()?, 8);
//! assert_eq!(store.flag_count("v"), 2);
//! assert_eq!(store.positional(0).as_str(), Some("input.txt"));
//! # Ok::<(), argsift_core::error::Error>(())
//! ```

pub mod accessor;
pub mod classifier;
pub mod config;
pub mod error;
pub mod mode;
pub mod registry;
pub mod store;
pub mod token;
