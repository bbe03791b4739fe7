//! argsift CLI Library
//!
//! This crate provides `asift`, a small inspector that runs the argsift
//! classifier over a token sequence and prints what each token became. It is
//! handy for checking how a command line will be read before wiring
//! [`argsift_core`] into a program.
//!
//! # Architecture
//!
//! - [`cli_args`]: The inspector's own options, parsed with `clap`
//! - [`setup`]: Profile loading plus command-line overrides
//! - [`render`]: Text and YAML output
//!
//! # Examples
//!
//! ```bash
//! # Default mode: `-j` is a flag and `4` a positional
//! asift -- prog -j 4
//!
//! # Pre-register `j` so it takes `4` as its value
//! asift -r j -- prog -j 4
//!
//! # Show the per-token decisions as YAML
//! asift --explain --format yaml -- prog --out=result.txt -xvf archive.tar
//!
//! # Print only the values of one parameter
//! asift --prefer-param -g mode -- prog --mode fast
//! ```

pub mod cli_args;
pub mod render;
pub mod setup;
