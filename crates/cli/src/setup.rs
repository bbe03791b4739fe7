//! Building the classifier from a profile and command-line overrides.
//!
//! The profile supplies the starting registry and mode. Switches given on the
//! command line only ever turn a behaviour on, and `--register` names are
//! added to the profile's names.

use argsift_core::classifier::Parser;
use argsift_core::config::{self, Profile};
use argsift_core::error::Result;
use argsift_core::mode::UnregisteredOption;
use log::debug;

use crate::cli_args::Args;

/// Trait for objects that can build a configured [`Parser`].
pub trait Provider {
    /// Loads the profile and applies any overrides on top of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be read or parsed.
    fn get_parser(&self) -> Result<Parser>;
}

/// Applies command-line switches and registrations on top of `profile`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argsift_cli::cli_args::Args;
/// use argsift_cli::setup::apply_overrides;
/// use argsift_core::config::Profile;
///
/// let args = Args::parse_from(["asift", "--multiflag", "-r", "j"]);
/// let profile = apply_overrides(Profile::default(), &args);
///
/// assert!(profile.mode.single_dash_is_multiflag);
/// assert!(profile.registered.is_registered("j"));
/// ```
#[must_use]
pub fn apply_overrides(mut profile: Profile, args: &Args) -> Profile {
    profile.registered.register_all(&args.registered);

    if args.prefer_param {
        profile.mode.unregistered = UnregisteredOption::PreferParam;
    }
    if args.no_split_on_equals {
        profile.mode.split_on_equals = false;
    }
    if args.multiflag {
        profile.mode.single_dash_is_multiflag = true;
    }
    if args.parse_argv0 {
        profile.mode.parse_argv0 = true;
    }

    profile
}

impl Provider for Args {
    fn get_parser(&self) -> Result<Parser> {
        let profile = config::load_profile(self.config_path.as_deref())?;
        let profile = apply_overrides(profile, self);
        debug!(
            "Registered names: {:?}, mode: {:?}",
            profile.registered.iter().collect::<Vec<_>>(),
            profile.mode
        );

        Ok(profile.into_parser())
    }
}
