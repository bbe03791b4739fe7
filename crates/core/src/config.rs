//! Profile loading for argsift.
//!
//! A profile is a YAML file holding the names to pre-register and the mode
//! switches, so a caller does not have to rebuild them in code:
//!
//! ```yaml
//! registered: ["-j", "--out"]
//! unregistered: prefer_param
//! single_dash_is_multiflag: true
//! ```

use std::fs::File;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::classifier::Parser;
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::registry::Registry;

/// Default path for the profile file
const DEFAULT_PROFILE_PATH: &str = "~/.argsift/profile.yml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub registered: Registry,
    #[serde(flatten)]
    pub mode: Mode,
}

impl Profile {
    #[must_use]
    pub fn into_parser(self) -> Parser {
        Parser::with_registry(self.registered, self.mode)
    }
}

/// Resolves the profile file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// profile path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use argsift_core::config::get_profile_path;
///
/// let custom_path = get_profile_path(Some("/path/to/profile.yml"));
/// assert_eq!(custom_path, "/path/to/profile.yml");
/// ```
#[must_use]
pub fn get_profile_path(profile_path_arg: Option<&str>) -> String {
    let profile_path = profile_path_arg.unwrap_or(DEFAULT_PROFILE_PATH);

    shellexpand::tilde(profile_path).to_string()
}

/// Reads a profile from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid profile.
pub fn read_profile(path: &str) -> Result<Profile> {
    let reader = File::open(path).map_err(|e| Error::io_error(path.to_string(), e))?;

    serde_yaml::from_reader(reader).map_err(|e| Error::yaml_error(path.to_string(), e))
}

/// Loads the profile named on the command line, or the default one.
///
/// An explicitly given path must exist. A missing default profile is not an
/// error and yields `Profile::default()`.
///
/// # Errors
///
/// Returns an error if the chosen file exists but cannot be read or parsed,
/// or if an explicit path does not exist.
pub fn load_profile(profile_path_arg: Option<&str>) -> Result<Profile> {
    let path = get_profile_path(profile_path_arg);
    debug!("Profile path: `{}`", path);

    if profile_path_arg.is_none() && !Path::exists(Path::new(&path)) {
        debug!("No default profile, using built-in defaults");
        return Ok(Profile::default());
    }

    read_profile(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::UnregisteredOption;

    #[test]
    fn test_get_profile_path_with_custom_path() {
        let result = get_profile_path(Some("/custom/path/profile.yml"));
        assert_eq!(result, "/custom/path/profile.yml");
    }

    #[test]
    fn test_get_profile_path_with_none() {
        let result = get_profile_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with("profile.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_profile_from_yaml() {
        let profile: Profile = serde_yaml::from_str(
            "registered: [\"-j\", \"--out\"]\nunregistered: prefer_param\nsplit_on_equals: false\n",
        )
        .unwrap();

        assert!(profile.registered.is_registered("j"));
        assert!(profile.registered.is_registered("out"));
        assert_eq!(profile.mode.unregistered, UnregisteredOption::PreferParam);
        assert!(!profile.mode.split_on_equals);
        assert!(!profile.mode.single_dash_is_multiflag);
    }

    #[test]
    fn test_empty_profile_is_default() {
        let profile: Profile = serde_yaml::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_unknown_mode_value_is_rejected() {
        let result: serde_yaml::Result<Profile> =
            serde_yaml::from_str("unregistered: prefer_nothing\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_into_parser() {
        let profile: Profile = serde_yaml::from_str("registered: [j]\n").unwrap();
        let store = profile.into_parser().parse(["prog", "-j", "4"]);
        assert_eq!(store.param("j").as_str(), Some("4"));
    }
}
