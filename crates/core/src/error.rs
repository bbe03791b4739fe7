use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No value was recorded for parameter `{}`", .0)]
    MissingParam(String),

    #[error("Positional index {} is out of range ({} positional arguments)", .index, .len)]
    PositionalOutOfRange { index: usize, len: usize },

    #[error("Could not convert `{}` to {}: {}", .raw, .target, .reason)]
    Conversion {
        raw: String,
        target: &'static str,
        reason: String,
    },

    #[error("IO error with profile file at path `{}`: {}", .path, .original)]
    Io {
        path: String,
        original: std::io::Error,
    },

    #[error("Error reading profile file at `{}`: {}", .path, .original)]
    Yaml {
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Error writing output: {}", .0)]
    Output(#[from] serde_yaml::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn conversion_error(raw: &str, target: &'static str, reason: String) -> Self {
        Self::Conversion {
            raw: raw.to_string(),
            target,
            reason,
        }
    }

    pub fn io_error(path: String, original: std::io::Error) -> Self {
        Self::Io { path, original }
    }

    pub fn yaml_error(path: String, original: serde_yaml::Error) -> Self {
        Self::Yaml { path, original }
    }
}
