use thiserror::Error;

/// The only way parsing a version can fail.
///
/// Anything odd inside a non-empty string is demoted to a qualifier or a
/// suffix instead, so this is reserved for input with nothing in it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("invalid version: {0}")]
    InvalidVersion(String),
}

impl VersionError {
    pub(crate) fn absent() -> Self {
        VersionError::InvalidVersion("no version string given".to_string())
    }

    pub(crate) fn empty(input: &str) -> Self {
        if input.is_empty() {
            VersionError::InvalidVersion("empty version string".to_string())
        } else {
            VersionError::InvalidVersion(format!("nothing to parse in {input:?}"))
        }
    }
}
