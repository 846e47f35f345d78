use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for construction and configuration of the simulation.
///
/// The per-frame step never fails; these variants only come out of
/// constructors, parameter validation and config loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Malformed YAML configuration.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Propagated I/O errors (config files).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("radius must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("radius"));
    }

    #[test]
    fn yaml_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_yaml::from_str("[not, a, number]");
        let e: Error = parse.unwrap_err().into();
        assert!(e.to_string().starts_with("config error"));
    }

    #[test]
    fn result_type_alias_compiles() -> Result<()> {
        Ok(())
    }
}
