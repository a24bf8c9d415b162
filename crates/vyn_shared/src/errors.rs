//! Error results that can be returned from the vyn crates

use thiserror::Error;

/// Serious errors and errors from third-party libraries
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.json");
        let err: Error = io.into();
        assert_eq!(err.to_string(), "io error: settings.json");
    }

    #[test]
    fn errors_turn_into_anyhow() {
        fn fails() -> crate::types::Result<()> {
            Err(Error::IO(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed")))?
        }

        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "io error: stdout closed");
        assert!(err.downcast_ref::<Error>().is_some());
    }
}
