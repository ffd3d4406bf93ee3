use crate::errors::GatewayError;

/// Result of a read request as seen by the UI side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Ok { content: String },
    Failed { error: String },
}

impl ReadOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

impl From<Result<String, GatewayError>> for ReadOutcome {
    fn from(result: Result<String, GatewayError>) -> Self {
        match result {
            Ok(content) => Self::Ok { content },
            Err(err) => {
                log::warn!("gateway failed to read file: {err}");
                Self::Failed {
                    error: err.message(),
                }
            },
        }
    }
}

/// Result of a write request as seen by the UI side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Ok,
    Failed { error: String },
}

impl WriteOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<Result<(), GatewayError>> for WriteOutcome {
    fn from(result: Result<(), GatewayError>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(err) => {
                log::warn!("gateway failed to write file: {err}");
                Self::Failed {
                    error: err.message(),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::{ReadOutcome, WriteOutcome};
    use crate::GatewayError;

    #[test]
    fn given_permission_error_when_converted_then_outcome_carries_message() {
        let err = GatewayError::Io {
            path: PathBuf::from("/secret"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "EACCES"),
        };

        let outcome = ReadOutcome::from(Err(err));

        assert_eq!(
            outcome,
            ReadOutcome::Failed {
                error: String::from("EACCES")
            }
        );
        assert!(!outcome.is_ok());
    }

    #[test]
    fn given_successful_write_when_converted_then_outcome_is_ok() {
        assert!(WriteOutcome::from(Ok(())).is_ok());
    }
}
