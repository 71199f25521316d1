use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        storage_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        serialization_error(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn is_infrastructure_error(&self) -> bool {
        (1..=99).contains(&self.code)
    }

    pub fn is_no_coordinate_error(&self) -> bool {
        self.code == 110
    }
}

/// Swallows a failed best-effort operation.
///
/// Favorites and sharing are non-critical: a failure is logged and the
/// caller continues as if nothing happened.
pub fn absorb<T>(result: Result<T, Error>, operation: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(code = err.code, message = %err.message, "{} failed", operation);
            None
        }
    }
}

pub fn invalid_invocation_error() -> Error {
    Error {
        code: 100,
        message: "invalid invocation".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn no_coordinate_error() -> Error {
    Error {
        code: 110,
        message: "no coordinate".into(),
    }
}

pub fn corrupt_blob_error() -> Error {
    Error {
        code: 120,
        message: "corrupt favorites blob".into(),
    }
}

pub fn share_error() -> Error {
    Error {
        code: 130,
        message: "share failed".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn storage_error<T: Debug>(err: T) -> Error {
    tracing::debug!(?err, "storage error");
    Error {
        code: 2,
        message: "storage error".into(),
    }
}

pub fn serialization_error(_: serde_json::Error) -> Error {
    Error {
        code: 3,
        message: "serialization error".into(),
    }
}

pub fn config_error() -> Error {
    Error {
        code: 4,
        message: "invalid configuration".into(),
    }
}

#[test]
fn absorb_keeps_ok_values() {
    assert_eq!(absorb(Ok::<_, Error>(3), "count"), Some(3));
    assert_eq!(absorb::<u8>(Err(storage_error("down")), "count"), None);
}

#[test]
fn error_code_ranges() {
    assert!(storage_error("x").is_infrastructure_error());
    assert!(!no_coordinate_error().is_infrastructure_error());
    assert!(no_coordinate_error().is_no_coordinate_error());
}
