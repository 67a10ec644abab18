//! Uniform response envelope used at all core boundaries.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Success code.
pub const CODE_OK: i32 = 0;
/// Generic failure code.
pub const CODE_ERR: i32 = -1;

/// The `{code, message, data}` wrapper returned to all callers.
///
/// `code` 0 is success; any non-zero value is failure with a
/// human-readable `message` and `data` set to null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// 0 on success, -1 on failure.
    pub code: i32,
    /// Human-readable outcome description.
    pub message: String,
    /// The typed payload, or null on failure.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            code: CODE_OK,
            message: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Wrap a successful payload with a custom message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: CODE_OK,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Wrap a failure message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            code: CODE_ERR,
            message: message.into(),
            data: None,
        }
    }

    /// Whether the envelope carries a success code.
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }

    /// Unwrap the envelope into a result, treating a non-zero code or a
    /// missing payload as a backend failure.
    pub fn into_result(self) -> AppResult<T> {
        if self.code != CODE_OK {
            return Err(AppError::backend_unavailable(self.message));
        }
        self.data
            .ok_or_else(|| AppError::backend_unavailable("Response envelope has no data"))
    }
}

impl<T> From<AppResult<T>> for Envelope<T> {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::fail(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_roundtrip() {
        let env = Envelope::ok(5u32);
        assert!(env.is_ok());
        assert_eq!(env.into_result().expect("payload"), 5);
    }

    #[test]
    fn test_fail_maps_to_error() {
        let env: Envelope<u32> = Envelope::fail("boom");
        assert!(!env.is_ok());
        let err = env.into_result().expect_err("error");
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn test_from_result() {
        let env: Envelope<u32> = Envelope::from(Err(AppError::not_found("missing")));
        assert_eq!(env.code, CODE_ERR);
        assert!(env.data.is_none());
    }

    #[test]
    fn test_decode_wire_shape() {
        let json = r#"{"code":0,"message":"ok","data":{"x":1}}"#;
        let env: Envelope<serde_json::Value> = serde_json::from_str(json).expect("decode");
        assert!(env.is_ok());
        assert_eq!(env.data.expect("data")["x"], 1);
    }
}
