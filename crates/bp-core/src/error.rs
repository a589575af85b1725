use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Length mismatch: {what} (expected={expected}, actual={actual})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}
