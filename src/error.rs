// ABOUTME: Error types for evaluation failures, matching the five host-facing message formats

use crate::value::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EvalError {
    #[error("Invalid argument {0}")]
    InvalidArgument(Value),

    #[error("Insufficient arguments {0}")]
    InsufficientArguments(Value),

    #[error("External variable not found {0}")]
    VariableNotFound(String),

    #[error("Attempted write to read-only variable {0}")]
    WriteToReadOnlyVariable(String),

    #[error("Function not found {0}")]
    FunctionNotFound(String),
}
