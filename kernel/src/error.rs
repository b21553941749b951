use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    NotFound,
    Validation,
    Conflict,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::Conflict => write!(f, "Resource conflicts with existing state"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

/// Attached to [`KernelError::Validation`] reports to name the offending input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FieldViolation {
    field: &'static str,
    reason: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, "is required")
    }
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}
