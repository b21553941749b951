use async_graphql::ErrorExtensions;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};
use tracing::error;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        error!("{e:?}");
        ErrorStatus(e)
    }
}

impl ErrorExtensions for ErrorStatus {
    fn extend(&self) -> async_graphql::Error {
        let context = self.0.current_context();
        let code = match context {
            KernelError::NotFound => "NOT_FOUND",
            KernelError::Validation => "BAD_USER_INPUT",
            KernelError::Conflict => "CONFLICT",
            KernelError::Internal => "INTERNAL_SERVER_ERROR",
        };
        async_graphql::Error::new(context.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
