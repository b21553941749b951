use crate::controller::{Exhaust, TryExhaust};
use crate::error::ErrorStatus;
use application::transfer::{BookDto, ReviewDto};
use async_graphql::{SimpleObject, ID};
use error_stack::Report;
use kernel::{FieldViolation, KernelError};
use tracing::debug;

#[derive(Debug, SimpleObject)]
#[graphql(name = "Review")]
pub struct ReviewResponse {
    id: ID,
    body: String,
}

impl From<ReviewDto> for ReviewResponse {
    fn from(value: ReviewDto) -> Self {
        Self {
            id: ID(value.id),
            body: value.body,
        }
    }
}

#[derive(Debug, SimpleObject)]
#[graphql(name = "Book")]
pub struct BookResponse {
    id: ID,
    title: String,
    author: String,
    is_published: bool,
    reviews: Vec<ReviewResponse>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: ID(value.id),
            title: value.title,
            author: value.author,
            is_published: value.is_published,
            reviews: value.reviews.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}

#[derive(Debug, SimpleObject)]
pub struct BookPayload {
    book: Option<BookResponse>,
}

#[derive(Debug, SimpleObject)]
pub struct BooksPayload {
    books: Vec<BookResponse>,
}

#[derive(Debug, SimpleObject)]
pub struct AddBookMutationResponse {
    code: String,
    success: bool,
    message: String,
    data: BookPayload,
}

#[derive(Debug, SimpleObject)]
pub struct UpdateBookMutationResponse {
    code: String,
    success: bool,
    message: String,
    data: BookPayload,
}

#[derive(Debug, SimpleObject)]
pub struct DeleteBookMutationResponse {
    code: String,
    success: bool,
    message: String,
    data: BooksPayload,
}

struct Status {
    code: &'static str,
    success: bool,
    message: String,
}

impl Status {
    fn succeeded(code: &'static str, message: &str) -> Self {
        Self {
            code,
            success: true,
            message: message.to_string(),
        }
    }

    /// Outcomes the client can act on become an unsuccessful envelope; anything else is an error.
    fn failed(report: Report<KernelError>) -> Result<Self, ErrorStatus> {
        let outcome = match report.current_context() {
            KernelError::NotFound => Some(("404", String::from("book not found"))),
            KernelError::Validation => Some((
                "400",
                report
                    .downcast_ref::<FieldViolation>()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| KernelError::Validation.to_string()),
            )),
            KernelError::Conflict | KernelError::Internal => None,
        };
        match outcome {
            Some((code, message)) => {
                debug!("{report:?}");
                Ok(Self {
                    code,
                    success: false,
                    message,
                })
            }
            None => Err(ErrorStatus::from(report)),
        }
    }
}

pub struct BookPresenter;

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Vec<BookResponse>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        input.into_iter().map(BookResponse::from).collect()
    }
}

pub struct AddBookPresenter;

impl TryExhaust<error_stack::Result<BookDto, KernelError>> for AddBookPresenter {
    type To = AddBookMutationResponse;
    type Error = ErrorStatus;
    fn emit(
        &self,
        input: error_stack::Result<BookDto, KernelError>,
    ) -> Result<Self::To, Self::Error> {
        let (status, book) = match input {
            Ok(book) => (
                Status::succeeded("201", "book created successfully"),
                Some(BookResponse::from(book)),
            ),
            Err(report) => (Status::failed(report)?, None),
        };
        Ok(AddBookMutationResponse {
            code: status.code.to_string(),
            success: status.success,
            message: status.message,
            data: BookPayload { book },
        })
    }
}

pub struct UpdateBookPresenter;

impl TryExhaust<error_stack::Result<BookDto, KernelError>> for UpdateBookPresenter {
    type To = UpdateBookMutationResponse;
    type Error = ErrorStatus;
    fn emit(
        &self,
        input: error_stack::Result<BookDto, KernelError>,
    ) -> Result<Self::To, Self::Error> {
        let (status, book) = match input {
            Ok(book) => (
                Status::succeeded("201", "book updated successfully"),
                Some(BookResponse::from(book)),
            ),
            Err(report) => (Status::failed(report)?, None),
        };
        Ok(UpdateBookMutationResponse {
            code: status.code.to_string(),
            success: status.success,
            message: status.message,
            data: BookPayload { book },
        })
    }
}

pub struct DeleteBookPresenter;

impl TryExhaust<error_stack::Result<Vec<BookDto>, KernelError>> for DeleteBookPresenter {
    type To = DeleteBookMutationResponse;
    type Error = ErrorStatus;
    fn emit(
        &self,
        input: error_stack::Result<Vec<BookDto>, KernelError>,
    ) -> Result<Self::To, Self::Error> {
        let (status, books) = match input {
            Ok(books) => (
                Status::succeeded("200", "Book deleted"),
                books.into_iter().map(BookResponse::from).collect(),
            ),
            Err(report) => (Status::failed(report)?, Vec::new()),
        };
        Ok(DeleteBookMutationResponse {
            code: status.code.to_string(),
            success: status.success,
            message: status.message,
            data: BooksPayload { books },
        })
    }
}
