use crate::controller::Intake;
use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use async_graphql::ID;

#[derive(Debug)]
pub struct GetBookRequest {
    id: ID,
}

impl GetBookRequest {
    pub fn new(id: ID) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct AddBookRequest {
    title: Option<String>,
    author: Option<String>,
    is_published: Option<bool>,
}

impl AddBookRequest {
    pub fn new(title: Option<String>, author: Option<String>, is_published: Option<bool>) -> Self {
        Self {
            title,
            author,
            is_published,
        }
    }
}

#[derive(Debug)]
pub struct UpdateBookRequest {
    id: ID,
    title: Option<String>,
    author: Option<String>,
    is_published: Option<bool>,
}

impl UpdateBookRequest {
    pub fn new(
        id: ID,
        title: Option<String>,
        author: Option<String>,
        is_published: Option<bool>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            is_published,
        }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: ID,
}

impl DeleteBookRequest {
    pub fn new(id: ID) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id.0 }
    }
}

impl Intake<AddBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: AddBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            author: input.author,
            is_published: input.is_published,
        }
    }
}

impl Intake<UpdateBookRequest> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: UpdateBookRequest) -> Self::To {
        UpdateBookDto {
            id: input.id.0,
            title: input.title,
            author: input.author,
            is_published: input.is_published,
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id.0 }
    }
}
