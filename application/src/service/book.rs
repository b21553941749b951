use error_stack::Report;
use tracing::info;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle, PublishState};
use kernel::{FieldViolation, KernelError};

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

fn required_title(title: Option<String>) -> error_stack::Result<BookTitle, KernelError> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(BookTitle::new(title)),
        _ => Err(Report::new(KernelError::Validation)
            .attach_printable(FieldViolation::required("title"))),
    }
}

fn not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound)
        .attach_printable(format!("book {} does not exist", id.as_ref()))
}

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let books = self.book_query().find_all(&mut connection).await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;
        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    #[tracing::instrument(skip(self))]
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let CreateBookDto {
            title,
            author,
            is_published,
        } = dto;
        let book = Book::new(
            BookId::generate(),
            required_title(title)?,
            BookAuthor::new(author.unwrap_or_default()),
            PublishState::new(is_published.unwrap_or_default()),
        );

        let mut connection = self.database_connection().transact().await?;
        self.book_modifier().create(&mut connection, &book).await?;
        connection.commit().await?;

        info!("Created book {}", book.id().as_ref());
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    #[tracing::instrument(skip(self))]
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let UpdateBookDto {
            id,
            title,
            author,
            is_published,
        } = dto;
        let title = required_title(title)?;
        let id = BookId::new(id);

        let mut connection = self.database_connection().transact().await?;
        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| not_found(&id))?;
        book.revise(
            title,
            BookAuthor::new(author.unwrap_or_default()),
            PublishState::new(is_published.unwrap_or_default()),
        );
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        info!("Updated book {}", id.as_ref());
        Ok(BookDto::from(book))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    /// Removes the book and returns the books that remain.
    #[tracing::instrument(skip(self))]
    async fn delete_book(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let id = BookId::new(dto.id);

        let mut connection = self.database_connection().transact().await?;
        if !self.book_modifier().delete(&mut connection, &id).await? {
            return Err(not_found(&id));
        }
        let remaining = self.book_query().find_all(&mut connection).await?;
        connection.commit().await?;

        info!("Deleted book {}", id.as_ref());
        Ok(remaining.into_iter().map(BookDto::from).collect())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookQuery + DependOnBookModifier {}
