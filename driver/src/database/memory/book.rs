use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.list())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.find_by_id(id))
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.append(book.clone())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        if con.replace(book.clone()) {
            Ok(())
        } else {
            Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("book {} does not exist", book.id().as_ref())))
        }
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(con.remove_by_id(book_id))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{Book, BookAuthor, BookId, BookTitle, PublishState};
    use kernel::KernelError;

    use crate::database::{InMemoryBookRepository, InMemoryDatabase};

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let id = BookId::generate();

        let book = Book::new(
            id.clone(),
            BookTitle::new("test"),
            BookAuthor::new("someone"),
            PublishState::new(false),
        );
        InMemoryBookRepository.create(&mut con, &book).await?;

        let found = InMemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book.clone()));

        let mut book = book;
        book.revise(
            BookTitle::new("test2"),
            BookAuthor::new("someone else"),
            PublishState::new(true),
        );
        InMemoryBookRepository.update(&mut con, &book).await?;

        let found = InMemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book));

        assert!(InMemoryBookRepository.delete(&mut con, &id).await?);
        let found = InMemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());
        assert!(InMemoryBookRepository.find_all(&mut con).await?.is_empty());

        con.commit().await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_book_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let book = Book::new(
            BookId::new("ghost"),
            BookTitle::new("nothing"),
            BookAuthor::default(),
            PublishState::default(),
        );
        let report = InMemoryBookRepository
            .update(&mut con, &book)
            .await
            .expect_err("no book to update");
        assert!(matches!(report.current_context(), KernelError::NotFound));
        assert!(InMemoryBookRepository.find_all(&mut con).await?.is_empty());
        Ok(())
    }
}
