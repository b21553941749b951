use kernel::prelude::entity::{
    Book, BookAuthor, BookId, BookTitle, PublishState, Review, ReviewBody, ReviewId,
};
use kernel::KernelError;

/// The catalog a fresh server starts with when seeding is enabled.
pub fn seed_catalog() -> error_stack::Result<Vec<Book>, KernelError> {
    Ok(vec![
        Book::with_reviews(
            BookId::new("1"),
            BookTitle::new("The Awakening"),
            BookAuthor::new("Kate Chopin"),
            PublishState::new(true),
            vec![Review::new(
                ReviewId::new("rv-001"),
                ReviewBody::new("this is a good book"),
            )],
        )?,
        Book::new(
            BookId::new("2"),
            BookTitle::new("City of Glass"),
            BookAuthor::new("Paul Auster"),
            PublishState::new(true),
        ),
    ])
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::prelude::entity::BookId;
    use kernel::KernelError;

    use crate::database::InMemoryDatabase;

    #[tokio::test]
    async fn seeded_store_starts_with_two_books() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::seeded()?;
        let con = db.transact().await?;
        let books = con.list();
        assert_eq!(books.len(), 2);

        let awakening = con
            .find_by_id(&BookId::new("1"))
            .expect("seed contains book 1");
        assert_eq!(awakening.title().as_ref(), "The Awakening");
        assert_eq!(awakening.reviews().len(), 1);
        Ok(())
    }
}
