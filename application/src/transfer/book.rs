use kernel::prelude::entity::{Book, DestructBook, DestructReview, Review};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub is_published: bool,
    pub reviews: Vec<ReviewDto>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            published,
            reviews,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            is_published: published.into(),
            reviews: reviews.into_iter().map(ReviewDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReviewDto {
    pub id: String,
    pub body: String,
}

impl From<Review> for ReviewDto {
    fn from(value: Review) -> Self {
        let DestructReview { id, body } = value.into_destruct();
        Self {
            id: id.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug)]
pub struct GetBookDto {
    pub id: String,
}

/// Inputs as received from the client; absent fields are validated by the service.
#[derive(Debug, Default)]
pub struct CreateBookDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug)]
pub struct UpdateBookDto {
    pub id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug)]
pub struct DeleteBookDto {
    pub id: String,
}
