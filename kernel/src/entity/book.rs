mod author;
mod id;
mod published;
mod title;

pub use self::{author::*, id::*, published::*, title::*};
use crate::entity::{Review, ReviewId};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use error_stack::Report;
use std::collections::HashSet;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    published: PublishState,
    reviews: Vec<Review>,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: BookAuthor, published: PublishState) -> Self {
        Self {
            id,
            title,
            author,
            published,
            reviews: Vec::new(),
        }
    }

    /// Builds a book that already carries reviews. Review ids must be unique within the book.
    pub fn with_reviews(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        published: PublishState,
        reviews: Vec<Review>,
    ) -> error_stack::Result<Self, KernelError> {
        let duplicated = {
            let mut seen: HashSet<&ReviewId> = HashSet::new();
            let found = reviews.iter().find(|review| !seen.insert(review.id()));
            found.map(|review| review.id().clone())
        };
        if let Some(duplicated) = duplicated {
            return Err(Report::new(KernelError::Conflict).attach_printable(format!(
                "review {} appears twice in book {}",
                duplicated.as_ref(),
                id.as_ref()
            )));
        }
        Ok(Self {
            id,
            title,
            author,
            published,
            reviews,
        })
    }

    /// Overwrites every editable field. Reviews are left as they are.
    pub fn revise(&mut self, title: BookTitle, author: BookAuthor, published: PublishState) {
        self.substitute(|book| {
            *book.title = title;
            *book.author = author;
            *book.published = published;
        });
    }
}
