mod body;
mod id;

pub use self::{body::*, id::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Review {
    id: ReviewId,
    body: ReviewBody,
}

impl Review {
    pub fn new(id: ReviewId, body: ReviewBody) -> Self {
        Self { id, body }
    }
}
