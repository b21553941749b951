use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct PublishState(bool);

impl PublishState {
    pub fn new(published: impl Into<bool>) -> Self {
        Self(published.into())
    }

    pub fn is_published(&self) -> bool {
        self.0
    }
}
