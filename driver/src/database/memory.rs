use std::collections::HashMap;
use std::sync::Arc;

use error_stack::Report;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, warn};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

pub use self::{book::*, seed::*};

mod book;
mod seed;

/// Books keyed by id, plus the order they were appended in.
#[derive(Debug, Default)]
struct BookTable {
    books: HashMap<BookId, Book>,
    order: Vec<BookId>,
}

impl BookTable {
    fn list(&self) -> Vec<Book> {
        self.order
            .iter()
            .filter_map(|id| self.books.get(id))
            .cloned()
            .collect()
    }

    fn find_by_id(&self, id: &BookId) -> Option<&Book> {
        self.books.get(id)
    }

    fn insert_at(&mut self, position: usize, book: Book) {
        let position = position.min(self.order.len());
        self.order.insert(position, book.id().clone());
        self.books.insert(book.id().clone(), book);
    }

    fn append(&mut self, book: Book) -> error_stack::Result<(), KernelError> {
        if self.books.contains_key(book.id()) {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("book {} already exists", book.id().as_ref())));
        }
        self.insert_at(self.order.len(), book);
        Ok(())
    }

    fn replace(&mut self, book: Book) -> Option<Book> {
        let stored = self.books.get_mut(book.id())?;
        Some(std::mem::replace(stored, book))
    }

    fn remove_by_id(&mut self, id: &BookId) -> Option<(usize, Book)> {
        let position = self.order.iter().position(|stored| stored == id)?;
        self.order.remove(position);
        let book = self.books.remove(id)?;
        Some((position, book))
    }
}

#[derive(Debug)]
enum Undo {
    Appended(BookId),
    Replaced(Book),
    Removed(usize, Book),
}

/// In-process book store. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    table: Arc<Mutex<BookTable>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(
        books: impl IntoIterator<Item = Book>,
    ) -> error_stack::Result<Self, KernelError> {
        let mut table = BookTable::default();
        for book in books {
            table.append(book)?;
        }
        Ok(Self {
            table: Arc::new(Mutex::new(table)),
        })
    }

    /// Store pre-filled with [`seed_catalog`].
    pub fn seeded() -> error_stack::Result<Self, KernelError> {
        Self::with_books(seed_catalog()?)
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let table = Arc::clone(&self.table).lock_owned().await;
        Ok(InMemoryTransaction {
            table,
            journal: Vec::new(),
        })
    }
}

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

/// Exclusive access to the table for the lifetime of one request.
///
/// Every mutation is journaled so that it can be undone until `commit`.
pub struct InMemoryTransaction {
    table: OwnedMutexGuard<BookTable>,
    journal: Vec<Undo>,
}

impl InMemoryTransaction {
    pub fn list(&self) -> Vec<Book> {
        self.table.list()
    }

    pub fn find_by_id(&self, id: &BookId) -> Option<Book> {
        self.table.find_by_id(id).cloned()
    }

    pub fn append(&mut self, book: Book) -> error_stack::Result<(), KernelError> {
        let id = book.id().clone();
        self.table.append(book)?;
        self.journal.push(Undo::Appended(id));
        Ok(())
    }

    /// Overwrites the stored book with the same id, keeping its position.
    pub fn replace(&mut self, book: Book) -> bool {
        match self.table.replace(book) {
            Some(previous) => {
                self.journal.push(Undo::Replaced(previous));
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, id: &BookId) -> bool {
        match self.table.remove_by_id(id) {
            Some((position, book)) => {
                self.journal.push(Undo::Removed(position, book));
                true
            }
            None => false,
        }
    }

    fn undo(&mut self) {
        while let Some(undo) = self.journal.pop() {
            match undo {
                Undo::Appended(id) => {
                    self.table.remove_by_id(&id);
                }
                Undo::Replaced(previous) => {
                    self.table.replace(previous);
                }
                Undo::Removed(position, book) => self.table.insert_at(position, book),
            }
        }
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        debug!("Commit {} change(s)", self.journal.len());
        self.journal.clear();
        Ok(())
    }

    async fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        debug!("Roll back {} change(s)", self.journal.len());
        self.undo();
        Ok(())
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if !self.journal.is_empty() {
            warn!(
                "Transaction dropped with {} uncommitted change(s), rolling back",
                self.journal.len()
            );
            self.undo();
        }
    }
}
