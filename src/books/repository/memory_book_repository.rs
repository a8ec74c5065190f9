use crate::books::domain::model::{BookEntity, BookKey};
use crate::books::domain::Publication;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order in a vector owned by the instance.
#[derive(Debug, Default)]
pub(crate) struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self { books: Vec::new() }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<usize> {
        if entity.id() <= 0 {
            return Err(LibraryError::validation(
                format!("book id must be positive but was {}", entity.id()).as_str(), None));
        }
        if self.books.iter().any(|b| b.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(
                format!("book id {} already exists", entity.id()).as_str()));
        }
        let key = entity.key();
        if self.find_by_key(&key).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("{}: Already exists.", key).as_str()));
        }
        self.books.push(entity);
        Ok(1)
    }

    fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        self.books.iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("Book with id {} not found", id).as_str()))
    }

    fn delete(&mut self, id: i64) -> LibraryResult<Vec<BookEntity>> {
        let (removed, kept): (Vec<BookEntity>, Vec<BookEntity>) =
            self.books.drain(..).partition(|b| b.id() == id);
        self.books = kept;
        if removed.is_empty() {
            return Err(LibraryError::not_found(format!("Book with id {} not found", id).as_str()));
        }
        Ok(removed)
    }

    fn clear(&mut self) -> usize {
        let size = self.books.len();
        self.books.clear();
        size
    }

    fn all(&self) -> Vec<BookEntity> {
        self.books.clone()
    }

    fn query(&self, predicate: &dyn Fn(&BookEntity) -> bool) -> Vec<BookEntity> {
        self.books.iter().filter(|b| predicate(b)).cloned().collect()
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_key(&self, key: &BookKey) -> Option<BookEntity> {
        self.books.iter().find(|b| &b.key() == key).cloned()
    }

    fn next_id(&self) -> i64 {
        self.books.iter().map(Identifiable::id).max().map_or(1, |max| max + 1)
    }
}
