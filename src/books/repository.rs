pub mod memory_book_repository;

use crate::books::domain::model::{BookEntity, BookKey};
use crate::core::repository::Repository;


pub(crate) trait BookRepository: Repository<BookEntity> {
    fn find_by_key(&self, key: &BookKey) -> Option<BookEntity>;

    // next id to assign: one past the highest stored id, or 1 when empty
    fn next_id(&self) -> i64;
}
