pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{OperationResult, SearchResult};

// CatalogService is the mutation and search surface of a single in-memory catalog.
// None of its operations fail with an error: outcomes are reported through the
// `success` flag and message of the returned result.
pub trait CatalogService: Sync + Send {
    /// Adds a copy of the book under a freshly assigned id; the book's own id is ignored.
    fn add_book(&mut self, book: &BookDto) -> OperationResult;
    fn remove_book(&mut self, id: i64) -> OperationResult;
    fn remove_all_books(&mut self) -> OperationResult;
    /// Case-sensitive substring match on title.
    fn search_by_title(&self, title: &str) -> SearchResult;
    /// Exact match on author.
    fn search_by_author(&self, author: &str) -> SearchResult;
    /// Every stored printing sharing title, author and release year with `book`.
    fn search_editions_of(&self, book: &BookDto) -> SearchResult;
    fn find_book_by_id(&self, id: i64) -> Option<BookDto>;
    /// Snapshot of the stored books in insertion order.
    fn books(&self) -> Vec<BookDto>;
}
