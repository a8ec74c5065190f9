use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::domain::Publication;
use crate::books::dto::BookDto;
use crate::books::factory;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, OperationResult, SearchResult};
use crate::core::repository::Repository;

pub struct CatalogServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration) -> Self {
        Self::with_repository(config, factory::create_book_repository())
    }

    pub(crate) fn with_repository(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
        }
    }

    pub fn len(&self) -> usize {
        self.book_repository.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn search(&self, predicate: &dyn Fn(&BookEntity) -> bool, not_found_message: String) -> SearchResult {
        let matches: Vec<BookDto> = self.book_repository.query(predicate).iter().map(BookDto::from).collect();
        debug!(branch_id = %self.config.branch_id, matches = matches.len(), "catalog search");
        SearchResult::new(matches, not_found_message)
    }
}

impl Default for CatalogServiceImpl {
    fn default() -> Self {
        Self::new(&Configuration::default())
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> OperationResult {
        let entity = BookEntity::new(self.book_repository.next_id(), book.title(), book.author(),
                                     book.release_year(), book.edition());
        let added = BookDto::from(&entity);
        match self.book_repository.create(entity) {
            Ok(_) => {
                info!(branch_id = %self.config.branch_id, book_id = added.id, "book added");
                OperationResult::succeeded(format!("{}: Added successfully.", added).as_str(), Some(added))
            }
            Err(LibraryError::DuplicateKey { .. }) => {
                warn!(branch_id = %self.config.branch_id, book = %book, "duplicate book rejected");
                OperationResult::failed(format!("{}: Already exists.", book).as_str())
            }
            // next_id always hands out a fresh positive id, so only the key check can fail here
            Err(err) => {
                warn!(branch_id = %self.config.branch_id, error = %err, "failed to add book");
                OperationResult::failed(err.message())
            }
        }
    }

    fn remove_book(&mut self, id: i64) -> OperationResult {
        match self.book_repository.delete(id) {
            Ok(removed) => {
                info!(branch_id = %self.config.branch_id, book_id = id, removed = removed.len(), "book removed");
                OperationResult::succeeded(format!("Book with id {} removed successfully.", id).as_str(),
                                           removed.first().map(BookDto::from))
            }
            Err(err) => {
                debug!(branch_id = %self.config.branch_id, book_id = id, error = %err, "book not removed");
                OperationResult::failed(format!("Book with id {} not found", id).as_str())
            }
        }
    }

    fn remove_all_books(&mut self) -> OperationResult {
        let dropped = self.book_repository.clear();
        assert_eq!(0, self.book_repository.count(), "catalog still holds books after clearing");
        info!(branch_id = %self.config.branch_id, removed = dropped, "all books removed");
        OperationResult::succeeded("All books have been removed successfully.", None)
    }

    fn search_by_title(&self, title: &str) -> SearchResult {
        self.search(&|b: &BookEntity| b.title.contains(title),
                    format!("No books found with title: {}", title))
    }

    fn search_by_author(&self, author: &str) -> SearchResult {
        self.search(&|b: &BookEntity| b.author == author,
                    format!("No books found with author: {}", author))
    }

    fn search_editions_of(&self, book: &BookDto) -> SearchResult {
        self.search(&|b: &BookEntity| b.same_work(book),
                    format!("No editions found for book: {}", book))
    }

    fn find_book_by_id(&self, id: i64) -> Option<BookDto> {
        self.book_repository.get(id).ok().map(|b| BookDto::from(&b))
    }

    fn books(&self) -> Vec<BookDto> {
        self.book_repository.all().iter().map(BookDto::from).collect()
    }
}
