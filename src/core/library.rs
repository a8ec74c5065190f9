use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::DuplicateKey { message } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::Validation { message, .. } => { message }
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for Repository .
pub type LibraryResult<T> = Result<T, LibraryError>;

// OperationResult is the outcome of a catalog mutation. Failures are reported
// through `success` rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    // The added or removed record, when there is one
    pub book: Option<BookDto>,
}

impl OperationResult {
    pub fn succeeded(message: &str, book: Option<BookDto>) -> Self {
        OperationResult {
            success: true,
            message: message.to_string(),
            book,
        }
    }

    pub fn failed(message: &str) -> Self {
        OperationResult {
            success: false,
            message: message.to_string(),
            book: None,
        }
    }
}

// SearchResult is the outcome of a catalog query; `success` is false exactly
// when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub matches: Vec<BookDto>,
    pub success: bool,
    pub message: String,
}

impl SearchResult {
    pub(crate) fn new(matches: Vec<BookDto>, not_found_message: String) -> Self {
        if matches.is_empty() {
            SearchResult { matches, success: false, message: not_found_message }
        } else {
            SearchResult { matches, success: true, message: "Books found".to_string() }
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::library::{LibraryError, OperationResult, SearchResult};

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_display_error_message() {
        let err = LibraryError::not_found("Book with id 3 not found");
        assert_eq!("Book with id 3 not found", err.to_string());
        assert_eq!("Book with id 3 not found", err.message());
    }

    #[test]
    fn test_should_build_operation_results() {
        let ok = OperationResult::succeeded("done", None);
        assert!(ok.success);
        assert_eq!("done", ok.message.as_str());

        let failed = OperationResult::failed("nope");
        assert!(!failed.success);
        assert!(failed.book.is_none());
    }

    #[test]
    fn test_should_fail_empty_search_result() {
        let res = SearchResult::new(vec![], "No books found with title: x".to_string());
        assert!(!res.success);
        assert!(res.is_empty());
        assert_eq!("No books found with title: x", res.message.as_str());
    }

    #[test]
    fn test_should_succeed_non_empty_search_result() {
        let book = BookDto::builder().title("Dune").author("Frank Herbert").release_year(1965).edition(1).build();
        let res = SearchResult::new(vec![book], "unused".to_string());
        assert!(res.success);
        assert_eq!(1, res.len());
        assert_eq!("Books found", res.message.as_str());
    }
}
