pub mod books;
pub mod catalog;
pub mod core;
pub mod utils;

pub use crate::books::domain::Publication;
pub use crate::books::dto::{BookDto, BookDtoBuilder};
pub use crate::catalog::domain::CatalogService;
pub use crate::catalog::domain::service::CatalogServiceImpl as Catalog;
pub use crate::core::domain::Configuration;
pub use crate::core::library::{LibraryError, LibraryResult, OperationResult, SearchResult};
