use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::domain::Publication;
use crate::core::domain::Identifiable;

// BookDto is the book record handed to and returned by the catalog. An `id` of 0
// means none has been assigned yet; the catalog ignores ids on incoming books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub release_year: i32,
    pub edition: i32,
}

impl BookDto {
    pub fn new(title: &str, author: &str, release_year: i32, edition: i32) -> BookDto {
        BookDto {
            id: 0,
            title: title.to_string(),
            author: author.to_string(),
            release_year,
            edition,
        }
    }

    pub fn builder() -> BookDtoBuilder {
        BookDtoBuilder::default()
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Publication for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn release_year(&self) -> i32 {
        self.release_year
    }

    fn edition(&self) -> i32 {
        self.edition
    }
}

// Rendering used wherever a book is interpolated into a catalog message.
impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            release_year: other.release_year,
            edition: other.edition,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.id, other.title.as_str(), other.author.as_str(),
                        other.release_year, other.edition)
    }
}

#[derive(Debug, Default, Clone)]
pub struct BookDtoBuilder {
    title: String,
    author: String,
    release_year: i32,
    edition: i32,
}

impl BookDtoBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn release_year(mut self, release_year: i32) -> Self {
        self.release_year = release_year;
        self
    }

    pub fn edition(mut self, edition: i32) -> Self {
        self.edition = edition;
        self
    }

    pub fn build(self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(), self.release_year, self.edition)
    }
}
