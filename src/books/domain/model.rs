use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Publication;
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a book. Many editions of the same work can
// exist side by side, each with its own identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub release_year: i32,
    pub edition: i32,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, author: &str, release_year: i32, edition: i32) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            release_year,
            edition,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Publication for BookEntity {
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

// BookKey is the duplicate-detection key of a book; ids take no part in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookKey {
    pub title: String,
    pub author: String,
    pub release_year: i32,
    pub edition: i32,
}

impl BookKey {
    pub fn new(title: &str, author: &str, release_year: i32, edition: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            release_year,
            edition,
        }
    }
}

impl Display for BookKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, Release year: {}, Edition: {}",
               self.title, self.author, self.release_year, self.edition)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{BookEntity, BookKey};
    use crate::books::domain::Publication;
    use crate::utils::date::current_year;

    #[test]
    fn test_should_build_book() {
        let book = BookEntity::new(3, "The Hobbit", "J.R.R. Tolkien", 1937, 1);
        assert_eq!(3, book.id);
        assert_eq!("The Hobbit", book.title());
        assert_eq!("J.R.R. Tolkien", book.author());
        assert_eq!(i64::from(current_year()) - 1937, book.age());
    }

    #[test]
    fn test_should_ignore_id_in_key() {
        let first = BookEntity::new(1, "Dune", "Frank Herbert", 1965, 1);
        let second = BookEntity::new(7, "Dune", "Frank Herbert", 1965, 1);
        assert_eq!(first.key(), second.key());
        assert!(first.same_edition(&second));
    }

    #[test]
    fn test_should_match_editions_of_same_work() {
        let first = BookEntity::new(1, "Foo", "Bar", 2000, 1);
        let second = BookEntity::new(2, "Foo", "Bar", 2000, 2);
        let other_year = BookEntity::new(3, "Foo", "Bar", 2001, 1);
        assert!(first.same_work(&second));
        assert!(!first.same_edition(&second));
        assert!(!first.same_work(&other_year));
    }

    #[test]
    fn test_should_format_key() {
        let key = BookKey::new("Dune", "Frank Herbert", 1965, 2);
        assert_eq!("Title: Dune, Author: Frank Herbert, Release year: 1965, Edition: 2", key.to_string());
    }
}
