use crate::books::domain::model::BookKey;
use crate::core::domain::Identifiable;
use crate::utils::date::years_since;

pub mod model;

// Publication abstracts the descriptive fields shared by stored and transferred books.
pub trait Publication: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn release_year(&self) -> i32;
    fn edition(&self) -> i32;

    /// Years since release, computed from the clock on every call.
    fn age(&self) -> i64 {
        years_since(self.release_year())
    }

    fn key(&self) -> BookKey {
        BookKey::new(self.title(), self.author(), self.release_year(), self.edition())
    }

    /// True when both describe the same printing, ignoring ids.
    fn same_edition(&self, other: &dyn Publication) -> bool {
        self.same_work(other) && self.edition() == other.edition()
    }

    /// True when both are printings of one work: same title, author and release year.
    fn same_work(&self, other: &dyn Publication) -> bool {
        self.title() == other.title()
            && self.author() == other.author()
            && self.release_year() == other.release_year()
    }
}
