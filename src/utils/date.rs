use chrono::{Datelike, Utc};

pub fn current_year() -> i32 {
    Utc::now().year()
}

// years elapsed between a calendar year and the current one, negative for future years
pub fn years_since(year: i32) -> i64 {
    i64::from(current_year()) - i64::from(year)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Utc};
    use crate::utils::date::{current_year, years_since};

    #[test]
    fn test_should_return_current_year() {
        assert_eq!(Utc::now().year(), current_year());
    }

    #[test]
    fn test_should_compute_years_since() {
        assert_eq!(0, years_since(current_year()));
        assert_eq!(10, years_since(current_year() - 10));
        assert_eq!(-1, years_since(current_year() + 1));
    }

    #[test]
    fn test_should_not_overflow_for_extreme_years() {
        let now = i64::from(current_year());
        assert_eq!(now - i64::from(i32::MIN), years_since(i32::MIN));
        assert_eq!(now - i64::from(i32::MAX), years_since(i32::MAX));
    }
}
