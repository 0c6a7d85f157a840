//! Sort direction and sort expression parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PageRequestError;

/// Ordering applied to the sort field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smallest values first.
    #[default]
    Asc,
    /// Largest values first.
    Desc,
}

impl Direction {
    /// Map an `ascending` flag onto a direction.
    ///
    /// ```
    /// use pagination::Direction;
    ///
    /// assert_eq!(Direction::from_ascending(false), Direction::Desc);
    /// ```
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Asc } else { Self::Desc }
    }

    /// Whether this direction sorts smallest values first.
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }

    /// Lower-case wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PageRequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if trimmed.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(PageRequestError::InvalidDirection {
                value: value.to_owned(),
            })
        }
    }
}

/// A sort field name paired with a direction.
///
/// The field is kept as text; callers resolve it against the attributes a
/// given entity allows sorting by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sort {
    field: String,
    direction: Direction,
}

impl Sort {
    /// Build a sort order, rejecting blank field names.
    ///
    /// # Errors
    /// Returns [`PageRequestError::EmptySortField`] when `field` is blank.
    pub fn new(field: impl Into<String>, direction: Direction) -> Result<Self, PageRequestError> {
        let raw: String = field.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PageRequestError::EmptySortField);
        }
        Ok(Self {
            field: trimmed.to_owned(),
            direction,
        })
    }

    /// Parse a `field[,direction]` expression such as `city,desc`.
    ///
    /// The direction defaults to ascending when omitted.
    ///
    /// # Errors
    /// Returns [`PageRequestError::EmptySortField`] for a blank field and
    /// [`PageRequestError::InvalidDirection`] for an unknown direction.
    pub fn parse(expression: &str) -> Result<Self, PageRequestError> {
        match expression.split_once(',') {
            Some((field, direction)) => Self::new(field, direction.parse()?),
            None => Self::new(expression, Direction::Asc),
        }
    }

    /// Field name as supplied by the caller, trimmed.
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Requested direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    //! Parsing coverage for sort expressions.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("asc", Direction::Asc)]
    #[case("DESC", Direction::Desc)]
    #[case(" Desc ", Direction::Desc)]
    fn direction_parses_case_insensitively(#[case] raw: &str, #[case] expected: Direction) {
        assert_eq!(raw.parse::<Direction>(), Ok(expected));
    }

    #[rstest]
    fn direction_rejects_unknown_text() {
        let err = "sideways".parse::<Direction>().expect_err("unknown direction");
        assert_eq!(
            err,
            PageRequestError::InvalidDirection {
                value: "sideways".to_owned()
            }
        );
    }

    #[rstest]
    #[case(true, Direction::Asc)]
    #[case(false, Direction::Desc)]
    fn ascending_flag_maps_to_direction(#[case] ascending: bool, #[case] expected: Direction) {
        assert_eq!(Direction::from_ascending(ascending), expected);
        assert_eq!(expected.is_ascending(), ascending);
    }

    #[rstest]
    #[case("city", "city", Direction::Asc)]
    #[case("city,desc", "city", Direction::Desc)]
    #[case(" rentAmount , asc", "rentAmount", Direction::Asc)]
    fn sort_parses_field_and_direction(
        #[case] expression: &str,
        #[case] field: &str,
        #[case] direction: Direction,
    ) {
        let sort = Sort::parse(expression).expect("valid sort expression");
        assert_eq!(sort.field(), field);
        assert_eq!(sort.direction(), direction);
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case(",desc")]
    fn sort_rejects_blank_fields(#[case] expression: &str) {
        assert_eq!(
            Sort::parse(expression),
            Err(PageRequestError::EmptySortField)
        );
    }
}
