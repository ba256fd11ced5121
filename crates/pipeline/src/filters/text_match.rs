//! Case-insensitive substring filter over a text field.

use crate::traits::Filter;
use data_loader::Movie;
use std::fmt;

/// Text attributes a search term can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Genre,
    Country,
}

impl TextField {
    /// Borrow this field's value from a movie.
    pub fn value<'a>(&self, movie: &'a Movie) -> &'a str {
        match self {
            TextField::Genre => &movie.genre,
            TextField::Country => &movie.country,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Genre => "genre",
            TextField::Country => "country",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keeps movies whose `field` contains the search term.
///
/// ## Algorithm
/// Both sides are lowercased; the match is a plain substring test, so an
/// empty term keeps everything.
pub struct FieldMatchFilter {
    field: TextField,
    term: String,
    name: String,
}

impl FieldMatchFilter {
    /// Create a new FieldMatchFilter.
    ///
    /// # Arguments
    /// * `field` - Which text attribute to inspect
    /// * `term` - Search term, matched case-insensitively
    pub fn new(field: TextField, term: &str) -> Self {
        Self {
            field,
            term: term.to_lowercase(),
            name: format!("FieldMatchFilter({field})"),
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.field.value(movie).to_lowercase().contains(&self.term)
    }
}

impl Filter for FieldMatchFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie))
            .collect()
    }
}

/// Filter `movies` down to those whose `field` contains `term`, ignoring case.
pub fn filter_by_field<'a>(movies: Vec<&'a Movie>, field: TextField, term: &str) -> Vec<&'a Movie> {
    FieldMatchFilter::new(field, term).apply(movies)
}
