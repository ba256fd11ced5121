//! Dataset loading and validation.
//!
//! Two sources are supported:
//! - the bundled document compiled into the binary
//! - a JSON file on disk (for swapping in a different catalogue)
//!
//! Both paths run [`MovieDataset::validate`] before handing the dataset out.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::MovieDataset;
use std::path::Path;
use tracing::info;

/// The catalogue shipped with the service.
const BUNDLED_MOVIES: &str = include_str!("../data/movies-data-small.json");

/// Highest average vote a record may carry.
pub const MAX_VOTE: f64 = 10.0;

impl MovieDataset {
    /// Load the dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        let movies = parser::parse_movies(BUNDLED_MOVIES, "bundled dataset")?;
        let dataset = Self::new(movies);
        dataset.validate()?;

        info!("Loaded {} movies from bundled dataset", dataset.len());
        Ok(dataset)
    }

    /// Load a dataset from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);

        let movies = parser::parse_movies_file(path)?;
        let dataset = Self::new(movies);
        dataset.validate()?;

        info!("Loaded {} movies from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    /// Load from `path` when given, otherwise fall back to the bundled dataset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::bundled(),
        }
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - The dataset is not empty
    /// - Genre and country are non-empty text
    /// - Average votes are finite and within 0.0 - 10.0
    pub fn validate(&self) -> Result<()> {
        if self.movies.is_empty() {
            return Err(DataLoadError::ValidationError(
                "dataset contains no movies".to_string(),
            ));
        }

        for movie in &self.movies {
            if movie.genre.trim().is_empty() {
                return Err(DataLoadError::InvalidValue {
                    field: format!("genre of {:?}", movie.film_title),
                    value: movie.genre.clone(),
                });
            }
            if movie.country.trim().is_empty() {
                return Err(DataLoadError::InvalidValue {
                    field: format!("country of {:?}", movie.film_title),
                    value: movie.country.clone(),
                });
            }
            if !movie.avg_vote.is_finite() || !(0.0..=MAX_VOTE).contains(&movie.avg_vote) {
                return Err(DataLoadError::InvalidValue {
                    field: format!("avg_vote of {:?}", movie.film_title),
                    value: movie.avg_vote.to_string(),
                });
            }
        }
        Ok(())
    }
}
