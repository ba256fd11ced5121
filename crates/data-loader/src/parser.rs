//! Parser for the movie dataset JSON document.
//!
//! The document is a single top-level array of objects:
//! `[{ "film_title": .., "year": .., "genre": .., "country": .., "avg_vote": .. }]`

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a JSON document into movies, keeping document order.
///
/// `source_name` only labels the error (a file path or "bundled").
pub fn parse_movies(content: &str, source_name: &str) -> Result<Vec<Movie>> {
    serde_json::from_str(content).map_err(|e| DataLoadError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Read and parse a dataset file from disk.
pub fn parse_movies_file(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_movies(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movies_keeps_order() {
        let json = r#"[
            {"film_title": "B", "year": 2001, "genre": "Drama", "country": "UK", "avg_vote": 8.1},
            {"film_title": "A", "year": 1999, "genre": "Action", "country": "USA", "avg_vote": 7.5}
        ]"#;

        let movies = parse_movies(json, "inline").unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].film_title, "B");
        assert_eq!(movies[1].film_title, "A");
        assert_eq!(movies[1].avg_vote, 7.5);
    }

    #[test]
    fn test_parse_integer_vote() {
        let json = r#"[{"film_title": "A", "year": 1999, "genre": "Action", "country": "USA", "avg_vote": 7}]"#;
        let movies = parse_movies(json, "inline").unwrap();
        assert_eq!(movies[0].avg_vote, 7.0);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = parse_movies("{ not an array", "broken.json").unwrap_err();
        match err {
            DataLoadError::ParseError { source_name, .. } => assert_eq!(source_name, "broken.json"),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let json = r#"[{"film_title": "A", "year": 1999, "genre": "Action", "avg_vote": 7.0}]"#;
        assert!(matches!(
            parse_movies(json, "inline"),
            Err(DataLoadError::ParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_movies_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
