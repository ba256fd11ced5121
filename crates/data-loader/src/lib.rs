//! # Data Loader Crate
//!
//! This crate handles loading the static movie dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieDataset)
//! - **parser**: Parse the JSON document into Rust structs
//! - **loader**: Bundled / on-disk loading and integrity checks
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieDataset;
//!
//! let dataset = MovieDataset::bundled()?;
//! for movie in &dataset {
//!     println!("{} ({})", movie.film_title, movie.year);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use loader::MAX_VOTE;
pub use types::{Movie, MovieDataset};
