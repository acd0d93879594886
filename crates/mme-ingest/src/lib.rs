//! Inputs for a tagging run.
//!
//! This crate loads everything the engine reads before and during a run:
//!
//! - **Mappings**: the per-standard column-to-tag JSON file
//! - **Input table**: CSV rows bound to their header
//! - **File resolution**: depth-bounded search for each row's image
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mme_ingest::{FileResolver, load_mapping_set, load_rows, validate_root};
//!
//! let mappings = load_mapping_set(Path::new("data/maps.json"))?;
//! let rows = load_rows(Path::new("photos.csv"))?;
//! validate_root(Path::new("/archive/photos"))?;
//! let resolver = FileResolver::new("/archive/photos", 3);
//! let resolved = resolver.resolve("IMG_0001.jpg");
//! ```

mod error;
mod mapping;
mod resolver;
mod table;

// === Error Types ===
pub use error::{ConfigError, Result};

// === Mapping Configuration ===
pub use mapping::{load_mapping_set, parse_mapping_set};

// === Input Table ===
pub use table::load_rows;

// === File Resolution ===
pub use resolver::{FileResolver, ResolvedFile, resolve_file, validate_root};
