//! CLI library components for the archival metadata tagger.

pub mod cli;
pub mod logging;
pub mod reporter;
pub mod summary;
