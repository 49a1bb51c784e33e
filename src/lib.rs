//! course-scraper - Course catalog metadata extraction
//!
//! Fetches course catalog pages listed in a CSV table, extracts course
//! metadata from each page, and writes the combined records as a table.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;
pub mod input;

pub use catalog::models::{CourseRecord, Prerequisite, PLACEHOLDER};
pub use catalog::parser::Parser;
pub use config::Config;
