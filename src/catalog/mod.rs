//! Course catalog modules for fetching, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{CatalogClient, CatalogFetch, FetchError};
pub use models::{CourseRecord, Prerequisite, PLACEHOLDER};
pub use parser::Parser;
