//! Remote directory models, URL codec, and listing/search service contracts.

pub mod category;
pub mod path;
pub mod service;
pub mod types;
