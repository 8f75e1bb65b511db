//! Metadata persistence

mod metadata;

pub use metadata::{JsonMetadataStore, MetadataStore};
