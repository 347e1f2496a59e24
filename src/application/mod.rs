pub mod distinct;
pub mod ingest;
pub mod mapping;
