pub mod manifest;
pub mod types;
