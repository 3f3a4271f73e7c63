pub mod aggregate;
pub mod cinemeta;
pub mod source;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream error: {0}")]
    Upstream(String),
}
