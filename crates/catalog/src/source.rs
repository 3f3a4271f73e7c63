use annum_core::types::ContentType;
use serde_json::Value;

use crate::CatalogError;

/// A paginated feed of title records for one content type and year.
///
/// Pages are addressed by a `skip` offset. An empty page means the feed is
/// exhausted; there is no total count or cursor.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the page of title records starting at `skip`.
    async fn fetch_page(
        &self,
        content_type: ContentType,
        year: &str,
        skip: u32,
    ) -> Result<Vec<Value>, CatalogError>;
}
