use serde::Serialize;

use crate::types::ContentType;

/// Earliest year the upstream year catalogs go back to.
pub const FIRST_CATALOG_YEAR: i32 = 2000;

/// Addon descriptor served at `/manifest.json`. Built once at startup and
/// shared read-only for the life of the process.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub types: Vec<ContentType>,
    pub catalogs: Vec<ManifestCatalog>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestCatalog {
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub id: String,
    pub extra: Vec<ExtraProp>,
}

/// Declaration of one `extra` parameter a catalog accepts.
#[derive(Debug, Clone, Serialize)]
pub struct ExtraProp {
    pub name: String,
    pub options: Vec<String>,
    #[serde(rename = "isRequired")]
    pub is_required: bool,
}

impl Manifest {
    /// Build the descriptor for the given current calendar year. The year
    /// selector rides on the standard `genre` extra.
    pub fn new(current_year: i32) -> Self {
        let years = year_options(current_year);
        let catalogs = [ContentType::Movie, ContentType::Series]
            .into_iter()
            .map(|kind| ManifestCatalog {
                kind,
                id: "best-by-year".to_string(),
                extra: vec![ExtraProp {
                    name: "genre".to_string(),
                    options: years.clone(),
                    is_required: true,
                }],
            })
            .collect();

        Self {
            id: "annum.bestbyyear".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: "Annum Best By Year".to_string(),
            description: "Movies and series of a chosen year, ranked by IMDb rating".to_string(),
            types: vec![ContentType::Movie, ContentType::Series],
            catalogs,
            resources: vec!["catalog".to_string()],
        }
    }
}

/// Selectable years, newest first, from next year back to
/// [`FIRST_CATALOG_YEAR`].
pub fn year_options(current_year: i32) -> Vec<String> {
    (FIRST_CATALOG_YEAR..=current_year + 1)
        .rev()
        .map(|y| y.to_string())
        .collect()
}
