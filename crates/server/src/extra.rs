use regex::Regex;
use std::sync::LazyLock;

/// Arguments carried by the extra path of a catalog request, e.g.
/// `genre=2024&skip=100.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraArgs {
    /// Four-digit year from the `genre` selector.
    pub year: Option<String>,
    /// Legacy pagination offset. Parsed for logging, never forwarded.
    pub skip: Option<u32>,
}

// Trailing extension, usually `.json`.
static RE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\w+$").unwrap());

// The genre selector carries the year. Must be exactly four digits.
static RE_GENRE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"genre=(\d{4})(?:&|$)").unwrap());

static RE_SKIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"skip=(\d+)").unwrap());

/// Parse the extra path of a catalog request. The extension is stripped
/// first and only the first segment is scanned; anything that does not
/// match is left as `None`.
pub fn parse_extra(extra: &str) -> ExtraArgs {
    let stripped = RE_EXTENSION.replace(extra, "");
    let first = stripped.split('/').next().unwrap_or("");

    ExtraArgs {
        year: RE_GENRE_YEAR.captures(first).map(|c| c[1].to_string()),
        skip: RE_SKIP.captures(first).and_then(|c| c[1].parse().ok()),
    }
}
