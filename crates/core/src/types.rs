use serde::{Deserialize, Serialize};

/// Content type addressed by catalog paths and declared in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Movie,
    Series,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }

    /// Parse a path segment like `movie`. Exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(Self::Movie),
            "series" => Some(Self::Series),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_types() {
        assert_eq!(ContentType::parse("movie"), Some(ContentType::Movie));
        assert_eq!(ContentType::parse("series"), Some(ContentType::Series));
        assert_eq!(ContentType::parse("music"), None);
        assert_eq!(ContentType::parse("Movie"), None);
    }

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_value(ContentType::Movie).unwrap(),
            serde_json::json!("movie")
        );
        assert_eq!(ContentType::Series.to_string(), "series");
    }
}
