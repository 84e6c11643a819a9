//! Symbol definitions - immutable display data.

use serde::{Deserialize, Serialize};

/// A symbol that can appear on cards.
///
/// `id` is unique within a catalog and is the only field that matters for
/// validation; the rest is display data.
///
/// ## Example
///
/// ```
/// use dobble_engine::symbols::Symbol;
///
/// let heart = Symbol::new("heart", "Heart", "#E74C3C").with_image("heart.png");
///
/// assert_eq!(heart.id, "heart");
/// assert_eq!(heart.image_url.as_deref(), Some("heart.png"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub id: String,
    pub name: String,
    pub color: String,
    pub image_url: Option<String>,
}

impl Symbol {
    /// Create a symbol without an image.
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            image_url: None,
        }
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Catalog key for this symbol: the id in uppercase.
    #[must_use]
    pub fn key(&self) -> String {
        self.id.to_uppercase()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_uppercase_id() {
        let symbol = Symbol::new("sun_flower", "Sunflower", "#FFD700");
        assert_eq!(symbol.key(), "SUN_FLOWER");
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let symbol = Symbol::new("a", "A", "#000").with_image("a.png");
        let json = serde_json::to_string(&symbol).unwrap();
        assert!(json.contains("\"imageUrl\":\"a.png\""));

        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, symbol);
    }
}
