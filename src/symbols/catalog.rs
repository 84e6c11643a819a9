//! Symbol catalog: uppercase key → `Symbol`.
//!
//! Keys are case-insensitive (stored uppercase). The catalog remembers the
//! order symbols were added in, which fixes the symbol index each generator
//! construction refers to; the order carries no other meaning.

use rustc_hash::FxHashMap;

use super::symbol::Symbol;

/// Collection of symbols available to the generator.
///
/// ## Example
///
/// ```
/// use dobble_engine::symbols::{Symbol, SymbolCatalog};
///
/// let mut catalog = SymbolCatalog::new();
/// catalog.insert("circle", Symbol::new("circle", "Circle", "#FF6B6B"));
///
/// assert_eq!(catalog.get("CIRCLE").unwrap().name, "Circle");
/// assert_eq!(catalog.get("circle").unwrap().name, "Circle");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolCatalog {
    entries: Vec<(String, Symbol)>,
    index: FxHashMap<String, usize>,
}

impl SymbolCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog keyed by each symbol's uppercase id.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut catalog = Self::new();
        for symbol in symbols {
            catalog.insert(symbol.key(), symbol);
        }
        catalog
    }

    /// Insert a symbol under `key`, replacing any symbol already stored there.
    ///
    /// Returns the replaced symbol, if any.
    pub fn insert(&mut self, key: impl AsRef<str>, symbol: Symbol) -> Option<Symbol> {
        let key = key.as_ref().to_uppercase();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, symbol)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, symbol));
                None
            }
        }
    }

    /// Look up a symbol by key (case-insensitive).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Symbol> {
        self.index
            .get(&key.to_uppercase())
            .map(|&slot| &self.entries[slot].1)
    }

    /// Check if a key is present (case-insensitive).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&key.to_uppercase())
    }

    /// Get the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Symbol at construction index `index`.
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> Option<&Symbol> {
        self.entries.get(index).map(|(_, symbol)| symbol)
    }

    /// Iterate over all symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.iter().map(|(_, symbol)| symbol)
    }

    /// Iterate over `(key, symbol)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.entries.iter().map(|(key, symbol)| (key.as_str(), symbol))
    }
}

impl FromIterator<Symbol> for SymbolCatalog {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(id: &str) -> Symbol {
        Symbol::new(id, id, "#000000")
    }

    #[test]
    fn test_from_symbols_keys_by_uppercase_id() {
        let catalog = SymbolCatalog::from_symbols(["circle", "star"].map(shape));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains_key("CIRCLE"));
        assert!(catalog.contains_key("Star"));
        assert!(!catalog.contains_key("heart"));
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut catalog = SymbolCatalog::new();
        assert!(catalog.insert("a", shape("a")).is_none());

        let replaced = catalog.insert("A", Symbol::new("a", "Alpha", "#fff"));
        assert_eq!(replaced.unwrap().name, "a");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().name, "Alpha");
    }

    #[test]
    fn test_insertion_order_is_construction_order() {
        let catalog: SymbolCatalog = ["c", "a", "b"].map(shape).into_iter().collect();

        let ids: Vec<_> = catalog.symbols().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(catalog.symbol_at(1).unwrap().id, "a");
        assert!(catalog.symbol_at(3).is_none());

        let keys: Vec<_> = catalog.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["C", "A", "B"]);
    }
}
