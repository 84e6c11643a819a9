//! Plain-data exchange of card sets.
//!
//! The versioned JSON document is the only import/export format of record.
//! A compact binary snapshot is available on `CardSet` itself.

pub mod document;

pub use document::{
    export_json, import_json, ExportedCard, ExportedCardSet, ExportedSymbol, ImportedCardSet,
    EXPORT_VERSION,
};
