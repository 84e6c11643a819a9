//! Symbols and the symbol catalog.
//!
//! A `Symbol` is a point of the projective plane as the player sees it: an
//! identifier plus display data. A `SymbolCatalog` is the caller-supplied
//! collection the generator draws from.

pub mod catalog;
pub mod symbol;

pub use catalog::SymbolCatalog;
pub use symbol::Symbol;
