//! Cards, card sets and their construction.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier of a card within a set (`1..=card_count`)
//! - `Card`: One line of the plane, shown as an ordered list of symbols
//! - `CardSet`: Every card produced for one catalog
//! - `CardSetGenerator`: Builds a `CardSet` from a `SymbolCatalog`
//!
//! Each supported order has its own construction, registered in `patterns`.

pub mod card;
pub mod generator;
pub mod patterns;
pub mod set;

pub use card::{Card, CardId};
pub use generator::{generate, CardSetGenerator, GeneratorConfig};
pub use patterns::{construction_for, Construction, Pattern};
pub use set::CardSet;
