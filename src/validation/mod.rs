//! Card set validation.
//!
//! Checks a set (generated or imported) against the projective-plane rules:
//!
//! - `validate`: every pair of distinct cards shares exactly one symbol
//! - `check_frequencies`: every symbol appears on `order + 1` cards
//!
//! Both return structured reports. A failing report is a normal outcome, not
//! an error; `ValidationReport::into_result` converts it when a caller wants
//! to treat it as fatal.

pub mod frequency;
pub mod validator;

pub use frequency::{check_frequencies, FrequencyDeviation, FrequencyReport};
pub use validator::{validate, PairDeviation, ValidationReport, ValidationStats};
