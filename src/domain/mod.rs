//! Domain layer types and invariants.

pub mod navigation;
pub mod site;
