//! Runtime model definitions.
//!
//! Models describe the shape of oracle types: their path, display name,
//! declared fields, and the indexer properties accepted by property bags.
//! They are emitted by `entity_model!` and consulted at runtime by
//! diagnostics, set dispatch, and property validation.
pub mod entity;
pub mod field;

pub use entity::EntityModel;
pub use field::{EntityFieldKind, EntityFieldModel};
