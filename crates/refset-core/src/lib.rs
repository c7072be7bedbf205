//! Core runtime for refset: entity traits, runtime models, typed arenas,
//! the set accessor, property bags, comparison helpers, and the ergonomics
//! exported via the `prelude`.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod arena;
pub mod compare;
pub mod error;
pub mod fixture;
pub mod model;
pub mod obs;
pub mod properties;
pub mod set;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary and the set accessor surface.
/// Errors and observability stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        arena::{Arena, Link},
        entity_model,
        model::{EntityFieldKind, EntityFieldModel, EntityModel},
        properties::PropertyBag,
        set::{EntitySet, SetSource},
        traits::{EntityKind, Modeled, Path},
        types::Key,
        value::Value,
    };
}
