//! ## Crate layout
//! - `core`: arenas, set dispatch, property bags, comparisons and metrics.
//! - `fixtures`: the owned, aruba, primitive-collection and json data sources.
//!
//! The `prelude` module brings the set accessor and the entity traits into
//! scope for test code that only consumes oracle data.

pub use refset_core as core;
pub use refset_fixtures as fixtures;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::error::InternalError as Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        compare::{CompareOptions, assert_collection, assert_entities, assert_equivalent},
        set::{EntitySet, SetSource as _},
        traits::{EntityKind as _, Modeled as _, Path as _},
        types::Key,
        value::Value,
    };
    pub use crate::fixtures::{
        aruba::ArubaData, json::JsonNullData, owned::OwnedQueryData,
        primitive::PrimitiveArrayData,
    };
}
