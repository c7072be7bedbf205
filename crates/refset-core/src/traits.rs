use crate::{model::EntityModel, types::Key};

// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================
//
// These traits define *where* a type lives in an oracle schema,
// not what data it contains.
//

///
/// Path
/// Fully-qualified schema path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// Modeled
/// Types that carry a runtime model (entities and owned value objects).
///

pub trait Modeled: Path {
    const MODEL: &'static EntityModel;
}

// ============================================================================
// ENTITY IDENTITY
// ============================================================================

///
/// EntityKind
///
/// Identity-bearing root entity that can be served by a set accessor.
///
/// ## Semantics
/// - `key()` is unique within the entity's backing arena
/// - owned value objects never implement this trait
/// - hierarchy members (`Branch`, `LeafA`) implement it with the key of
///   their embedded base
///

pub trait EntityKind: Modeled + Send + Sync + 'static {
    fn key(&self) -> Key;
}
