//! Typed set accessor.
//!
//! A data source answers `set::<E>()` through its `SetRegistry`. Requests
//! for a type the source does not hold fail with an `Unsupported` error
//! rather than yielding an empty sequence.

mod registry;

#[cfg(test)]
mod tests;

pub use registry::SetRegistry;

use crate::{
    arena::Arena,
    error::InternalError,
    obs::sink::{self, MetricsEvent},
    traits::{EntityKind, Path},
    types::Key,
};
use std::fmt;

/// Boxed iterator produced by a projection.
pub type SetIter<'a, E> = Box<dyn Iterator<Item = &'a E> + 'a>;

/// Function serving `Set<E>` from a data source `S`.
pub type Projection<S, E> = for<'a> fn(&'a S) -> SetIter<'a, E>;

///
/// SetSource
///
/// An oracle data source: an immutable graph plus the registry that
/// dispatches typed set requests into it.
///

pub trait SetSource: Path + Sized + Send + Sync + 'static {
    fn registry(&self) -> &SetRegistry<Self>;

    /// Return the in-memory sequence for `E`.
    fn set<E: EntityKind>(&self) -> Result<EntitySet<'_, E>, InternalError> {
        match self.registry().project::<E>(self) {
            Ok(iter) => {
                sink::record(MetricsEvent::SetRequested {
                    entity_path: E::PATH,
                });

                Ok(EntitySet::new(iter))
            }
            Err(err) => {
                if err.is_unsupported() {
                    sink::record(MetricsEvent::SetUnsupported {
                        entity_path: E::PATH,
                    });
                }

                Err(err)
            }
        }
    }

    /// Whether `set::<E>()` is served by this source.
    fn supports<E: EntityKind>(&self) -> bool {
        self.registry().contains::<E>()
    }
}

///
/// EntitySet
///
/// Lazy, read-only sequence returned by the set accessor.
/// Reports how many rows were drawn when dropped.
///

pub struct EntitySet<'a, E: EntityKind> {
    inner: SetIter<'a, E>,
    rows: u64,
}

impl<'a, E: EntityKind> EntitySet<'a, E> {
    #[must_use]
    pub(crate) fn new(inner: SetIter<'a, E>) -> Self {
        Self {
            inner,
            rows: 0,
        }
    }

    /// Drain the set into its keys, preserving order.
    #[must_use]
    pub fn keys(self) -> Vec<Key> {
        self.map(E::key).collect()
    }
}

impl<'a, E: EntityKind> Iterator for EntitySet<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.rows = self.rows.saturating_add(1);

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: EntityKind> Drop for EntitySet<'_, E> {
    fn drop(&mut self) {
        sink::record(MetricsEvent::SetServed {
            entity_path: E::PATH,
            rows: self.rows,
        });
    }
}

impl<E: EntityKind> fmt::Debug for EntitySet<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntitySet")
            .field("entity", &E::PATH)
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Projection helpers
// ---------------------------------------------------------------------------

/// Serve every element of an arena in stored order.
#[must_use]
pub fn all<E>(arena: &Arena<E>) -> SetIter<'_, E> {
    Box::new(arena.iter())
}

/// Serve the elements of a polymorphic arena that `pick` maps to `E`,
/// preserving stored order.
#[must_use]
pub fn narrow<'a, K, E>(arena: &'a Arena<K>, pick: fn(&'a K) -> Option<&'a E>) -> SetIter<'a, E> {
    Box::new(arena.iter().filter_map(pick))
}
