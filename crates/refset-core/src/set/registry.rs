use crate::{
    error::{InternalError, SetError},
    set::{Projection, SetIter},
    traits::{EntityKind, Path},
};
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    marker::PhantomData,
};

///
/// SetEntry
///
/// One registered projection, type-erased behind `Any`.
///

struct SetEntry {
    entity_path: &'static str,
    projection: Box<dyn Any + Send + Sync>,
}

///
/// SetRegistry
///
/// Dispatch table mapping an entity type to the projection that serves its
/// set from a data source `S`. Built once when the source is constructed.
///

pub struct SetRegistry<S> {
    entries: HashMap<TypeId, SetEntry>,
    _marker: PhantomData<fn(&S)>,
}

impl<S> SetRegistry<S>
where
    S: Path + 'static,
{
    /// Create an empty set registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            _marker: PhantomData,
        }
    }

    /// Register the projection serving `Set<E>`.
    ///
    /// The model of `E` is validated first; an inconsistent model is a
    /// graph invariant violation.
    pub fn register<E: EntityKind>(
        &mut self,
        projection: Projection<S, E>,
    ) -> Result<(), InternalError> {
        E::MODEL.validate()?;

        let type_id = TypeId::of::<E>();
        if self.entries.contains_key(&type_id) {
            return Err(SetError::AlreadyRegistered {
                data_source: S::PATH,
                entity: E::PATH,
            }
            .into());
        }

        self.entries.insert(
            type_id,
            SetEntry {
                entity_path: E::PATH,
                projection: Box::new(projection),
            },
        );

        Ok(())
    }

    /// Builder form of [`Self::register`].
    pub fn with<E: EntityKind>(mut self, projection: Projection<S, E>) -> Result<Self, InternalError> {
        self.register(projection)?;

        Ok(self)
    }

    /// Run the projection registered for `E` against `source`.
    pub fn project<'a, E: EntityKind>(&self, source: &'a S) -> Result<SetIter<'a, E>, InternalError> {
        let entry = self
            .entries
            .get(&TypeId::of::<E>())
            .ok_or_else(|| InternalError::unsupported_entity_type(S::PATH, E::PATH))?;

        let projection = entry
            .projection
            .downcast_ref::<Projection<S, E>>()
            .ok_or_else(|| {
                InternalError::set_invariant(format!(
                    "projection registered for '{}' on '{}' has the wrong shape",
                    entry.entity_path,
                    S::PATH
                ))
            })?;

        Ok(projection(source))
    }

    #[must_use]
    pub fn contains<E: EntityKind>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<E>())
    }

    /// Registered entity paths, sorted.
    #[must_use]
    pub fn entity_paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.entries.values().map(|e| e.entity_path).collect();
        paths.sort_unstable();

        paths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> Default for SetRegistry<S>
where
    S: Path + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for SetRegistry<S>
where
    S: Path + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetRegistry")
            .field("source", &S::PATH)
            .field("entities", &self.entity_paths())
            .finish()
    }
}
