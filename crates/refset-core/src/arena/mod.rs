//! Indexed storage for oracle graphs.
//!
//! Entities are pushed into an `Arena` during straight-line construction and
//! referenced afterwards through `Link`s: typed, copyable indexes that carry
//! no ownership. Mutual and forward references are set in a wire-up pass once
//! every arena they point into exists.

mod link;


pub use link::Link;

use crate::{
    error::{GraphError, InternalError},
    traits::EntityKind,
    types::Key,
};
use derive_more::IntoIterator;
use std::{any::type_name, collections::BTreeSet};

///
/// Arena
///
/// Insertion-ordered backing sequence for one oracle type.
///

#[derive(Clone, Debug, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct Arena<T> {
    items: Vec<T>,
}

impl<T> Arena<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item and return the link that addresses it.
    pub fn push(&mut self, item: T) -> Link<T> {
        let link = Link::new(self.items.len());
        self.items.push(item);

        link
    }

    /// Return the link for `index`, failing when the index does not exist.
    pub fn link_at(&self, index: usize) -> Result<Link<T>, InternalError> {
        if index < self.items.len() {
            Ok(Link::new(index))
        } else {
            Err(self.dangling(index))
        }
    }

    #[must_use]
    pub fn get(&self, link: Link<T>) -> Option<&T> {
        self.items.get(link.index())
    }

    /// Follow a link, failing loudly when it does not resolve.
    pub fn resolve(&self, link: Link<T>) -> Result<&T, InternalError> {
        self.get(link).ok_or_else(|| self.dangling(link.index()))
    }

    /// Resolve a to-many relationship, preserving link order.
    pub fn resolve_many(&self, links: &[Link<T>]) -> Result<Vec<&T>, InternalError> {
        links.iter().map(|link| self.resolve(*link)).collect()
    }

    /// Follow an optional relationship, failing when it was never wired.
    pub fn follow(
        &self,
        link: Option<Link<T>>,
        owner: &'static str,
        relation: &'static str,
    ) -> Result<&T, InternalError> {
        let link = link.ok_or(GraphError::UnwiredLink {
            entity: owner,
            relation,
        })?;

        self.resolve(link)
    }

    /// Mutable access for wire-up passes.
    pub fn get_mut(&mut self, link: Link<T>) -> Result<&mut T, InternalError> {
        let len = self.items.len();

        self.items
            .get_mut(link.index())
            .ok_or_else(|| dangling_error::<T>(link.index(), len))
    }

    /// Iterate items together with their links.
    pub fn links(&self) -> impl Iterator<Item = (Link<T>, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (Link::new(index), item))
    }

    /// Iterate items mutably together with their links (wire-up only).
    pub fn links_mut(&mut self) -> impl Iterator<Item = (Link<T>, &mut T)> {
        self.items
            .iter_mut()
            .enumerate()
            .map(|(index, item)| (Link::new(index), item))
    }

    /// Find the link of the first item matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<Link<T>> {
        self.items
            .iter()
            .position(|item| predicate(item))
            .map(Link::new)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ensure every key produced by `key_of` is unique within the arena.
    pub fn ensure_unique_by(
        &self,
        entity: &'static str,
        key_of: impl FnMut(&T) -> Key,
    ) -> Result<(), InternalError> {
        ensure_unique(entity, self.items.iter().map(key_of))
    }

    fn dangling(&self, index: usize) -> InternalError {
        dangling_error::<T>(index, self.items.len())
    }
}

impl<T: EntityKind> Arena<T> {
    /// Ensure entity keys are unique within the arena.
    pub fn ensure_unique_keys(&self) -> Result<(), InternalError> {
        self.ensure_unique_by(T::PATH, T::key)
    }

    /// Find an entity by key.
    #[must_use]
    pub fn by_key(&self, key: &Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == *key)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Arena<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Arena<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Arena<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Ensure a key sequence holds no duplicates.
/// Used for entities stored inside their owners rather than in an arena.
pub fn ensure_unique(
    entity: &'static str,
    keys: impl IntoIterator<Item = Key>,
) -> Result<(), InternalError> {
    let mut seen = BTreeSet::new();

    for key in keys {
        if seen.contains(&key) {
            return Err(GraphError::DuplicateKey {
                entity,
                key: key.to_string(),
            }
            .into());
        }
        seen.insert(key);
    }

    Ok(())
}

fn dangling_error<T>(index: usize, len: usize) -> InternalError {
    GraphError::DanglingLink {
        entity: type_name::<T>(),
        index,
        len,
    }
    .into()
}
