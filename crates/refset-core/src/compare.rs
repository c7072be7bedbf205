//! Collection comparison helpers.
//!
//! Align an expected oracle sequence with the sequence a provider returned
//! and report the first divergence as a structured `CompareError`.

use crate::{
    error::{CompareError, InternalError},
    obs::sink::{self, MetricsEvent},
    traits::EntityKind,
};
use std::{any::type_name, cmp::Ordering, fmt};

type Sorter<'f, T> = Box<dyn Fn(&T, &T) -> Ordering + 'f>;
type Asserter<'f, T> = Box<dyn Fn(&T, &T) -> bool + 'f>;

///
/// CompareOptions
///
/// `ordered` compares positionally. Unordered comparisons sort both sides
/// first; without an explicit sorter elements are ordered by their `Debug`
/// rendering. The element asserter defaults to `PartialEq`.
///

pub struct CompareOptions<'f, T> {
    ordered: bool,
    sorter: Option<Sorter<'f, T>>,
    asserter: Option<Asserter<'f, T>>,
}

impl<'f, T> CompareOptions<'f, T> {
    #[must_use]
    pub const fn ordered() -> Self {
        Self {
            ordered: true,
            sorter: None,
            asserter: None,
        }
    }

    #[must_use]
    pub const fn unordered() -> Self {
        Self {
            ordered: false,
            sorter: None,
            asserter: None,
        }
    }

    #[must_use]
    pub fn sorted_by(mut self, sorter: impl Fn(&T, &T) -> Ordering + 'f) -> Self {
        self.sorter = Some(Box::new(sorter));
        self
    }

    #[must_use]
    pub fn sorted_by_key<K: Ord>(self, key_of: impl Fn(&T) -> K + 'f) -> Self {
        self.sorted_by(move |a, b| key_of(a).cmp(&key_of(b)))
    }

    #[must_use]
    pub fn asserted_by(mut self, asserter: impl Fn(&T, &T) -> bool + 'f) -> Self {
        self.asserter = Some(Box::new(asserter));
        self
    }

    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.ordered
    }

    #[must_use]
    pub const fn has_sorter(&self) -> bool {
        self.sorter.is_some()
    }
}

impl<T> Default for CompareOptions<'_, T> {
    fn default() -> Self {
        Self::unordered()
    }
}

impl<T> fmt::Debug for CompareOptions<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareOptions")
            .field("ordered", &self.ordered)
            .field("sorter", &self.sorter.is_some())
            .field("asserter", &self.asserter.is_some())
            .finish()
    }
}

/// Compare two optional sequences element by element.
///
/// `None` models a null collection and only matches another `None`.
pub fn assert_collection<'e, 'a, T, I, J>(
    expected: Option<I>,
    actual: Option<J>,
    options: &CompareOptions<'_, T>,
) -> Result<(), InternalError>
where
    T: fmt::Debug + PartialEq + 'e + 'a,
    I: IntoIterator<Item = &'e T>,
    J: IntoIterator<Item = &'a T>,
{
    compare(type_name::<T>(), expected, actual, options)
}

/// Compare entity sequences; unordered comparisons default to key order.
pub fn assert_entities<'e, 'a, E, I, J>(
    expected: Option<I>,
    actual: Option<J>,
    options: CompareOptions<'_, E>,
) -> Result<(), InternalError>
where
    E: EntityKind + fmt::Debug + PartialEq,
    I: IntoIterator<Item = &'e E>,
    J: IntoIterator<Item = &'a E>,
{
    let options = if options.ordered || options.sorter.is_some() {
        options
    } else {
        options.sorted_by_key(E::key)
    };

    compare(E::PATH, expected, actual, &options)
}

/// Unordered, key-sorted, `PartialEq` comparison of two entity sequences.
pub fn assert_equivalent<'e, 'a, E, I, J>(expected: I, actual: J) -> Result<(), InternalError>
where
    E: EntityKind + fmt::Debug + PartialEq,
    I: IntoIterator<Item = &'e E>,
    J: IntoIterator<Item = &'a E>,
{
    assert_entities(Some(expected), Some(actual), CompareOptions::unordered())
}

fn compare<'e, 'a, T, I, J>(
    entity: &'static str,
    expected: Option<I>,
    actual: Option<J>,
    options: &CompareOptions<'_, T>,
) -> Result<(), InternalError>
where
    T: fmt::Debug + PartialEq + 'e + 'a,
    I: IntoIterator<Item = &'e T>,
    J: IntoIterator<Item = &'a T>,
{
    compare_inner(entity, expected, actual, options).map_err(|err| {
        sink::record(MetricsEvent::CompareFailed {
            entity_path: entity,
        });

        err.into()
    })
}

fn compare_inner<'e, 'a, T, I, J>(
    entity: &'static str,
    expected: Option<I>,
    actual: Option<J>,
    options: &CompareOptions<'_, T>,
) -> Result<(), CompareError>
where
    T: fmt::Debug + PartialEq + 'e + 'a,
    I: IntoIterator<Item = &'e T>,
    J: IntoIterator<Item = &'a T>,
{
    if options.ordered && options.sorter.is_some() {
        return Err(CompareError::SorterWithOrder { entity });
    }

    let (mut expected, mut actual) = match (expected, actual) {
        (None, None) => return Ok(()),
        (Some(expected), Some(actual)) => (
            expected.into_iter().collect::<Vec<&T>>(),
            actual.into_iter().collect::<Vec<&T>>(),
        ),
        (expected, actual) => {
            return Err(CompareError::NullabilityMismatch {
                entity,
                expected: nullability(expected.is_some()),
                actual: nullability(actual.is_some()),
            });
        }
    };

    if !options.ordered {
        sort(&mut expected, options);
        sort(&mut actual, options);
    }

    if expected.len() != actual.len() {
        return Err(CompareError::CountMismatch {
            entity,
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    for (index, (e, a)) in expected.iter().zip(&actual).enumerate() {
        let equal = match &options.asserter {
            Some(asserter) => asserter(e, a),
            None => e == a,
        };

        if !equal {
            return Err(CompareError::ElementMismatch {
                entity,
                index,
                expected: format!("{e:?}"),
                actual: format!("{a:?}"),
            });
        }
    }

    Ok(())
}

fn sort<T: fmt::Debug>(items: &mut [&T], options: &CompareOptions<'_, T>) {
    match &options.sorter {
        Some(sorter) => items.sort_by(|a, b| sorter(a, b)),
        None => items.sort_by_cached_key(|item| format!("{item:?}")),
    }
}

const fn nullability(present: bool) -> &'static str {
    if present { "non-null" } else { "null" }
}
