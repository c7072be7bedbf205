use crate::{
    arena::{Arena, Link},
    error::InternalError,
    obs::sink::{self, MetricsEvent},
    traits::Path,
};
use std::sync::OnceLock;

///
/// ExpectedData
///
/// Process-wide cache for one oracle data source. The graph is built on
/// first use and shared read-only afterwards; a failed build is not cached.
///

#[derive(Debug)]
pub struct ExpectedData<S> {
    cell: OnceLock<S>,
}

impl<S> ExpectedData<S> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached source, building it on first use.
    pub fn get_or_build(
        &self,
        build: impl FnOnce() -> Result<S, InternalError>,
    ) -> Result<&S, InternalError> {
        if let Some(source) = self.cell.get() {
            return Ok(source);
        }

        // A racing builder may win; its value is kept and ours is dropped.
        let built = build()?;

        Ok(self.cell.get_or_init(|| built))
    }

    #[must_use]
    pub fn get(&self) -> Option<&S> {
        self.cell.get()
    }
}

impl<S> Default for ExpectedData<S> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// BuildStats
///
/// Counters gathered while one graph is constructed and wired.
/// Published as metrics events once the graph has been validated.
///

#[derive(Debug, Default)]
pub struct BuildStats {
    entities: u64,
    links: u64,
}

impl BuildStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entities: 0,
            links: 0,
        }
    }

    /// Count the root entities held by an arena.
    pub fn built<T>(&mut self, arena: &Arena<T>) {
        self.entities = self.entities.saturating_add(arena.len() as u64);
    }

    /// Resolve the link for `index`, counting it as one wired relation.
    pub fn link<T>(&mut self, arena: &Arena<T>, index: usize) -> Result<Link<T>, InternalError> {
        let link = arena.link_at(index)?;
        self.wired(1);

        Ok(link)
    }

    /// Count relations wired without going through [`Self::link`].
    pub const fn wired(&mut self, links: u64) {
        self.links = self.links.saturating_add(links);
    }

    #[must_use]
    pub const fn entities(&self) -> u64 {
        self.entities
    }

    #[must_use]
    pub const fn links(&self) -> u64 {
        self.links
    }

    /// Emit the build events for data source `S`.
    pub fn publish<S: Path>(self) {
        sink::record(MetricsEvent::GraphBuilt {
            source_path: S::PATH,
            entities: self.entities,
        });
        sink::record(MetricsEvent::LinksWired {
            source_path: S::PATH,
            links: self.links,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn builds_once_and_reuses() {
        static CACHE: ExpectedData<Vec<i32>> = ExpectedData::new();
        let builds = AtomicUsize::new(0);

        for _ in 0..3 {
            let data = CACHE
                .get_or_build(|| {
                    builds.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2, 3])
                })
                .expect("build succeeds");
            assert_eq!(data, &[1, 2, 3]);
        }

        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn build_stats_count_entities_and_links() {
        let arena: Arena<u8> = Arena::from(vec![1, 2, 3]);
        let mut stats = BuildStats::new();

        stats.built(&arena);
        stats.link(&arena, 2).expect("index 2 exists");
        assert!(stats.link(&arena, 3).is_err());
        stats.wired(4);

        assert_eq!(stats.entities(), 3);
        assert_eq!(stats.links(), 5);
    }

    #[test]
    fn failed_build_is_not_cached() {
        let cache = ExpectedData::<u8>::new();

        cache
            .get_or_build(|| Err(InternalError::graph_invariant("boom")))
            .expect_err("first build fails");
        assert!(cache.get().is_none());

        let value = cache.get_or_build(|| Ok(7)).expect("second build succeeds");
        assert_eq!(*value, 7);
    }
}
