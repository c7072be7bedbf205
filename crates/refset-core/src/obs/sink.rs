//! Metrics sink boundary.
//!
//! Graph builders, set accessors, property bags and comparison helpers
//! MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics;
use std::{cell::RefCell, marker::PhantomData};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    GraphBuilt {
        source_path: &'static str,
        entities: u64,
    },
    LinksWired {
        source_path: &'static str,
        links: u64,
    },
    SetRequested {
        entity_path: &'static str,
    },
    SetServed {
        entity_path: &'static str,
        rows: u64,
    },
    SetUnsupported {
        entity_path: &'static str,
    },
    PropertyRejected {
        entity_path: &'static str,
    },
    CompareFailed {
        entity_path: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into global metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::GraphBuilt {
                source_path,
                entities,
            } => {
                metrics::with_state_mut(|m| {
                    m.ops.graphs_built = m.ops.graphs_built.saturating_add(1);
                    m.ops.entities_built = m.ops.entities_built.saturating_add(entities);
                    let entry = m.entities.entry(source_path.to_string()).or_default();
                    entry.graphs_built = entry.graphs_built.saturating_add(1);
                });
            }

            MetricsEvent::LinksWired { source_path, links } => {
                metrics::with_state_mut(|m| {
                    m.ops.links_wired = m.ops.links_wired.saturating_add(links);
                    let entry = m.entities.entry(source_path.to_string()).or_default();
                    entry.links_wired = entry.links_wired.saturating_add(links);
                });
            }

            MetricsEvent::SetRequested { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.set_requests = m.ops.set_requests.saturating_add(1);
                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.set_requests = entry.set_requests.saturating_add(1);
                });
            }

            MetricsEvent::SetServed { entity_path, rows } => {
                metrics::with_state_mut(|m| {
                    m.ops.rows_served = m.ops.rows_served.saturating_add(rows);
                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.rows_served = entry.rows_served.saturating_add(rows);
                });
            }

            MetricsEvent::SetUnsupported { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.set_unsupported = m.ops.set_unsupported.saturating_add(1);
                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.set_unsupported = entry.set_unsupported.saturating_add(1);
                });
            }

            MetricsEvent::PropertyRejected { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.property_rejections = m.ops.property_rejections.saturating_add(1);
                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.property_rejections = entry.property_rejections.saturating_add(1);
                });
            }

            MetricsEvent::CompareFailed { entity_path } => {
                metrics::with_state_mut(|m| {
                    m.ops.compare_failures = m.ops.compare_failures.saturating_add(1);
                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.compare_failures = entry.compare_failures.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    match SINK_OVERRIDE.with(|cell| *cell.borrow()) {
        // SAFETY: the pointer was installed by a live `SinkScope`, which clears
        // it before the borrowed sink can go out of scope. It is only read
        // through a shared reference for the duration of this call.
        Some(ptr) => unsafe { (*ptr).record(event) },
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's metrics state.
///
/// `window_start_ms` filters by window start (`EventState::window_start_ms`),
/// not by per-event timestamps.
#[must_use]
pub fn metrics_report(window_start_ms: Option<u64>) -> metrics::EventReport {
    metrics::report_window_start(window_start_ms)
}

/// Reset all metrics state on the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

///
/// SinkScope
///
/// Installs a sink override for the current thread and puts the previous
/// override back when dropped, including during unwinding.
///

struct SinkScope<'a> {
    previous: Option<*const dyn MetricsSink>,
    _sink: PhantomData<&'a dyn MetricsSink>,
}

impl<'a> SinkScope<'a> {
    fn install(sink: &'a dyn MetricsSink) -> Self {
        // SAFETY: only the lifetime is erased. The scope borrows `sink` for
        // `'a` and removes the pointer on drop, so it is never read after the
        // sink is gone.
        let ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
        let previous = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(ptr));

        Self {
            previous,
            _sink: PhantomData,
        }
    }
}

impl Drop for SinkScope<'_> {
    fn drop(&mut self) {
        SINK_OVERRIDE.with(|cell| *cell.borrow_mut() = self.previous);
    }
}

/// Run `f` with every metrics event on this thread routed to `sink`.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    let _scope = SinkScope::install(sink);

    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::RefCell,
        panic::{AssertUnwindSafe, catch_unwind},
    };

    struct CapturingSink {
        events: RefCell<Vec<MetricsEvent>>,
    }

    impl CapturingSink {
        fn new() -> Self {
            Self {
                events: RefCell::new(Vec::new()),
            }
        }

        fn count(&self) -> usize {
            self.events.borrow().len()
        }
    }

    impl MetricsSink for CapturingSink {
        fn record(&self, event: MetricsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    const REQUEST: MetricsEvent = MetricsEvent::SetRequested {
        entity_path: "owned::Order",
    };

    const SERVED: MetricsEvent = MetricsEvent::SetServed {
        entity_path: "owned::Order",
        rows: 6,
    };

    fn clear_override() {
        SINK_OVERRIDE.with(|cell| *cell.borrow_mut() = None);
    }

    fn override_installed() -> bool {
        SINK_OVERRIDE.with(|cell| cell.borrow().is_some())
    }

    #[test]
    fn nested_sink_scopes_hand_events_back_to_the_outer_sink() {
        clear_override();
        let source = CapturingSink::new();
        let comparison = CapturingSink::new();

        record(REQUEST);
        with_metrics_sink(&source, || {
            record(REQUEST);
            with_metrics_sink(&comparison, || {
                record(MetricsEvent::CompareFailed {
                    entity_path: "owned::Order",
                });
            });
            record(SERVED);
        });

        assert_eq!(source.events.into_inner(), vec![REQUEST, SERVED]);
        assert_eq!(comparison.count(), 1);
        assert!(!override_installed());
    }

    #[test]
    fn sink_scope_is_cleared_when_an_assertion_panics() {
        clear_override();
        let sink = CapturingSink::new();

        let result = catch_unwind(AssertUnwindSafe(|| {
            with_metrics_sink(&sink, || {
                record(REQUEST);
                panic!("order rows diverged");
            });
        }));

        assert!(result.is_err());
        assert_eq!(sink.count(), 1);
        assert!(!override_installed());
    }

    #[test]
    fn override_captures_build_events_in_order() {
        let sink = CapturingSink::new();

        with_metrics_sink(&sink, || {
            record(MetricsEvent::GraphBuilt {
                source_path: "owned::OwnedQueryData",
                entities: 3,
            });
            record(REQUEST);
        });

        assert_eq!(
            sink.events.into_inner(),
            vec![
                MetricsEvent::GraphBuilt {
                    source_path: "owned::OwnedQueryData",
                    entities: 3,
                },
                REQUEST,
            ]
        );
    }

    #[test]
    fn set_and_property_events_accumulate_per_entity() {
        metrics_reset_all();

        record(REQUEST);
        record(REQUEST);
        record(MetricsEvent::SetServed {
            entity_path: "owned::Order",
            rows: 4,
        });
        record(MetricsEvent::SetUnsupported {
            entity_path: "aruba::ArubaOwner",
        });
        record(MetricsEvent::PropertyRejected {
            entity_path: "owned::Order",
        });

        let counters = metrics_report(None)
            .counters
            .expect("metrics report should include counters");
        assert_eq!(counters.ops.set_requests, 2);
        assert_eq!(counters.ops.rows_served, 4);
        assert_eq!(counters.ops.set_unsupported, 1);
        assert_eq!(counters.ops.property_rejections, 1);

        let entity = counters
            .entities
            .get("owned::Order")
            .expect("entity counters should be present");
        assert_eq!(entity.set_requests, 2);
        assert_eq!(entity.rows_served, 4);
        assert_eq!(entity.property_rejections, 1);
    }

    #[test]
    fn metrics_report_window_start_after_window_returns_empty() {
        metrics_reset_all();
        let window_start = metrics::with_state(|m| m.window_start_ms);
        record(REQUEST);

        let report = metrics_report(Some(window_start.saturating_add(1)));
        assert!(report.counters.is_none());
        assert!(report.entity_counters.is_empty());
    }
}
