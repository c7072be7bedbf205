use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    collections::BTreeMap,
    time::{SystemTime, UNIX_EPOCH},
};

///
/// EventState
/// Ephemeral, in-memory counters for oracle operations on one thread.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub entities: BTreeMap<String, EntityCounters>,
    pub window_start_ms: u64,
}

impl Default for EventState {
    fn default() -> Self {
        Self {
            ops: EventOps::default(),
            entities: BTreeMap::new(),
            window_start_ms: now_millis(),
        }
    }
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventOps {
    // Graph construction
    pub graphs_built: u64,
    pub entities_built: u64,
    pub links_wired: u64,

    // Set accessor
    pub set_requests: u64,
    pub set_unsupported: u64,
    pub rows_served: u64,

    // Rejections
    pub property_rejections: u64,
    pub compare_failures: u64,
}

///
/// EntityCounters
/// Keyed by entity path, or by data source path for graph events.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EntityCounters {
    pub graphs_built: u64,
    pub links_wired: u64,
    pub set_requests: u64,
    pub set_unsupported: u64,
    pub rows_served: u64,
    pub property_rejections: u64,
    pub compare_failures: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters and restart the window.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

///
/// EventReport
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    /// Ephemeral runtime counters since `window_start_ms`.
    pub counters: Option<EventState>,
    /// Per-entity counters with derived averages.
    pub entity_counters: Vec<EntitySummary>,
}

///
/// EntitySummary
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EntitySummary {
    pub path: String,
    pub set_requests: u64,
    pub set_unsupported: u64,
    pub rows_served: u64,
    pub avg_rows_per_request: f64,
    pub property_rejections: u64,
    pub compare_failures: u64,
}

/// Build a report, omitting everything when the current window started
/// before `window_start_ms`.
#[must_use]
pub(crate) fn report_window_start(window_start_ms: Option<u64>) -> EventReport {
    let current = with_state(|m| m.window_start_ms);
    match window_start_ms {
        Some(requested) if requested > current => EventReport::default(),
        _ => report(),
    }
}

/// Build a metrics report by inspecting in-memory counters only.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn report() -> EventReport {
    let snap = with_state(Clone::clone);

    let mut entity_counters: Vec<EntitySummary> = snap
        .entities
        .iter()
        .map(|(path, ops)| {
            let avg_rows = if ops.set_requests > 0 {
                ops.rows_served as f64 / ops.set_requests as f64
            } else {
                0.0
            };

            EntitySummary {
                path: path.clone(),
                set_requests: ops.set_requests,
                set_unsupported: ops.set_unsupported,
                rows_served: ops.rows_served,
                avg_rows_per_request: avg_rows,
                property_rejections: ops.property_rejections,
                compare_failures: ops.compare_failures,
            }
        })
        .collect();

    entity_counters.sort_by(|a, b| {
        b.set_requests
            .cmp(&a.set_requests)
            .then_with(|| a.path.cmp(&b.path))
    });

    EventReport {
        counters: Some(snap),
        entity_counters,
    }
}

///
/// TESTS
///

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn reset_all_clears_state() {
        with_state_mut(|m| {
            m.ops.set_requests = 3;
            m.ops.links_wired = 2;
            m.entities.insert(
                "alpha".to_string(),
                EntityCounters {
                    set_requests: 1,
                    ..Default::default()
                },
            );
        });

        reset_all();

        with_state(|m| {
            assert_eq!(m.ops.set_requests, 0);
            assert_eq!(m.ops.links_wired, 0);
            assert!(m.entities.is_empty());
        });
    }

    #[test]
    fn report_sorts_entities_by_request_count_then_path() {
        reset_all();
        with_state_mut(|m| {
            m.entities.insert(
                "gamma".to_string(),
                EntityCounters {
                    set_requests: 2,
                    rows_served: 6,
                    ..Default::default()
                },
            );
            m.entities.insert(
                "beta".to_string(),
                EntityCounters {
                    set_requests: 1,
                    rows_served: 5,
                    ..Default::default()
                },
            );
            m.entities.insert(
                "alpha".to_string(),
                EntityCounters {
                    set_requests: 2,
                    rows_served: 2,
                    ..Default::default()
                },
            );
        });

        let report = report();
        let paths: Vec<_> = report
            .entity_counters
            .iter()
            .map(|summary| summary.path.as_str())
            .collect();
        assert_eq!(paths, ["alpha", "gamma", "beta"]);
        assert_eq!(report.entity_counters[1].avg_rows_per_request, 3.0);
        assert_eq!(report.entity_counters[2].avg_rows_per_request, 5.0);
    }

    #[test]
    fn report_serializes_with_serde_json() {
        reset_all();
        with_state_mut(|m| m.ops.graphs_built = 1);

        let text = serde_json::to_string(&report()).expect("report should serialize");
        assert!(text.contains("\"graphs_built\":1"));
    }
}
