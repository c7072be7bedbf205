use super::*;
use crate::{
    error::{ErrorClass, ErrorOrigin, GraphError, SetError},
    obs::sink::{MetricsSink, with_metrics_sink},
    test_support::{Gadget, Shim, Sprocket, Widget, Workshop},
};
use std::cell::RefCell;

struct CapturingSink(RefCell<Vec<MetricsEvent>>);

impl MetricsSink for CapturingSink {
    fn record(&self, event: MetricsEvent) {
        self.0.borrow_mut().push(event);
    }
}

fn workshop() -> Workshop {
    Workshop::new().expect("workshop graph should build")
}

#[test]
fn base_set_projects_every_variant_in_stored_order() {
    let shop = workshop();
    let keys = shop.set::<Widget>().expect("widgets registered").keys();

    assert_eq!(keys, vec![Key::Int(1), Key::Int(2), Key::Int(3)]);
}

#[test]
fn subtype_set_narrows_by_variant() {
    let shop = workshop();
    let gadgets: Vec<_> = shop.set::<Gadget>().expect("gadgets registered").collect();

    assert_eq!(gadgets.len(), 1);
    assert_eq!(gadgets[0].charge, 40);
    assert_eq!(gadgets[0].id, 2);
}

#[test]
fn unregistered_type_fails_with_unsupported() {
    let shop = workshop();
    let err = shop.set::<Sprocket>().expect_err("sprockets are not served");

    assert_eq!(err.class, ErrorClass::Unsupported);
    assert_eq!(err.origin, ErrorOrigin::Set);
    assert!(err.message.contains(Sprocket::PATH));
    assert_eq!(
        err.set_detail(),
        Some(&SetError::UnsupportedEntityType {
            data_source: Workshop::PATH,
            entity: Sprocket::PATH,
        })
    );
    assert!(!shop.supports::<Sprocket>());
    assert!(shop.supports::<Gadget>());
}

#[test]
fn duplicate_registration_is_rejected() {
    fn none(_: &Workshop) -> SetIter<'_, Sprocket> {
        Box::new(std::iter::empty())
    }

    let mut registry = SetRegistry::<Workshop>::new();
    registry.register::<Sprocket>(none).expect("first registration");
    let err = registry
        .register::<Sprocket>(none)
        .expect_err("second registration");

    assert_eq!(err.class, ErrorClass::InvariantViolation);
    assert!(matches!(
        err.set_detail(),
        Some(SetError::AlreadyRegistered { .. })
    ));
    assert_eq!(registry.len(), 1);
}

#[test]
fn inconsistent_model_cannot_be_registered() {
    fn shims(_: &Workshop) -> SetIter<'_, Shim> {
        Box::new(std::iter::empty())
    }

    let mut registry = SetRegistry::<Workshop>::new();
    let err = registry
        .register::<Shim>(shims)
        .expect_err("indexer shadows a field");

    assert_eq!(err.origin, ErrorOrigin::Graph);
    assert!(matches!(
        err.graph_detail(),
        Some(GraphError::InvalidModel { entity, .. }) if *entity == Shim::PATH
    ));
    assert!(registry.is_empty());
}

#[test]
fn entity_paths_are_sorted() {
    let shop = workshop();

    assert_eq!(
        shop.registry().entity_paths(),
        vec![Gadget::PATH, Widget::PATH]
    );
}

#[test]
fn repeated_requests_restart_the_sequence() {
    let shop = workshop();
    let first = shop.set::<Widget>().expect("registered").count();
    let second = shop.set::<Widget>().expect("registered").count();

    assert_eq!(first, 3);
    assert_eq!(first, second);
}

#[test]
fn set_requests_emit_metrics_events() {
    let shop = workshop();
    let sink = CapturingSink(RefCell::new(Vec::new()));

    with_metrics_sink(&sink, || {
        let drawn = shop.set::<Widget>().expect("registered").take(2).count();
        assert_eq!(drawn, 2);
        let _ = shop.set::<Sprocket>();
    });

    assert_eq!(
        sink.0.into_inner(),
        vec![
            MetricsEvent::SetRequested {
                entity_path: Widget::PATH,
            },
            MetricsEvent::SetServed {
                entity_path: Widget::PATH,
                rows: 2,
            },
            MetricsEvent::SetUnsupported {
                entity_path: Sprocket::PATH,
            },
        ]
    );
}
