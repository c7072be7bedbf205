//! Minimal oracle schema for core unit tests.

use crate::{
    arena::Arena,
    error::InternalError,
    model::{EntityFieldKind, EntityFieldModel},
    properties::PropertyBag,
    set::{self, SetIter, SetRegistry, SetSource},
    traits::{EntityKind, Path},
    types::Key,
};
use derive_more::Deref;

///
/// Widget
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Widget {
    pub id: i64,
    pub props: PropertyBag,
}

impl Widget {
    pub fn new(id: i64, label: &str) -> Self {
        let props = PropertyBag::of::<Self>()
            .with("Label", label)
            .expect("Label is declared on Widget");

        Self { id, props }
    }
}

entity_model!(
    Widget,
    path = "test_support::Widget",
    name = "Widget",
    fields = [EntityFieldModel::new("id", EntityFieldKind::Int)],
    indexer = [
        EntityFieldModel::new("Label", EntityFieldKind::Text),
        EntityFieldModel::nullable("Weight", EntityFieldKind::Int),
    ],
);

impl EntityKind for Widget {
    fn key(&self) -> Key {
        Key::Int(self.id)
    }
}

///
/// Gadget
/// Widget subtype.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct Gadget {
    #[deref]
    pub widget: Widget,
    pub charge: i64,
}

entity_model!(
    Gadget,
    path = "test_support::Gadget",
    name = "Gadget",
    base = "test_support::Widget",
    fields = [EntityFieldModel::new("charge", EntityFieldKind::Int)],
    indexer = [],
);

impl EntityKind for Gadget {
    fn key(&self) -> Key {
        self.widget.key()
    }
}

///
/// Sprocket
/// Never registered on `Workshop`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sprocket {
    pub id: i64,
}

entity_model!(
    Sprocket,
    path = "test_support::Sprocket",
    name = "Sprocket",
    fields = [EntityFieldModel::new("id", EntityFieldKind::Int)],
    indexer = [],
);

impl EntityKind for Sprocket {
    fn key(&self) -> Key {
        Key::Int(self.id)
    }
}

///
/// Shim
/// Model with an indexer property that shadows a declared field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shim {
    pub id: i64,
}

entity_model!(
    Shim,
    path = "test_support::Shim",
    name = "Shim",
    fields = [EntityFieldModel::new("id", EntityFieldKind::Int)],
    indexer = [EntityFieldModel::nullable("id", EntityFieldKind::Int)],
);

impl EntityKind for Shim {
    fn key(&self) -> Key {
        Key::Int(self.id)
    }
}

///
/// PartKind
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PartKind {
    Widget(Widget),
    Gadget(Gadget),
}

impl PartKind {
    pub const fn as_widget(&self) -> &Widget {
        match self {
            Self::Widget(widget) => widget,
            Self::Gadget(gadget) => &gadget.widget,
        }
    }

    pub const fn as_gadget(&self) -> Option<&Gadget> {
        match self {
            Self::Gadget(gadget) => Some(gadget),
            Self::Widget(_) => None,
        }
    }
}

///
/// Workshop
///

pub struct Workshop {
    pub parts: Arena<PartKind>,
    registry: SetRegistry<Self>,
}

impl Path for Workshop {
    const PATH: &'static str = "test_support::Workshop";
}

impl Workshop {
    pub fn new() -> Result<Self, InternalError> {
        let mut parts = Arena::new();
        parts.push(PartKind::Widget(Widget::new(1, "alpha")));
        parts.push(PartKind::Gadget(Gadget {
            widget: Widget::new(2, "beta"),
            charge: 40,
        }));
        parts.push(PartKind::Widget(Widget::new(3, "gamma")));

        let registry = SetRegistry::new()
            .with::<Widget>(widgets)?
            .with::<Gadget>(gadgets)?;

        Ok(Self { parts, registry })
    }
}

impl SetSource for Workshop {
    fn registry(&self) -> &SetRegistry<Self> {
        &self.registry
    }
}

fn widgets(shop: &Workshop) -> SetIter<'_, Widget> {
    Box::new(shop.parts.iter().map(PartKind::as_widget))
}

fn gadgets(shop: &Workshop) -> SetIter<'_, Gadget> {
    set::narrow(&shop.parts, PartKind::as_gadget)
}
