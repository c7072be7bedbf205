use derive_more::Deref;
use refset_core::{
    arena::Link,
    entity_model,
    error::InternalError,
    model::{EntityFieldKind, EntityFieldModel},
    properties::PropertyBag,
    traits::EntityKind,
    types::Key,
    value::Value,
};

// ============================================================================
// OWNED VALUE OBJECTS
// ============================================================================

///
/// OwnedCountry
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnedCountry {
    pub name: String,
    pub planet_id: i32,
    pub planet: Option<Link<Planet>>,
}

entity_model!(
    OwnedCountry,
    path = "owned::OwnedCountry",
    name = "OwnedCountry",
    fields = [
        EntityFieldModel::new("Name", EntityFieldKind::Text),
        EntityFieldModel::new("PlanetId", EntityFieldKind::Int),
        EntityFieldModel::new("Planet", EntityFieldKind::Reference("owned::Planet")),
    ],
    indexer = [],
);

///
/// OwnedAddress
///
/// `AddressLine` and `ZipCode` are indexer properties.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnedAddress {
    pub place_type: String,
    pub country: OwnedCountry,
    pub props: PropertyBag,
}

entity_model!(
    OwnedAddress,
    path = "owned::OwnedAddress",
    name = "OwnedAddress",
    fields = [
        EntityFieldModel::new("PlaceType", EntityFieldKind::Text),
        EntityFieldModel::new("Country", EntityFieldKind::Owned("owned::OwnedCountry")),
    ],
    indexer = [
        EntityFieldModel::nullable("AddressLine", EntityFieldKind::Text),
        EntityFieldModel::nullable("ZipCode", EntityFieldKind::Int),
    ],
);

impl OwnedAddress {
    pub fn property(&self, name: &str) -> Result<&Value, InternalError> {
        self.props.get(name)
    }
}

///
/// LeafAAddress
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct LeafAAddress {
    #[deref]
    pub address: OwnedAddress,
    pub leaf_type: i32,
}

///
/// LeafBAddress
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct LeafBAddress {
    #[deref]
    pub address: OwnedAddress,
    pub leaf_b_type: String,
}

///
/// OrderDetail
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderDetail {
    pub detail: String,
}

///
/// Throned
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Throned {
    pub value: i32,
    pub property: String,
}

// ============================================================================
// PERSON HIERARCHY
// ============================================================================

///
/// OwnedPerson
///
/// Root of the person hierarchy. `Name` is an indexer property.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnedPerson {
    pub id: i32,
    pub person_address: OwnedAddress,
    pub orders: Vec<Order>,
    pub props: PropertyBag,
}

entity_model!(
    OwnedPerson,
    path = "owned::OwnedPerson",
    name = "OwnedPerson",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("PersonAddress", EntityFieldKind::Owned("owned::OwnedAddress")),
        EntityFieldModel::new("Orders", EntityFieldKind::OwnedMany("owned::Order")),
    ],
    indexer = [EntityFieldModel::nullable("Name", EntityFieldKind::Text)],
);

impl OwnedPerson {
    pub fn property(&self, name: &str) -> Result<&Value, InternalError> {
        self.props.get(name)
    }
}

impl EntityKind for OwnedPerson {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// Branch
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct Branch {
    #[deref]
    pub person: OwnedPerson,
    pub branch_address: OwnedAddress,
}

entity_model!(
    Branch,
    path = "owned::Branch",
    name = "Branch",
    base = "owned::OwnedPerson",
    fields = [EntityFieldModel::new("BranchAddress", EntityFieldKind::Owned("owned::OwnedAddress"))],
    indexer = [],
);

impl EntityKind for Branch {
    fn key(&self) -> Key {
        self.person.key()
    }
}

///
/// LeafA
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct LeafA {
    #[deref]
    pub branch: Branch,
    pub leaf_a_address: LeafAAddress,
}

entity_model!(
    LeafA,
    path = "owned::LeafA",
    name = "LeafA",
    base = "owned::Branch",
    fields = [EntityFieldModel::new("LeafAAddress", EntityFieldKind::Owned("owned::OwnedAddress"))],
    indexer = [],
);

impl EntityKind for LeafA {
    fn key(&self) -> Key {
        self.branch.key()
    }
}

///
/// LeafB
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct LeafB {
    #[deref]
    pub person: OwnedPerson,
    pub leaf_b_address: LeafBAddress,
}

entity_model!(
    LeafB,
    path = "owned::LeafB",
    name = "LeafB",
    base = "owned::OwnedPerson",
    fields = [EntityFieldModel::new("LeafBAddress", EntityFieldKind::Owned("owned::OwnedAddress"))],
    indexer = [],
);

impl EntityKind for LeafB {
    fn key(&self) -> Key {
        self.person.key()
    }
}

///
/// OwnedPersonKind
///
/// Stored form of the hierarchy: one arena, most-derived variant per row.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OwnedPersonKind {
    Person(OwnedPerson),
    Branch(Branch),
    LeafA(LeafA),
    LeafB(LeafB),
}

impl OwnedPersonKind {
    /// Base part of any variant.
    #[must_use]
    pub const fn as_person(&self) -> &OwnedPerson {
        match self {
            Self::Person(person) => person,
            Self::Branch(branch) => &branch.person,
            Self::LeafA(leaf) => &leaf.branch.person,
            Self::LeafB(leaf) => &leaf.person,
        }
    }

    pub(crate) const fn as_person_mut(&mut self) -> &mut OwnedPerson {
        match self {
            Self::Person(person) => person,
            Self::Branch(branch) => &mut branch.person,
            Self::LeafA(leaf) => &mut leaf.branch.person,
            Self::LeafB(leaf) => &mut leaf.person,
        }
    }

    /// Exact `Branch` variant only; a `LeafA` row yields `None`.
    #[must_use]
    pub const fn as_branch(&self) -> Option<&Branch> {
        match self {
            Self::Branch(branch) => Some(branch),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_leaf_a(&self) -> Option<&LeafA> {
        match self {
            Self::LeafA(leaf) => Some(leaf),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_leaf_b(&self) -> Option<&LeafB> {
        match self {
            Self::LeafB(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// Every owned address reachable from this row, base first.
    #[must_use]
    pub fn addresses(&self) -> Vec<&OwnedAddress> {
        let person = &self.as_person().person_address;
        match self {
            Self::Person(_) => vec![person],
            Self::Branch(branch) => vec![person, &branch.branch_address],
            Self::LeafA(leaf) => vec![
                person,
                &leaf.branch.branch_address,
                &leaf.leaf_a_address.address,
            ],
            Self::LeafB(leaf) => vec![person, &leaf.leaf_b_address.address],
        }
    }

    pub(crate) fn addresses_mut(&mut self) -> Vec<&mut OwnedAddress> {
        match self {
            Self::Person(person) => vec![&mut person.person_address],
            Self::Branch(branch) => {
                vec![&mut branch.person.person_address, &mut branch.branch_address]
            }
            Self::LeafA(leaf) => vec![
                &mut leaf.branch.person.person_address,
                &mut leaf.branch.branch_address,
                &mut leaf.leaf_a_address.address,
            ],
            Self::LeafB(leaf) => vec![
                &mut leaf.person.person_address,
                &mut leaf.leaf_b_address.address,
            ],
        }
    }
}

// ============================================================================
// ORDERS
// ============================================================================

///
/// Order
///
/// Stored inside its owning person; `client` is set during wire-up.
/// `OrderDate` is an indexer property.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub id: i32,
    pub client_id: i32,
    pub client: Option<Link<OwnedPersonKind>>,
    pub details: Vec<OrderDetail>,
    pub props: PropertyBag,
}

entity_model!(
    Order,
    path = "owned::Order",
    name = "Order",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("ClientId", EntityFieldKind::Int),
        EntityFieldModel::new("Client", EntityFieldKind::Reference("owned::OwnedPerson")),
        EntityFieldModel::new("Details", EntityFieldKind::OwnedMany("owned::OrderDetail")),
    ],
    indexer = [EntityFieldModel::nullable("OrderDate", EntityFieldKind::Timestamp)],
);

impl Order {
    pub fn property(&self, name: &str) -> Result<&Value, InternalError> {
        self.props.get(name)
    }
}

impl EntityKind for Order {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

// ============================================================================
// PLANETARY SYSTEM
// ============================================================================

///
/// Planet
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub star_id: i32,
    pub star: Option<Link<Star>>,
    pub moons: Vec<Link<Moon>>,
}

entity_model!(
    Planet,
    path = "owned::Planet",
    name = "Planet",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Name", EntityFieldKind::Text),
        EntityFieldModel::new("StarId", EntityFieldKind::Int),
        EntityFieldModel::new("Star", EntityFieldKind::Reference("owned::Star")),
        EntityFieldModel::new("Moons", EntityFieldKind::ReferenceMany("owned::Moon")),
    ],
    indexer = [],
);

impl EntityKind for Planet {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// Star
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Star {
    pub id: i32,
    pub name: String,
    pub composition: Vec<Element>,
    pub planets: Vec<Link<Planet>>,
}

entity_model!(
    Star,
    path = "owned::Star",
    name = "Star",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Name", EntityFieldKind::Text),
        EntityFieldModel::new("Composition", EntityFieldKind::OwnedMany("owned::Element")),
        EntityFieldModel::new("Planets", EntityFieldKind::ReferenceMany("owned::Planet")),
    ],
    indexer = [],
);

impl EntityKind for Star {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// Element
/// Owned by its star, keyed by chemical symbol.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    pub id: String,
    pub name: String,
    pub star_id: i32,
}

entity_model!(
    Element,
    path = "owned::Element",
    name = "Element",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Text),
        EntityFieldModel::new("Name", EntityFieldKind::Text),
        EntityFieldModel::new("StarId", EntityFieldKind::Int),
    ],
    indexer = [],
);

impl EntityKind for Element {
    fn key(&self) -> Key {
        Key::from(self.id.as_str())
    }
}

///
/// Moon
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Moon {
    pub id: i32,
    pub planet_id: i32,
    pub diameter: i32,
    pub planet: Option<Link<Planet>>,
}

entity_model!(
    Moon,
    path = "owned::Moon",
    name = "Moon",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("PlanetId", EntityFieldKind::Int),
        EntityFieldModel::new("Diameter", EntityFieldKind::Int),
        EntityFieldModel::new("Planet", EntityFieldKind::Reference("owned::Planet")),
    ],
    indexer = [],
);

impl EntityKind for Moon {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

// ============================================================================
// BARTON / FINK
// ============================================================================

///
/// Barton
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Barton {
    pub id: i32,
    pub simple: String,
    pub throned: Throned,
}

entity_model!(
    Barton,
    path = "owned::Barton",
    name = "Barton",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Simple", EntityFieldKind::Text),
        EntityFieldModel::new("Throned", EntityFieldKind::Owned("owned::Throned")),
    ],
    indexer = [],
);

impl EntityKind for Barton {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// Fink
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fink {
    pub id: i32,
    pub barton: Option<Link<Barton>>,
}

entity_model!(
    Fink,
    path = "owned::Fink",
    name = "Fink",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::nullable("Barton", EntityFieldKind::Reference("owned::Barton")),
    ],
    indexer = [],
);

impl EntityKind for Fink {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}
