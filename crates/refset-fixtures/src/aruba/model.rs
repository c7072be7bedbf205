use derive_more::Deref;
use refset_core::{
    arena::Link,
    entity_model,
    model::{EntityFieldKind, EntityFieldModel},
    traits::EntityKind,
    types::Key,
};
use rust_decimal::Decimal;
use time::PrimitiveDateTime;

///
/// ArubaOwner
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArubaOwner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub alias: String,
}

entity_model!(
    ArubaOwner,
    path = "aruba::ArubaOwner",
    name = "ArubaOwner",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("FirstName", EntityFieldKind::Text),
        EntityFieldModel::new("LastName", EntityFieldKind::Text),
        EntityFieldModel::new("Alias", EntityFieldKind::Text),
    ],
    indexer = [],
);

impl EntityKind for ArubaOwner {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// NumberForLinq
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberForLinq {
    pub id: i32,
    pub value: i32,
    pub name: String,
}

entity_model!(
    NumberForLinq,
    path = "aruba::NumberForLinq",
    name = "NumberForLinq",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Value", EntityFieldKind::Int),
        EntityFieldModel::new("Name", EntityFieldKind::Text),
    ],
    indexer = [],
);

impl EntityKind for NumberForLinq {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// ProductForLinq
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductForLinq {
    pub id: i32,
    pub product_name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub units_in_stock: i32,
}

entity_model!(
    ProductForLinq,
    path = "aruba::ProductForLinq",
    name = "ProductForLinq",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("ProductName", EntityFieldKind::Text),
        EntityFieldModel::new("Category", EntityFieldKind::Text),
        EntityFieldModel::new("UnitPrice", EntityFieldKind::Decimal),
        EntityFieldModel::new("UnitsInStock", EntityFieldKind::Int),
    ],
    indexer = [],
);

impl EntityKind for ProductForLinq {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// FeaturedProductForLinq
/// Adds no columns; only the discriminator differs.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct FeaturedProductForLinq {
    #[deref]
    pub product: ProductForLinq,
}

entity_model!(
    FeaturedProductForLinq,
    path = "aruba::FeaturedProductForLinq",
    name = "FeaturedProductForLinq",
    base = "aruba::ProductForLinq",
    fields = [],
    indexer = [],
);

impl EntityKind for FeaturedProductForLinq {
    fn key(&self) -> Key {
        self.product.key()
    }
}

///
/// ProductKind
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProductKind {
    Product(ProductForLinq),
    Featured(FeaturedProductForLinq),
}

impl ProductKind {
    #[must_use]
    pub const fn as_product(&self) -> &ProductForLinq {
        match self {
            Self::Product(product) => product,
            Self::Featured(featured) => &featured.product,
        }
    }

    #[must_use]
    pub const fn as_featured(&self) -> Option<&FeaturedProductForLinq> {
        match self {
            Self::Featured(featured) => Some(featured),
            Self::Product(_) => None,
        }
    }
}

///
/// CustomerForLinq
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustomerForLinq {
    pub id: i32,
    pub region: String,
    pub company_name: String,
    pub orders: Vec<Link<OrderForLinq>>,
}

entity_model!(
    CustomerForLinq,
    path = "aruba::CustomerForLinq",
    name = "CustomerForLinq",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Region", EntityFieldKind::Text),
        EntityFieldModel::new("CompanyName", EntityFieldKind::Text),
        EntityFieldModel::new("Orders", EntityFieldKind::ReferenceMany("aruba::OrderForLinq")),
    ],
    indexer = [],
);

impl EntityKind for CustomerForLinq {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// OrderForLinq
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderForLinq {
    pub id: i32,
    pub total: Decimal,
    pub order_date: PrimitiveDateTime,
    pub customer: Option<Link<CustomerForLinq>>,
}

entity_model!(
    OrderForLinq,
    path = "aruba::OrderForLinq",
    name = "OrderForLinq",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Total", EntityFieldKind::Decimal),
        EntityFieldModel::new("OrderDate", EntityFieldKind::Timestamp),
        EntityFieldModel::new("Customer", EntityFieldKind::Reference("aruba::CustomerForLinq")),
    ],
    indexer = [],
);

impl EntityKind for OrderForLinq {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// Person
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    pub id: i32,
    pub age: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_initial: String,
    pub feet: Option<Link<Feet>>,
    pub shoes: Vec<Link<Shoes>>,
}

entity_model!(
    Person,
    path = "aruba::Person",
    name = "Person",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Age", EntityFieldKind::Int),
        EntityFieldModel::new("FirstName", EntityFieldKind::Text),
        EntityFieldModel::new("LastName", EntityFieldKind::Text),
        EntityFieldModel::new("MiddleInitial", EntityFieldKind::Text),
        EntityFieldModel::new("Feet", EntityFieldKind::Reference("aruba::Feet")),
        EntityFieldModel::new("Shoes", EntityFieldKind::ReferenceMany("aruba::Shoes")),
    ],
    indexer = [],
);

impl EntityKind for Person {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// Shoes
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shoes {
    pub id: i32,
    pub age: i32,
    pub style: String,
    pub person: Option<Link<Person>>,
}

entity_model!(
    Shoes,
    path = "aruba::Shoes",
    name = "Shoes",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Age", EntityFieldKind::Int),
        EntityFieldModel::new("Style", EntityFieldKind::Text),
        EntityFieldModel::new("Person", EntityFieldKind::Reference("aruba::Person")),
    ],
    indexer = [],
);

impl EntityKind for Shoes {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}

///
/// Feet
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feet {
    pub id: i32,
    pub size: i32,
    pub person: Option<Link<Person>>,
}

entity_model!(
    Feet,
    path = "aruba::Feet",
    name = "Feet",
    fields = [
        EntityFieldModel::new("Id", EntityFieldKind::Int),
        EntityFieldModel::new("Size", EntityFieldKind::Int),
        EntityFieldModel::new("Person", EntityFieldKind::Reference("aruba::Person")),
    ],
    indexer = [],
);

impl EntityKind for Feet {
    fn key(&self) -> Key {
        Key::from(self.id)
    }
}
