//! Aruba group-by data.
//!
//! Flat tables for aggregate-operator tests: owners, numbers, products with
//! a featured subtype, customers with their orders, and people with feet
//! and shoes.

mod data;
mod model;

#[cfg(test)]
mod tests;

pub use model::*;

use refset_core::{
    arena::Arena,
    error::InternalError,
    fixture::{BuildStats, ExpectedData},
    set::{self, SetIter, SetRegistry, SetSource},
    traits::{EntityKind, Path},
};

static EXPECTED: ExpectedData<ArubaData> = ExpectedData::new();

/// Shared, lazily built instance.
pub fn expected() -> Result<&'static ArubaData, InternalError> {
    EXPECTED.get_or_build(ArubaData::new)
}

///
/// ArubaData
///

pub struct ArubaData {
    owners: Arena<ArubaOwner>,
    numbers: Arena<NumberForLinq>,
    products: Arena<ProductKind>,
    customers: Arena<CustomerForLinq>,
    orders: Arena<OrderForLinq>,
    people: Arena<Person>,
    feet: Arena<Feet>,
    shoes: Arena<Shoes>,
    registry: SetRegistry<Self>,
}

impl Path for ArubaData {
    const PATH: &'static str = "aruba::ArubaData";
}

impl ArubaData {
    pub fn new() -> Result<Self, InternalError> {
        let mut stats = BuildStats::new();
        let (orders, order_customers) = data::orders();

        let mut this = Self {
            owners: data::owners(),
            numbers: data::numbers(),
            products: data::products(),
            customers: data::customers(),
            orders,
            people: data::people(),
            feet: data::feet(),
            shoes: data::shoes(),
            registry: registry()?,
        };

        this.wire(&order_customers, &mut stats)?;
        this.validate()?;

        stats.built(&this.owners);
        stats.built(&this.numbers);
        stats.built(&this.products);
        stats.built(&this.customers);
        stats.built(&this.orders);
        stats.built(&this.people);
        stats.built(&this.feet);
        stats.built(&this.shoes);
        stats.publish::<Self>();

        Ok(this)
    }

    // ------------------------------------------------------------------
    // Wire-up
    // ------------------------------------------------------------------

    fn wire(&mut self, order_customers: &[usize], stats: &mut BuildStats) -> Result<(), InternalError> {
        // order.Customer, then Customer.Orders in order sequence
        for ((order_link, order), row) in self.orders.links_mut().zip(order_customers) {
            let customer = stats.link(&self.customers, *row)?;
            order.customer = Some(customer);
            self.customers.get_mut(customer)?.orders.push(order_link);
            stats.wired(1);
        }

        // person.Feet / feet.Person share a row index
        for (person_link, person) in self.people.links_mut() {
            let row = person_link.index();

            let feet = stats.link(&self.feet, row)?;
            person.feet = Some(feet);
            self.feet.get_mut(feet)?.person = Some(person_link);
            stats.wired(1);

            for n in [row * 2, row * 2 + 1] {
                let shoes = stats.link(&self.shoes, n)?;
                person.shoes.push(shoes);
                self.shoes.get_mut(shoes)?.person = Some(person_link);
                stats.wired(1);
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    fn validate(&self) -> Result<(), InternalError> {
        self.owners.ensure_unique_keys()?;
        self.numbers.ensure_unique_keys()?;
        self.products
            .ensure_unique_by(ProductForLinq::PATH, |row| row.as_product().key())?;
        self.customers.ensure_unique_keys()?;
        self.orders.ensure_unique_keys()?;
        self.people.ensure_unique_keys()?;
        self.feet.ensure_unique_keys()?;
        self.shoes.ensure_unique_keys()?;

        for order in &self.orders {
            let customer = self.customer_of(order)?;
            let listed = customer
                .orders
                .iter()
                .any(|link| self.orders.get(*link).is_some_and(|o| o.id == order.id));
            if !listed {
                return Err(InternalError::graph_invariant(format!(
                    "order {} is missing from customer {} orders",
                    order.id, customer.id
                )));
            }
        }

        for customer in &self.customers {
            self.orders_of(customer)?;
        }

        for person in &self.people {
            let feet = self.feet_of(person)?;
            if self.person_of_feet(feet)?.id != person.id {
                return Err(InternalError::graph_invariant(format!(
                    "feet {} do not point back at person {}",
                    feet.id, person.id
                )));
            }
            for shoes in self.shoes_of(person)? {
                self.person_of_shoes(shoes)?;
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Relationship resolvers
    // ------------------------------------------------------------------

    pub fn customer_of(&self, order: &OrderForLinq) -> Result<&CustomerForLinq, InternalError> {
        self.customers
            .follow(order.customer, OrderForLinq::PATH, "Customer")
    }

    pub fn orders_of(&self, customer: &CustomerForLinq) -> Result<Vec<&OrderForLinq>, InternalError> {
        self.orders.resolve_many(&customer.orders)
    }

    pub fn feet_of(&self, person: &Person) -> Result<&Feet, InternalError> {
        self.feet.follow(person.feet, Person::PATH, "Feet")
    }

    pub fn shoes_of(&self, person: &Person) -> Result<Vec<&Shoes>, InternalError> {
        self.shoes.resolve_many(&person.shoes)
    }

    pub fn person_of_feet(&self, feet: &Feet) -> Result<&Person, InternalError> {
        self.people.follow(feet.person, Feet::PATH, "Person")
    }

    pub fn person_of_shoes(&self, shoes: &Shoes) -> Result<&Person, InternalError> {
        self.people.follow(shoes.person, Shoes::PATH, "Person")
    }
}

impl SetSource for ArubaData {
    fn registry(&self) -> &SetRegistry<Self> {
        &self.registry
    }
}

// ---------------------------------------------------------------------------
// Set projections
// ---------------------------------------------------------------------------

fn registry() -> Result<SetRegistry<ArubaData>, InternalError> {
    SetRegistry::new()
        .with::<ArubaOwner>(owners)?
        .with::<NumberForLinq>(numbers)?
        .with::<ProductForLinq>(products)?
        .with::<FeaturedProductForLinq>(featured_products)?
        .with::<CustomerForLinq>(customers)?
        .with::<OrderForLinq>(orders)?
        .with::<Person>(people)?
        .with::<Feet>(feet)?
        .with::<Shoes>(shoes)
}

fn owners(data: &ArubaData) -> SetIter<'_, ArubaOwner> {
    set::all(&data.owners)
}

fn numbers(data: &ArubaData) -> SetIter<'_, NumberForLinq> {
    set::all(&data.numbers)
}

fn products(data: &ArubaData) -> SetIter<'_, ProductForLinq> {
    Box::new(data.products.iter().map(ProductKind::as_product))
}

fn featured_products(data: &ArubaData) -> SetIter<'_, FeaturedProductForLinq> {
    set::narrow(&data.products, ProductKind::as_featured)
}

fn customers(data: &ArubaData) -> SetIter<'_, CustomerForLinq> {
    set::all(&data.customers)
}

fn orders(data: &ArubaData) -> SetIter<'_, OrderForLinq> {
    set::all(&data.orders)
}

fn people(data: &ArubaData) -> SetIter<'_, Person> {
    set::all(&data.people)
}

fn feet(data: &ArubaData) -> SetIter<'_, Feet> {
    set::all(&data.feet)
}

fn shoes(data: &ArubaData) -> SetIter<'_, Shoes> {
    set::all(&data.shoes)
}
