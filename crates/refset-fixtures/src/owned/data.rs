//! Literal rows of the owned-entity graph, in construction order.

use crate::owned::model::{
    Barton, Branch, Element, Fink, LeafA, LeafAAddress, LeafB, LeafBAddress, Moon, Order,
    OrderDetail, OwnedAddress, OwnedCountry, OwnedPerson, OwnedPersonKind, Planet, Star, Throned,
};
use refset_core::{arena::Arena, error::InternalError, properties::PropertyBag};
use time::{PrimitiveDateTime, macros::datetime};

const EARTH: i32 = 1;
const SOL: i32 = 1;

// ---------------------------------------------------------------------------
// Value objects
// ---------------------------------------------------------------------------

fn country(name: &str) -> OwnedCountry {
    OwnedCountry {
        name: name.to_string(),
        planet_id: EARTH,
        planet: None,
    }
}

fn address(country_name: &str) -> OwnedAddress {
    OwnedAddress {
        place_type: "Land".to_string(),
        country: country(country_name),
        props: PropertyBag::of::<OwnedAddress>(),
    }
}

fn street_address(country_name: &str, line: &str, zip: i32) -> Result<OwnedAddress, InternalError> {
    let props = PropertyBag::of::<OwnedAddress>()
        .with("AddressLine", line)?
        .with("ZipCode", zip)?;

    Ok(OwnedAddress {
        props,
        ..address(country_name)
    })
}

fn order(
    id: i32,
    client_id: i32,
    date: PrimitiveDateTime,
    details: &[&str],
) -> Result<Order, InternalError> {
    Ok(Order {
        id,
        client_id,
        client: None,
        details: details
            .iter()
            .map(|detail| OrderDetail {
                detail: (*detail).to_string(),
            })
            .collect(),
        props: PropertyBag::of::<Order>().with("OrderDate", date)?,
    })
}

fn person(
    id: i32,
    name: &str,
    person_address: OwnedAddress,
    orders: Vec<Order>,
) -> Result<OwnedPerson, InternalError> {
    Ok(OwnedPerson {
        id,
        person_address,
        orders,
        props: PropertyBag::of::<OwnedPerson>().with("Name", name)?,
    })
}

// ---------------------------------------------------------------------------
// Roots
// ---------------------------------------------------------------------------

pub(super) fn stars() -> Arena<Star> {
    let composition = [("H", "Hydrogen"), ("He", "Helium")]
        .into_iter()
        .map(|(id, name)| Element {
            id: id.to_string(),
            name: name.to_string(),
            star_id: SOL,
        })
        .collect();

    Arena::from(vec![Star {
        id: SOL,
        name: "Sol".to_string(),
        composition,
        planets: Vec::new(),
    }])
}

pub(super) fn planets() -> Arena<Planet> {
    Arena::from(vec![Planet {
        id: EARTH,
        name: "Earth".to_string(),
        star_id: SOL,
        star: None,
        moons: Vec::new(),
    }])
}

pub(super) fn moons() -> Arena<Moon> {
    Arena::from(vec![Moon {
        id: 1,
        planet_id: EARTH,
        diameter: 3474,
        planet: None,
    }])
}

pub(super) fn bartons() -> Arena<Barton> {
    Arena::from(vec![Barton {
        id: 1,
        simple: "Simple".to_string(),
        throned: Throned {
            value: 42,
            property: "Property".to_string(),
        },
    }])
}

pub(super) fn finks() -> Arena<Fink> {
    Arena::from(vec![Fink {
        id: 1,
        barton: None,
    }])
}

/// People with their owned addresses and orders; `client` links are unset.
pub(super) fn persons() -> Result<Arena<OwnedPersonKind>, InternalError> {
    let mona = person(
        1,
        "Mona Cy",
        street_address("USA", "804 S. Lakeshore Road", 38654)?,
        vec![
            order(
                -10,
                1,
                datetime!(2018-07-11 10:01:41),
                &["Discounted Order", "Full Price Order"],
            )?,
            order(-11, 1, datetime!(2015-03-03 04:37:59), &[])?,
        ],
    )?;

    let antigonus = Branch {
        person: person(
            2,
            "Antigonus Mitul",
            street_address("USA", "7 Church Dr.", 28655)?,
            vec![order(-20, 2, datetime!(2015-05-25 20:35:48), &["Free Order"])?],
        )?,
        branch_address: address("Canada"),
    };

    let madalena = LeafA {
        branch: Branch {
            person: person(
                3,
                "Madalena Morana",
                street_address("Mexico", "72 Hickory Rd.", 7728)?,
                vec![order(-30, 3, datetime!(2014-11-10 04:32:42), &["Internal Order"])?],
            )?,
            branch_address: address("Canada"),
        },
        leaf_a_address: LeafAAddress {
            address: address("Mexico"),
            leaf_type: 1,
        },
    };

    let vanda = LeafB {
        person: person(
            4,
            "Vanda Waldemar",
            street_address("USA", "79 Main St.", 29293)?,
            vec![
                order(-40, 4, datetime!(2016-04-25 19:23:56), &["Bulk Order"])?,
                order(-41, 4, datetime!(2017-01-21 11:33:07), &["Rush Order"])?,
            ],
        )?,
        leaf_b_address: LeafBAddress {
            address: address("Panama"),
            leaf_b_type: "Green".to_string(),
        },
    };

    Ok(Arena::from(vec![
        OwnedPersonKind::Person(mona),
        OwnedPersonKind::Branch(antigonus),
        OwnedPersonKind::LeafA(madalena),
        OwnedPersonKind::LeafB(vanda),
    ]))
}
