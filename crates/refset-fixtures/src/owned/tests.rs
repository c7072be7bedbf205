use super::*;
use refset_core::value::Value;
use time::macros::datetime;

fn data() -> OwnedQueryData {
    OwnedQueryData::new().expect("owned graph should build")
}

#[test]
fn every_order_is_wired_to_its_owner() {
    let data = data();

    for row in data.persons() {
        let person = row.as_person();
        for order in &person.orders {
            let client = data.client_of(order).expect("client wired");
            assert_eq!(client.id, person.id);
        }
    }
}

#[test]
fn every_country_points_at_earth() {
    let data = data();

    for row in data.persons() {
        for address in row.addresses() {
            let planet = data
                .planet_of_country(&address.country)
                .expect("country wired");
            assert_eq!(planet.name, "Earth");
        }
    }
}

#[test]
fn planetary_links_are_mutual() {
    let data = data();
    let earth = data.planets.iter().next().expect("one planet");
    let sol = data.star_of(earth).expect("star wired");

    assert_eq!(sol.name, "Sol");
    let planets = data.planets_of(sol).expect("planets wired");
    assert_eq!(planets, vec![earth]);

    let moons = data.moons_of(earth).expect("moons wired");
    assert_eq!(moons.len(), 1);
    assert_eq!(data.planet_of_moon(moons[0]).expect("moon wired"), earth);
}

#[test]
fn fink_reaches_barton_with_owned_throned() {
    let data = data();
    let fink = data.finks.iter().next().expect("one fink");
    let barton = data
        .barton_of(fink)
        .expect("link resolves")
        .expect("barton set");

    assert_eq!(barton.throned.value, 42);
    assert_eq!(barton.throned.property, "Property");
}

#[test]
fn indexer_properties_read_through_bags() {
    let data = data();
    let mona = data.persons().iter().next().expect("person 1").as_person();

    assert_eq!(
        mona.property("Name").expect("Name declared"),
        &Value::from("Mona Cy")
    );
    assert_eq!(
        mona.person_address.property("ZipCode").expect("declared"),
        &Value::Int(38654)
    );
    assert_eq!(
        mona.orders[0].property("OrderDate").expect("declared"),
        &Value::from(datetime!(2018-07-11 10:01:41))
    );
    assert!(mona.property("Nickname").is_err());
}

#[test]
fn branch_address_line_is_unset_not_missing() {
    let data = data();
    let branch = data.persons().iter().find_map(OwnedPersonKind::as_branch).expect("branch");

    assert!(
        branch
            .branch_address
            .property("AddressLine")
            .expect("declared")
            .is_null()
    );
}

#[test]
fn unwired_order_client_is_reported() {
    let mut data = data();
    let link = data.persons.link_at(0).expect("row 0");
    data.persons
        .get_mut(link)
        .expect("row 0")
        .as_person_mut()
        .orders[0]
        .client = None;

    let err = data.validate().expect_err("client missing");
    assert!(err.message.contains("Client"));
}
