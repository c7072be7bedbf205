use super::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn data() -> ArubaData {
    ArubaData::new().expect("aruba graph should build")
}

#[test]
fn owner_names_cycle_first_names() {
    let data = data();
    let owners: Vec<_> = data.owners.iter().collect();

    assert_eq!(owners.len(), 10);
    assert_eq!(owners[0].id, 0);
    assert_eq!(owners[4].first_name, "First Name 1");
    assert_eq!(owners[9].alias, "Owner Alias 9");
}

#[test]
fn numbers_keep_authored_order_with_generated_ids() {
    let data = data();
    let values: Vec<_> = data.numbers.iter().map(|n| (n.id, n.value)).collect();

    assert_eq!(values[0], (1, 5));
    assert_eq!(values[9], (10, 0));
}

#[test]
fn product_prices_keep_four_decimal_places() {
    let data = data();
    let tofu = data
        .products
        .iter()
        .map(ProductKind::as_product)
        .find(|p| p.product_name == "Tofu")
        .expect("tofu exists");

    assert_eq!(tofu.unit_price, Decimal::new(232_500, 4));
    assert_eq!(tofu.unit_price.to_string(), "23.2500");
}

#[test]
fn customers_list_their_orders_in_order_sequence() {
    let data = data();
    let totals: Vec<Vec<i32>> = data
        .customers
        .iter()
        .map(|c| {
            data.orders_of(c)
                .expect("orders wired")
                .iter()
                .map(|o| o.id)
                .collect()
        })
        .collect();

    assert_eq!(totals, vec![vec![1, 3], vec![2, 4], vec![5, 7], vec![6]]);
}

#[test]
fn each_person_has_feet_and_two_shoes() {
    let data = data();

    for person in &data.people {
        let feet = data.feet_of(person).expect("feet wired");
        assert_eq!(feet.id, person.id);

        let styles: Vec<_> = data
            .shoes_of(person)
            .expect("shoes wired")
            .iter()
            .map(|s| s.style.as_str())
            .collect();
        assert_eq!(styles, ["Sneakers", "Dress"]);
    }
}

#[test]
fn shoe_ids_follow_person_pairs() {
    let data = data();
    let ben = data.people.iter().find(|p| p.id == 12).expect("person 12");
    let ids: Vec<_> = data
        .shoes_of(ben)
        .expect("wired")
        .iter()
        .map(|s| (s.id, s.age))
        .collect();

    assert_eq!(ids, vec![(23, 20), (24, 21)]);
}

proptest! {
    #[test]
    fn every_person_round_trips_through_feet_and_shoes(row in 0usize..12) {
        let data = expected().expect("aruba data");
        let person = data.people.as_slice().get(row).expect("twelve people");

        let feet = data.feet_of(person).expect("feet wired");
        prop_assert_eq!(data.person_of_feet(feet).expect("back link").id, person.id);

        let shoes = data.shoes_of(person).expect("shoes wired");
        prop_assert_eq!(shoes.len(), 2);
        for pair in shoes {
            prop_assert_eq!(data.person_of_shoes(pair).expect("back link").id, person.id);
        }
    }
}
