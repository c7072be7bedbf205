//! Literal rows of the Aruba group-by graph.
//!
//! Keys the store would generate (numbers, products) are assigned 1..n in
//! authored order.

use crate::aruba::model::{
    ArubaOwner, CustomerForLinq, FeaturedProductForLinq, Feet, NumberForLinq, OrderForLinq,
    Person, ProductForLinq, ProductKind, Shoes,
};
use refset_core::arena::Arena;
use rust_decimal::Decimal;
use time::{PrimitiveDateTime, macros::datetime};

const NUMBERS: [(i32, &str); 10] = [
    (5, "Five"),
    (4, "Four"),
    (1, "One"),
    (3, "Three"),
    (9, "Nine"),
    (8, "Eight"),
    (6, "Six"),
    (7, "Seven"),
    (2, "Two"),
    (0, "Zero"),
];

// (name, category, unit price in ten-thousandths, units in stock, featured)
const PRODUCTS: [(&str, &str, i64, i32, bool); 21] = [
    ("Chai", "Beverages", 18_0000, 39, false),
    ("Chang", "Beverages", 19_0000, 17, false),
    ("Aniseed Syrup", "Condiments", 10_0000, 13, false),
    ("Chef Anton's Cajun Seasoning", "Condiments", 22_0000, 53, false),
    ("Chef Anton's Gumbo Mix", "Condiments", 21_3500, 0, false),
    ("Grandma's Boysenberry Spread", "Condiments", 25_0000, 120, false),
    ("Uncle Bob's Organic Dried Pears", "Produce", 30_0000, 15, false),
    ("Northwoods Cranberry Sauce", "Condiments", 40_0000, 6, true),
    ("Mishi Kobe Niku", "Meat/Poultry", 97_0000, 29, false),
    ("Ikura", "Seafood", 31_0000, 31, false),
    ("Queso Cabrales", "Dairy Products", 21_0000, 22, false),
    ("Queso Manchego La Pastora", "Dairy Products", 38_0000, 86, true),
    ("Konbu", "Seafood", 6_0000, 24, false),
    ("Tofu", "Produce", 23_2500, 35, false),
    ("Genen Shouyu", "Condiments", 15_5000, 39, false),
    ("Pavlova", "Confections", 17_4500, 29, false),
    ("Alice Mutton", "Meat/Poultry", 39_0000, 0, true),
    ("Carnarvon Tigers", "Seafood", 62_5000, 42, true),
    ("Teatime Chocolate Biscuits", "Confections", 9_2000, 25, false),
    ("Sir Rodney's Marmalade", "Confections", 81_0000, 40, false),
    ("Sir Rodney's Scones", "Confections", 10_0000, 3, false),
];

const CUSTOMERS: [(i32, &str, &str); 4] = [
    (1, "WA", "Microsoft"),
    (2, "WA", "NewMonics"),
    (3, "OR", "NewMonics"),
    (4, "CA", "Microsoft"),
];

// (id, total, order date, customer row)
const ORDERS: [(i32, i64, PrimitiveDateTime, usize); 7] = [
    (1, 111, datetime!(1997-09-03 0:00), 0),
    (2, 222, datetime!(2006-09-03 0:00), 1),
    (3, 333, datetime!(1999-09-03 0:00), 0),
    (4, 444, datetime!(2010-09-03 0:00), 1),
    (5, 2555, datetime!(2009-09-03 0:00), 2),
    (6, 6555, datetime!(1976-09-03 0:00), 3),
    (7, 555, datetime!(1985-09-03 0:00), 2),
];

// (first name, middle initial, last name, age, feet size, sneakers age, dress age)
const PEOPLE: [(&str, &str, &str, i32, i32, i32, i32); 12] = [
    ("Jim", "A", "Bob", 20, 11, 19, 20),
    ("Tom", "A", "Bob", 20, 12, 21, 19),
    ("Ben", "Q", "Bob", 20, 12, 20, 21),
    ("Jim", "Q", "Jon", 20, 11, 19, 20),
    ("Tom", "A", "Jon", 21, 11, 21, 19),
    ("Ben", "A", "Jon", 21, 12, 20, 21),
    ("Jim", "Q", "Don", 21, 12, 19, 20),
    ("Tom", "Q", "Don", 21, 11, 21, 19),
    ("Ben", "A", "Don", 21, 11, 20, 21),
    ("Jim", "A", "Zee", 21, 12, 19, 20),
    ("Tom", "Q", "Zee", 21, 12, 21, 19),
    ("Ben", "Q", "Zee", 21, 11, 20, 21),
];

/// Row count of the owner table; owner ids run 0..OWNERS.
const OWNERS: i32 = 10;

pub(super) fn owners() -> Arena<ArubaOwner> {
    (0..OWNERS)
        .map(|i| ArubaOwner {
            id: i,
            first_name: format!("First Name {}", i % 3),
            last_name: format!("Last Name {i}"),
            alias: format!("Owner Alias {i}"),
        })
        .collect()
}

pub(super) fn numbers() -> Arena<NumberForLinq> {
    (1..)
        .zip(NUMBERS)
        .map(|(id, (value, name))| NumberForLinq {
            id,
            value,
            name: name.to_string(),
        })
        .collect()
}

pub(super) fn products() -> Arena<ProductKind> {
    (1..)
        .zip(PRODUCTS)
        .map(|(id, (name, category, price, stock, featured))| {
            let product = ProductForLinq {
                id,
                product_name: name.to_string(),
                category: category.to_string(),
                unit_price: Decimal::new(price, 4),
                units_in_stock: stock,
            };

            if featured {
                ProductKind::Featured(FeaturedProductForLinq { product })
            } else {
                ProductKind::Product(product)
            }
        })
        .collect()
}

pub(super) fn customers() -> Arena<CustomerForLinq> {
    CUSTOMERS
        .into_iter()
        .map(|(id, region, company_name)| CustomerForLinq {
            id,
            region: region.to_string(),
            company_name: company_name.to_string(),
            orders: Vec::new(),
        })
        .collect()
}

/// Orders with the customer row each one belongs to.
pub(super) fn orders() -> (Arena<OrderForLinq>, Vec<usize>) {
    ORDERS
        .into_iter()
        .map(|(id, total, order_date, customer)| {
            let order = OrderForLinq {
                id,
                total: Decimal::from(total),
                order_date,
                customer: None,
            };

            (order, customer)
        })
        .unzip()
}

pub(super) fn people() -> Arena<Person> {
    (1..)
        .zip(PEOPLE)
        .map(|(id, (first_name, middle_initial, last_name, age, ..))| Person {
            id,
            age,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_initial: middle_initial.to_string(),
            feet: None,
            shoes: Vec::new(),
        })
        .collect()
}

/// One pair of feet per person, sharing the person's id.
pub(super) fn feet() -> Arena<Feet> {
    (1..)
        .zip(PEOPLE)
        .map(|(id, (.., size, _, _))| Feet {
            id,
            size,
            person: None,
        })
        .collect()
}

/// Sneakers then dress shoes for each person, ids 1..=24.
pub(super) fn shoes() -> Arena<Shoes> {
    (0..)
        .zip(PEOPLE)
        .flat_map(|(row, (.., sneakers, dress))| {
            [("Sneakers", sneakers), ("Dress", dress)]
                .into_iter()
                .zip(1..)
                .map(move |((style, age), n)| Shoes {
                    id: row * 2 + n,
                    age,
                    style: style.to_string(),
                    person: None,
                })
        })
        .collect()
}
