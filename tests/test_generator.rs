//! Tests for menu generation

use menugen::pipeline::{generate_menus, CUISINE_LETTERS};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_two_by_two_ordering() {
    let menus = menus_for(&[2, 2]);
    assert_eq!(menus.dishes(), &["A1 B1", "A1 B2", "A2 B1", "A2 B2"]);
}

#[test]
fn test_single_cuisine() {
    let menus = menus_for(&[3]);
    assert_eq!(menus.dishes(), &["A1", "A2", "A3"]);
    assert_eq!(menus.cuisine_count(), 1);
}

#[test]
fn test_three_cuisines_last_varies_fastest() {
    let menus = menus_for(&[2, 1, 3]);
    assert_eq!(
        menus.dishes(),
        &[
            "A1 B1 C1", "A1 B1 C2", "A1 B1 C3", "A2 B1 C1", "A2 B1 C2", "A2 B1 C3",
        ]
    );
}

#[test]
fn test_zero_cuisine_matches_spec_without_it() {
    let with_zero = menus_for(&[3, 0, 5]);
    let without = menus_for(&[3, 5]);
    assert_eq!(with_zero, without);
}

#[test]
fn test_size_is_product_of_counts() {
    for _ in 0..20 {
        let counts = random_counts(4, 5);
        let menus = menus_for(&counts);
        let expected: i64 = counts.iter().product();
        assert_eq!(
            menus.len() as i64,
            expected,
            "Menu count should equal product of {:?}",
            counts
        );
        assert_eq!(Some(menus.len() as u64), spec(&counts).menu_count());
    }
}

#[test]
fn test_each_menu_has_one_dish_per_cuisine() {
    let counts = random_counts(5, 3);
    let menus = menus_for(&counts);

    for menu in menus.dishes() {
        let dishes: Vec<&str> = menu.split(' ').collect();
        assert_eq!(dishes.len(), counts.len(), "Menu '{}' has wrong size", menu);

        for (i, dish) in dishes.iter().enumerate() {
            let letter = CUISINE_LETTERS[i];
            assert!(dish.starts_with(letter), "Dish '{}' should belong to cuisine {}", dish, letter);
            let number: i64 = dish[1..].parse().unwrap();
            assert!((1..=counts[i]).contains(&number));
        }
    }
}

#[test]
fn test_menus_are_unique() {
    let menus = menus_for(&[3, 2, 4]);
    let mut sorted = menus.dishes().to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), menus.len());
}

#[test]
fn test_full_alphabet() {
    let mut counts = vec![1i64; 26];
    counts[25] = 2;
    let menus = menus_for(&counts);

    assert_eq!(menus.len(), 2);
    assert!(menus.dishes()[0].starts_with("A1 B1 C1"));
    assert!(menus.dishes()[0].ends_with("Y1 Z1"));
    assert!(menus.dishes()[1].ends_with("Y1 Z2"));
}

#[test]
fn test_iter_labels_in_order() {
    let menus = generate_menus(&spec(&[2, 2]));
    let rows: Vec<(String, &str)> = menus.iter().collect();

    assert_eq!(rows[0], ("Menu1".to_string(), "A1 B1"));
    assert_eq!(rows[3], ("Menu4".to_string(), "A2 B2"));
}

#[test]
fn test_to_dataframe_shape() {
    let menus = menus_for(&[2, 3]);
    let df = menus.to_dataframe().unwrap();

    assert_eq!(df.shape(), (6, 2));
    assert!(df.column("MenuNumber").is_ok());
    assert!(df.column("Dishes").is_ok());
}
