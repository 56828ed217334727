//! Integration tests for pricing baskets against the apple and orange catalog.
//!
//! Apples are 60p, buy one get one free. Oranges are 25p, three for the price of two.

use testresult::TestResult;

use checkout::prelude::*;

const UNRECOGNISED: &str = "ERROR - the following items were not recognised: ";

/// Every ordering of `items`, built by repeatedly inserting each item at every position.
fn permutations<'a>(items: &[&'a str]) -> Vec<Vec<&'a str>> {
    items.iter().fold(vec![Vec::new()], |orderings, item| {
        orderings
            .iter()
            .flat_map(|ordering| {
                (0..=ordering.len()).map(move |position| {
                    let mut next = ordering.clone();
                    next.insert(position, *item);
                    next
                })
            })
            .collect()
    })
}

#[test]
fn zero_items_cost_nothing() -> TestResult {
    let empty: [&str; 0] = [];

    assert_eq!(checkout(&empty)?, 0, "an empty basket is free");

    Ok(())
}

#[test]
fn one_apple() -> TestResult {
    assert_eq!(checkout(&["apple"])?, 60, "an apple is 60p");

    Ok(())
}

#[test]
fn one_orange() -> TestResult {
    assert_eq!(checkout(&["orange"])?, 25, "an orange is 25p");

    Ok(())
}

#[test]
fn one_apple_and_one_orange() -> TestResult {
    assert_eq!(
        checkout(&["apple", "orange"])?,
        85,
        "one of each is charged in full"
    );

    Ok(())
}

#[test]
fn buy_one_apple_get_one_free() -> TestResult {
    assert_eq!(
        checkout(&["apple", "apple", "orange"])?,
        85,
        "the second apple is free"
    );

    Ok(())
}

#[test]
fn three_apples_and_two_oranges() -> TestResult {
    assert_eq!(
        checkout(&["apple", "apple", "orange", "apple", "orange"])?,
        170,
        "two apples charged, two oranges charged"
    );

    Ok(())
}

#[test]
fn three_oranges_for_the_price_of_two() -> TestResult {
    assert_eq!(
        checkout(&["orange", "apple", "orange", "orange"])?,
        110,
        "the third orange is free"
    );

    Ok(())
}

#[test]
fn multiple_offers_combine() -> TestResult {
    assert_eq!(
        checkout(&["orange", "apple", "orange", "orange", "apple"])?,
        110,
        "both offers apply in one basket"
    );

    Ok(())
}

#[test]
fn remainders_are_charged_in_full() -> TestResult {
    // 5 apples: 2 bundles + 1 -> 3 charged, 7 oranges: 2 bundles + 1 -> 5 charged
    let mut items = vec!["apple"; 5];
    items.extend(["orange"; 7]);

    assert_eq!(
        checkout(&items)?,
        3 * 60 + 5 * 25,
        "items outside a complete bundle are charged"
    );

    Ok(())
}

#[test]
fn one_unrecognised_item() {
    let result = checkout(&["unrecognised-item"]);

    assert!(
        matches!(
            &result,
            Err(err) if err.to_string() == format!("{UNRECOGNISED}unrecognised-item.")
        ),
        "unexpected result {result:?}"
    );
}

#[test]
fn more_than_one_unrecognised_item() {
    let result = checkout(&["one-unrecognised-item", "another-unrecognised-item"]);

    assert!(
        matches!(
            &result,
            Err(err) if err.to_string()
                == format!("{UNRECOGNISED}one-unrecognised-item,another-unrecognised-item.")
        ),
        "unexpected result {result:?}"
    );
}

#[test]
fn repeated_unrecognised_items_are_reported_each_time() {
    let result = checkout(&["pear", "apple", "kiwi", "pear"]);

    assert_eq!(
        result,
        Err(CheckoutError::UnrecognisedItems(vec![
            "pear".to_string(),
            "kiwi".to_string(),
            "pear".to_string(),
        ])),
        "every unrecognised occurrence should be reported in scan order"
    );
}

#[test]
fn any_unrecognised_item_rejects_the_whole_basket() {
    for ordering in permutations(&["apple", "orange", "pear", "apple"]) {
        assert_eq!(
            checkout(&ordering),
            Err(CheckoutError::UnrecognisedItems(vec!["pear".to_string()])),
            "ordering {ordering:?} should be rejected"
        );
    }
}

#[test]
fn total_does_not_depend_on_scan_order() -> TestResult {
    let items = ["apple", "orange", "apple", "orange", "orange", "apple"];
    let expected = checkout(&items)?;

    let orderings = permutations(&items);

    assert_eq!(orderings.len(), 720, "six items have 720 orderings");

    for ordering in orderings {
        assert_eq!(checkout(&ordering)?, expected, "ordering {ordering:?}");
    }

    Ok(())
}

#[test]
fn receipt_agrees_with_checkout() -> TestResult {
    let items = ["orange", "apple", "orange", "orange", "apple"];

    let receipt = price_basket(Catalog::reference(), &Basket::with_items(items))?;

    assert_eq!(
        receipt.total().to_minor_units(),
        checkout(&items)?,
        "receipt total should match checkout"
    );
    assert_eq!(
        receipt.subtotal().to_minor_units(),
        2 * 60 + 3 * 25,
        "subtotal charges every unit"
    );
    assert_eq!(
        receipt.savings().to_minor_units(),
        60 + 25,
        "one apple and one orange are free"
    );

    let names: Vec<&str> = receipt.lines().iter().map(ReceiptLine::name).collect();

    assert_eq!(
        names,
        vec!["orange", "apple"],
        "lines should follow first appearance"
    );

    Ok(())
}

#[test]
fn reference_fixture_prices_like_built_in_catalog() -> TestResult {
    let catalog = Fixture::from_set("reference")?;

    let items = ["apple", "apple", "orange", "apple", "orange", "orange", "orange"];

    assert_eq!(
        checkout_with(&catalog, &items)?,
        checkout(&items)?,
        "fixture and built-in catalogs should agree"
    );

    Ok(())
}

#[test]
fn extended_catalog_needs_no_new_code() -> TestResult {
    let mut catalog = Catalog::default();

    catalog.insert(CatalogEntry::new(
        "banana",
        rusty_money::Money::from_minor(20, catalog.currency()),
        Some(Offer::buy_pay(4, 3)?),
    ))?;

    // 4 bananas for the price of 3, plus one apple
    assert_eq!(
        checkout_with(&catalog, &["banana", "banana", "apple", "banana", "banana"])?,
        60 + 60,
        "three bananas and one apple"
    );

    Ok(())
}
