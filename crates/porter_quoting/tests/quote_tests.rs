use porter_quoting::{
    catalog::FulfillmentCenter,
    error::QuoteError,
    order::Order,
    quote::QuoteCalculator,
    route::CenterSet,
    weight::Kilograms,
};

use FulfillmentCenter::*;

fn order(items: &[(&str, f64)]) -> Order {
    items
        .iter()
        .map(|&(product, quantity)| (product.to_owned(), quantity))
        .collect()
}

#[test]
fn test_all_zero_quantities_quote_zero() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("A", 0.0), ("D", 0.0), ("G", 0.0)]);

    assert_eq!(
        calculator.required_centers(&order).unwrap(),
        CenterSet::EMPTY
    );
    assert_eq!(calculator.total_weight(&order).unwrap(), Kilograms::ZERO);
    assert_eq!(calculator.quote(&order).unwrap().minimum_cost, 0);
}

#[test]
fn test_single_center_order() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("G", 1.0)]);

    // C3 round trip is 4, weight 0.5 sits in the cheapest band.
    assert_eq!(
        calculator.required_centers(&order).unwrap(),
        CenterSet::from_iter([C3])
    );
    assert_eq!(calculator.quote(&order).unwrap().minimum_cost, 40);
}

#[test]
fn test_weight_is_linear_in_quantities() {
    let calculator = QuoteCalculator::standard();

    let single = order(&[("A", 1.0), ("B", 2.0), ("G", 4.0)]);
    let doubled = order(&[("A", 2.0), ("B", 4.0), ("G", 8.0)]);

    let single_weight = calculator.total_weight(&single).unwrap();
    let doubled_weight = calculator.total_weight(&doubled).unwrap();

    assert_eq!(single_weight, Kilograms::new(9.0));
    assert_eq!(doubled_weight, single_weight * 2.0);
}

#[test]
fn test_fractional_quantities() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("B", 2.5)]);

    assert_eq!(
        calculator.total_weight(&order).unwrap(),
        Kilograms::new(5.0)
    );
    // Weight exactly 5 pays rate 10 over the C1 round trip of 6.
    assert_eq!(calculator.quote(&order).unwrap().minimum_cost, 60);
}

#[test]
fn test_unknown_product_fails() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("A", 1.0), ("Z", 2.0)]);

    assert!(matches!(
        calculator.quote(&order),
        Err(QuoteError::UnknownProduct(product)) if product == "Z"
    ));
}

#[test]
fn test_unknown_product_fails_even_at_zero_quantity() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("A", 1.0), ("Z", 0.0)]);

    assert!(matches!(
        calculator.quote(&order),
        Err(QuoteError::UnknownProduct(_))
    ));
}

#[test]
fn test_negative_quantity_fails() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("A", -1.0)]);

    assert!(matches!(
        calculator.quote(&order),
        Err(QuoteError::NegativeQuantity { .. })
    ));
}

#[test]
fn test_empty_order_fails() {
    let calculator = QuoteCalculator::standard();

    assert!(matches!(
        calculator.quote(&order(&[])),
        Err(QuoteError::EmptyOrder)
    ));
}

#[test]
fn test_single_center_example() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("A", 1.0), ("B", 1.0), ("C", 1.0)]);

    // Weight 13 pays rate 15 over the C1 round trip of 6.
    assert_eq!(
        calculator.required_centers(&order).unwrap(),
        CenterSet::from_iter([C1])
    );
    assert_eq!(
        calculator.total_weight(&order).unwrap(),
        Kilograms::new(13.0)
    );
    assert_eq!(calculator.quote(&order).unwrap().minimum_cost, 90);
}

#[test]
fn test_two_center_example() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", 1.0)]);

    // Weight 25 pays rate 20 over the C1/C2 tour of 9.5.
    assert_eq!(
        calculator.required_centers(&order).unwrap(),
        CenterSet::from_iter([C1, C2])
    );
    assert_eq!(calculator.quote(&order).unwrap().minimum_cost, 190);
}

#[test]
fn test_three_center_order() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("A", 1.0), ("D", 1.0), ("G", 1.0)]);

    // Weight 15.5 pays rate 20 over the full tour of 12.
    assert_eq!(
        calculator.required_centers(&order).unwrap(),
        CenterSet::from_iter([C1, C2, C3])
    );
    assert_eq!(calculator.quote(&order).unwrap().minimum_cost, 240);
}

#[test]
fn test_truncation_discards_fractional_cost() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("D", 0.5), ("G", 2.0)]);

    // C2/C3 tour is 7.5; weight 7 pays rate 15, and 112.5 truncates to 112.
    assert_eq!(calculator.quote(&order).unwrap().minimum_cost, 112);
}

#[test]
fn test_quote_is_idempotent() {
    let calculator = QuoteCalculator::standard();
    let order = order(&[("A", 1.5), ("E", 0.25), ("I", 3.0)]);

    let first = calculator.quote(&order).unwrap();
    let second = calculator.quote(&order).unwrap();

    assert_eq!(first, second);
}
