//! Integration tests for the pipeline.
//!
//! These tests run criteria through filtering and pagination together
//! over a small realistic catalog.

use catalog_loader::Product;
use pipeline::{FilterPipeline, SearchCriteria, evaluate};
use std::num::NonZeroUsize;

fn page_size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn create_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Celular", "Electrónica", 500.0),
        Product::new(2, "Celular Pro", "Electrónica", 1200.0),
        Product::new(3, "Tablet", "Electrónica", 1800.0),
        Product::new(4, "Lámpara", "Hogar", 45.0),
        Product {
            specifications: vec!["Bluetooth".to_string()],
            ..Product::new(5, "Parlante", "Electrónica Plus", 200.0)
        },
    ]
}

#[test]
fn test_name_filter_with_one_element_pages() {
    let catalog = vec![
        Product::new(1, "Celular", "", 500.0),
        Product::new(2, "Celular Pro", "", 1200.0),
        Product::new(3, "Tablet", "", 1800.0),
    ];
    let criteria = SearchCriteria::new(0, page_size(1)).with_name("Celular");

    let result = evaluate(catalog, &criteria);

    assert_eq!(result.elements.len(), 1);
    assert_eq!(result.elements[0].id, 1);
    assert_eq!(result.total_elements, 2);
    assert_eq!(result.total_pages, 2);
}

#[test]
fn test_category_and_price_filters() {
    let catalog = vec![
        Product::new(1, "Celular", "Electrónica", 100.0),
        Product::new(2, "Celular Pro", "Electrónica", 200.0),
        Product::new(3, "Tablet", "Hogar", 300.0),
    ];
    let criteria = SearchCriteria::new(0, page_size(10))
        .with_category("Electrónica")
        .with_price_min(150.0)
        .with_price_max(250.0);

    let result = evaluate(catalog, &criteria);

    assert_eq!(result.elements.len(), 1);
    assert_eq!(result.elements[0].name, "Celular Pro");
}

#[test]
fn test_unfiltered_returns_whole_catalog_across_pages() {
    let catalog = create_catalog();

    let first = evaluate(catalog.clone(), &SearchCriteria::new(0, page_size(2)));
    let second = evaluate(catalog.clone(), &SearchCriteria::new(1, page_size(2)));
    let third = evaluate(catalog.clone(), &SearchCriteria::new(2, page_size(2)));

    assert_eq!(first.total_elements, 5);
    assert_eq!(first.total_pages, 3);

    let ids: Vec<i64> = first
        .elements
        .iter()
        .chain(&second.elements)
        .chain(&third.elements)
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_category_does_not_match_prefix() {
    let criteria = SearchCriteria::new(0, page_size(10)).with_category("electrónica");

    let result = evaluate(create_catalog(), &criteria);

    assert_eq!(result.total_elements, 3);
    assert!(result.elements.iter().all(|p| p.id != 5));
}

#[test]
fn test_no_survivors_yields_zero_pages() {
    let criteria = SearchCriteria::new(0, page_size(10)).with_name("heladera");

    let result = evaluate(create_catalog(), &criteria);

    assert!(result.elements.is_empty());
    assert_eq!(result.total_elements, 0);
    assert_eq!(result.total_pages, 0);
}

#[test]
fn test_page_past_the_end_is_empty_not_an_error() {
    let criteria = SearchCriteria::new(40, page_size(10)).with_category("Electrónica");

    let result = evaluate(create_catalog(), &criteria);

    assert!(result.elements.is_empty());
    assert_eq!(result.page, 40);
    assert_eq!(result.total_elements, 3);
    assert_eq!(result.total_pages, 1);
}

#[test]
fn test_evaluation_is_idempotent() {
    let criteria = SearchCriteria::new(0, page_size(2))
        .with_name("o")
        .with_price_max(1500.0);

    let first = evaluate(create_catalog(), &criteria);
    let second = evaluate(create_catalog(), &criteria);

    assert_eq!(first, second);
}

#[test]
fn test_survivors_keep_catalog_order() {
    let criteria = SearchCriteria::new(0, page_size(10)).with_price_min(100.0);

    let survivors = FilterPipeline::from_criteria(&criteria).apply(create_catalog());
    let ids: Vec<i64> = survivors.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![1, 2, 3, 5]);
}
