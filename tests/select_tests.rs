//! `<select>` dropdown operations.

mod common;

use safe_automation::safe::select::{
    all_selected_options, deselect_all, deselect_by_value, first_selected_option_text,
    index_of_selected_option, options, select_by_index, select_by_indexes,
    select_by_visible_text, select_by_visible_texts, select_by_value, to_select_by,
    try_first_selected_option_text, try_to_select_by,
};
use safe_automation::{By, ElementId, Error, Outcome};

use common::{Mode, StubDriver, sample_page};

fn page() -> StubDriver {
    StubDriver::new()
        .with_select("size", By::id("size"), &["A", "B", "C"], false)
        .with_select("toppings", By::id("toppings"), &["Cheese", "Ham", "Olives"], true)
}

// ============================================================================
// Conversion
// ============================================================================

#[tokio::test]
async fn test_to_select_requires_select_tag() {
    let driver = sample_page();

    let outcome = try_to_select_by(&driver, "submit", "Id").await;
    assert!(matches!(
        outcome,
        Outcome::Failed(Error::UnexpectedTagName { .. })
    ));
    assert_eq!(outcome.status_code(), 0);
}

#[tokio::test]
async fn test_to_select_detects_multiple() {
    let driver = page();

    let single = to_select_by(&driver, "size", "Id").await.unwrap();
    let multi = to_select_by(&driver, "toppings", "Id").await.unwrap();
    assert!(!single.is_multiple());
    assert!(multi.is_multiple());
    assert_eq!(single.element(), &ElementId::new("size"));
}

#[tokio::test]
async fn test_to_select_missing_is_not_found() {
    let driver = page();

    assert_eq!(try_to_select_by(&driver, "nope", "Id").await.status_code(), -2);
}

// ============================================================================
// Single select
// ============================================================================

#[tokio::test]
async fn test_select_by_index_then_read_text() {
    common::init_tracing();
    let driver = page();
    let select = to_select_by(&driver, "size", "Id").await.unwrap();

    assert_eq!(first_selected_option_text(&select).await, Some("A".to_string()));

    let outcome = select_by_index(&select, 1).await;
    assert_eq!(outcome.status_code(), 1);
    assert_eq!(first_selected_option_text(&select).await, Some("B".to_string()));
    assert_eq!(index_of_selected_option(&select).await, Some(1));
}

#[tokio::test]
async fn test_select_by_index_out_of_range() {
    let driver = page();
    let select = to_select_by(&driver, "size", "Id").await.unwrap();

    let outcome = select_by_index(&select, 7).await;
    assert!(matches!(outcome, Outcome::Failed(Error::NoSuchOption { .. })));
    assert_eq!(outcome.status_code(), 0);

    // Selection unchanged.
    assert_eq!(first_selected_option_text(&select).await, Some("A".to_string()));
}

#[tokio::test]
async fn test_selecting_current_option_does_not_click() {
    let driver = page();
    let select = to_select_by(&driver, "size", "Id").await.unwrap();

    assert!(select_by_index(&select, 0).await.is_succeeded());
    assert!(driver.clicks().is_empty());
}

#[tokio::test]
async fn test_index_of_selected_option_with_duplicate_texts() {
    let driver = StubDriver::new().with_select("dup", By::id("dup"), &["A", "B", "A"], false);
    let select = to_select_by(&driver, "dup", "Id").await.unwrap();

    assert!(select_by_index(&select, 2).await.is_succeeded());
    assert_eq!(
        all_selected_options(&select).await,
        Some(vec![ElementId::new("dup-opt2")])
    );

    // Matched by text, so the first "A" wins.
    assert_eq!(index_of_selected_option(&select).await, Some(0));
}

#[tokio::test]
async fn test_select_by_text_and_value() {
    let driver = page();
    let select = to_select_by(&driver, "size", "Id").await.unwrap();

    assert!(select_by_visible_text(&select, "C").await.is_succeeded());
    assert_eq!(index_of_selected_option(&select).await, Some(2));

    assert!(select_by_value(&select, "b").await.is_succeeded());
    assert_eq!(index_of_selected_option(&select).await, Some(1));

    let missing = select_by_visible_text(&select, "Z").await;
    assert!(matches!(missing, Outcome::Failed(Error::NoSuchOption { .. })));
}

#[tokio::test]
async fn test_blank_text_and_value_skip() {
    let driver = page();
    let select = to_select_by(&driver, "size", "Id").await.unwrap();
    let calls = driver.calls();

    assert!(select_by_visible_text(&select, "").await.is_skipped());
    assert!(select_by_value(&select, "").await.is_skipped());
    assert!(select_by_visible_texts(&select, &["A", ""]).await.is_skipped());
    assert_eq!(driver.calls(), calls);
}

#[tokio::test]
async fn test_deselect_requires_multiple() {
    let driver = page();
    let select = to_select_by(&driver, "size", "Id").await.unwrap();

    let outcome = deselect_all(&select).await;
    assert!(matches!(outcome, Outcome::Failed(Error::NotMultiple)));
    assert_eq!(outcome.status_code(), 0);
}

#[tokio::test]
async fn test_options_in_document_order() {
    let driver = page();
    let select = to_select_by(&driver, "size", "Id").await.unwrap();

    let ids = options(&select).await.unwrap();
    let expected: Vec<ElementId> = (0..3)
        .map(|i| ElementId::new(format!("size-opt{i}")))
        .collect();
    assert_eq!(ids, expected);
}

// ============================================================================
// Multi select
// ============================================================================

#[tokio::test]
async fn test_multi_select_accumulates() {
    let driver = page();
    let select = to_select_by(&driver, "toppings", "Id").await.unwrap();

    assert_eq!(all_selected_options(&select).await, Some(Vec::new()));
    let none = try_first_selected_option_text(&select).await;
    assert!(matches!(none, Outcome::Failed(Error::NoSuchOption { .. })));

    assert!(select_by_indexes(&select, &[0, 2]).await.is_succeeded());
    assert_eq!(
        all_selected_options(&select).await,
        Some(vec![
            ElementId::new("toppings-opt0"),
            ElementId::new("toppings-opt2"),
        ])
    );

    assert!(deselect_by_value(&select, "cheese").await.is_succeeded());
    assert_eq!(
        first_selected_option_text(&select).await,
        Some("Olives".to_string())
    );

    assert!(deselect_all(&select).await.is_succeeded());
    assert_eq!(all_selected_options(&select).await, Some(Vec::new()));
}

#[tokio::test]
async fn test_multi_select_by_texts() {
    let driver = page();
    let select = to_select_by(&driver, "toppings", "Id").await.unwrap();

    let outcome = select_by_visible_texts(&select, &["Ham", "Olives"]).await;
    assert!(outcome.is_succeeded());
    assert_eq!(
        all_selected_options(&select).await.map(|o| o.len()),
        Some(2)
    );
}

// ============================================================================
// Faults
// ============================================================================

#[tokio::test]
async fn test_select_fault_is_absorbed() {
    let driver = page();
    let select = to_select_by(&driver, "size", "Id").await.unwrap();

    driver.set_mode(Mode::Fail);
    assert_eq!(select_by_index(&select, 1).await.status_code(), 0);
    assert_eq!(first_selected_option_text(&select).await, None);

    driver.set_mode(Mode::Panic);
    assert_eq!(select_by_index(&select, 1).await.status_code(), 0);
}
