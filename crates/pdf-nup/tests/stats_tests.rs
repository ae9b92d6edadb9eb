mod common;

use common::create_test_document;
use pdf_nup::*;

#[test]
fn test_stats_no_pages() {
    let doc = create_test_document(0);
    let options = NupOptions::default();

    let result = calculate_statistics(&doc, &options);
    assert!(matches!(result, Err(NupError::NoPages)));
}

#[test]
fn test_stats_exact_multiple() {
    let doc = create_test_document(8);
    let stats = calculate_statistics(&doc, &NupOptions::default()).unwrap();

    assert_eq!(stats.source_pages, 8);
    assert_eq!(stats.placed_pages, 8);
    assert_eq!(stats.title_pages, 0);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_pages, 2);
    assert_eq!(stats.blank_slots, 0);
}

#[test]
fn test_stats_padding() {
    let stats = plan_statistics(5, false);

    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_pages, 2);
    assert_eq!(stats.blank_slots, 3);
}

#[test]
fn test_stats_with_title() {
    let doc = create_test_document(8);
    let options = NupOptions {
        with_title_page: true,
        ..Default::default()
    };
    let stats = calculate_statistics(&doc, &options).unwrap();

    assert_eq!(stats.placed_pages, 7);
    assert_eq!(stats.title_pages, 2);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_pages, 4);
    assert_eq!(stats.blank_slots, 1);
}

#[test]
fn test_stats_sheet_count_formula() {
    for pages in 1..=40 {
        let plain = plan_statistics(pages, false);
        assert_eq!(plain.output_pages, pages.div_ceil(4), "{} pages", pages);

        let titled = plan_statistics(pages, true);
        assert_eq!(
            titled.output_pages,
            2 + (pages - 1).div_ceil(4),
            "{} pages with title",
            pages
        );
    }
}

#[test]
fn test_stats_title_only() {
    let stats = plan_statistics(1, true);

    assert_eq!(stats.sheets, 0);
    assert_eq!(stats.output_pages, 2);
    assert_eq!(stats.blank_slots, 0);
}
