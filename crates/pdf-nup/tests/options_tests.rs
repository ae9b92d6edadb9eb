use pdf_nup::*;

#[test]
fn test_defaults() {
    let options = NupOptions::default();
    assert_eq!(options.margins.inside_ratio, 0.06);
    assert_eq!(options.margins.outside_ratio, 0.0);
    assert_eq!(options.margins.top_to_bottom_ratio, 0.75);
    assert_eq!(options.spacing.column_ratio, 0.0095);
    assert_eq!(options.spacing.row_ratio, 0.03);
    assert!(!options.with_title_page);
    assert!(options.decorations.separator_line);
    assert!(options.decorations.page_numbers);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_negative_ratio() {
    let mut options = NupOptions::default();
    options.spacing.column_ratio = -0.01;

    match options.validate() {
        Err(NupError::InvalidParameter { parameter, reason }) => {
            assert_eq!(parameter, "column_spacing");
            assert!(reason.contains("negative"));
        }
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }
}

#[test]
fn test_validation_non_finite_ratio() {
    let mut options = NupOptions::default();
    options.margins.top_to_bottom_ratio = f32::NAN;

    match options.validate() {
        Err(NupError::InvalidParameter { parameter, .. }) => {
            assert_eq!(parameter, "margin_ratio_top_to_bottom");
        }
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }
}

#[test]
fn test_validation_zero_ratios_allowed() {
    let options = NupOptions {
        margins: Margins {
            inside_ratio: 0.0,
            outside_ratio: 0.0,
            top_to_bottom_ratio: 0.0,
        },
        spacing: Spacing {
            column_ratio: 0.0,
            row_ratio: 0.0,
        },
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_decorations_any_enabled() {
    let mut decorations = Decorations::default();
    assert!(decorations.any_enabled());

    decorations.separator_line = false;
    assert!(decorations.any_enabled());

    decorations.page_numbers = false;
    assert!(!decorations.any_enabled());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = NupOptions::default();
    options.margins.inside_ratio = 0.08;
    options.spacing.row_ratio = 0.05;
    options.with_title_page = true;
    options.decorations.page_numbers = false;

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = NupOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "with_title_page": true }"#).unwrap();

    let loaded = NupOptions::load(temp_file.path()).await.unwrap();
    assert!(loaded.with_title_page);
    assert_eq!(loaded.margins, Margins::default());
    assert_eq!(loaded.decorations, Decorations::default());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    match NupOptions::load(temp_file.path()).await {
        Err(NupError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
