use bookspec_guidelines::*;

fn record(name: &str) -> PlatformRecord {
    PlatformRecord {
        platform_name: name.to_string(),
        ebook: EbookColumns {
            manuscript_format: "EPUB".to_string(),
            cover_dimensions: "1600 x 2400".to_string(),
            cover_resolution: "300 DPI".to_string(),
        },
        paperback: PrintColumns {
            trim_size: "6 x 9".to_string(),
            cover_file_format: "PDF".to_string(),
            interior_file_format: "PDF preferred".to_string(),
            margins: "0.5 all sides".to_string(),
            bleed: "0.125 in".to_string(),
        },
        hardcover: PrintColumns {
            trim_size: "7 x 10".to_string(),
            ..Default::default()
        },
        notes: "Check spine text rules.".to_string(),
        ..Default::default()
    }
}

fn ebook_selection(platforms: &[&str]) -> GuidelineOptions {
    GuidelineOptions {
        formats: vec![BookFormat::EBook],
        platforms: platforms.iter().map(|name| name.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_empty_formats_rejected_first() {
    let records = vec![record("Acme")];
    let options = GuidelineOptions::default();

    assert_eq!(
        derive_guidelines(&records, &options),
        Err(ValidationError::NoFormatSelected)
    );
}

#[test]
fn test_empty_platforms_rejected() {
    let records = vec![record("Acme")];
    let options = GuidelineOptions {
        formats: vec![BookFormat::EBook],
        ..Default::default()
    };

    assert_eq!(
        derive_guidelines(&records, &options),
        Err(ValidationError::NoPlatformSelected)
    );
}

#[test]
fn test_print_format_requires_page_count() {
    let records = vec![record("Acme")];
    let mut options = GuidelineOptions {
        formats: vec![BookFormat::Paperback],
        platforms: vec!["Acme".to_string()],
        ..Default::default()
    };

    assert_eq!(
        derive_guidelines(&records, &options),
        Err(ValidationError::PageCountRequired)
    );

    options.page_count = Some(0);
    assert_eq!(
        derive_guidelines(&records, &options),
        Err(ValidationError::PageCountRequired)
    );

    options.page_count = Some(200);
    assert!(derive_guidelines(&records, &options).is_ok());
}

#[test]
fn test_ebook_needs_no_page_count() {
    let records = vec![record("Acme")];
    let guidelines = derive_guidelines(&records, &ebook_selection(&["Acme"])).unwrap();

    assert_eq!(guidelines.len(), 1);
    assert!(guidelines[0].print.is_none());

    let ebook = guidelines[0].ebook.as_ref().unwrap();
    assert_eq!(ebook.manuscript_format, "EPUB");
    assert_eq!(ebook.cover_dimensions, "1600 x 2400");
    assert_eq!(ebook.cover_resolution, "300 DPI");
}

#[test]
fn test_output_follows_dataset_order() {
    let records = vec![record("First"), record("Second"), record("Third")];
    let guidelines = derive_guidelines(&records, &ebook_selection(&["Third", "First"])).unwrap();

    let names: Vec<&str> = guidelines
        .iter()
        .map(|guideline| guideline.platform_name.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Third"]);
}

#[test]
fn test_unknown_platform_silently_dropped() {
    let records = vec![record("Acme")];
    let guidelines =
        derive_guidelines(&records, &ebook_selection(&["Acme", "No Such Press"])).unwrap();

    assert_eq!(guidelines.len(), 1);
    assert_eq!(guidelines[0].platform_name, "Acme");
}

#[test]
fn test_paperback_spine_width_cream() {
    let records = vec![record("Acme")];
    let options = GuidelineOptions {
        formats: vec![BookFormat::Paperback],
        platforms: vec!["Acme".to_string()],
        page_count: Some(250),
        paper_type: PaperType::Cream,
        ..Default::default()
    };

    let guidelines = derive_guidelines(&records, &options).unwrap();
    let print = guidelines[0].print.as_ref().unwrap();

    assert_eq!(
        print.spine_width,
        "0.625 inches (approx, varies by platform/paper)"
    );
    assert_eq!(print.trim_size, "6 x 9");
    assert!(guidelines[0].ebook.is_none());
}

#[test]
fn test_paperback_spine_width_white_default() {
    let records = vec![record("Acme")];
    let options = GuidelineOptions {
        formats: vec![BookFormat::Paperback],
        platforms: vec!["Acme".to_string()],
        page_count: Some(300),
        ..Default::default()
    };

    let guidelines = derive_guidelines(&records, &options).unwrap();
    let print = guidelines[0].print.as_ref().unwrap();

    assert_eq!(
        print.spine_width,
        "0.676 inches (approx, varies by platform/paper)"
    );
}

#[test]
fn test_paperback_wins_print_tie_break() {
    let records = vec![record("Acme")];
    let options = GuidelineOptions {
        formats: vec![BookFormat::Hardcover, BookFormat::Paperback],
        platforms: vec!["Acme".to_string()],
        page_count: Some(100),
        ..Default::default()
    };

    let guidelines = derive_guidelines(&records, &options).unwrap();
    let print = guidelines[0].print.as_ref().unwrap();

    // Paperback columns take priority over Hardcover when both are requested
    assert_eq!(print.trim_size, "6 x 9");
    assert_eq!(print.cover_file_format, "PDF");
}

#[test]
fn test_hardcover_only_uses_hardcover_columns() {
    let records = vec![record("Acme")];
    let options = GuidelineOptions {
        formats: vec![BookFormat::Hardcover],
        platforms: vec!["Acme".to_string()],
        page_count: Some(100),
        ..Default::default()
    };

    let guidelines = derive_guidelines(&records, &options).unwrap();
    let print = guidelines[0].print.as_ref().unwrap();

    assert_eq!(print.trim_size, "7 x 10");
    // The test record leaves the other hardcover columns blank
    assert_eq!(print.cover_file_format, NOT_SPECIFIED);
    assert_eq!(print.margins, NOT_SPECIFIED);
}

#[test]
fn test_blank_values_substituted() {
    let mut blank = record("Acme");
    blank.ebook.cover_dimensions = String::new();
    blank.ebook.cover_resolution = "   ".to_string();
    blank.notes = "  ".to_string();
    let records = vec![blank];

    let guidelines = derive_guidelines(&records, &ebook_selection(&["Acme"])).unwrap();
    let ebook = guidelines[0].ebook.as_ref().unwrap();

    assert_eq!(ebook.manuscript_format, "EPUB");
    assert_eq!(ebook.cover_dimensions, NOT_SPECIFIED);
    assert_eq!(ebook.cover_resolution, NOT_SPECIFIED);
    assert_eq!(guidelines[0].notes, NO_NOTES);
}

#[test]
fn test_notes_passed_through_when_present() {
    let records = vec![record("Acme")];
    let guidelines = derive_guidelines(&records, &ebook_selection(&["Acme"])).unwrap();

    assert_eq!(guidelines[0].notes, "Check spine text rules.");
}

#[test]
fn test_derivation_is_idempotent() {
    let records = vec![record("Acme"), record("Other")];
    let options = GuidelineOptions {
        formats: vec![BookFormat::EBook, BookFormat::Paperback],
        platforms: vec!["Acme".to_string(), "Other".to_string()],
        page_count: Some(180),
        paper_type: PaperType::Cream,
        ..Default::default()
    };

    let first = derive_guidelines(&records, &options).unwrap();
    let second = derive_guidelines(&records, &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_spine_width_fallback_without_page_count() {
    assert_eq!(format_spine_width(None, PaperType::White), "Page count needed");
    assert_eq!(format_spine_width(Some(0), PaperType::Cream), "Page count needed");
}
