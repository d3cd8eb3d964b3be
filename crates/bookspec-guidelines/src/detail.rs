//! Full per-platform detail view
//!
//! Projects one record's known columns into titled display sections,
//! dropping values that carry no information.

use crate::columns;
use crate::record::{PlatformRecord, PrintColumns};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: String,
    pub entries: Vec<DetailEntry>,
}

/// Exact-name lookup into the loaded dataset
pub fn find_platform<'a>(
    records: &'a [PlatformRecord],
    name: &str,
) -> Option<&'a PlatformRecord> {
    records.iter().find(|record| record.platform_name == name)
}

/// Group a record's columns into display sections. Entries whose value is
/// blank, "N/A", or "No" are omitted, as are sections left empty.
pub fn detail_sections(record: &PlatformRecord) -> Vec<DetailSection> {
    let mut sections = Vec::new();

    push_section(
        &mut sections,
        "General Information",
        vec![
            (columns::PLATFORM_TYPE.to_string(), record.platform_type.clone()),
            (
                columns::SERVICES_OFFERED.to_string(),
                record.services_offered.clone(),
            ),
            (columns::NOTES.to_string(), record.notes.clone()),
        ],
    );

    push_section(
        &mut sections,
        "eBook Specifications",
        vec![
            (
                columns::EBOOK_MANUSCRIPT_FORMAT.to_string(),
                record.ebook.manuscript_format.clone(),
            ),
            (
                columns::EBOOK_COVER_DIMENSIONS.to_string(),
                record.ebook.cover_dimensions.clone(),
            ),
            (
                columns::EBOOK_COVER_RESOLUTION.to_string(),
                record.ebook.cover_resolution.clone(),
            ),
        ],
    );

    push_section(
        &mut sections,
        "Paperback Specifications",
        print_entries(columns::PAPERBACK_PREFIX, &record.paperback),
    );

    push_section(
        &mut sections,
        "Hardcover Specifications",
        print_entries(columns::HARDCOVER_PREFIX, &record.hardcover),
    );

    sections
}

/// Display label for a column: the format prefix and any parenthesized
/// qualifier are stripped, then the remainder is trimmed.
pub fn display_label(column: &str) -> String {
    let stripped = column
        .strip_prefix("eBook - ")
        .or_else(|| column.strip_prefix("Paperback - "))
        .or_else(|| column.strip_prefix("Hardcover - "))
        .unwrap_or(column);

    let mut label = String::with_capacity(stripped.len());
    let mut depth = 0usize;
    for ch in stripped.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => label.push(ch),
            _ => {}
        }
    }

    label.trim().to_string()
}

fn print_entries(prefix: &str, print: &PrintColumns) -> Vec<(String, String)> {
    vec![
        (
            columns::print_column(prefix, columns::TRIM_SIZE),
            print.trim_size.clone(),
        ),
        (
            columns::print_column(prefix, columns::COVER_FILE_FORMAT),
            print.cover_file_format.clone(),
        ),
        (
            columns::print_column(prefix, columns::INTERIOR_FILE_FORMAT),
            print.interior_file_format.clone(),
        ),
        (
            columns::print_column(prefix, columns::MARGINS),
            print.margins.clone(),
        ),
        (
            columns::print_column(prefix, columns::BLEED),
            print.bleed.clone(),
        ),
    ]
}

fn push_section(sections: &mut Vec<DetailSection>, title: &str, raw: Vec<(String, String)>) {
    let entries: Vec<DetailEntry> = raw
        .into_iter()
        .filter(|(_, value)| is_displayable(value))
        .map(|(column, value)| DetailEntry {
            label: display_label(&column),
            value,
        })
        .collect();

    if !entries.is_empty() {
        sections.push(DetailSection {
            title: title.to_string(),
            entries,
        });
    }
}

fn is_displayable(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case("n/a") && !value.eq_ignore_ascii_case("no")
}
