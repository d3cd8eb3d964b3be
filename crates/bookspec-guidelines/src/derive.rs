use crate::options::{BookFormat, GuidelineOptions, PaperType};
use crate::record::{PlatformRecord, PrintColumns};
use crate::types::ValidationError;

/// Spine inches per page for cream paper stock (common print-on-demand
/// approximation, not a physical law)
pub const CREAM_PAPER_FACTOR: f64 = 0.0025;

/// Spine inches per page for white paper stock
pub const WHITE_PAPER_FACTOR: f64 = 0.002252;

/// Display fallback for a blank format field
pub const NOT_SPECIFIED: &str = "Not specified";

/// Display fallback for a blank notes field
pub const NO_NOTES: &str = "None";

const SPINE_SUFFIX: &str = "inches (approx, varies by platform/paper)";
const PAGE_COUNT_NEEDED: &str = "Page count needed";

/// eBook block of a generated guideline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbookGuideline {
    pub manuscript_format: String,
    pub cover_dimensions: String,
    pub cover_resolution: String,
}

/// Print block of a generated guideline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintGuideline {
    pub trim_size: String,
    pub spine_width: String,
    pub cover_file_format: String,
    pub interior_file_format: String,
    pub margins: String,
    pub bleed: String,
}

/// The derived, per-platform formatting specification shown to the author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGuideline {
    pub platform_name: String,
    pub ebook: Option<EbookGuideline>,
    pub print: Option<PrintGuideline>,
    pub notes: String,
}

/// Derive one guideline per requested platform found in `records`.
///
/// Pure function of its inputs: validation failures abort before any
/// guideline is produced, requested platforms absent from the dataset are
/// silently dropped, and output order follows dataset order.
pub fn derive_guidelines(
    records: &[PlatformRecord],
    options: &GuidelineOptions,
) -> Result<Vec<GeneratedGuideline>, ValidationError> {
    options.validate()?;

    let guidelines = records
        .iter()
        .filter(|record| {
            options
                .platforms
                .iter()
                .any(|name| name == &record.platform_name)
        })
        .map(|record| derive_one(record, options))
        .collect();

    Ok(guidelines)
}

fn derive_one(record: &PlatformRecord, options: &GuidelineOptions) -> GeneratedGuideline {
    let ebook = options
        .has_format(BookFormat::EBook)
        .then(|| EbookGuideline {
            manuscript_format: or_not_specified(&record.ebook.manuscript_format),
            cover_dimensions: or_not_specified(&record.ebook.cover_dimensions),
            cover_resolution: or_not_specified(&record.ebook.cover_resolution),
        });

    let print = options.wants_print().then(|| {
        // Paperback columns win when both print formats are requested
        let source: &PrintColumns = if options.has_format(BookFormat::Paperback) {
            &record.paperback
        } else {
            &record.hardcover
        };

        PrintGuideline {
            trim_size: or_not_specified(&source.trim_size),
            spine_width: format_spine_width(options.page_count, options.paper_type),
            cover_file_format: or_not_specified(&source.cover_file_format),
            interior_file_format: or_not_specified(&source.interior_file_format),
            margins: or_not_specified(&source.margins),
            bleed: or_not_specified(&source.bleed),
        }
    });

    let notes = if record.notes.trim().is_empty() {
        NO_NOTES.to_string()
    } else {
        record.notes.clone()
    };

    GeneratedGuideline {
        platform_name: record.platform_name.clone(),
        ebook,
        print,
        notes,
    }
}

/// Approximate spine width from page count and paper stock, rendered to
/// three decimal places. Falls back to a "page count needed" notice if the
/// page count is missing or non-positive.
pub fn format_spine_width(page_count: Option<u32>, paper_type: PaperType) -> String {
    match page_count {
        Some(pages) if pages > 0 => {
            let factor = match paper_type {
                PaperType::Cream => CREAM_PAPER_FACTOR,
                PaperType::White => WHITE_PAPER_FACTOR,
            };
            format!("{:.3} {}", pages as f64 * factor, SPINE_SUFFIX)
        }
        _ => PAGE_COUNT_NEEDED.to_string(),
    }
}

fn or_not_specified(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        trimmed.to_string()
    }
}
