//! Column names of the publishing-platforms dataset
//!
//! This module centralizes the header strings so record construction and
//! display formatting agree on spelling. Columns not listed here are
//! ignored at load time.

// =============================================================================
// General columns
// =============================================================================

pub const PLATFORM_NAME: &str = "Platform Name";
pub const PLATFORM_TYPE: &str = "Platform Type";
pub const SERVICES_OFFERED: &str = "Services Offered";
pub const NOTES: &str = "Important Notes/Differences";

// =============================================================================
// eBook columns
// =============================================================================

pub const EBOOK_MANUSCRIPT_FORMAT: &str = "eBook - Manuscript Format (EPUB, MOBI, DOCX etc.)";
pub const EBOOK_COVER_DIMENSIONS: &str = "eBook - Cover Image Dimensions (pixels)";
pub const EBOOK_COVER_RESOLUTION: &str = "eBook - Cover Image Resolution (DPI)";

// =============================================================================
// Print columns (prefixed "Paperback - " or "Hardcover - ")
// =============================================================================

pub const TRIM_SIZE: &str = "Trim Size Options (inches)";
pub const COVER_FILE_FORMAT: &str = "Cover File Format (PDF, JPG, etc.)";
pub const INTERIOR_FILE_FORMAT: &str = "Interior File Format (PDF preferred)";
pub const MARGINS: &str = "Margins (Inside, Outside, Top, Bottom - inches)";
pub const BLEED: &str = "Bleed (inches or mm)";

pub const PAPERBACK_PREFIX: &str = "Paperback";
pub const HARDCOVER_PREFIX: &str = "Hardcover";

/// Full header name for a format-prefixed print column
pub fn print_column(prefix: &str, attribute: &str) -> String {
    format!("{} - {}", prefix, attribute)
}
