use crate::columns;
use csv::StringRecord;

/// One publishing platform's full attribute row from the dataset.
///
/// All values are trimmed text; a blank cell is an empty string, never a
/// missing field. Immutable after construction, so loaded records can be
/// shared freely across concurrent derivations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlatformRecord {
    pub platform_name: String,
    pub platform_type: String,
    pub services_offered: String,
    pub ebook: EbookColumns,
    pub paperback: PrintColumns,
    pub hardcover: PrintColumns,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EbookColumns {
    pub manuscript_format: String,
    pub cover_dimensions: String,
    pub cover_resolution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrintColumns {
    pub trim_size: String,
    pub cover_file_format: String,
    pub interior_file_format: String,
    pub margins: String,
    pub bleed: String,
}

impl PlatformRecord {
    /// Build a record from a parsed CSV row, matching cells to the
    /// enumerated column names. Unrecognized columns are ignored; a column
    /// missing from the header becomes an empty string.
    pub(crate) fn from_row(headers: &StringRecord, row: &StringRecord) -> Self {
        let field = |name: &str| -> String {
            headers
                .iter()
                .position(|header| header == name)
                .and_then(|index| row.get(index))
                .unwrap_or("")
                .trim()
                .to_string()
        };

        let print = |prefix: &str| PrintColumns {
            trim_size: field(&columns::print_column(prefix, columns::TRIM_SIZE)),
            cover_file_format: field(&columns::print_column(prefix, columns::COVER_FILE_FORMAT)),
            interior_file_format: field(&columns::print_column(
                prefix,
                columns::INTERIOR_FILE_FORMAT,
            )),
            margins: field(&columns::print_column(prefix, columns::MARGINS)),
            bleed: field(&columns::print_column(prefix, columns::BLEED)),
        };

        Self {
            platform_name: field(columns::PLATFORM_NAME),
            platform_type: field(columns::PLATFORM_TYPE),
            services_offered: field(columns::SERVICES_OFFERED),
            ebook: EbookColumns {
                manuscript_format: field(columns::EBOOK_MANUSCRIPT_FORMAT),
                cover_dimensions: field(columns::EBOOK_COVER_DIMENSIONS),
                cover_resolution: field(columns::EBOOK_COVER_RESOLUTION),
            },
            paperback: print(columns::PAPERBACK_PREFIX),
            hardcover: print(columns::HARDCOVER_PREFIX),
            notes: field(columns::NOTES),
        }
    }
}
