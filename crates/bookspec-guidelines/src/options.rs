use crate::types::ValidationError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Book formats an author can request guidelines for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BookFormat {
    EBook,
    Paperback,
    Hardcover,
}

impl BookFormat {
    pub fn is_print(self) -> bool {
        matches!(self, BookFormat::Paperback | BookFormat::Hardcover)
    }
}

/// Interior paper stock for print formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperType {
    #[default]
    White,
    Cream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoverFinish {
    Glossy,
    Matte,
}

/// Bleed preference; informational only, not used in derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BleedChoice {
    Yes,
    No,
    #[default]
    Unsure,
}

/// The author's selection: requested formats and platforms plus the
/// auxiliary print inputs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuidelineOptions {
    pub formats: Vec<BookFormat>,
    pub platforms: Vec<String>,

    // Print-specific inputs
    pub page_count: Option<u32>,
    pub paper_type: PaperType,
    pub book_size: Option<String>,
    pub cover_finish: Option<CoverFinish>,
    pub bleed: BleedChoice,
}

impl Default for GuidelineOptions {
    fn default() -> Self {
        Self {
            formats: Vec::new(),
            platforms: Vec::new(),
            page_count: None,
            paper_type: PaperType::default(),
            book_size: None,
            cover_finish: None,
            bleed: BleedChoice::default(),
        }
    }
}

impl GuidelineOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self, crate::ConfigError> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), crate::ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn has_format(&self, format: BookFormat) -> bool {
        self.formats.contains(&format)
    }

    /// True when Paperback or Hardcover is requested
    pub fn wants_print(&self) -> bool {
        self.formats.iter().any(|format| format.is_print())
    }

    /// Validate the selection before derivation
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.formats.is_empty() {
            return Err(ValidationError::NoFormatSelected);
        }

        if self.platforms.is_empty() {
            return Err(ValidationError::NoPlatformSelected);
        }

        if self.wants_print() && !self.page_count.is_some_and(|pages| pages > 0) {
            return Err(ValidationError::PageCountRequired);
        }

        Ok(())
    }
}
