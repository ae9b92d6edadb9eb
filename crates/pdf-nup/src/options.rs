use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal margins and the vertical margin split.
///
/// `inside_ratio` and `outside_ratio` are fractions of the page width.
/// `top_to_bottom_ratio` divides whatever vertical space is left over
/// between the top and the bottom margin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    /// Margin next to the binding
    pub inside_ratio: f32,
    /// Margin away from the binding
    pub outside_ratio: f32,
    /// Top margin divided by bottom margin
    pub top_to_bottom_ratio: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            inside_ratio: DEFAULT_INSIDE_MARGIN_RATIO,
            outside_ratio: DEFAULT_OUTSIDE_MARGIN_RATIO,
            top_to_bottom_ratio: DEFAULT_TOP_TO_BOTTOM_RATIO,
        }
    }
}

/// Gaps between the quadrants
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Spacing {
    /// Gap between columns, fraction of the page width
    pub column_ratio: f32,
    /// Gap between rows, fraction of the page height
    pub row_ratio: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            column_ratio: DEFAULT_COLUMN_SPACING_RATIO,
            row_ratio: DEFAULT_ROW_SPACING_RATIO,
        }
    }
}

/// Decoration overlay options
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Decorations {
    /// Vertical line between the two columns
    pub separator_line: bool,
    /// Sheet number centered under the separator
    pub page_numbers: bool,
}

impl Default for Decorations {
    fn default() -> Self {
        Self {
            separator_line: true,
            page_numbers: true,
        }
    }
}

impl Decorations {
    pub fn any_enabled(&self) -> bool {
        self.separator_line || self.page_numbers
    }
}

/// 4-up composition configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NupOptions {
    pub margins: Margins,
    pub spacing: Spacing,
    pub decorations: Decorations,

    /// Use the first source page as a full-width title page,
    /// followed by a blank page
    pub with_title_page: bool,
}

impl NupOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| NupError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| NupError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// Only checks each ratio on its own. Whether the ratios fit the page
    /// together is checked by [`crate::layout::Geometry::derive`] once the
    /// page size is known.
    pub fn validate(&self) -> Result<()> {
        check_ratio("inside_margin", self.margins.inside_ratio)?;
        check_ratio("outside_margin", self.margins.outside_ratio)?;
        check_ratio("column_spacing", self.spacing.column_ratio)?;
        check_ratio("row_spacing", self.spacing.row_ratio)?;
        check_ratio("margin_ratio_top_to_bottom", self.margins.top_to_bottom_ratio)?;
        Ok(())
    }
}

fn check_ratio(parameter: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(NupError::InvalidParameter {
            parameter,
            reason: format!("must be a finite number, got {}", value),
        });
    }
    if value < 0.0 {
        return Err(NupError::InvalidParameter {
            parameter,
            reason: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}
