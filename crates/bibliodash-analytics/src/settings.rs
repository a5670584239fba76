//! Dashboard presentation settings

use crate::articles::DEFAULT_KEYWORD_LIMIT;
use crate::year::YearRange;

/// Cyan, indigo, purple
pub const DEFAULT_PALETTE: [&str; 3] = ["#38bdf8", "#818cf8", "#c084fc"];

/// Settings shared by every view of one dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub years: YearRange,
    /// Maximum number of ranked keywords
    pub keyword_limit: usize,
    /// Series colours, cycled by topic index
    pub palette: Vec<String>,
}

impl DashboardSettings {
    /// Colour of the `index`-th topic; the built-in palette stands in for an empty one.
    pub fn color_for(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
        } else {
            &self.palette[index % self.palette.len()]
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            years: YearRange::default(),
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.color_for(0), "#38bdf8");
        assert_eq!(settings.color_for(2), "#c084fc");
        assert_eq!(settings.color_for(3), "#38bdf8");
    }

    #[test]
    fn empty_palette_uses_builtin() {
        let settings = DashboardSettings {
            palette: Vec::new(),
            ..Default::default()
        };
        assert_eq!(settings.color_for(4), "#818cf8");
    }
}
