//! Fixed year range and the tolerant "all or one year" filter

use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive, ascending range of years shown on the dashboard.
///
/// The first year is the growth baseline, the last the comparison year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Returns `None` when `start > end`.
    pub fn new(start: i32, end: i32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    /// Growth baseline year
    pub fn baseline(&self) -> i32 {
        self.start
    }

    /// Growth comparison year
    pub fn comparison(&self) -> i32 {
        self.end
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        self.end.abs_diff(self.start) as usize + 1
    }

    /// Always false: a range holds at least one year.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: 2020,
            end: 2025,
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Year selection for the volume chart and the article list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    /// Every year of the range
    #[default]
    All,
    /// One year inside the range
    Year(i32),
    /// Unparseable or out-of-range input; matches no stat
    Unmatched(String),
}

impl YearFilter {
    /// Parse UI input without ever failing.
    ///
    /// `"all"` (any case, surrounding whitespace ignored) selects everything,
    /// an integer inside `range` selects that year, anything else becomes
    /// [`YearFilter::Unmatched`].
    pub fn parse(raw: &str, range: YearRange) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        match trimmed.parse::<i32>() {
            Ok(year) if range.contains(year) => Self::Year(year),
            _ => {
                log::debug!("year filter {raw:?} matches no year in {range}");
                Self::Unmatched(raw.to_string())
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The single selected year, if any.
    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Year(year) => Some(*year),
            _ => None,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Year(year) => write!(f, "{year}"),
            Self::Unmatched(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range() {
        let range = YearRange::default();
        assert_eq!(range.baseline(), 2020);
        assert_eq!(range.comparison(), 2025);
        assert_eq!(range.len(), 6);
        assert_eq!(range.years().collect::<Vec<_>>(), [2020, 2021, 2022, 2023, 2024, 2025]);
        assert_eq!(range.to_string(), "2020-2025");
    }

    #[test]
    fn range_rejects_descending() {
        assert!(YearRange::new(2025, 2020).is_none());
        let single = YearRange::new(2023, 2023).unwrap();
        assert_eq!(single.len(), 1);
        assert!(single.contains(2023));
        assert!(!single.contains(2024));
        assert!(!single.is_empty());
    }

    #[test]
    fn extreme_bounds_len() {
        let wide = YearRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(wide.len(), u32::MAX as usize + 1);
    }

    #[test]
    fn parse_all_variants() {
        let range = YearRange::default();
        assert_eq!(YearFilter::parse("all", range), YearFilter::All);
        assert_eq!(YearFilter::parse(" ALL ", range), YearFilter::All);
    }

    #[test]
    fn parse_year_in_range() {
        let range = YearRange::default();
        assert_eq!(YearFilter::parse("2021", range), YearFilter::Year(2021));
        assert_eq!(YearFilter::parse(" 2025\n", range), YearFilter::Year(2025));
        assert_eq!(YearFilter::parse("2021", range).year(), Some(2021));
    }

    #[test]
    fn parse_out_of_range_or_garbage_is_unmatched() {
        let range = YearRange::default();
        assert_eq!(
            YearFilter::parse("2019", range),
            YearFilter::Unmatched("2019".to_string())
        );
        assert_eq!(
            YearFilter::parse("twenty", range),
            YearFilter::Unmatched("twenty".to_string())
        );
        assert_eq!(YearFilter::parse("", range).year(), None);
    }

    #[test]
    fn display_round_trips_input() {
        let range = YearRange::default();
        assert_eq!(YearFilter::All.to_string(), "all");
        assert_eq!(YearFilter::Year(2022).to_string(), "2022");
        assert_eq!(YearFilter::parse("abc", range).to_string(), "abc");
    }
}
