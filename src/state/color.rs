//! Score-weighted color accumulation.

use std::fmt;

use super::annotation::ColorInfo;

/// Running score-weighted channel sums across all dominant colors.
///
/// Sums are kept as floats and only rounded when displayed. Rounding is
/// half-to-even, so a sum of `2.5` prints as `2` and `3.5` as `4`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AggregateColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl AggregateColor {
    /// Adds `score * channel` for each channel of `info`.
    pub fn add(&mut self, info: &ColorInfo) {
        self.red += f64::from(info.color.red) * info.score;
        self.green += f64::from(info.color.green) * info.score;
        self.blue += f64::from(info.color.blue) * info.score;
    }

    /// Channel sums rounded half-to-even.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded(&self) -> (i64, i64, i64) {
        (
            self.red.round_ties_even() as i64,
            self.green.round_ties_even() as i64,
            self.blue.round_ties_even() as i64,
        )
    }
}

impl fmt::Display for AggregateColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rounded();
        write!(f, "{r} {g} {b}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Rgb;

    #[test]
    fn test_empty_prints_zeroes() {
        assert_eq!(AggregateColor::default().to_string(), "0 0 0");
    }

    #[test]
    fn test_weighted_sum() {
        let mut agg = AggregateColor::default();
        agg.add(&ColorInfo::new(Rgb::new(200, 100, 0), 0.5));
        agg.add(&ColorInfo::new(Rgb::new(100, 40, 12), 0.25));
        assert_eq!(agg.rounded(), (125, 60, 3));
    }

    #[test]
    fn test_rounds_half_to_even() {
        // 5 * 0.5 = 2.5 -> 2, 7 * 0.5 = 3.5 -> 4, 1 * 0.5 = 0.5 -> 0
        let mut agg = AggregateColor::default();
        agg.add(&ColorInfo::new(Rgb::new(5, 7, 1), 0.5));
        assert_eq!(agg.rounded(), (2, 4, 0));
        assert_eq!(agg.to_string(), "2 4 0");
    }

    #[test]
    fn test_accumulates_across_entries_before_rounding() {
        // 0.5 + 0.5 + 0.5 = 1.5 -> 2; rounding each entry first would give 0
        let mut agg = AggregateColor::default();
        for _ in 0..3 {
            agg.add(&ColorInfo::new(Rgb::new(1, 0, 0), 0.5));
        }
        assert_eq!(agg.rounded().0, 2);
    }
}
