use serde::Serialize;

/// Default number of bins used when the caller has no preference.
pub const DEFAULT_NUM_BINS: usize = 10;

/// Errors that can occur while building a [`Histogram`].
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum HistogramError {
    #[display("cannot build a histogram from an empty sample")]
    EmptySample,
    #[display("histogram needs at least one bin")]
    ZeroBins,
    #[display("linked field has {linked_len} values but the sample has {sample_len}")]
    LengthMismatch { sample_len: usize, linked_len: usize },
    #[display("non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
    #[display("all sample values equal {value}; bins would have zero width")]
    DegenerateRange { value: f64 },
    #[display("range {min}..{max} is too wide for equal-width bins")]
    RangeOverflow { min: f64, max: f64 },
}

/// A histogram of equal-width bins spanning the full range of a sample.
///
/// Every bin is half-open (`lower <= v < upper`) except the last one, which is
/// closed so that the sample maximum is counted. Each bin also records the
/// range of a linked per-element field over the values it contains.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    /// The bins in ascending order of their bounds.
    pub bins: Vec<HistogramBin>,
    /// Width shared by all bins.
    pub bin_width: f64,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Upper bound; exclusive except for the last bin.
    pub upper: f64,
    /// The number of values that fall within this bin.
    pub count: u64,
    /// Range of the linked field among the values in this bin, `None` when the bin is empty.
    pub linked: Option<LinkedRange>,
}

/// Minimum and maximum of the linked field within one bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkedRange {
    pub min: f64,
    pub max: f64,
}

impl LinkedRange {
    fn include(range: Option<Self>, value: f64) -> Self {
        match range {
            Some(Self { min, max }) => Self {
                min: min.min(value),
                max: max.max(value),
            },
            None => Self {
                min: value,
                max: value,
            },
        }
    }
}

impl HistogramBin {
    /// Center of the bin, where a renderer would place its label.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.lower + (self.upper - self.lower) / 2.0
    }
}

impl Histogram {
    /// Creates a histogram of `num_bins` equal-width bins over `[min, max]` of `values`.
    ///
    /// When `linked` is given it must have the same length and order as
    /// `values`; each bin then reports the minimum and maximum of the linked
    /// values whose sample value fell into it. Without a linked field the
    /// sample itself is used.
    ///
    /// # Errors
    ///
    /// * [`HistogramError::EmptySample`] if `values` is empty
    /// * [`HistogramError::ZeroBins`] if `num_bins` is zero
    /// * [`HistogramError::LengthMismatch`] if `linked` differs in length from `values`
    /// * [`HistogramError::NonFinite`] if any value is NaN or infinite
    /// * [`HistogramError::DegenerateRange`] if all values are equal
    /// * [`HistogramError::RangeOverflow`] if the bin width is not representable
    ///
    /// # Examples
    ///
    /// ```
    /// # use repeatability_stats::histogram::Histogram;
    /// let errors = [0.0, 0.5, 1.0, 2.0];
    /// let final_angles = [10.0, 20.0, 30.0, 40.0];
    /// let histogram = Histogram::new(&errors, Some(&final_angles[..]), 2).unwrap();
    ///
    /// assert_eq!(histogram.bins[0].count, 2);
    /// assert_eq!(histogram.bins[1].count, 2); // 2.0 lands in the closed last bin
    /// let linked = histogram.bins[1].linked.unwrap();
    /// assert_eq!((linked.min, linked.max), (30.0, 40.0));
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn new(
        values: &[f64],
        linked: Option<&[f64]>,
        num_bins: usize,
    ) -> Result<Self, HistogramError> {
        if num_bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        let linked = linked.unwrap_or(values);
        if linked.len() != values.len() {
            return Err(HistogramError::LengthMismatch {
                sample_len: values.len(),
                linked_len: linked.len(),
            });
        }
        if let Some((index, &value)) = values
            .iter()
            .chain(linked)
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            let index = index % values.len();
            return Err(HistogramError::NonFinite { index, value });
        }

        let min = values.iter().copied().reduce(f64::min);
        let max = values.iter().copied().reduce(f64::max);
        let (Some(min), Some(max)) = (min, max) else {
            return Err(HistogramError::EmptySample);
        };
        if max <= min {
            return Err(HistogramError::DegenerateRange { value: min });
        }

        // Scale before subtracting so ranges near f64::MAX do not overflow.
        let scale = num_bins as f64;
        let bin_width = max / scale - min / scale;
        if !bin_width.is_finite() {
            return Err(HistogramError::RangeOverflow { min, max });
        }
        // Recompute each edge from `min` instead of accumulating `bin_width`,
        // and pin the last edge to `max` exactly.
        let edge = |i: usize| {
            if i == num_bins {
                max
            } else {
                min + i as f64 * bin_width
            }
        };
        let mut bins = (0..num_bins)
            .map(|i| HistogramBin {
                lower: edge(i),
                upper: edge(i + 1),
                count: 0,
                linked: None,
            })
            .collect::<Vec<_>>();

        let last = num_bins - 1;
        for (&value, &linked_value) in values.iter().zip(linked) {
            // Fraction of the range below `value`, scaled to a bin index.
            let position = (value / scale - min / scale) / bin_width * scale;
            let mut idx = (position.floor() as usize).min(last);
            // Settle rounding at the edges against the bounds actually reported.
            while idx > 0 && value < bins[idx].lower {
                idx -= 1;
            }
            while idx < last && value >= bins[idx].upper {
                idx += 1;
            }
            let bin = &mut bins[idx];
            bin.count += 1;
            bin.linked = Some(LinkedRange::include(bin.linked, linked_value));
        }

        Ok(Self { bins, bin_width })
    }

    /// Total number of values across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_values_ten_bins() {
        let values = (0..10_u32).map(f64::from).collect::<Vec<_>>();
        let histogram = Histogram::new(&values, None, 10).unwrap();

        assert_eq!(histogram.bins.len(), 10);
        assert!((histogram.bin_width - 0.9).abs() < 1e-12);
        for bin in &histogram.bins {
            assert_eq!(bin.count, 1, "bin {bin:?}");
            assert!((bin.upper - bin.lower - 0.9).abs() < 1e-9);
        }
        // The maximum falls on the closed upper edge of the last bin.
        let last = histogram.bins.last().unwrap();
        assert_eq!(last.upper, 9.0);
        assert_eq!(last.linked, Some(LinkedRange { min: 9.0, max: 9.0 }));
    }

    #[test]
    fn test_inner_edge_is_half_open() {
        // Edges: [0, 1), [1, 2]
        let histogram = Histogram::new(&[0.0, 1.0, 2.0], None, 2).unwrap();
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[1].count, 2);
    }

    #[test]
    fn test_linked_range_per_bin() {
        let errors = [0.1, 0.15, 0.9, 1.0];
        let final_angles = [90.2, 89.8, 180.4, 179.9];
        let histogram = Histogram::new(&errors, Some(&final_angles[..]), 3).unwrap();

        assert_eq!(
            histogram.bins[0].linked,
            Some(LinkedRange {
                min: 89.8,
                max: 90.2
            })
        );
        assert_eq!(histogram.bins[1].count, 0);
        assert_eq!(histogram.bins[1].linked, None);
        assert_eq!(
            histogram.bins[2].linked,
            Some(LinkedRange {
                min: 179.9,
                max: 180.4
            })
        );
        assert_eq!(histogram.total_count(), 4);
    }

    #[test]
    fn test_degenerate_range() {
        let err = Histogram::new(&[1.0; 5], None, 10).unwrap_err();
        assert_eq!(err, HistogramError::DegenerateRange { value: 1.0 });
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            Histogram::new(&[], None, 10).unwrap_err(),
            HistogramError::EmptySample
        );
        assert_eq!(
            Histogram::new(&[1.0, 2.0], None, 0).unwrap_err(),
            HistogramError::ZeroBins
        );
        assert_eq!(
            Histogram::new(&[1.0, 2.0], Some(&[1.0][..]), 4).unwrap_err(),
            HistogramError::LengthMismatch {
                sample_len: 2,
                linked_len: 1
            }
        );
        assert!(matches!(
            Histogram::new(&[1.0, f64::NAN], None, 4).unwrap_err(),
            HistogramError::NonFinite { index: 1, .. }
        ));
    }

    #[test]
    fn test_range_near_f64_limits() {
        let histogram = Histogram::new(&[-1e308, 0.0, 1e308], None, 10).unwrap();
        assert!(histogram.bin_width.is_finite());
        assert!(
            histogram
                .bins
                .iter()
                .all(|bin| bin.lower.is_finite() && bin.upper.is_finite())
        );
        assert_eq!(histogram.bins[0].lower, -1e308);
        assert_eq!(histogram.bins[9].upper, 1e308);
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[9].count, 1);
        assert_eq!(histogram.total_count(), 3);

        assert_eq!(
            Histogram::new(&[-f64::MAX, f64::MAX], None, 1).unwrap_err(),
            HistogramError::RangeOverflow {
                min: -f64::MAX,
                max: f64::MAX
            }
        );
    }

    #[test]
    fn test_midpoint() {
        let bin = HistogramBin {
            lower: 1.0,
            upper: 2.0,
            count: 0,
            linked: None,
        };
        assert_eq!(bin.midpoint(), 1.5);
    }
}
