//! Turning the pendulum tip into numbers
//!
//! The tip coordinates live in `[-REACH, REACH]` along both axes. A sample
//! normalizes them to `[0, 1]` and maps them affinely onto a caller-chosen
//! range. Nothing here is a statistically validated random number
//! generator; the values are only as unpredictable as the chaotic motion
//! that produced them.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::pendulum::BobPositions;
use crate::utils::constants::{REACH, SAMPLE_PRECISION};

/// How many coordinates a sample carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Tip `x` only
    #[default]
    #[serde(rename = "1D", alias = "1d")]
    OneD,
    /// Tip `x` and `y`
    #[serde(rename = "2D", alias = "2d")]
    TwoD,
}

impl Dimension {
    /// Number of values produced per sample
    pub fn value_count(&self) -> usize {
        match self {
            Dimension::OneD => 1,
            Dimension::TwoD => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::OneD => "1D",
            Dimension::TwoD => "2D",
        }
    }
}

/// Target interval of a sample
///
/// No ordering is enforced: `min > max` is accepted and yields the mirrored
/// mapping, and `min == max` collapses every sample onto that value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The unit interval `[0, 1]`
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Map a value from `[0, 1]` onto this range
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::unit()
    }
}

/// Map a physical coordinate from `[-REACH, REACH]` to `[0, 1]`
#[inline]
pub fn normalize(v: f64) -> f64 {
    (v + REACH) / (2.0 * REACH)
}

/// Map a physical coordinate from `[-REACH, REACH]` onto `range`
#[inline]
pub fn map_to_range(v: f64, range: SampleRange) -> f64 {
    range.lerp(normalize(v))
}

/// One or two mapped tip coordinates, at full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y: Option<f64>,
}

impl Sample {
    pub fn dimension(&self) -> Dimension {
        match self.y {
            Some(_) => Dimension::TwoD,
            None => Dimension::OneD,
        }
    }

    /// The mapped values, `x` first
    pub fn values(&self) -> impl Iterator<Item = f64> {
        std::iter::once(self.x).chain(self.y)
    }

    /// Display text, also what gets copied to a clipboard
    pub fn clipboard_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", SAMPLE_PRECISION, self.x)?;
        if let Some(y) = self.y {
            write!(f, ", {:.*}", SAMPLE_PRECISION, y)?;
        }
        Ok(())
    }
}

/// Sample a tip position
///
/// Pure: the same inputs always give the same sample.
pub fn sample_point(tip: Point2<f64>, dimension: Dimension, range: SampleRange) -> Sample {
    let x = map_to_range(tip.x, range);
    let y = match dimension {
        Dimension::OneD => None,
        Dimension::TwoD => Some(map_to_range(tip.y, range)),
    };
    Sample { x, y }
}

/// Sample the tip (bob 3) of a set of bob positions
pub fn sample(positions: &BobPositions, dimension: Dimension, range: SampleRange) -> Sample {
    sample_point(positions.tip(), dimension, range)
}

/// Samples in most-recent-first order
///
/// Grows without bound until [`SampleLog::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleLog {
    samples: Vec<Sample>,
}

impl SampleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a sample at the front of the log
    pub fn push(&mut self, sample: Sample) {
        self.samples.insert(0, sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// Samples, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Save the log to a CSV file, newest first
    ///
    /// # CSV Format
    ///
    /// ```csv
    /// index,x,y
    /// 0,0.4137,0.9120
    /// 1,0.0581,
    /// ```
    ///
    /// The `y` column is present only when the log holds a 2D sample, and
    /// stays empty for 1D rows. Values carry the display precision.
    pub fn save(&self, filename: &str) -> io::Result<()> {
        let filename = if filename.to_lowercase().ends_with(".csv") {
            filename.to_string()
        } else {
            format!("{}.csv", filename)
        };

        let file = std::fs::File::create(&filename)?;
        self.save_to_writer(file)
    }

    /// Write the log as CSV to any writer
    pub fn save_to_writer<W: Write>(&self, writer: W) -> io::Result<()> {
        let with_y = self.samples.iter().any(|s| s.y.is_some());
        let mut wtr = csv::Writer::from_writer(writer);

        if with_y {
            wtr.write_record(["index", "x", "y"])?;
        } else {
            wtr.write_record(["index", "x"])?;
        }

        for (i, s) in self.samples.iter().enumerate() {
            let mut record = vec![i.to_string(), format!("{:.*}", SAMPLE_PRECISION, s.x)];
            if with_y {
                record.push(
                    s.y.map(|y| format!("{:.*}", SAMPLE_PRECISION, y))
                        .unwrap_or_default(),
                );
            }
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_endpoints() {
        assert_eq!(normalize(-3.0), 0.0);
        assert_eq!(normalize(0.0), 0.5);
        assert_eq!(normalize(3.0), 1.0);
    }

    #[test]
    fn test_map_to_custom_range() {
        let range = SampleRange::new(10.0, 20.0);
        assert_relative_eq!(map_to_range(-3.0, range), 10.0);
        assert_relative_eq!(map_to_range(0.0, range), 15.0);
        assert_relative_eq!(map_to_range(1.5, range), 17.5);
    }

    #[test]
    fn test_inverted_range_mirrors() {
        let range = SampleRange::new(1.0, 0.0);
        assert_relative_eq!(map_to_range(-3.0, range), 1.0);
        assert_relative_eq!(map_to_range(3.0, range), 0.0);
        assert_relative_eq!(map_to_range(1.5, range), 0.25);
    }

    #[test]
    fn test_degenerate_range_collapses() {
        let range = SampleRange::new(4.0, 4.0);
        assert_eq!(map_to_range(-2.2, range), 4.0);
        assert_eq!(map_to_range(2.9, range), 4.0);
    }

    #[test]
    fn test_sample_point_dimensions() {
        let tip = Point2::new(0.0, 3.0);

        let one = sample_point(tip, Dimension::OneD, SampleRange::unit());
        assert_eq!(one.values().count(), 1);
        assert_eq!(one.dimension(), Dimension::OneD);
        assert_eq!(one.x, 0.5);

        let two = sample_point(tip, Dimension::TwoD, SampleRange::unit());
        assert_eq!(two.values().collect::<Vec<_>>(), vec![0.5, 1.0]);
        assert_eq!(two.dimension(), Dimension::TwoD);
    }

    #[test]
    fn test_sample_display_precision() {
        let s = Sample { x: 0.123456, y: None };
        assert_eq!(s.to_string(), "0.1235");

        let s = Sample {
            x: 1.0 / 3.0,
            y: Some(-2.5),
        };
        assert_eq!(s.clipboard_text(), "0.3333, -2.5000");
        // Storage keeps full precision
        assert_eq!(s.x, 1.0 / 3.0);
    }

    #[test]
    fn test_dimension_serde_names() {
        assert_eq!(serde_json::to_string(&Dimension::OneD).unwrap(), "\"1D\"");
        assert_eq!(serde_json::to_string(&Dimension::TwoD).unwrap(), "\"2D\"");
        let d: Dimension = serde_json::from_str("\"2d\"").unwrap();
        assert_eq!(d, Dimension::TwoD);
        assert_eq!(Dimension::TwoD.value_count(), 2);
        assert_eq!(Dimension::OneD.as_str(), "1D");
    }

    #[test]
    fn test_log_is_most_recent_first() {
        let mut log = SampleLog::new();
        assert!(log.latest().is_none());

        for i in 0..3 {
            log.push(Sample {
                x: i as f64,
                y: None,
            });
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.latest().unwrap().x, 2.0);
        let xs: Vec<f64> = log.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 0.0]);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_csv_one_dimensional() {
        let mut log = SampleLog::new();
        log.push(Sample { x: 0.25, y: None });
        log.push(Sample { x: 0.5, y: None });

        let mut buffer = Vec::new();
        log.save_to_writer(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(csv, "index,x\n0,0.5000\n1,0.2500\n");
    }

    #[test]
    fn test_log_csv_mixed_dimensions() {
        let mut log = SampleLog::new();
        log.push(Sample { x: 0.1, y: None });
        log.push(Sample {
            x: 0.2,
            y: Some(0.9),
        });

        let mut buffer = Vec::new();
        log.save_to_writer(&mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(csv, "index,x,y\n0,0.2000,0.9000\n1,0.1000,\n");
    }
}
