//! Orientation classification from pixel dimensions.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

const LANDSCAPE_RATIO: f64 = 1.77;
const PORTRAIT_RATIO: f64 = 0.5625;
const RATIO_TOLERANCE: f64 = 0.1;

/// Three-way playback-shape label derived from a video's aspect ratio.
/// The label prefixes the storage key, so the serialized form is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Other,
}

impl Orientation {
    /// Classify pixel dimensions, first match wins: within 0.1 of 1.77 is
    /// landscape, within 0.1 of 0.5625 is portrait, anything else is other.
    pub fn classify(width: u32, height: u32) -> Self {
        if height == 0 {
            return Orientation::Other;
        }
        let ratio = width as f64 / height as f64;
        if within_band(ratio, LANDSCAPE_RATIO) {
            Orientation::Landscape
        } else if within_band(ratio, PORTRAIT_RATIO) {
            Orientation::Portrait
        } else {
            Orientation::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Other => "other",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Band edges are inclusive; the epsilon keeps edge ratios like 1.67 from
/// dropping out of the band through float rounding.
fn within_band(ratio: f64, target: f64) -> bool {
    (ratio - target).abs() <= RATIO_TOLERANCE + f64::EPSILON * 8.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_resolutions() {
        assert_eq!(Orientation::classify(1920, 1080), Orientation::Landscape);
        assert_eq!(Orientation::classify(1280, 720), Orientation::Landscape);
        assert_eq!(Orientation::classify(1080, 1920), Orientation::Portrait);
        assert_eq!(Orientation::classify(720, 1280), Orientation::Portrait);
        assert_eq!(Orientation::classify(1000, 1000), Orientation::Other);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        // ratio 1.67 and 1.87 both sit exactly on the landscape band edge
        assert_eq!(Orientation::classify(167, 100), Orientation::Landscape);
        assert_eq!(Orientation::classify(187, 100), Orientation::Landscape);
    }

    #[test]
    fn test_ratios_outside_bands() {
        // 3:2 is neither landscape-band nor portrait-band
        assert_eq!(Orientation::classify(150, 100), Orientation::Other);
        assert_eq!(Orientation::classify(100, 100), Orientation::Other);
        // square-ish portrait stays out of the 9:16 band
        assert_eq!(Orientation::classify(100, 130), Orientation::Other);
    }

    #[test]
    fn test_degenerate_dimensions() {
        assert_eq!(Orientation::classify(1920, 0), Orientation::Other);
        assert_eq!(Orientation::classify(0, 1080), Orientation::Other);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
        assert_eq!(Orientation::Portrait.as_str(), "portrait");
        assert_eq!(
            serde_json::to_string(&Orientation::Other).unwrap(),
            "\"other\""
        );
    }
}
