//! Calibration settings: the temperature range spanned by
//! the colour bar, and where to find the bar in the
//! reference image.
//!
//! Settings can be read from a JSON file such as
//!
//! ```json
//! { "MinTemp": 25.0, "MaxTemp": 42.5, "LegendRegion": "600,40,20,400" }
//! ```
//!
//! All fields are optional and fall back to the defaults
//! (20 to 100, whole image as legend).

use std::{fmt, fs::File, io::BufReader, path::Path, str::FromStr};

use anyhow::{anyhow, ensure};
use serde_derive::*;

use crate::error::{CalibrationError, InputError};

pub const DEFAULT_MIN_TEMP: f64 = 20.;
pub const DEFAULT_MAX_TEMP: f64 = 100.;

/// Temperatures at the top and bottom of the colour bar.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TemperatureBounds {
    pub min: f64,
    pub max: f64,
}

impl TemperatureBounds {
    pub fn new(min: f64, max: f64) -> Result<Self, CalibrationError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(CalibrationError::InvalidBounds(min, max));
        }
        Ok(TemperatureBounds { min, max })
    }

    /// `count` temperatures evenly spaced from `min` to `max`
    /// inclusive. The endpoints are exact.
    pub fn linspace(&self, count: usize) -> Vec<f64> {
        if count <= 1 {
            return vec![self.min; count];
        }
        let step = (self.max - self.min) / (count - 1) as f64;
        (0..count)
            .map(|i| {
                if i + 1 == count {
                    self.max
                } else {
                    self.min + i as f64 * step
                }
            })
            .collect()
    }
}

impl Default for TemperatureBounds {
    fn default() -> Self {
        TemperatureBounds {
            min: DEFAULT_MIN_TEMP,
            max: DEFAULT_MAX_TEMP,
        }
    }
}

/// Rectangle of the reference image holding the colour bar.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct LegendRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LegendRegion {
    /// Check the region is non-empty and lies within an
    /// image of the given dimensions.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), CalibrationError> {
        let fits = |start: u32, len: u32, total: u32| {
            len > 0 && start.checked_add(len).map_or(false, |end| end <= total)
        };
        if fits(self.x, self.width, width) && fits(self.y, self.height, height) {
            Ok(())
        } else {
            Err(CalibrationError::RegionOutOfBounds {
                region: self.to_string(),
                width,
                height,
            })
        }
    }
}

impl fmt::Display for LegendRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for LegendRegion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow!("invalid legend region `{}`: {}", s, e))?;
        ensure!(
            parts.len() == 4,
            "invalid legend region `{}`: expected x,y,width,height",
            s
        );
        Ok(LegendRegion {
            x: parts[0],
            y: parts[1],
            width: parts[2],
            height: parts[3],
        })
    }
}

impl std::convert::TryFrom<String> for LegendRegion {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        s.parse()
    }
}

impl From<LegendRegion> for String {
    fn from(r: LegendRegion) -> Self {
        r.to_string()
    }
}

/// Settings as read from a JSON file. Missing fields are
/// filled from the defaults, and may be overridden from the
/// command line.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub legend_region: Option<LegendRegion>,
}

impl Settings {
    pub fn from_json_path(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.into(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| InputError::Settings {
            path: path.into(),
            source,
        })
    }

    /// Values from `other` take precedence.
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            min_temp: other.min_temp.or(self.min_temp),
            max_temp: other.max_temp.or(self.max_temp),
            legend_region: other.legend_region.or(self.legend_region),
        }
    }

    pub fn bounds(&self) -> Result<TemperatureBounds, CalibrationError> {
        TemperatureBounds::new(
            self.min_temp.unwrap_or(DEFAULT_MIN_TEMP),
            self.max_temp.unwrap_or(DEFAULT_MAX_TEMP),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_matches_endpoints() {
        let bounds = TemperatureBounds::new(20., 100.).unwrap();
        assert_eq!(bounds.linspace(3), vec![20., 60., 100.]);
        assert_eq!(bounds.linspace(1), vec![20.]);

        let scale = bounds.linspace(97);
        assert_eq!(scale.len(), 97);
        assert_eq!(scale[0], 20.);
        assert_eq!(scale[96], 100.);
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn linspace_of_nothing_is_empty() {
        assert!(TemperatureBounds::default().linspace(0).is_empty());
        assert!(TemperatureBounds::new(-5., 5.).unwrap().linspace(0).is_empty());
    }

    #[test]
    fn bounds_rejects_degenerate_ranges() {
        assert!(TemperatureBounds::new(100., 20.).is_err());
        assert!(TemperatureBounds::new(20., 20.).is_err());
        assert!(TemperatureBounds::new(f64::NAN, 20.).is_err());
        assert!(TemperatureBounds::new(0., f64::INFINITY).is_err());
        assert_eq!(TemperatureBounds::default(), TemperatureBounds::new(20., 100.).unwrap());
    }

    #[test]
    fn legend_region_parsing() {
        let r: LegendRegion = "1, 2,3,4".parse().unwrap();
        assert_eq!(
            r,
            LegendRegion {
                x: 1,
                y: 2,
                width: 3,
                height: 4
            }
        );
        assert_eq!(r.to_string(), "1,2,3,4");
        assert!("1,2,3".parse::<LegendRegion>().is_err());
        assert!("a,2,3,4".parse::<LegendRegion>().is_err());
    }

    #[test]
    fn legend_region_validation() {
        let r: LegendRegion = "8,0,2,10".parse().unwrap();
        assert!(r.validate(10, 10).is_ok());
        assert!(r.validate(9, 10).is_err());
        let empty: LegendRegion = "0,0,0,10".parse().unwrap();
        assert!(empty.validate(10, 10).is_err());
        let overflow = LegendRegion {
            x: u32::MAX,
            y: 0,
            width: 2,
            height: 1,
        };
        assert!(overflow.validate(10, 10).is_err());
    }

    #[test]
    fn settings_from_json_and_merge() {
        let file: Settings =
            serde_json::from_str(r#"{ "MinTemp": 25.0, "LegendRegion": "0,0,5,50" }"#).unwrap();
        assert_eq!(file.min_temp, Some(25.));
        assert_eq!(file.max_temp, None);

        let cli = Settings {
            max_temp: Some(40.),
            ..Default::default()
        };
        let merged = file.merge(cli);
        assert_eq!(merged.bounds().unwrap(), TemperatureBounds::new(25., 40.).unwrap());
        assert_eq!(merged.legend_region.unwrap().height, 50);

        assert_eq!(Settings::default().bounds().unwrap(), TemperatureBounds::default());
    }

    #[test]
    fn settings_file_errors_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let err = Settings::from_json_path(&path).unwrap_err();
        assert!(err.to_string().contains("settings.json"));

        std::fs::write(&path, "{ not json").unwrap();
        let err = Settings::from_json_path(&path).unwrap_err();
        assert!(matches!(err, InputError::Settings { .. }));
    }
}
