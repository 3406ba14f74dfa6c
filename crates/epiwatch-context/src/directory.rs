//! Immutable region directory: AQI readings and known health facilities.
//!
//! Built once at startup from the built-in tables, optionally overlaid by
//! a TOML file, and shared read-only for the life of the process.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use epiwatch_common::{AirQuality, EpiwatchError, Facility, Result};

/// AQI value used for regions without a mapped reading. Lands in the
/// "Satisfactory" band.
pub const DEFAULT_AQI: u32 = 90;

/// Region keys are matched after trimming and lowercasing; an empty
/// region resolves to "unknown".
fn normalize_region(region: &str) -> String {
    let key = region.trim().to_lowercase();
    if key.is_empty() {
        "unknown".to_string()
    } else {
        key
    }
}

/// Optional TOML overlay merged over the built-in tables.
#[derive(Debug, Default, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    aqi: HashMap<String, u32>,
    #[serde(default)]
    facilities: HashMap<String, Vec<Facility>>,
}

/// Process-wide static region context. No runtime mutation.
#[derive(Debug, Clone)]
pub struct ContextDirectory {
    aqi: HashMap<String, u32>,
    facilities: HashMap<String, Vec<Facility>>,
}

impl ContextDirectory {
    /// Directory with only the built-in sample tables.
    pub fn builtin() -> Self {
        let aqi = HashMap::from([
            ("surat".to_string(), 130),
            ("ahmedabad".to_string(), 160),
            ("mumbai".to_string(), 140),
            ("delhi".to_string(), 220),
            ("pune".to_string(), 110),
        ]);

        let facilities = HashMap::from([
            (
                "surat".to_string(),
                vec![
                    Facility {
                        name: "New Civil Hospital, Surat".to_string(),
                        phone: "+91-261-XYZ-0001".to_string(),
                        address: "Ring Road, Surat".to_string(),
                    },
                    Facility {
                        name: "SMIMER Hospital".to_string(),
                        phone: "+91-261-XYZ-0002".to_string(),
                        address: "Dumas Road, Surat".to_string(),
                    },
                ],
            ),
            (
                "ahmedabad".to_string(),
                vec![
                    Facility {
                        name: "Civil Hospital, Ahmedabad".to_string(),
                        phone: "+91-79-XYZ-0001".to_string(),
                        address: "Asarwa, Ahmedabad".to_string(),
                    },
                    Facility {
                        name: "Sardar Vallabhbhai Patel Hospital".to_string(),
                        phone: "+91-79-XYZ-0002".to_string(),
                        address: "Ellisbridge, Ahmedabad".to_string(),
                    },
                ],
            ),
        ]);

        Self { aqi, facilities }
    }

    /// Built-in tables overlaid by entries from a TOML file. Overlay keys
    /// win on collision.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let file: DirectoryFile = toml::from_str(&raw)
            .map_err(|e| EpiwatchError::Config(format!("bad region directory: {e}")))?;

        let mut dir = Self::builtin();
        for (region, value) in file.aqi {
            dir.aqi.insert(normalize_region(&region), value);
        }
        for (region, list) in file.facilities {
            dir.facilities.insert(normalize_region(&region), list);
        }
        tracing::info!(
            path = %path.as_ref().display(),
            aqi_regions = dir.aqi.len(),
            facility_regions = dir.facilities.len(),
            "Loaded region directory"
        );
        Ok(dir)
    }

    /// Air quality for a region. Unknown regions get [`DEFAULT_AQI`].
    pub fn air_quality(&self, region: &str) -> AirQuality {
        let value = self
            .aqi
            .get(&normalize_region(region))
            .copied()
            .unwrap_or(DEFAULT_AQI);
        AirQuality::from_value(value)
    }

    /// Known facilities for a region. Unknown regions get an empty slice.
    pub fn facilities(&self, region: &str) -> &[Facility] {
        self.facilities
            .get(&normalize_region(region))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn aqi_region_count(&self) -> usize {
        self.aqi.len()
    }

    pub fn facility_region_count(&self) -> usize {
        self.facilities.len()
    }
}

impl Default for ContextDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
