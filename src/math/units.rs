use serde::{Deserialize, Serialize};

/// Display unit for world-space lengths.
///
/// Scene lengths are stored internally in centimetres and converted to the
/// display unit before surface areas are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinearUnit {
    Millimeter,
    #[default]
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LinearUnit {
    /// Length of one unit expressed in centimetres.
    #[must_use]
    pub fn centimeters(self) -> f64 {
        match self {
            LinearUnit::Millimeter => 0.1,
            LinearUnit::Centimeter => 1.0,
            LinearUnit::Meter => 100.0,
            LinearUnit::Kilometer => 100_000.0,
            LinearUnit::Inch => 2.54,
            LinearUnit::Foot => 30.48,
            LinearUnit::Yard => 91.44,
            LinearUnit::Mile => 160_934.4,
        }
    }

    /// Converts an internal (centimetre) length to this unit.
    #[must_use]
    pub fn internal_to_ui(self, value: f64) -> f64 {
        value / self.centimeters()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn centimeter_is_identity() {
        assert_relative_eq!(LinearUnit::Centimeter.internal_to_ui(12.5), 12.5);
    }

    #[test]
    fn converts_to_meter_and_inch() {
        assert_relative_eq!(LinearUnit::Meter.internal_to_ui(250.0), 2.5);
        assert_relative_eq!(LinearUnit::Inch.internal_to_ui(5.08), 2.0);
        assert_relative_eq!(LinearUnit::Millimeter.internal_to_ui(1.0), 10.0);
    }

    #[test]
    fn serde_names_are_lowercase() {
        let json = serde_json::to_string(&LinearUnit::Foot).unwrap();
        assert_eq!(json, "\"foot\"");
        let unit: LinearUnit = serde_json::from_str("\"meter\"").unwrap();
        assert_eq!(unit, LinearUnit::Meter);
    }
}
