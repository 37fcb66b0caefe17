use serde::{Deserialize, Serialize};

/// Linear unit in which all lengths of a single calculation are expressed.
/// Converts areas to square meters when pricing material, and the millimeter limits of a
/// [`GridConfig`](crate::util::GridConfig) to the unit of the surface.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Millimeter,
    Centimeter,
    Meter,
}

impl LengthUnit {
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
        }
    }

    pub fn millimeters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 10.0,
            LengthUnit::Meter => 1000.0,
        }
    }

    /// Converts an area expressed in this unit squared to square meters.
    pub fn to_square_meters(self, area: f64) -> f64 {
        let m = self.meters_per_unit();
        area * m * m
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
        }
    }
}

/// The rectangular surface (a ceiling) to be subdivided into panels.
/// `length` runs along the x-axis, `width` along the y-axis.
///
/// Construction does not check the values, see [`validation`](crate::validation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceDimensions {
    length: f64,
    width: f64,
    unit: LengthUnit,
}

impl SurfaceDimensions {
    /// Creates a surface measured in millimeters
    pub fn new(length: f64, width: f64) -> Self {
        Self::with_unit(length, width, LengthUnit::default())
    }

    pub fn with_unit(length: f64, width: f64, unit: LengthUnit) -> Self {
        Self {
            length,
            width,
            unit,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}
