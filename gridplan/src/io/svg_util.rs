use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Numbers every panel with its (column, row) position
    pub panel_labels: bool,
    /// Adds a caption with the dimensions of the surface and the grid
    pub caption: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            panel_labels: true,
            caption: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    /// The band along the edges kept free by the perimeter gap
    pub perimeter_fill: &'static str,
    /// Interior space not covered by panels, i.e. the gaps between them
    pub interior_fill: &'static str,
    pub panel_fill: &'static str,
    pub text_fill: &'static str,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        EARTH_TONES_THEME
    }
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    perimeter_fill: "#CC824A",
    interior_fill: "#7A7A7A",
    panel_fill: "#FFC879",
    text_fill: "#2D2D2D",
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    perimeter_fill: "#C3C3C3",
    interior_fill: "#636363",
    panel_fill: "#E6E6E6",
    text_fill: "#000000",
};

/// Scales the RGB components of a `#RRGGBB` color by `fraction`.
/// Colors in any other format are returned unchanged.
pub fn change_brightness(color: &str, fraction: f64) -> String {
    let hex = color.strip_prefix('#').unwrap_or(color);
    let component = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
    };
    match (hex.len(), component(0), component(2), component(4)) {
        (6, Some(r), Some(g), Some(b)) => {
            let scale = |c: u8| (c as f64 * fraction).clamp(0.0, 255.0) as u8;
            format!("#{:02X}{:02X}{:02X}", scale(r), scale(g), scale(b))
        }
        _ => color.to_string(),
    }
}
