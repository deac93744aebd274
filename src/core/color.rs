//! Color values and the console color palette

use serde::{Deserialize, Serialize};

/// An RGB color value rendered by a console backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The fixed set of named colors a console session renders with.
///
/// Established at construction and read-only thereafter; the drain worker
/// copies it once when the console attaches. The defaults are a dark
/// terminal theme with paired strong/light accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub background: Color,
    pub text: Color,

    pub red: Color,
    pub red_light: Color,

    pub green: Color,
    pub green_light: Color,

    pub yellow: Color,
    pub yellow_light: Color,

    pub blue: Color,
    pub blue_light: Color,

    pub pink: Color,
    pub pink_light: Color,

    pub light_blue: Color,
    pub light_blue_light: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: Color::new(20, 25, 31),
            text: Color::new(239, 240, 235),

            red: Color::new(255, 92, 87),
            red_light: Color::new(220, 163, 163),

            green: Color::new(90, 247, 142),
            green_light: Color::new(195, 191, 159),

            yellow: Color::new(243, 249, 157),
            yellow_light: Color::new(240, 223, 175),

            blue: Color::new(87, 199, 255),
            blue_light: Color::new(148, 191, 243),

            pink: Color::new(255, 106, 193),
            pink_light: Color::new(236, 147, 211),

            light_blue: Color::new(154, 237, 254),
            light_blue_light: Color::new(147, 224, 227),
        }
    }
}
