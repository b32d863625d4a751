use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette for the banner and its surroundings.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Brand color, used where a frame carries no color overrides.
    pub copilot: ColorSpec,
    /// Foreground color for cells without an override.
    pub fg: ColorSpec,
    /// Footer hint text.
    pub text_muted: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

pub const THEME_NAMES: &[&str] = &["dark", "light"];

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Theme for dark terminal backgrounds.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            copilot: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            fg: ColorSpec {
                r: 224,
                g: 222,
                b: 244,
            }, // Text
            text_muted: ColorSpec {
                r: 110,
                g: 106,
                b: 134,
            }, // Muted
        }
    }

    /// Theme for light terminal backgrounds.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            copilot: ColorSpec {
                r: 130,
                g: 80,
                b: 223,
            }, // Purple
            fg: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            }, // Text
            text_muted: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
        }
    }

    /// Return the built-in theme with the given name.
    ///
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}
