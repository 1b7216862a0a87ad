use crossterm::style::Color;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Grid frame color
    pub border: Color,
    /// Letters inside the grid
    pub letter: Color,
    /// First letter of a word (where its number goes)
    pub start: Color,
    /// Empty cell dots
    pub empty: Color,
    /// Clue list headings
    pub heading: Color,
    /// Clue numbers
    pub number: Color,
    /// Secondary text (categories, summaries)
    pub info: Color,
    /// Diagnostics
    pub warning: Color,
    /// Violations
    pub error: Color,
    /// Success messages
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            letter: Color::Rgb { r: 230, g: 230, b: 240 },
            start: Color::Rgb { r: 80, g: 180, b: 255 },
            empty: Color::Rgb { r: 60, g: 64, b: 78 },
            heading: Color::Rgb { r: 130, g: 140, b: 170 },
            number: Color::Rgb { r: 255, g: 210, b: 100 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            warning: Color::Rgb { r: 255, g: 170, b: 60 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            letter: Color::Rgb { r: 30, g: 30, b: 40 },
            start: Color::Rgb { r: 30, g: 100, b: 200 },
            empty: Color::Rgb { r: 205, g: 205, b: 215 },
            heading: Color::Rgb { r: 60, g: 60, b: 80 },
            number: Color::Rgb { r: 200, g: 120, b: 20 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            warning: Color::Rgb { r: 190, g: 110, b: 0 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            border: Color::White,
            letter: Color::White,
            start: Color::Cyan,
            empty: Color::DarkGrey,
            heading: Color::White,
            number: Color::Yellow,
            info: Color::Grey,
            warning: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Theme by name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "high_contrast" | "high-contrast" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}
