use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKind {
    #[default]
    Grayscale,
    FireGradient,
    BlueWhiteGradient,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[
        Self::Grayscale,
        Self::FireGradient,
        Self::BlueWhiteGradient,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    /// Menu number shown by the colour-scheme prompt.
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::Grayscale => 1,
            Self::FireGradient => 2,
            Self::BlueWhiteGradient => 3,
        }
    }

    #[must_use]
    pub fn from_selector(selector: i64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| i64::from(kind.selector()) == selector)
    }
}

impl fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColourMapKindError {
    value: String,
}

impl fmt::Display for ParseColourMapKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown palette `{}`, expected grayscale|fire|blue-white",
            self.value
        )
    }
}

impl Error for ParseColourMapKindError {}

impl FromStr for ColourMapKind {
    type Err = ParseColourMapKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let parsed = match value.to_ascii_lowercase().as_str() {
            "grayscale" | "greyscale" | "gray" | "grey" => Some(Self::Grayscale),
            "fire" | "fire-gradient" => Some(Self::FireGradient),
            "blue-white" | "blue-white-gradient" => Some(Self::BlueWhiteGradient),
            other => other.parse::<i64>().ok().and_then(Self::from_selector),
        };

        parsed.ok_or_else(|| ParseColourMapKindError {
            value: value.to_string(),
        })
    }
}
