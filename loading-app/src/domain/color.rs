use loading_errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque sRGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = AppError;

    /// Accepts `#RRGGBB` and the `#RGB` shorthand, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidColor(s.to_string());

        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc == #aabbcc
                let [r, g, b] = [0, 1, 2].map(|i| channel(&digits[i..i + 1]));
                Ok(Self::new(r? * 0x11, g? * 0x11, b? * 0x11))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Named colors owned by the design system rather than by a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    #[serde(rename = "ui_950")]
    Ui950,
}

impl ColorToken {
    pub const ALL: [ColorToken; 1] = [ColorToken::Ui950];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ui950 => "ui_950",
        }
    }

    /// Environment variable that overrides this token's palette value.
    pub fn env_key(&self) -> &'static str {
        match self {
            Self::Ui950 => "UI_950",
        }
    }
}

impl FromStr for ColorToken {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownToken(s.to_string()))
    }
}

/// A color as written in a style record: either a token the palette
/// resolves later, or a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Token(ColorToken),
    Hex(HexColor),
}

impl From<HexColor> for ColorValue {
    fn from(color: HexColor) -> Self {
        Self::Hex(color)
    }
}

impl From<ColorToken> for ColorValue {
    fn from(token: ColorToken) -> Self {
        Self::Token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let color: HexColor = "#C11007".parse().unwrap();
        assert_eq!(color, HexColor::new(0xC1, 0x10, 0x07));
        assert_eq!("#c11007".parse::<HexColor>().unwrap(), color);
    }

    #[test]
    fn test_parse_short_form() {
        let color: HexColor = "#0af".parse().unwrap();
        assert_eq!(color, HexColor::new(0x00, 0xAA, 0xFF));
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(HexColor::new(0xc1, 0x10, 0x07).to_string(), "#C11007");
    }

    #[test]
    fn test_invalid_colors() {
        for input in ["", "C11007", "#C1100", "#C110077", "#GGGGGG", "#+1+1+1", "red"] {
            assert!(
                matches!(input.parse::<HexColor>(), Err(AppError::InvalidColor(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_token_lookup() {
        assert_eq!("ui_950".parse::<ColorToken>().unwrap(), ColorToken::Ui950);
        assert_eq!("UI_950".parse::<ColorToken>().unwrap(), ColorToken::Ui950);
        assert!(matches!(
            "ui_999".parse::<ColorToken>(),
            Err(AppError::UnknownToken(_))
        ));
    }

    #[test]
    fn test_color_value_serialization() {
        let token = ColorValue::Token(ColorToken::Ui950);
        let hex = ColorValue::Hex(HexColor::new(0xC1, 0x10, 0x07));

        assert_eq!(serde_json::to_string(&token).unwrap(), r#""ui_950""#);
        assert_eq!(serde_json::to_string(&hex).unwrap(), r##""#C11007""##);

        let back: ColorValue = serde_json::from_str(r##""#C11007""##).unwrap();
        assert_eq!(back, hex);
        let back: ColorValue = serde_json::from_str(r#""ui_950""#).unwrap();
        assert_eq!(back, token);
    }
}
