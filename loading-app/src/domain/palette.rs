use super::color::{ColorToken, ColorValue, HexColor};
use loading_errors::AppError;
use serde::{Deserialize, Serialize};

/// Default for `ui_950`, the darkest neutral of the UI scale.
pub const DEFAULT_UI_950: HexColor = HexColor::new(0x0A, 0x0A, 0x0A);

/// Resolved values for every design token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub ui_950: HexColor,
}

impl Palette {
    pub fn token(&self, token: ColorToken) -> HexColor {
        match token {
            ColorToken::Ui950 => self.ui_950,
        }
    }

    pub fn set_token(&mut self, token: ColorToken, color: HexColor) {
        match token {
            ColorToken::Ui950 => self.ui_950 = color,
        }
    }

    /// Applies `token name -> color` pairs, e.g. from a query string.
    /// Blank colors leave the token unchanged.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, raw) in overrides {
            let token: ColorToken = name.parse()?;
            if raw.trim().is_empty() {
                continue;
            }
            self.set_token(token, raw.parse()?);
        }
        Ok(self)
    }

    pub fn resolve(&self, value: ColorValue) -> HexColor {
        match value {
            ColorValue::Token(token) => self.token(token),
            ColorValue::Hex(color) => color,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ui_950: DEFAULT_UI_950,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_background_is_near_black() {
        let palette = Palette::default();
        let bg = palette.token(ColorToken::Ui950);
        assert!(bg.r < 0x20 && bg.g < 0x20 && bg.b < 0x20);
    }

    #[test]
    fn test_resolve_passes_literals_through() {
        let palette = Palette::default();
        let red = HexColor::new(0xC1, 0x10, 0x07);
        assert_eq!(palette.resolve(ColorValue::Hex(red)), red);
    }

    #[test]
    fn test_with_overrides() {
        let palette = Palette::default()
            .with_overrides([("ui_950", "#111827")])
            .unwrap();
        assert_eq!(palette.ui_950, HexColor::new(0x11, 0x18, 0x27));
    }

    #[test]
    fn test_with_overrides_skips_blank_colors() {
        let palette = Palette::default()
            .with_overrides([("ui_950", ""), ("UI_950", "   ")])
            .unwrap();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_with_overrides_rejects_unknown_token_and_bad_color() {
        assert_eq!(
            Palette::default().with_overrides([("ui_999", "#000")]),
            Err(AppError::UnknownToken("ui_999".to_string()))
        );
        assert_eq!(
            Palette::default().with_overrides([("ui_950", "black")]),
            Err(AppError::InvalidColor("black".to_string()))
        );
    }

    #[test]
    fn test_set_token_overrides_resolution() {
        let mut palette = Palette::default();
        let custom = HexColor::new(0x11, 0x18, 0x27);
        palette.set_token(ColorToken::Ui950, custom);
        assert_eq!(palette.resolve(ColorValue::Token(ColorToken::Ui950)), custom);
    }
}
