use super::color::ColorValue;
use super::palette::Palette;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexSize {
    /// Grow to take all space the parent offers, on both axes.
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Center,
}

impl Justify {
    fn css(&self) -> &'static str {
        match self {
            Self::Center => "center",
        }
    }
}

impl Align {
    fn css(&self) -> &'static str {
        match self {
            Self::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub flex: FlexSize,
    pub justify_content: Justify,
    pub align_items: Align,
    pub background: ColorValue,
}

impl ContainerStyle {
    pub fn to_css(&self, palette: &Palette) -> String {
        let flex = match self.flex {
            FlexSize::Fill => "flex:1 1 auto;align-self:stretch;width:100%;height:100%",
        };
        format!(
            "display:flex;{flex};justify-content:{};align-items:{};background-color:{}",
            self.justify_content.css(),
            self.align_items.css(),
            palette.resolve(self.background),
        )
    }
}

/// Platform spinner size presets. Only the large one is drawn here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinnerSize {
    Large,
}

impl SpinnerSize {
    pub fn diameter_px(&self) -> u32 {
        match self {
            Self::Large => 36,
        }
    }

    pub fn stroke_px(&self) -> u32 {
        match self {
            Self::Large => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Large => "large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinnerStyle {
    pub size: SpinnerSize,
    pub color: ColorValue,
}

impl SpinnerStyle {
    /// Inline declarations; the rotation itself comes from the
    /// `.activity-indicator` stylesheet rule.
    pub fn to_css(&self, palette: &Palette) -> String {
        let diameter = self.size.diameter_px();
        format!(
            "width:{diameter}px;height:{diameter}px;border-width:{}px;color:{}",
            self.size.stroke_px(),
            palette.resolve(self.color),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorToken, HexColor};

    #[test]
    fn test_container_css() {
        let style = ContainerStyle {
            flex: FlexSize::Fill,
            justify_content: Justify::Center,
            align_items: Align::Center,
            background: ColorValue::Token(ColorToken::Ui950),
        };
        let css = style.to_css(&Palette::default());
        assert!(css.contains("display:flex"));
        assert!(css.contains("justify-content:center"));
        assert!(css.contains("align-items:center"));
        assert!(css.contains("background-color:#0A0A0A"));
    }

    #[test]
    fn test_spinner_css() {
        let style = SpinnerStyle {
            size: SpinnerSize::Large,
            color: ColorValue::Hex(HexColor::new(0xC1, 0x10, 0x07)),
        };
        let css = style.to_css(&Palette::default());
        assert_eq!(css, "width:36px;height:36px;border-width:4px;color:#C11007");
    }
}
