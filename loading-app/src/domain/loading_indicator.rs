use super::color::{ColorToken, ColorValue, HexColor};
use super::style::{Align, ContainerStyle, FlexSize, Justify, SpinnerSize, SpinnerStyle};
use super::view_tree::ViewNode;

/// Spinner accent, `#C11007`.
pub const ACCENT_COLOR: HexColor = HexColor::new(0xC1, 0x10, 0x07);

/// Full-bleed dark container with one large spinner centered in it.
///
/// Takes no props and holds no state, so every call to [`render`] yields
/// the same tree.
///
/// [`render`]: LoadingIndicator::render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingIndicator;

impl LoadingIndicator {
    pub fn container_style() -> ContainerStyle {
        ContainerStyle {
            flex: FlexSize::Fill,
            justify_content: Justify::Center,
            align_items: Align::Center,
            background: ColorValue::Token(ColorToken::Ui950),
        }
    }

    pub fn spinner_style() -> SpinnerStyle {
        SpinnerStyle {
            size: SpinnerSize::Large,
            color: ColorValue::Hex(ACCENT_COLOR),
        }
    }

    pub fn render() -> ViewNode {
        ViewNode::Container {
            style: Self::container_style(),
            children: vec![ViewNode::ActivityIndicator {
                style: Self::spinner_style(),
            }],
        }
    }
}
