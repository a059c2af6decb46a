mod color;
mod loading_indicator;
mod palette;
mod style;
mod view_tree;

pub use color::{ColorToken, ColorValue, HexColor};
pub use loading_indicator::{LoadingIndicator, ACCENT_COLOR};
pub use palette::Palette;
pub use style::{Align, ContainerStyle, FlexSize, Justify, SpinnerSize, SpinnerStyle};
pub use view_tree::ViewNode;
