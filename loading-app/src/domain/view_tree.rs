use super::color::ColorValue;
use super::palette::Palette;
use super::style::{ContainerStyle, SpinnerStyle};
use serde::{Deserialize, Serialize};

/// Host-independent description of what a component draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    Container {
        style: ContainerStyle,
        children: Vec<ViewNode>,
    },
    ActivityIndicator {
        style: SpinnerStyle,
    },
}

impl ViewNode {
    /// Number of elements in this subtree, including `self`.
    pub fn element_count(&self) -> usize {
        match self {
            Self::Container { children, .. } => {
                1 + children.iter().map(ViewNode::element_count).sum::<usize>()
            }
            Self::ActivityIndicator { .. } => 1,
        }
    }

    pub fn spinner_count(&self) -> usize {
        match self {
            Self::Container { children, .. } => children.iter().map(ViewNode::spinner_count).sum(),
            Self::ActivityIndicator { .. } => 1,
        }
    }

    /// Replace every design token with its palette value.
    pub fn resolve(&self, palette: &Palette) -> ViewNode {
        let fix = |value: ColorValue| ColorValue::Hex(palette.resolve(value));

        match self {
            Self::Container { style, children } => Self::Container {
                style: ContainerStyle {
                    background: fix(style.background),
                    ..*style
                },
                children: children.iter().map(|c| c.resolve(palette)).collect(),
            },
            Self::ActivityIndicator { style } => Self::ActivityIndicator {
                style: SpinnerStyle {
                    color: fix(style.color),
                    ..*style
                },
            },
        }
    }
}
