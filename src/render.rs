//! This module contains rendering logic from device networks into graphviz
//! diagrams.

pub mod dot;

pub use dot::{dot_string, DotFormatter};

/// Style of a rendered device.
///
/// Defaults to a box labelled with the device index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum NodeStyle {
    /// Ignore the device. No links will be drawn to it.
    Hidden,
    /// Draw a box with the label inside.
    Boxed(String),
}

impl NodeStyle {
    /// Show a device label with the default style.
    pub fn new(label: impl ToString) -> Self {
        Self::Boxed(label.to_string())
    }
}

/// Style of a rendered link. Defaults to [`EdgeStyle::Solid`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum EdgeStyle {
    /// Hide the link.
    Hidden,
    /// Normal line
    #[default]
    Solid,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dashed,
    /// Custom style
    Custom(String),
}

impl EdgeStyle {
    /// Get the style as a graphviz style string
    pub(super) fn as_dot_str(&self) -> &str {
        match self {
            Self::Hidden => "invis",
            Self::Solid => "",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
            Self::Custom(s) => s,
        }
    }
}
