//! Styling table: one flat palette plus sizing constants.
//!
//! Read by layout and command emission during a frame, editable between
//! frames through [`Context::style_mut`](crate::Context::style_mut), and
//! loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};
use crate::layout::Vec2;

/// RGBA color, one byte per channel.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Creates a color from RGBA values.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        Self::rgba(
            (hex >> 24) as u8,
            (hex >> 16) as u8,
            (hex >> 8) as u8,
            hex as u8,
        )
    }

    /// Converts to normalized floats for GPU upload.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Names of the palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    /// Text.
    Text,
    /// Control borders.
    Border,
    /// Window background.
    WindowBg,
    /// Title bar background.
    TitleBg,
    /// Title bar text.
    TitleText,
    /// Panel background.
    PanelBg,
    /// Button at rest.
    Button,
    /// Hovered button.
    ButtonHover,
    /// Focused button.
    ButtonFocus,
    /// Input field at rest.
    Base,
    /// Hovered input field.
    BaseHover,
    /// Focused input field.
    BaseFocus,
    /// Scrollbar track.
    ScrollBase,
    /// Scrollbar thumb.
    ScrollThumb,
}

impl ColorId {
    /// Every palette entry, in palette order.
    pub const ALL: [Self; 14] = [
        Self::Text,
        Self::Border,
        Self::WindowBg,
        Self::TitleBg,
        Self::TitleText,
        Self::PanelBg,
        Self::Button,
        Self::ButtonHover,
        Self::ButtonFocus,
        Self::Base,
        Self::BaseHover,
        Self::BaseFocus,
        Self::ScrollBase,
        Self::ScrollThumb,
    ];

    /// Display name, as used by style editors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Border => "border",
            Self::WindowBg => "windowbg",
            Self::TitleBg => "titlebg",
            Self::TitleText => "titletext",
            Self::PanelBg => "panelbg",
            Self::Button => "button",
            Self::ButtonHover => "buttonhover",
            Self::ButtonFocus => "buttonfocus",
            Self::Base => "base",
            Self::BaseHover => "basehover",
            Self::BaseFocus => "basefocus",
            Self::ScrollBase => "scrollbase",
            Self::ScrollThumb => "scrollthumb",
        }
    }

    /// The hover variant of a control color; other colors map to themselves.
    #[must_use]
    pub const fn hovered(self) -> Self {
        match self {
            Self::Button => Self::ButtonHover,
            Self::Base => Self::BaseHover,
            other => other,
        }
    }

    /// The focus variant of a control color; other colors map to themselves.
    #[must_use]
    pub const fn focused(self) -> Self {
        match self {
            Self::Button => Self::ButtonFocus,
            Self::Base => Self::BaseFocus,
            other => other,
        }
    }

    /// Frames drawn in these colors get no border.
    #[must_use]
    pub const fn is_borderless(self) -> bool {
        matches!(self, Self::ScrollBase | Self::ScrollThumb | Self::TitleBg)
    }
}

/// The palette, one field per [`ColorId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Palette {
    pub text: Color,
    pub border: Color,
    pub window_bg: Color,
    pub title_bg: Color,
    pub title_text: Color,
    pub panel_bg: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_focus: Color,
    pub base: Color,
    pub base_hover: Color,
    pub base_focus: Color,
    pub scroll_base: Color,
    pub scroll_thumb: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::rgb(230, 230, 230),
            border: Color::rgb(25, 25, 25),
            window_bg: Color::rgb(50, 50, 50),
            title_bg: Color::rgb(25, 25, 25),
            title_text: Color::rgb(240, 240, 240),
            panel_bg: Color::TRANSPARENT,
            button: Color::rgb(75, 75, 75),
            button_hover: Color::rgb(95, 95, 95),
            button_focus: Color::rgb(115, 115, 115),
            base: Color::rgb(30, 30, 30),
            base_hover: Color::rgb(35, 35, 35),
            base_focus: Color::rgb(40, 40, 40),
            scroll_base: Color::rgb(43, 43, 43),
            scroll_thumb: Color::rgb(30, 30, 30),
        }
    }
}

/// Complete style table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Padding inside controls and container bodies.
    pub padding: f32,
    /// Gap between layout cells.
    pub spacing: f32,
    /// Indentation of tree node children.
    pub indent: f32,
    /// Window title bar height.
    pub title_height: f32,
    /// Scrollbar thickness.
    pub scrollbar_size: f32,
    /// Minimum slider / scrollbar thumb length.
    pub thumb_size: f32,
    /// Default control content size, before padding.
    pub size: Vec2,
    /// Palette.
    pub colors: Palette,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: 5.0,
            spacing: 4.0,
            indent: 24.0,
            title_height: 24.0,
            scrollbar_size: 12.0,
            thumb_size: 8.0,
            size: Vec2::new(68.0, 10.0),
            colors: Palette::default(),
        }
    }
}

impl Style {
    /// Looks up a palette entry.
    #[must_use]
    pub fn color(&self, id: ColorId) -> Color {
        let p = &self.colors;
        match id {
            ColorId::Text => p.text,
            ColorId::Border => p.border,
            ColorId::WindowBg => p.window_bg,
            ColorId::TitleBg => p.title_bg,
            ColorId::TitleText => p.title_text,
            ColorId::PanelBg => p.panel_bg,
            ColorId::Button => p.button,
            ColorId::ButtonHover => p.button_hover,
            ColorId::ButtonFocus => p.button_focus,
            ColorId::Base => p.base,
            ColorId::BaseHover => p.base_hover,
            ColorId::BaseFocus => p.base_focus,
            ColorId::ScrollBase => p.scroll_base,
            ColorId::ScrollThumb => p.scroll_thumb,
        }
    }

    /// Replaces a palette entry.
    pub fn set_color(&mut self, id: ColorId, color: Color) {
        let p = &mut self.colors;
        let slot = match id {
            ColorId::Text => &mut p.text,
            ColorId::Border => &mut p.border,
            ColorId::WindowBg => &mut p.window_bg,
            ColorId::TitleBg => &mut p.title_bg,
            ColorId::TitleText => &mut p.title_text,
            ColorId::PanelBg => &mut p.panel_bg,
            ColorId::Button => &mut p.button,
            ColorId::ButtonHover => &mut p.button_hover,
            ColorId::ButtonFocus => &mut p.button_focus,
            ColorId::Base => &mut p.base,
            ColorId::BaseHover => &mut p.base_hover,
            ColorId::BaseFocus => &mut p.base_focus,
            ColorId::ScrollBase => &mut p.scroll_base,
            ColorId::ScrollThumb => &mut p.scroll_thumb,
        };
        *slot = color;
    }

    /// Width of a control when its column asks for the default.
    #[must_use]
    pub fn default_control_width(&self) -> f32 {
        self.size.x + self.padding * 2.0
    }

    /// Height of a control when its row asks for the default.
    #[must_use]
    pub fn default_control_height(&self) -> f32 {
        self.size.y + self.padding * 2.0
    }

    /// Parses a style from a TOML document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidStyle`] if the document is malformed.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        toml::from_str(source).map_err(|e| UiError::InvalidStyle(e.to_string()))
    }

    /// Serializes the style to a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidStyle`] if serialization fails.
    pub fn to_toml_string(&self) -> UiResult<String> {
        toml::to_string(self).map_err(|e| UiError::InvalidStyle(e.to_string()))
    }
}
