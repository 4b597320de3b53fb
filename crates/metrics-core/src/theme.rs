// File: crates/metrics-core/src/theme.rs
// Summary: Dark/Light palettes and named accent colors for chart geometry.

use crate::color::Color;

/// Chrome colors shared by every renderer: grid rows, tick text, the big
/// center/value figures, captions, and the empty track behind progress.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub grid: Color,
    pub axis_label: Color,
    pub value_label: Color,
    pub caption: Color,
    pub track: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            grid: Color::from_argb(36, 148, 163, 184),
            axis_label: Color::from_argb(255, 148, 163, 184),
            value_label: Color::from_argb(255, 241, 245, 249),
            caption: Color::from_argb(255, 100, 116, 139),
            track: Color::from_argb(31, 148, 163, 184),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            grid: Color::from_argb(255, 226, 232, 240),
            axis_label: Color::from_argb(255, 100, 116, 139),
            value_label: Color::from_argb(255, 15, 23, 42),
            caption: Color::from_argb(255, 100, 116, 139),
            track: Color::from_argb(255, 241, 245, 249),
        }
    }

    /// Select a palette from the caller-supplied dark-mode flag. The flag is
    /// always threaded in explicitly; renderers never read ambient UI state.
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

/// Closed set of named accents. Each maps to a primary stroke color and a
/// soft translucent tint used for tracks and area fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Indigo,
    Emerald,
    Amber,
    Rose,
    Sky,
    Violet,
}

impl Accent {
    pub const fn primary(self) -> Color {
        match self {
            Accent::Indigo => Color::from_rgb(99, 102, 241),
            Accent::Emerald => Color::from_rgb(16, 185, 129),
            Accent::Amber => Color::from_rgb(245, 158, 11),
            Accent::Rose => Color::from_rgb(244, 63, 94),
            Accent::Sky => Color::from_rgb(14, 165, 233),
            Accent::Violet => Color::from_rgb(139, 92, 246),
        }
    }

    pub const fn soft(self) -> Color {
        self.primary().with_alpha(46)
    }
}

/// Fixed second stop of the ring progress gradient.
pub const RING_GRADIENT_END: Color = Color::from_rgb(244, 114, 182);
