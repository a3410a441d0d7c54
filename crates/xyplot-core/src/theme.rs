// File: crates/xyplot-core/src/theme.rs
// Summary: Named color presets for figure background, frame, ticks, text and grid.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Figure background outside the plot area.
    pub background: Color,
    /// Fill of the plot area.
    pub plot_background: Color,
    pub frame: Color,
    pub tick: Color,
    /// Title, axis labels, tick labels and legend text.
    pub text: Color,
    pub grid: Color,
}

impl Theme {
    /// White figure with black frame and text.
    pub const fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::rgb(0xff, 0xff, 0xff),
            plot_background: Color::rgb(0xff, 0xff, 0xff),
            frame: Color::rgb(0x00, 0x00, 0x00),
            tick: Color::rgb(0x00, 0x00, 0x00),
            text: Color::rgb(0x00, 0x00, 0x00),
            grid: Color::rgb(0xb0, 0xb0, 0xb0),
        }
    }

    pub const fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            plot_background: Color::rgb(24, 24, 28),
            frame: Color::rgb(180, 180, 190),
            tick: Color::rgb(150, 150, 160),
            text: Color::rgb(235, 235, 245),
            grid: Color::rgb(52, 52, 58),
        }
    }

    pub const fn solarized_dark() -> Self {
        // Solarized base tones
        Self {
            name: "solarized-dark",
            background: Color::rgb(0x00, 0x2b, 0x36),      // base03
            plot_background: Color::rgb(0x07, 0x36, 0x42), // base02
            frame: Color::rgb(0x93, 0xa1, 0xa1),           // base1
            tick: Color::rgb(0x83, 0x94, 0x96),            // base0
            text: Color::rgb(0xee, 0xe8, 0xd5),            // base2
            grid: Color::rgb(0x58, 0x6e, 0x75),            // base01
        }
    }

    pub const fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::rgb(0xfd, 0xf6, 0xe3),      // base3
            plot_background: Color::rgb(0xee, 0xe8, 0xd5), // base2
            frame: Color::rgb(0x65, 0x7b, 0x83),           // base00
            tick: Color::rgb(0x58, 0x6e, 0x75),            // base01
            text: Color::rgb(0x07, 0x36, 0x42),            // base02
            grid: Color::rgb(0x93, 0xa1, 0xa1),            // base1
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Built-in presets, classic first.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::solarized_dark(), Theme::solarized_light()]
}

/// Look a preset up by case-insensitive `name`; unknown names fall back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or_else(|| {
            log::warn!("unknown theme '{}', using classic", name);
            Theme::classic()
        })
}
