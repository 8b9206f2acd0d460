// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors and text sizes.

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub tick_label: Color,
    pub title: Color,
    pub axis_label: Color,
    pub line_stroke: Color,
    pub font_family: &'static str,
    pub title_size: f32,
    pub axis_label_size: f32,
    pub tick_label_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            axis_line: Color::rgb(0, 0, 0),
            tick_label: Color::rgb(0, 0, 0),
            title: Color::rgb(20, 20, 30),
            axis_label: Color::rgb(20, 20, 30),
            line_stroke: Color::rgb(70, 130, 180), // steelblue
            font_family: "sans-serif",
            title_size: 16.0,
            axis_label_size: 12.0,
            tick_label_size: 10.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            tick_label: Color::rgb(150, 150, 160),
            title: Color::rgb(235, 235, 245),
            axis_label: Color::rgb(235, 235, 245),
            line_stroke: Color::rgb(64, 160, 255),
            ..Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
