//! Color and size tokens for the visual components.
//!
//! `assets/main.css` carries the same palette; these consts cover the
//! handful of styles computed at render time.

pub struct Palette {
    pub red: &'static str,
    pub gray: &'static str,
    pub black: &'static str,
    pub white: &'static str,
}

pub const COLORS: Palette = Palette {
    red: "#D83C54",
    gray: "#7D818A",
    black: "#3D4448",
    white: "#FFF",
};

pub struct Sizes {
    pub base: f64,
    pub icon: f64,
    pub font: f64,
}

pub const SIZES: Sizes = Sizes {
    base: 12.0,
    icon: 16.0,
    font: 16.0,
};
