//! App theme: colors and spacing shared by the page shell and screens.

/// Warm receipt palette. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#C4541A";
    pub const LIGHT_SURFACE: &'static str = "#FAF3E8";
    pub const LIGHT_ON_SURFACE: &'static str = "#2B1D12";
    pub const LIGHT_BORDER: &'static str = "#B9A894";
    pub const LIGHT_ERROR: &'static str = "#BA1A1A";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#F2A65A";
    pub const DARK_SURFACE: &'static str = "#201B16";
    pub const DARK_ON_SURFACE: &'static str = "#EDE4D8";
    pub const DARK_BORDER: &'static str = "#6B5F52";
    pub const DARK_ERROR: &'static str = "#FFB4AB";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn border(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BORDER
        } else {
            Self::LIGHT_BORDER
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}

/// 8dp grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "24px";
    pub const SCREEN_PADDING: &'static str = "16px";
}
