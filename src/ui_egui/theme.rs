//! Light and dark palettes for the booking widget.

use egui::Color32;

#[derive(Debug, Clone, Copy)]
pub struct CalendarPalette {
    pub is_dark: bool,
    /// Cells outside the displayed month.
    pub empty_bg: Color32,
    /// Closed days (past, or a weekday with no availability).
    pub cell_bg: Color32,
    pub muted_text: Color32,
    pub available_bg: Color32,
    pub available_text: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub today_border: Color32,
    pub border: Color32,
    pub header_text: Color32,
}

impl CalendarPalette {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            empty_bg: Color32::from_gray(245),
            cell_bg: Color32::from_gray(235),
            muted_text: Color32::from_gray(150),
            available_bg: Color32::from_rgb(225, 240, 255),
            available_text: Color32::from_rgb(30, 80, 150),
            selected_bg: Color32::from_rgb(25, 118, 210),
            selected_text: Color32::WHITE,
            today_border: Color32::from_rgb(25, 118, 210),
            border: Color32::from_gray(210),
            header_text: Color32::from_gray(70),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            empty_bg: Color32::from_gray(32),
            cell_bg: Color32::from_gray(44),
            muted_text: Color32::from_gray(110),
            available_bg: Color32::from_rgb(30, 50, 80),
            available_text: Color32::from_rgb(120, 180, 255),
            selected_bg: Color32::from_rgb(40, 120, 220),
            selected_text: Color32::WHITE,
            today_border: Color32::from_rgb(100, 180, 255),
            border: Color32::from_gray(70),
            header_text: Color32::from_gray(180),
        }
    }

    /// Follows the system preference, defaulting to light.
    pub fn from_system() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::dark(),
            dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
        }
    }
}
