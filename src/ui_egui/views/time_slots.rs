//! Time-slot picker, shown once a date is chosen.

use egui::RichText;

use crate::models::booking::{AvailabilityRules, BookingAction, BookingState};
use crate::models::language::Language;
use crate::services::i18n;
use crate::ui_egui::theme::CalendarPalette;

pub struct TimeSlotGrid;

impl TimeSlotGrid {
    pub fn show(
        ui: &mut egui::Ui,
        state: &BookingState,
        rules: &AvailabilityRules,
        lang: Language,
        palette: &CalendarPalette,
    ) -> Option<BookingAction> {
        state.selected_date?;

        ui.label(RichText::new(i18n::translate(lang, "calendar.select_time")).strong());
        ui.add_space(4.0);

        let mut action = None;
        ui.horizontal_wrapped(|ui| {
            for &slot in &rules.slots {
                let selected = state.selected_time == Some(slot);
                let label = slot.format("%H:%M").to_string();
                let text = if selected {
                    RichText::new(label).color(palette.selected_text)
                } else {
                    RichText::new(label)
                };
                let mut button = egui::Button::new(text);
                if selected {
                    button = button.fill(palette.selected_bg);
                }
                if ui.add(button).clicked() {
                    action = Some(BookingAction::SelectTime(slot));
                }
            }
        });
        action
    }
}
