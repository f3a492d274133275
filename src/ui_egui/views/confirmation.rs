//! Selection summary and the confirm control.

use egui::RichText;

use crate::models::booking::BookingState;
use crate::models::language::Language;
use crate::services::i18n;

pub struct ConfirmationPanel;

impl ConfirmationPanel {
    /// Returns true when the confirm control was clicked this frame. The
    /// control is disabled until both selections are set; while the
    /// post-confirmation reset is pending it shows the redirect notice
    /// instead.
    pub fn show(
        ui: &mut egui::Ui,
        state: &BookingState,
        lang: Language,
        redirecting: bool,
    ) -> bool {
        let date_text = state
            .selected_date
            .map(|date| i18n::long_date(lang, date))
            .unwrap_or_else(|| "-".to_string());
        let time_text = state
            .selected_time
            .map(|time| time.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{}:", i18n::translate(lang, "calendar.selected_date")))
                    .strong(),
            );
            ui.label(date_text);
        });
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{}:", i18n::translate(lang, "calendar.selected_time")))
                    .strong(),
            );
            ui.label(time_text);
        });
        ui.add_space(6.0);

        let label = if redirecting {
            i18n::translate(lang, "calendar.redirecting")
        } else {
            i18n::translate(lang, "calendar.confirm")
        };
        let enabled = state.can_confirm() && !redirecting;
        ui.add_enabled(enabled, egui::Button::new(label)).clicked()
    }
}
