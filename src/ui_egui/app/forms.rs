//! Local request forms. Submission is acknowledged and the fields reset;
//! nothing is sent anywhere.

use crate::models::language::Language;
use crate::services::i18n;

#[derive(Debug, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Renders one labeled form; returns true when it was submitted this frame.
pub fn render_form(
    ui: &mut egui::Ui,
    id: &str,
    title_key: &str,
    lang: Language,
    form: &mut FormState,
) -> bool {
    ui.heading(i18n::translate(lang, title_key));
    ui.add_space(4.0);

    egui::Grid::new(id)
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label(i18n::translate(lang, "form.name"));
            ui.add(
                egui::TextEdit::singleline(&mut form.name)
                    .hint_text(i18n::translate(lang, "form.placeholder.name")),
            );
            ui.end_row();

            ui.label(i18n::translate(lang, "form.email"));
            ui.add(
                egui::TextEdit::singleline(&mut form.email)
                    .hint_text(i18n::translate(lang, "form.placeholder.email")),
            );
            ui.end_row();

            ui.label(i18n::translate(lang, "form.message"));
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .desired_rows(3)
                    .hint_text(i18n::translate(lang, "form.placeholder.message")),
            );
            ui.end_row();
        });

    let submitted = ui.button(i18n::translate(lang, "form.send")).clicked();
    if submitted {
        form.reset();
    }
    submitted
}
