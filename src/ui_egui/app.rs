//! Application shell: owns the persisted preference, the booking state and
//! the delayed refresh/reset deadlines.

mod delay;
mod forms;
mod toast;

use std::time::{Duration, Instant};

use chrono::Local;
use egui::RichText;

use self::delay::DelayedTask;
use self::forms::{render_form, FormState};
use self::toast::ToastManager;
use crate::models::booking::{AvailabilityRules, BookingAction, BookingState};
use crate::models::language::Language;
use crate::services::booking;
use crate::services::i18n;
use crate::services::preferences::PreferencesStore;
use crate::ui_egui::theme::CalendarPalette;
use crate::ui_egui::views::{ConfirmationPanel, MonthView, TimeSlotGrid};

/// Delay before the post-confirmation reset clears the selection.
const RESET_DELAY: Duration = Duration::from_secs(2);
/// Delay between a selector change and the refresh that re-reads the
/// persisted preference.
const LANGUAGE_REFRESH_DELAY: Duration = Duration::from_millis(100);

pub struct BookingApp {
    prefs_store: PreferencesStore,
    /// Language the page currently renders with.
    language: Language,
    /// Language shown in the selector; the page catches up after the
    /// delayed refresh.
    selector_choice: Language,
    state: BookingState,
    rules: AvailabilityRules,
    /// Set between a confirmed hand-off and the delayed reset.
    redirecting: bool,
    reset_deadline: DelayedTask,
    language_refresh: DelayedTask,
    appointment_form: FormState,
    contact_form: FormState,
    toasts: ToastManager,
    palette: CalendarPalette,
}

impl BookingApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs_store = PreferencesStore::at_default_location();
        let language = prefs_store.load().language();
        log::info!("Loaded preferences: language={}", language.code());

        let palette = CalendarPalette::from_system();
        cc.egui_ctx.set_visuals(if palette.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        Self {
            prefs_store,
            language,
            selector_choice: language,
            state: BookingState::starting_at(Local::now().date_naive()),
            rules: AvailabilityRules::default(),
            redirecting: false,
            reset_deadline: DelayedTask::default(),
            language_refresh: DelayedTask::default(),
            appointment_form: FormState::default(),
            contact_form: FormState::default(),
            toasts: ToastManager::default(),
            palette,
        }
    }

    fn change_language(&mut self, language: Language) {
        self.selector_choice = language;
        let mut prefs = self.prefs_store.load();
        prefs.set_language(language);
        if let Err(err) = self.prefs_store.save(&prefs) {
            log::error!("Failed to persist language preference: {err:#}");
        }
        // The page re-reads the stored preference shortly after the selector
        // changes; re-scheduling supersedes an earlier pending refresh.
        self.language_refresh.schedule(LANGUAGE_REFRESH_DELAY);
    }

    fn poll_deadlines(&mut self) {
        let now = Instant::now();
        if self.language_refresh.fire_if_due(now) {
            self.language = self.prefs_store.load().language();
        }
        if self.reset_deadline.fire_if_due(now) {
            let today = Local::now().date_naive();
            self.state = self
                .state
                .apply(BookingAction::ClearSelection, &self.rules, today);
            self.redirecting = false;
        }
    }

    fn confirm_booking(&mut self) {
        if !self.state.can_confirm() || self.redirecting {
            return;
        }
        let date = self.state.selected_date.expect("checked by can_confirm");
        if let Err(err) = booking::open_booking_page(date) {
            log::error!("Booking hand-off failed: {err:#}");
        }
        self.redirecting = true;
        self.reset_deadline.schedule(RESET_DELAY);
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(i18n::translate(self.language, "hero.title"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut choice = self.selector_choice;
                    egui::ComboBox::from_id_source("language_selector")
                        .selected_text(choice.display_name())
                        .show_ui(ui, |ui| {
                            for lang in Language::ALL {
                                ui.selectable_value(&mut choice, lang, lang.display_name());
                            }
                        });
                    ui.label(i18n::translate(self.language, "language.label"));
                    if choice != self.selector_choice {
                        self.change_language(choice);
                    }
                });
            });
        });
    }

    fn render_page(&mut self, ui: &mut egui::Ui) {
        let lang = self.language;

        ui.add_space(8.0);
        ui.label(RichText::new(i18n::translate(lang, "hero.subtitle")).size(15.0));
        ui.add_space(12.0);

        ui.heading(i18n::translate(lang, "about.title"));
        ui.label(i18n::translate(lang, "about.body"));
        ui.add_space(12.0);
        ui.separator();

        self.render_booking_widget(ui);

        ui.add_space(12.0);
        ui.separator();
        if render_form(
            ui,
            "appointment_form",
            "form.appointment.title",
            lang,
            &mut self.appointment_form,
        ) {
            self.toasts.success(i18n::translate(lang, "form.success"));
        }
        ui.add_space(12.0);
        if render_form(
            ui,
            "contact_form",
            "form.contact.title",
            lang,
            &mut self.contact_form,
        ) {
            self.toasts.success(i18n::translate(lang, "form.success"));
        }
        ui.add_space(16.0);
    }

    fn render_booking_widget(&mut self, ui: &mut egui::Ui) {
        let lang = self.language;
        let today = Local::now().date_naive();

        ui.heading(i18n::translate(lang, "booking.title"));
        ui.label(i18n::translate(lang, "calendar.select_date"));
        ui.add_space(6.0);

        let grid_action = MonthView::show(ui, &self.state, &self.rules, lang, today, &self.palette);
        ui.add_space(8.0);
        let slot_action = TimeSlotGrid::show(ui, &self.state, &self.rules, lang, &self.palette);

        for action in [grid_action, slot_action].into_iter().flatten() {
            self.state = self.state.apply(action, &self.rules, today);
        }

        ui.add_space(8.0);
        if ConfirmationPanel::show(ui, &self.state, lang, self.redirecting) {
            self.confirm_booking();
        }
    }
}

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_deadlines();

        self.render_top_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_page(ui);
            });
        });

        self.toasts.render(ctx, self.palette.is_dark);

        // Wake up exactly when the earlier pending deadline is due.
        let now = Instant::now();
        let next_due = [
            self.language_refresh.remaining(now),
            self.reset_deadline.remaining(now),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(wait) = next_due {
            ctx.request_repaint_after(wait);
        }
    }
}
