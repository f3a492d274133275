//! Month grid: navigation header, weekday strip, day cells.

use chrono::{Datelike, NaiveDate};
use egui::{Align2, CursorIcon, FontId, RichText, Sense, Stroke, Vec2};

use crate::models::booking::{AvailabilityRules, BookingAction, BookingState};
use crate::models::language::Language;
use crate::services::i18n;
use crate::ui_egui::theme::CalendarPalette;
use crate::utils::date::{days_in_month, leading_blanks};

const CELL_SIZE: f32 = 40.0;
const SPACING: f32 = 4.0;
const NAV_BUTTON_WIDTH: f32 = 30.0;

pub struct MonthView;

impl MonthView {
    /// Renders the grid for the displayed month and reports the action the
    /// user took, if any.
    pub fn show(
        ui: &mut egui::Ui,
        state: &BookingState,
        rules: &AvailabilityRules,
        lang: Language,
        today: NaiveDate,
        palette: &CalendarPalette,
    ) -> Option<BookingAction> {
        let mut action = None;
        let grid_width = 7.0 * CELL_SIZE + 6.0 * SPACING;

        // ‹ Month Year ›
        ui.horizontal(|ui| {
            if ui.button(i18n::translate(lang, "calendar.prev")).clicked() {
                action = Some(BookingAction::PreviousMonth);
            }
            let title = format!(
                "{} {}",
                i18n::month_names(lang)[state.month.month0() as usize],
                state.month.year()
            );
            ui.allocate_ui_with_layout(
                Vec2::new(grid_width - 2.0 * NAV_BUTTON_WIDTH, 24.0),
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                },
            );
            if ui.button(i18n::translate(lang, "calendar.next")).clicked() {
                action = Some(BookingAction::NextMonth);
            }
        });
        ui.add_space(4.0);

        // Weekday strip, Sunday-first.
        egui::Grid::new("weekday_strip")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for name in i18n::weekday_abbrevs(lang) {
                    ui.allocate_ui_with_layout(
                        Vec2::new(CELL_SIZE, 20.0),
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.label(
                                RichText::new(*name)
                                    .size(12.0)
                                    .color(palette.header_text)
                                    .strong(),
                            );
                        },
                    );
                }
                ui.end_row();
            });

        // Day cells, with blank cells before the 1st.
        let blanks = leading_blanks(state.month) as i32;
        let days = days_in_month(state.month.year(), state.month.month()) as i32;
        let weeks = (blanks + days + 6) / 7;
        let mut day = 1 - blanks;

        egui::Grid::new("month_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for _week in 0..weeks {
                    for _weekday in 0..7 {
                        if day < 1 || day > days {
                            let (rect, _) =
                                ui.allocate_exact_size(Vec2::splat(CELL_SIZE), Sense::hover());
                            ui.painter().rect_filled(rect, 4.0, palette.empty_bg);
                        } else {
                            let date = NaiveDate::from_ymd_opt(
                                state.month.year(),
                                state.month.month(),
                                day as u32,
                            )
                            .expect("day within month");
                            if let Some(clicked) =
                                Self::day_cell(ui, date, day, state, rules, today, palette)
                            {
                                action = Some(clicked);
                            }
                        }
                        day += 1;
                    }
                    ui.end_row();
                }
            });

        action
    }

    fn day_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        day: i32,
        state: &BookingState,
        rules: &AvailabilityRules,
        today: NaiveDate,
        palette: &CalendarPalette,
    ) -> Option<BookingAction> {
        let bookable = rules.is_bookable(date, today);
        let selected = state.selected_date == Some(date);
        let sense = if bookable {
            Sense::click().union(Sense::hover())
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(CELL_SIZE), sense);

        let bg = if selected {
            palette.selected_bg
        } else if bookable {
            palette.available_bg
        } else {
            palette.cell_bg
        };
        ui.painter().rect_filled(rect, 4.0, bg);

        let border = if date == today {
            Stroke::new(2.0, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        ui.painter().rect_stroke(rect, 4.0, border);

        let text_color = if selected {
            palette.selected_text
        } else if bookable {
            palette.available_text
        } else {
            palette.muted_text
        };
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            day.to_string(),
            FontId::proportional(14.0),
            text_color,
        );

        if bookable {
            let response = response.on_hover_cursor(CursorIcon::PointingHand);
            if response.clicked() {
                return Some(BookingAction::SelectDay(date));
            }
        }
        None
    }
}
