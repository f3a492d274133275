//! Transient acknowledgment messages.

use std::time::{Duration, Instant};

use egui::{Color32, Context, Pos2, RichText};

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    created_at: Instant,
}

impl Toast {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }
}

/// Queue of short-lived acknowledgments drawn above the page content.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast {
            message: message.into(),
            created_at: Instant::now(),
        });
    }

    pub fn render(&mut self, ctx: &Context, is_dark: bool) {
        self.toasts.retain(|toast| !toast.is_expired());
        if self.toasts.is_empty() {
            return;
        }
        ctx.request_repaint();

        let (bg, text) = if is_dark {
            (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120))
        } else {
            (Color32::from_rgb(220, 255, 220), Color32::from_rgb(30, 120, 50))
        };

        let screen = ctx.screen_rect();
        for (i, toast) in self.toasts.iter().enumerate() {
            let pos = Pos2::new(
                screen.right() - 310.0,
                screen.bottom() - 50.0 - (i as f32) * 45.0,
            );
            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new(format!("✓ {}", toast.message)).color(text));
                        });
                });
        }
    }
}
