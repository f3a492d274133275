// Booking Calendar Application
// Main entry point

use booking_calendar::ui_egui::BookingApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Booking Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 760.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Booking Calendar",
        options,
        Box::new(|cc| Ok(Box::new(BookingApp::new(cc)))),
    )
}
