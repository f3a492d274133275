//! Hand-off to the external scheduling service.

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Fixed scheduling endpoint; the chosen date rides along as a query
/// parameter the service understands.
pub const BOOKING_ENDPOINT: &str = "https://calendly.com/sylvianebahr/30min";

/// `{endpoint}?date=YYYY-MM-DD`, zero-padded month and day.
pub fn booking_url(date: NaiveDate) -> String {
    let date_param = date.format("%Y-%m-%d").to_string();
    format!("{}?date={}", BOOKING_ENDPOINT, urlencoding::encode(&date_param))
}

/// Opens the booking page in the system browser. Fire-and-forget: the
/// caller only learns whether the browser could be spawned.
pub fn open_booking_page(date: NaiveDate) -> Result<()> {
    let url = booking_url(date);
    log::info!("Opening booking page: {url}");
    webbrowser::open(&url).with_context(|| format!("failed to open {url}"))?;
    Ok(())
}
