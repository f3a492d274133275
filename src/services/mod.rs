// Service module exports

pub mod booking;
pub mod i18n;
pub mod preferences;
