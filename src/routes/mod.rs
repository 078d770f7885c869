pub mod listing;
pub mod uploads;
