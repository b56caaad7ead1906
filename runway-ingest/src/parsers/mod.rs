pub mod accounting;
pub mod app_native;
