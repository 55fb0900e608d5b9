pub mod api;
pub mod date;
pub mod patch;
pub mod validation;
