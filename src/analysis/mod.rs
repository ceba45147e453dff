// Analysis domain — validated requests, normalized results, derived views.

pub mod error;
pub mod models;
pub mod risk;
