pub mod client_clock;
pub mod date_format;
pub mod preference_cookies;
