mod error;
mod greeting;
pub mod models;
pub mod ports;
mod preferences;
pub mod services;
mod user;

pub use error::*;
pub use greeting::*;
pub use preferences::*;
pub use user::*;
