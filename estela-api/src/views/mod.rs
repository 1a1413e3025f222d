pub mod entry_card;
pub mod exercise;
pub mod freeform;
pub mod list_item;
pub mod pages;
pub mod session;
pub mod two_flags;

pub use session::{ServerMessage, ViewSession, ViewSessionError};
