//! Interactive TUI: home and game screens

mod app;
mod rendering;
mod theme;

pub use app::{App, AppScreen, Message, MessageStyle, run_tui};
pub use theme::Theme;
