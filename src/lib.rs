pub mod cli;
pub mod clipboard;
pub mod config;
pub mod countdown;
pub mod error;
pub mod logging;
pub mod notify;
pub mod picker;
pub mod receipt;
pub mod route;
pub mod session;
pub mod state;
pub mod submission;
pub mod timer;
pub mod tui;
pub mod ui;
