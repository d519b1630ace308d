//! Strictly Bingo player - terminal front end for `strictly_bingo`.
//!
//! Loads a show from a directory of files or a show server, deals a card,
//! and lets the player mark cells in a ratatui interface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod providers;
mod render;
mod tui;
mod ui;

pub use app::App;
pub use cli::{Cli, Command, ShowArgs};
pub use config::{BingoConfig, ConfigError};
pub use input::move_cursor;
pub use providers::{DirectoryShowProvider, HttpShowProvider, from_config as provider_from_config};
pub use render::{failure_message, render_text};
pub use tui::run as run_tui;
pub use ui::{banner_area, draw};
