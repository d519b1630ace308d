//! Show providers for the player: a directory of files or a show server.

mod directory;
mod http;

pub use directory::DirectoryShowProvider;
pub use http::HttpShowProvider;

use crate::config::BingoConfig;
use strictly_bingo::ShowProvider;
use tracing::{info, instrument};

/// Picks the provider the config asks for: the show server if a URL is
/// set, otherwise the shows directory.
#[instrument(skip(config))]
pub fn from_config(config: &BingoConfig) -> Box<dyn ShowProvider> {
    match config.server_url() {
        Some(url) => {
            info!(server_url = %url, "Using show server");
            Box::new(HttpShowProvider::new(url.clone()))
        }
        None => {
            info!(shows_dir = %config.shows_dir().display(), "Using shows directory");
            Box::new(DirectoryShowProvider::new(config.shows_dir().clone()))
        }
    }
}
