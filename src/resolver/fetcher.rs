//! Checkout map fetching
//!
//! The resolver only ever sees the [`MapFetcher`] trait; the production
//! implementation resolves a name either to a local file or to a `svn cat`
//! of the repository's config folder, at the pinned revision.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::CheckoutMap;
use crate::error::{Result, SparsevnError};
use crate::svn::{SvnClient, SvnUrl};

/// Repository folder the named checkout maps live under
pub const CONFIG_FOLDER: &str = "sparse";

/// Capability to turn a map name into a parsed document
pub trait MapFetcher {
    fn fetch(&self, name: &str) -> Result<CheckoutMap>;
}

/// Fetches maps from local files or from the repository's config folder
pub struct SvnMapFetcher<'a> {
    client: &'a SvnClient,
    config_url: String,
}

impl<'a> SvnMapFetcher<'a> {
    pub fn new(client: &'a SvnClient, url: &SvnUrl) -> Self {
        Self {
            client,
            config_url: url.join(CONFIG_FOLDER),
        }
    }

    fn fetch_remote(&self, name: &str) -> Result<String> {
        let target = if name.ends_with(".yaml") {
            format!("{}/{}", self.config_url, name)
        } else {
            format!("{}/{}.yaml", self.config_url, name)
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} Fetching {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.set_message(target.clone());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));

        let result = self.client.cat(&target);
        spinner.finish_and_clear();

        result.map_err(|e| SparsevnError::MapFetchFailed {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

impl MapFetcher for SvnMapFetcher<'_> {
    /// A name that resolves to an existing local file is read from disk;
    /// anything else is looked up in the repository's config folder, with a
    /// `.yaml` suffix appended when the name has none.
    fn fetch(&self, name: &str) -> Result<CheckoutMap> {
        let local = Path::new(name);
        if local.is_file() {
            let text =
                std::fs::read_to_string(local).map_err(|e| SparsevnError::MapFetchFailed {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
            return CheckoutMap::from_yaml(name, &text);
        }

        let text = self.fetch_remote(name)?;
        CheckoutMap::from_yaml(name, &text)
    }
}
