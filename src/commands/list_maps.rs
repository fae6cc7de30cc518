//! List-maps command implementation
//!
//! Lists the checkout maps a repository defines under its config folder,
//! with the description each map carries. Maps without a description are
//! skipped, which keeps scratch files out of the listing.

use console::style;

use crate::cli::ListMapsArgs;
use crate::config::CheckoutMap;
use crate::error::Result;
use crate::resolver::fetcher::CONFIG_FOLDER;
use crate::svn::{SvnClient, SvnUrl};

/// Run list-maps command
pub fn run(args: ListMapsArgs) -> Result<()> {
    let url = SvnUrl::parse(&args.url)?;
    let client = SvnClient::new(args.revision, Vec::new());
    let config_url = url.join(CONFIG_FOLDER);

    println!();
    println!("{}", style("Currently defined checkout maps").bold());
    println!();

    let mut shown = 0usize;
    for entry in client.ls(&config_url)? {
        let Some(stem) = entry.strip_suffix(".yaml") else {
            continue;
        };

        // A map that fails to fetch or parse at this point is just not
        // listable; listing should not abort over one bad file.
        let description = client
            .cat(&format!("{config_url}/{entry}"))
            .ok()
            .and_then(|text| CheckoutMap::from_yaml(&entry, &text).ok())
            .and_then(|map| map.description);

        if let Some(description) = description {
            println!("{}{}", style(format!("{stem:<20}")).cyan(), description);
            shown += 1;
        }
    }

    if shown == 0 {
        println!("{}", style("(none with a description)").dim());
    }

    Ok(())
}
