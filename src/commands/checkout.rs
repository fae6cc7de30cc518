//! Checkout command implementation
//!
//! Ties the pieces together in a straight line: validate the url, fetch and
//! resolve the requested maps, print the plan, then (unless this is a dry
//! run) check out the top of the tree with empty depth and execute the plan
//! inside it.

use std::path::Path;

use console::style;

use crate::cli::CheckoutArgs;
use crate::domain::{PathSpec, Platform};
use crate::error::Result;
use crate::planner;
use crate::resolver::{self, MapFetcher, SvnMapFetcher};
use crate::svn::executor::execute_plan;
use crate::svn::{SvnClient, SvnUrl};

/// Map used when no -m/--map is given
pub const DEFAULT_MAP: &str = "code";

/// Run checkout command
pub fn run(args: CheckoutArgs) -> Result<()> {
    let url = SvnUrl::parse(&args.url)?;
    let client = SvnClient::new(args.revision.clone(), args.svn_args.clone());

    let platform = args.platform.unwrap_or_else(Platform::detect);
    println!("{} {}", style("Platform:").bold(), platform);
    println!("{} {}", style("Revision:").bold(), client.revision());

    let map_names = if args.maps.is_empty() {
        vec![DEFAULT_MAP.to_string()]
    } else {
        args.maps.clone()
    };

    let fetcher = SvnMapFetcher::new(&client, &url);
    let (entries, url_suffix) = resolve_maps(&map_names, platform, &fetcher)?;

    let effective_url = url.with_suffix(url_suffix.as_deref());
    println!("{} {}", style("Checkout url:").bold(), effective_url);

    let operations = planner::plan(&entries);
    println!();
    println!("{}", style("Checkout plan:").bold());
    for operation in &operations {
        println!("  {operation}");
    }
    println!();

    if args.dry_run {
        return Ok(());
    }

    let folder = args
        .folder
        .clone()
        .unwrap_or_else(|| SvnUrl::last_segment(&effective_url));
    println!(
        "{} {} {} {}",
        style("Checking out from:").bold(),
        effective_url,
        style("into").bold(),
        folder
    );

    client.checkout_empty(&effective_url, &folder)?;
    execute_plan(&client, Path::new(&folder), &operations)
}

/// Resolve each named map in order, concatenating entries.
///
/// Every map strips its own base from its own entries; the last map that
/// declares one supplies the suffix folded into the checkout url.
fn resolve_maps(
    map_names: &[String],
    platform: Platform,
    fetcher: &dyn MapFetcher,
) -> Result<(Vec<PathSpec>, Option<String>)> {
    let mut entries = Vec::new();
    let mut url_suffix = None;

    for name in map_names {
        println!("{} {}", style("Reading checkout map:").bold(), name);

        let doc = fetcher.fetch(name)?;
        let resolution = resolver::resolve_map(&doc, name, platform, fetcher)?;

        for diagnostic in &resolution.diagnostics {
            eprintln!("{} {}", style("warning:").yellow().bold(), diagnostic);
        }

        if resolution.url_suffix.is_some() {
            url_suffix = resolution.url_suffix;
        }
        entries.extend(resolution.entries);
    }

    Ok((entries, url_suffix))
}
