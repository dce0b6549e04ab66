//! Filter command: zone + month -> layer filter JSON.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use ozone_calendar::CalendarMonth;
use ozone_filter::{ZoneSelector, build_filter};

use crate::cli::FilterArgs;

/// Print the filter expression for a zone and month.
pub fn run(args: FilterArgs) -> Result<()> {
    let _cmd = info_span!("filter").entered();
    let month: CalendarMonth = args
        .month
        .parse()
        .with_context(|| format!("invalid --month value {:?}", args.month))?;
    let zone = ZoneSelector::from(args.zone.as_str());
    debug!(zone = %zone, month = %month, "building filter");
    let json = serde_json::to_string(&build_filter(&zone, &month))
        .context("failed to serialize filter")?;
    println!("{json}");
    Ok(())
}
