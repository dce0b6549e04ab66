//! Month command: slider position -> `YYYY-MM`.

use anyhow::{Context, Result};
use tracing::info_span;

use ozone_calendar::month_for_position;

use crate::cli::MonthArgs;

/// Print the month label for a slider position.
pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month", position = args.position).entered();
    let month = month_for_position(args.position)
        .with_context(|| format!("no month for slider position {}", args.position))?;
    println!("{month}");
    Ok(())
}
