//! Normalize-version command.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct NormalizeVersionArgs {
    /// Version as typed, e.g. `2` or `1.0.0-preview-3.1`
    #[arg(default_value = "")]
    raw: String,

    /// Print each segment on its own line
    #[arg(long)]
    segments: bool,
}

pub fn execute(args: NormalizeVersionArgs) -> Result<()> {
    if args.segments {
        for segment in upm_core::normalize_segments(&args.raw) {
            println!("{}", segment);
        }
    } else {
        println!("{}", upm_core::normalize(&args.raw));
    }
    Ok(())
}
