//! Plan command - Show what `create` would write.

use anyhow::{Context, Result};
use clap::Args;

use upm_core::{BuildPlan, LocalFs};

use super::common::{report_warnings, PackageArgs, TargetArgs};

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    package: PackageArgs,

    #[command(flatten)]
    target: TargetArgs,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: PlanArgs) -> Result<()> {
    let mut session = args.package.into_session()?;
    if !args.json {
        report_warnings(&session);
    }

    let plan = session
        .submit(&LocalFs, &args.target.packages_dir)
        .context("Failed to assemble package")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }

    Ok(())
}

/// Print a plan as a readable listing.
pub fn print_plan(plan: &BuildPlan) {
    println!(
        "Package {} {} → {:?}",
        plan.package_id(),
        plan.package().version,
        plan.root()
    );
    println!();
    println!("Directories:");
    for dir in plan.directories() {
        println!("  📁 {}", dir.display());
    }
    println!();
    println!("Files:");
    for file in plan.files() {
        if file.contents.is_empty() {
            println!("  📄 {} (empty)", file.path.display());
        } else {
            println!("  📄 {} ({} bytes)", file.path.display(), file.contents.len());
        }
    }
}
