//! Create command - Write a new package to the Packages directory.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use walkdir::WalkDir;

use upm_core::{CommandResolve, LocalFs, NoopResolve, ResolveHook};

use super::common::{report_warnings, PackageArgs, TargetArgs};
use super::plan::print_plan;

#[derive(Args)]
pub struct CreateArgs {
    #[command(flatten)]
    package: PackageArgs,

    #[command(flatten)]
    target: TargetArgs,

    /// Command to run afterwards so the package manager re-resolves packages
    #[arg(long, env = "UPM_RESOLVE_CMD")]
    resolve_cmd: Option<String>,

    /// Print the plan instead of writing it
    #[arg(long)]
    dry_run: bool,
}

pub fn execute(args: CreateArgs) -> Result<()> {
    let packages_dir = args.target.packages_dir;
    let mut session = args.package.into_session()?;
    report_warnings(&session);

    if args.dry_run {
        let plan = session
            .submit(&LocalFs, &packages_dir)
            .context("Failed to assemble package")?;
        print_plan(&plan);
        println!();
        println!("Dry run: nothing was written.");
        return Ok(());
    }

    let hook: Box<dyn ResolveHook> = match args.resolve_cmd.as_deref().and_then(CommandResolve::parse) {
        Some(command) => {
            let project_dir = packages_dir
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            Box::new(command.in_dir(project_dir))
        }
        None => Box::new(NoopResolve),
    };

    info!("Creating package in {:?}", packages_dir);
    let report = session
        .create(&LocalFs, hook.as_ref(), &packages_dir)
        .context("Failed to create package")?;

    println!("✅ Package '{}' created successfully!", report.package_id);
    println!();
    println!("Location: {:?}", report.root);
    println!();
    for entry in WalkDir::new(&report.root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let indent = "  ".repeat(entry.depth());
        let marker = if entry.file_type().is_dir() { "📁" } else { "📄" };
        println!("{}{} {}", indent, marker, entry.file_name().to_string_lossy());
    }
    println!();
    println!("Note: the editor assembly references the runtime assembly by name.");
    println!("Enable \"Use GUIDs\" on the editor assembly definition if you reference");
    println!("assemblies outside the package.");

    Ok(())
}
