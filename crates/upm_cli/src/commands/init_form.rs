//! Init-form command - Write a blank form file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use upm_spec::{PackageForm, SpecWriter};

#[derive(Args)]
pub struct InitFormArgs {
    /// Where to write the form; the extension picks YAML, TOML or JSON
    #[arg(default_value = "upm-form.yaml")]
    path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub fn execute(args: InitFormArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "Form already exists at {:?}. Use --force to overwrite.",
            args.path
        );
    }

    info!("Writing blank form to {:?}", args.path);
    SpecWriter::write_form(&args.path, &PackageForm::template())
        .with_context(|| format!("Failed to write form {:?}", args.path))?;

    println!("✅ Form written to {:?}", args.path);
    println!();
    println!("Next steps:");
    println!("  # fill in package.name, package.version and package.author.name");
    println!("  upm create --form {}", args.path.display());

    Ok(())
}
