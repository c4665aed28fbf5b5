//! Arguments and helpers shared by `create` and `plan`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use upm_core::Session;
use upm_spec::SpecReader;

/// Descriptor fields. Flags override values loaded from `--form`.
#[derive(Args, Debug, Default)]
pub struct PackageArgs {
    /// Form file (.yaml, .yml, .toml or .json) to pre-fill fields from
    #[arg(short, long)]
    pub form: Option<PathBuf>,

    /// Package name (spaces become hyphens)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Package version, normalized to three segments
    #[arg(id = "pkg_version", long = "pkg-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Human-readable package name
    #[arg(long)]
    pub display_name: Option<String>,

    /// Minimum Unity version, e.g. 2022.3
    #[arg(long)]
    pub unity: Option<String>,

    /// Minimum Unity release, e.g. 0f1
    #[arg(long)]
    pub unity_release: Option<String>,

    /// Author name
    #[arg(short, long)]
    pub author: Option<String>,

    /// Author email
    #[arg(long)]
    pub email: Option<String>,

    /// Author URL
    #[arg(long)]
    pub url: Option<String>,

    /// Package description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Runtime assembly name (no runtime .asmdef when empty)
    #[arg(long)]
    pub runtime_asm: Option<String>,

    /// Runtime assembly root namespace
    #[arg(long)]
    pub runtime_namespace: Option<String>,

    /// Reference added to the runtime assembly (repeatable)
    #[arg(long = "runtime-ref", value_name = "ASSEMBLY")]
    pub runtime_refs: Vec<String>,

    /// Editor assembly name (no editor .asmdef when empty)
    #[arg(long)]
    pub editor_asm: Option<String>,

    /// Editor assembly root namespace
    #[arg(long)]
    pub editor_namespace: Option<String>,

    /// Reference added to the editor assembly (repeatable)
    #[arg(long = "editor-ref", value_name = "ASSEMBLY")]
    pub editor_refs: Vec<String>,
}

impl PackageArgs {
    /// Build an editing session from the form file and flags.
    pub fn into_session(self) -> Result<Session> {
        let mut session = Session::new();

        if let Some(form_path) = &self.form {
            info!("Loading form from {:?}", form_path);
            let form = SpecReader::read_form(form_path)
                .with_context(|| format!("Failed to read form {:?}", form_path))?;
            session.apply_form(&form)?;
        }

        let fields = [
            ("package.name", self.name),
            ("package.version", self.version),
            ("package.displayName", self.display_name),
            ("package.unity", self.unity),
            ("package.unityRelease", self.unity_release),
            ("package.author.name", self.author),
            ("package.author.email", self.email),
            ("package.author.url", self.url),
            ("package.description", self.description),
            ("runtime.name", self.runtime_asm),
            ("runtime.rootNamespace", self.runtime_namespace),
            ("editor.name", self.editor_asm),
            ("editor.rootNamespace", self.editor_namespace),
        ];

        for (path, value) in fields {
            if let Some(value) = value {
                session.set_field(path, &value)?;
            }
        }

        // The identifier becomes a directory name under the packages dir.
        upm_core::ensure_single_component("package.name", &session.package().name)?;
        upm_core::ensure_single_component(
            "package.author.name",
            &session.package().author.name,
        )?;

        if !self.runtime_refs.is_empty() {
            session.set_field("runtime.references", &self.runtime_refs.join(","))?;
        }
        if !self.editor_refs.is_empty() {
            session.set_field("editor.references", &self.editor_refs.join(","))?;
        }

        Ok(session)
    }
}

/// Location of the Packages directory packages are created in.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Packages directory of the Unity project
    #[arg(long, env = "UPM_PACKAGES_DIR", default_value = "Packages")]
    pub packages_dir: PathBuf,
}

/// Print advisory validation warnings.
pub fn report_warnings(session: &Session) {
    for warning in session.validation().warnings {
        println!("⚠️  {}", warning);
    }
}
