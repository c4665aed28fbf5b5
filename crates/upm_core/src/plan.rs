//! Package assembly and build plans.
//!
//! [`PackageAssembler::assemble`] turns the three edited descriptors into a
//! [`BuildPlan`]: the ordered directories and files that make up a new
//! package. Assembly never writes anything; it only asks the filesystem
//! whether the package root is already taken.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use upm_spec::{
    DescriptorSerializer, DescriptorValidator, JsonSerializer, ModuleDescriptor, ModuleKind,
    PackageDescriptor,
};

use crate::error::{CoreError, CoreResult};
use crate::fs::Filesystem;
use crate::naming;
use crate::version;

/// Directory holding package documentation. The `~` suffix hides it from Unity's importer.
pub const DOCUMENTATION_DIR: &str = "Documentation~";
/// Directory holding importable samples.
pub const SAMPLES_DIR: &str = "Samples~";

/// A file to write, relative to the plan's target root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// One step of a plan, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStep<'a> {
    CreateDir(&'a Path),
    WriteFile(&'a PlannedFile),
}

/// The directories and files that make up a new package.
///
/// Paths are relative to `target_root`. Every directory precedes every file
/// and the package root is always the first directory.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    target_root: PathBuf,
    package: PackageDescriptor,
    runtime: Option<ModuleDescriptor>,
    editor: Option<ModuleDescriptor>,
    directories: Vec<PathBuf>,
    files: Vec<PlannedFile>,
}

impl BuildPlan {
    /// The canonical package identifier, e.g. `com.jane-doe.my-tool`.
    pub fn package_id(&self) -> &str {
        &self.package.name
    }

    /// The package descriptor as it will be written to `package.json`.
    pub fn package(&self) -> &PackageDescriptor {
        &self.package
    }

    /// The runtime assembly, when one will be emitted.
    pub fn runtime(&self) -> Option<&ModuleDescriptor> {
        self.runtime.as_ref()
    }

    /// The editor assembly, when one will be emitted.
    pub fn editor(&self) -> Option<&ModuleDescriptor> {
        self.editor.as_ref()
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Absolute path of the package root directory.
    pub fn root(&self) -> PathBuf {
        self.target_root.join(self.package_id())
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Find a planned file by its path relative to the package root.
    pub fn file(&self, relative: impl AsRef<Path>) -> Option<&PlannedFile> {
        let wanted = Path::new(self.package_id()).join(relative);
        self.files.iter().find(|f| f.path == wanted)
    }

    /// Resolve a plan-relative path against the target root.
    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.target_root.join(relative)
    }

    /// All steps in execution order: directories first, then files.
    pub fn steps(&self) -> impl Iterator<Item = PlanStep<'_>> {
        self.directories
            .iter()
            .map(|d| PlanStep::CreateDir(d.as_path()))
            .chain(self.files.iter().map(PlanStep::WriteFile))
    }
}

/// Validates descriptors and builds plans.
#[derive(Debug, Clone, Default)]
pub struct PackageAssembler<S = JsonSerializer> {
    serializer: S,
}

impl PackageAssembler<JsonSerializer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: DescriptorSerializer> PackageAssembler<S> {
    /// Use a custom serializer for `package.json` and `.asmdef` contents.
    pub fn with_serializer(serializer: S) -> Self {
        Self { serializer }
    }

    /// Build a plan for a new package under `target_root`.
    ///
    /// Fails with [`CoreError::MissingRequiredField`] before anything else
    /// when the name, version or author name is empty, and with
    /// [`CoreError::PackageAlreadyExists`] when the package root exists.
    pub fn assemble(
        &self,
        package: &PackageDescriptor,
        runtime: &ModuleDescriptor,
        editor: &ModuleDescriptor,
        target_root: &Path,
        fs: &dyn Filesystem,
    ) -> CoreResult<BuildPlan> {
        let missing = DescriptorValidator::missing_required(package);
        if !missing.is_empty() {
            return Err(CoreError::MissingRequiredField {
                fields: missing.into_iter().map(String::from).collect(),
            });
        }

        let package_id = naming::sanitize(&package.name, &package.author.name);
        let root = target_root.join(&package_id);
        if fs.exists(&root) {
            return Err(CoreError::PackageAlreadyExists(root));
        }

        let mut package = package.clone();
        package.name = package_id;
        package.version = version::normalize(&package.version);

        let root = PathBuf::from(&package.name);
        let directories = vec![
            root.clone(),
            root.join(DOCUMENTATION_DIR),
            root.join(SAMPLES_DIR),
            root.join(ModuleKind::Editor.directory()),
            root.join(ModuleKind::Runtime.directory()),
        ];

        let mut files = vec![
            PlannedFile {
                path: root
                    .join(DOCUMENTATION_DIR)
                    .join(format!("{}.md", package.name)),
                contents: String::new(),
            },
            PlannedFile {
                path: root.join("CHANGELOG.md"),
                contents: String::new(),
            },
            PlannedFile {
                path: root.join("README.md"),
                contents: format!("# {}", package.name),
            },
            PlannedFile {
                path: root.join("package.json"),
                contents: self.serializer.serialize_package(&package)?,
            },
        ];

        let runtime = runtime.is_named().then(|| runtime.clone());
        if let Some(runtime) = &runtime {
            files.push(PlannedFile {
                path: root
                    .join(ModuleKind::Runtime.directory())
                    .join(runtime.file_name()),
                contents: self.serializer.serialize_module(runtime)?,
            });
        }

        let editor = if editor.is_named() {
            let mut editor = editor.clone();
            // Referenced by name; converting to GUID references is left to the user.
            if let Some(runtime) = &runtime {
                editor.add_reference(runtime.name.clone());
            }
            files.push(PlannedFile {
                path: root
                    .join(ModuleKind::Editor.directory())
                    .join(editor.file_name()),
                contents: self.serializer.serialize_module(&editor)?,
            });
            Some(editor)
        } else {
            None
        };

        for file in &files {
            debug!("Planned file {:?}", file.path);
        }
        info!(
            "Assembled plan for {} {} ({} directories, {} files)",
            package.name,
            package.version,
            directories.len(),
            files.len()
        );

        Ok(BuildPlan {
            target_root: target_root.to_path_buf(),
            package,
            runtime,
            editor,
            directories,
            files,
        })
    }
}

/// Assemble with the default JSON serializer.
pub fn assemble(
    package: &PackageDescriptor,
    runtime: &ModuleDescriptor,
    editor: &ModuleDescriptor,
    target_root: &Path,
    fs: &dyn Filesystem,
) -> CoreResult<BuildPlan> {
    PackageAssembler::new().assemble(package, runtime, editor, target_root, fs)
}
