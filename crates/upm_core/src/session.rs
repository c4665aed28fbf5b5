//! Editing sessions.
//!
//! A [`Session`] owns the three descriptors a user fills in, applies the
//! live field rules on every edit, and drives the create flow:
//!
//! ```text
//! Empty -> Editing -> Validating -> Assembled -> (reset) Empty
//!                         |
//!                         +-> Rejected -> Editing
//! ```

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use upm_spec::{
    DescriptorValidator, ModuleDescriptor, PackageDescriptor, PackageForm, ValidationResult,
};

use crate::error::{CoreError, CoreResult};
use crate::executor::{ExecutionReport, PlanExecutor};
use crate::fs::Filesystem;
use crate::naming;
use crate::plan::{BuildPlan, PackageAssembler};
use crate::resolve::ResolveHook;
use crate::version;

/// Every editable field path, in form order.
pub const FIELDS: &[&str] = &[
    "package.name",
    "package.version",
    "package.displayName",
    "package.unity",
    "package.unityRelease",
    "package.author.name",
    "package.author.email",
    "package.author.url",
    "package.description",
    "runtime.name",
    "runtime.rootNamespace",
    "runtime.includePlatforms",
    "runtime.references",
    "editor.name",
    "editor.rootNamespace",
    "editor.references",
];

/// Fields that must be filled before a package can be created.
pub const REQUIRED_FIELDS: &[&str] = &["package.name", "package.version", "package.author.name"];

const READ_ONLY_FIELDS: &[&str] = &["editor.includePlatforms"];

/// Lifecycle of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Empty,
    Editing,
    Validating,
    Assembled,
    Rejected,
}

impl SessionState {
    /// Check if transition to the given state is valid.
    pub fn can_transition_to(&self, next: &SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, next),
            (Empty, Editing)
                | (Editing, Editing)
                | (Empty, Validating)
                | (Editing, Validating)
                | (Validating, Assembled)
                | (Validating, Rejected)
                | (Rejected, Editing)
                | (Assembled, Empty)
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Empty => "empty",
            SessionState::Editing => "editing",
            SessionState::Validating => "validating",
            SessionState::Assembled => "assembled",
            SessionState::Rejected => "rejected",
        };
        write!(f, "{}", name)
    }
}

/// The descriptors being authored plus the session state.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    package: PackageDescriptor,
    runtime: ModuleDescriptor,
    editor: ModuleDescriptor,
    last_error: Option<String>,
    assembler: PackageAssembler,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A blank session: default package, unrestricted runtime assembly and
    /// an editor assembly limited to the `Editor` platform.
    pub fn new() -> Self {
        Self {
            state: SessionState::Empty,
            package: PackageDescriptor::default(),
            runtime: ModuleDescriptor::runtime(),
            editor: ModuleDescriptor::editor(),
            last_error: None,
            assembler: PackageAssembler::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn package(&self) -> &PackageDescriptor {
        &self.package
    }

    pub fn runtime(&self) -> &ModuleDescriptor {
        &self.runtime
    }

    pub fn editor(&self) -> &ModuleDescriptor {
        &self.editor
    }

    /// Message of the most recent rejection, cleared by the next edit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Advisory validation of the current descriptors.
    pub fn validation(&self) -> ValidationResult {
        DescriptorValidator::validate(&self.package, &self.runtime, &self.editor)
    }

    /// Current value of a field. List fields are joined with `, `.
    pub fn field(&self, path: &str) -> CoreResult<String> {
        let value = match path {
            "package.name" => self.package.name.clone(),
            "package.version" => self.package.version.clone(),
            "package.displayName" => self.package.display_name.clone(),
            "package.unity" => self.package.unity_version.clone(),
            "package.unityRelease" => self.package.unity_release.clone(),
            "package.author.name" => self.package.author.name.clone(),
            "package.author.email" => self.package.author.email.clone(),
            "package.author.url" => self.package.author.url.clone(),
            "package.description" => self.package.description.clone(),
            "runtime.name" => self.runtime.name.clone(),
            "runtime.rootNamespace" => self.runtime.root_namespace.clone(),
            "runtime.includePlatforms" => self.runtime.include_platforms.join(", "),
            "runtime.references" => self.runtime.references.join(", "),
            "editor.name" => self.editor.name.clone(),
            "editor.rootNamespace" => self.editor.root_namespace.clone(),
            "editor.includePlatforms" => self.editor.include_platforms.join(", "),
            "editor.references" => self.editor.references.join(", "),
            other => return Err(CoreError::UnknownField(other.to_string())),
        };
        Ok(value)
    }

    /// Edit one field by path.
    ///
    /// Spaces in the package name become hyphens and the version is
    /// normalized on every edit. List fields take comma-separated values.
    pub fn set_field(&mut self, path: &str, value: &str) -> CoreResult<()> {
        if READ_ONLY_FIELDS.contains(&path) {
            return Err(CoreError::ReadOnlyField(path.to_string()));
        }
        if !FIELDS.contains(&path) {
            return Err(CoreError::UnknownField(path.to_string()));
        }

        self.transition(SessionState::Editing)?;
        self.last_error = None;

        match path {
            "package.name" => self.package.name = naming::hyphenate(value),
            "package.version" => self.package.version = version::normalize(value),
            "package.displayName" => self.package.display_name = value.to_string(),
            "package.unity" => self.package.unity_version = value.to_string(),
            "package.unityRelease" => self.package.unity_release = value.to_string(),
            "package.author.name" => self.package.author.name = value.to_string(),
            "package.author.email" => self.package.author.email = value.to_string(),
            "package.author.url" => self.package.author.url = value.to_string(),
            "package.description" => self.package.description = value.to_string(),
            "runtime.name" => self.runtime.name = value.to_string(),
            "runtime.rootNamespace" => self.runtime.root_namespace = value.to_string(),
            "runtime.includePlatforms" => self.runtime.set_platforms(split_list(value)),
            "runtime.references" => self.runtime.set_references(split_list(value)),
            "editor.name" => self.editor.name = value.to_string(),
            "editor.rootNamespace" => self.editor.root_namespace = value.to_string(),
            "editor.references" => self.editor.set_references(split_list(value)),
            other => return Err(CoreError::UnknownField(other.to_string())),
        }

        debug!("Set {} = {:?}", path, value);
        Ok(())
    }

    /// Apply every field present in a form.
    pub fn apply_form(&mut self, form: &PackageForm) -> CoreResult<()> {
        if let Some(package) = &form.package {
            let fields = [
                ("package.name", &package.name),
                ("package.version", &package.version),
                ("package.displayName", &package.display_name),
                ("package.unity", &package.unity_version),
                ("package.unityRelease", &package.unity_release),
                ("package.description", &package.description),
            ];
            self.apply_values(&fields)?;

            if let Some(author) = &package.author {
                self.apply_values(&[
                    ("package.author.name", &author.name),
                    ("package.author.email", &author.email),
                    ("package.author.url", &author.url),
                ])?;
            }
        }

        if let Some(runtime) = &form.runtime {
            self.apply_values(&[
                ("runtime.name", &runtime.name),
                ("runtime.rootNamespace", &runtime.root_namespace),
            ])?;
            if let Some(platforms) = &runtime.include_platforms {
                self.transition(SessionState::Editing)?;
                self.runtime.set_platforms(platforms.iter().cloned());
            }
            if let Some(references) = &runtime.references {
                self.transition(SessionState::Editing)?;
                self.runtime.set_references(references.iter().cloned());
            }
        }

        if let Some(editor) = &form.editor {
            self.apply_values(&[
                ("editor.name", &editor.name),
                ("editor.rootNamespace", &editor.root_namespace),
            ])?;
            if editor.include_platforms.is_some() {
                warn!("Ignoring editor.includePlatforms in form; the editor assembly is always Editor-only");
            }
            if let Some(references) = &editor.references {
                self.transition(SessionState::Editing)?;
                self.editor.set_references(references.iter().cloned());
            }
        }

        Ok(())
    }

    fn apply_values(&mut self, fields: &[(&str, &Option<String>)]) -> CoreResult<()> {
        for (path, value) in fields {
            if let Some(value) = value {
                self.set_field(path, value)?;
            }
        }
        Ok(())
    }

    /// Validate and assemble a plan for a package under `target_root`.
    ///
    /// On failure the session is left `Rejected` with the error recorded; the
    /// next edit returns it to `Editing`.
    pub fn submit(&mut self, fs: &dyn Filesystem, target_root: &Path) -> CoreResult<BuildPlan> {
        self.begin_validation()?;
        let result = self
            .assembler
            .assemble(&self.package, &self.runtime, &self.editor, target_root, fs);
        self.finish_validation(result)
    }

    /// Submit, write the package, reset the session, then notify the package manager.
    ///
    /// The session only reaches `Assembled` once every file is written. A
    /// failed write rejects it like a failed validation, keeping the fields.
    pub fn create(
        &mut self,
        fs: &dyn Filesystem,
        hook: &dyn ResolveHook,
        target_root: &Path,
    ) -> CoreResult<ExecutionReport> {
        self.begin_validation()?;
        let result = self
            .assembler
            .assemble(&self.package, &self.runtime, &self.editor, target_root, fs)
            .and_then(|plan| PlanExecutor::new(fs).execute(&plan));
        let report = self.finish_validation(result)?;
        info!("Successfully created new package: {}", report.package_id);

        self.reset()?;
        hook.resolve()?;
        Ok(report)
    }

    fn begin_validation(&mut self) -> CoreResult<()> {
        if self.state == SessionState::Rejected {
            self.transition(SessionState::Editing)?;
        }
        self.transition(SessionState::Validating)?;

        for warning in self.validation().warnings {
            warn!("{}", warning);
        }
        Ok(())
    }

    fn finish_validation<T>(&mut self, result: CoreResult<T>) -> CoreResult<T> {
        match result {
            Ok(value) => {
                self.transition(SessionState::Assembled)?;
                Ok(value)
            }
            Err(e) => {
                self.transition(SessionState::Rejected)?;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Discard the descriptors after a successful hand-off.
    pub fn reset(&mut self) -> CoreResult<()> {
        self.transition(SessionState::Empty)?;
        *self = Self::new();
        Ok(())
    }

    fn transition(&mut self, next: SessionState) -> CoreResult<()> {
        if !self.state.can_transition_to(&next) {
            return Err(CoreError::InvalidState {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        if self.state != next {
            debug!("Session {} -> {}", self.state, next);
        }
        self.state = next;
        Ok(())
    }
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
