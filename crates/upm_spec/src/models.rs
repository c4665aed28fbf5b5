//! Data models for package and assembly descriptors.

use serde::{Deserialize, Serialize};

/// Default version for a freshly created package.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Platform tag that restricts an assembly to the Unity editor.
pub const EDITOR_PLATFORM: &str = "Editor";

/// Author block of a package manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackageAuthor {
    pub name: String,
    pub email: String,
    pub url: String,
}

impl PackageAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// The contents of a `package.json` manifest.
///
/// `name` holds whatever the user typed until assembly replaces it with the
/// canonical `com.<author>.<name>` identifier. Field order matches the order
/// keys are written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub display_name: String,
    #[serde(rename = "unity")]
    pub unity_version: String,
    pub unity_release: String,
    pub author: PackageAuthor,
    pub description: String,
}

impl Default for PackageDescriptor {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: DEFAULT_VERSION.to_string(),
            display_name: String::new(),
            unity_version: String::new(),
            unity_release: String::new(),
            author: PackageAuthor::default(),
            description: String::new(),
        }
    }
}

impl PackageDescriptor {
    /// Create a descriptor with a name and the default version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_author(mut self, author: PackageAuthor) -> Self {
        self.author = author;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_unity(mut self, version: impl Into<String>, release: impl Into<String>) -> Self {
        self.unity_version = version.into();
        self.unity_release = release.into();
        self
    }
}

/// Which of the two assemblies a module descriptor describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Runtime,
    Editor,
}

impl ModuleKind {
    /// Directory inside the package root that holds this assembly.
    pub fn directory(&self) -> &'static str {
        match self {
            ModuleKind::Runtime => "Runtime",
            ModuleKind::Editor => "Editor",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleKind::Runtime => write!(f, "runtime"),
            ModuleKind::Editor => write!(f, "editor"),
        }
    }
}

/// The contents of an `.asmdef` assembly definition.
///
/// `include_platforms` and `references` behave as ordered sets: insertion
/// order is kept and duplicates are dropped. An empty platform list means
/// the assembly builds for every platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleDescriptor {
    pub name: String,
    pub root_namespace: String,
    pub include_platforms: Vec<String>,
    pub references: Vec<String>,
}

impl ModuleDescriptor {
    /// A runtime assembly: no platform restriction.
    pub fn runtime() -> Self {
        Self::default()
    }

    /// An editor assembly, restricted to the `Editor` platform.
    pub fn editor() -> Self {
        Self {
            include_platforms: vec![EDITOR_PLATFORM.to_string()],
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_root_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.root_namespace = namespace.into();
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.add_reference(reference);
        self
    }

    /// Add a reference unless it is already present. Returns whether it was added.
    pub fn add_reference(&mut self, reference: impl Into<String>) -> bool {
        insert_unique(&mut self.references, reference.into())
    }

    /// Add a platform unless it is already present. Returns whether it was added.
    pub fn add_platform(&mut self, platform: impl Into<String>) -> bool {
        insert_unique(&mut self.include_platforms, platform.into())
    }

    /// Replace the reference set, keeping first occurrences only.
    pub fn set_references<I, S>(&mut self, references: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references.clear();
        for reference in references {
            self.add_reference(reference);
        }
    }

    /// Replace the platform set, keeping first occurrences only.
    pub fn set_platforms<I, S>(&mut self, platforms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_platforms.clear();
        for platform in platforms {
            self.add_platform(platform);
        }
    }

    /// File name of the assembly definition, e.g. `MyTool.Runtime.asmdef`.
    pub fn file_name(&self) -> String {
        format!("{}.asmdef", self.name)
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

fn insert_unique(set: &mut Vec<String>, value: String) -> bool {
    if value.is_empty() || set.contains(&value) {
        return false;
    }
    set.push(value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_module_defaults_to_editor_platform() {
        let editor = ModuleDescriptor::editor();
        assert_eq!(editor.include_platforms, vec!["Editor".to_string()]);
        assert!(ModuleDescriptor::runtime().include_platforms.is_empty());
    }

    #[test]
    fn test_references_are_an_ordered_set() {
        let mut module = ModuleDescriptor::runtime();
        assert!(module.add_reference("B"));
        assert!(module.add_reference("A"));
        assert!(!module.add_reference("B"));
        assert!(!module.add_reference(""));
        assert_eq!(module.references, vec!["B", "A"]);

        module.set_references(["C", "C", "D"]);
        assert_eq!(module.references, vec!["C", "D"]);
    }

    #[test]
    fn test_package_defaults() {
        let package = PackageDescriptor::default();
        assert_eq!(package.version, "1.0.0");
        assert!(package.name.is_empty());
        assert!(package.author.name.is_empty());
    }

    #[test]
    fn test_module_kind_directory() {
        assert_eq!(ModuleKind::Runtime.directory(), "Runtime");
        assert_eq!(ModuleKind::Editor.directory(), "Editor");
        assert_eq!(ModuleKind::Editor.to_string(), "editor");
    }
}
