//! Form files: partially filled descriptors loaded from YAML, TOML, or JSON.
//!
//! Every key is optional so that a form only needs to name the fields it
//! wants to pre-fill. Values are applied to an editing session field by
//! field, which means the same live rules (hyphenated names, normalized
//! versions) apply as for interactive edits.

use serde::{Deserialize, Serialize};

/// Root of a form file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackageForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<ModuleSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<ModuleSection>,
}

/// The `package:` section of a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "unity", skip_serializing_if = "Option::is_none")]
    pub unity_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unity_release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The `author:` block inside the package section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthorSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A `runtime:` or `editor:` section.
///
/// `include_platforms` is honored for the runtime assembly only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
}

impl PackageForm {
    /// A blank form with every editable key present.
    pub fn template() -> Self {
        let blank = || Some(String::new());
        Self {
            package: Some(PackageSection {
                name: blank(),
                version: Some(crate::models::DEFAULT_VERSION.to_string()),
                display_name: blank(),
                unity_version: blank(),
                unity_release: blank(),
                author: Some(AuthorSection {
                    name: blank(),
                    email: blank(),
                    url: blank(),
                }),
                description: blank(),
            }),
            runtime: Some(ModuleSection {
                name: blank(),
                root_namespace: blank(),
                include_platforms: Some(Vec::new()),
                references: Some(Vec::new()),
            }),
            editor: Some(ModuleSection {
                name: blank(),
                root_namespace: blank(),
                include_platforms: None,
                references: Some(Vec::new()),
            }),
        }
    }
}
