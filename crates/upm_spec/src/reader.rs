//! Descriptor and form file reading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::form::PackageForm;
use crate::models::{ModuleDescriptor, PackageDescriptor};

/// Text formats accepted for form files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFormat {
    Yaml,
    Toml,
    Json,
}

impl FormFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> SpecResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(SpecError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reader for descriptor and form files.
pub struct SpecReader;

impl SpecReader {
    /// Parse the contents of a `package.json`.
    pub fn parse_package(content: &str) -> SpecResult<PackageDescriptor> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse the contents of an `.asmdef`.
    pub fn parse_module(content: &str) -> SpecResult<ModuleDescriptor> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a `package.json` from disk.
    pub fn read_package(path: impl AsRef<Path>) -> SpecResult<PackageDescriptor> {
        let path = path.as_ref();
        debug!("Reading package manifest from {:?}", path);

        let content = fs::read_to_string(path)?;
        Self::parse_package(&content).map_err(|e| Self::located(path, e))
    }

    /// Read an `.asmdef` from disk.
    pub fn read_module(path: impl AsRef<Path>) -> SpecResult<ModuleDescriptor> {
        let path = path.as_ref();
        debug!("Reading assembly definition from {:?}", path);

        let content = fs::read_to_string(path)?;
        Self::parse_module(&content).map_err(|e| Self::located(path, e))
    }

    /// Load a form file. The format is chosen by extension.
    pub fn read_form(path: impl AsRef<Path>) -> SpecResult<PackageForm> {
        let path = path.as_ref();
        let format = FormFormat::from_path(path)?;
        debug!("Reading {:?} form from {:?}", format, path);

        let content = fs::read_to_string(path)?;
        Self::parse_form(&content, format).map_err(|e| Self::located(path, e))
    }

    /// Parse form text in the given format.
    pub fn parse_form(content: &str, format: FormFormat) -> SpecResult<PackageForm> {
        let form = match format {
            FormFormat::Yaml => serde_yaml::from_str(content)?,
            FormFormat::Toml => toml::from_str(content)?,
            FormFormat::Json => serde_json::from_str(content)?,
        };
        Ok(form)
    }

    fn located(path: &Path, err: SpecError) -> SpecError {
        match err {
            SpecError::Io(_) => err,
            other => SpecError::InvalidFormat {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_form() {
        let content = r#"
package:
  name: My Tool
  version: "0.1"
  unity: "2022.3"
  author:
    name: Jane Doe
runtime:
  name: MyTool.Runtime
  references: [Other.Runtime]
"#;

        let form = SpecReader::parse_form(content, FormFormat::Yaml).unwrap();
        let package = form.package.unwrap();
        assert_eq!(package.name.as_deref(), Some("My Tool"));
        assert_eq!(package.unity_version.as_deref(), Some("2022.3"));
        assert_eq!(package.author.unwrap().name.as_deref(), Some("Jane Doe"));

        let runtime = form.runtime.unwrap();
        assert_eq!(runtime.references, Some(vec!["Other.Runtime".to_string()]));
        assert!(form.editor.is_none());
    }

    #[test]
    fn test_parse_toml_form() {
        let content = r#"
[package]
name = "My Tool"
displayName = "My Tool"

[package.author]
name = "Jane Doe"
email = "jane@example.com"

[editor]
name = "MyTool.Editor"
"#;

        let form = SpecReader::parse_form(content, FormFormat::Toml).unwrap();
        let package = form.package.unwrap();
        assert_eq!(package.display_name.as_deref(), Some("My Tool"));
        assert_eq!(
            package.author.unwrap().email.as_deref(),
            Some("jane@example.com")
        );
        assert_eq!(form.editor.unwrap().name.as_deref(), Some("MyTool.Editor"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FormFormat::from_path(Path::new("a.yml")).unwrap(), FormFormat::Yaml);
        assert_eq!(FormFormat::from_path(Path::new("a.TOML")).unwrap(), FormFormat::Toml);
        assert_eq!(FormFormat::from_path(Path::new("a.json")).unwrap(), FormFormat::Json);
        assert!(matches!(
            FormFormat::from_path(Path::new("a.ini")),
            Err(SpecError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_package_tolerates_missing_keys() {
        let package = SpecReader::parse_package(r#"{"name": "com.a.b"}"#).unwrap();
        assert_eq!(package.name, "com.a.b");
        assert_eq!(package.version, "1.0.0");
    }
}
