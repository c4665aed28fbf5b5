//! Descriptor serialization.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::form::PackageForm;
use crate::models::{ModuleDescriptor, PackageDescriptor};
use crate::reader::FormFormat;

/// Turns descriptors into the text stored in `package.json` and `.asmdef` files.
pub trait DescriptorSerializer {
    fn serialize_package(&self, package: &PackageDescriptor) -> SpecResult<String>;

    fn serialize_module(&self, module: &ModuleDescriptor) -> SpecResult<String>;
}

/// Pretty JSON with four-space indentation, the layout Unity writes itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub const INDENT: &'static [u8] = b"    ";

    pub fn new() -> Self {
        Self
    }

    fn to_pretty<T: Serialize>(&self, value: &T) -> SpecResult<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(Self::INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;

        String::from_utf8(buf).map_err(|e| SpecError::InvalidFormat {
            path: Default::default(),
            message: e.to_string(),
        })
    }
}

impl DescriptorSerializer for JsonSerializer {
    fn serialize_package(&self, package: &PackageDescriptor) -> SpecResult<String> {
        self.to_pretty(package)
    }

    fn serialize_module(&self, module: &ModuleDescriptor) -> SpecResult<String> {
        self.to_pretty(module)
    }
}

/// Writer for form files.
pub struct SpecWriter;

impl SpecWriter {
    /// Write a form in the format implied by the path's extension.
    pub fn write_form(path: impl AsRef<Path>, form: &PackageForm) -> SpecResult<()> {
        let path = path.as_ref();
        debug!("Writing form to {:?}", path);

        let content = match FormFormat::from_path(path)? {
            FormFormat::Yaml => serde_yaml::to_string(form)?,
            FormFormat::Toml => toml::to_string_pretty(form)?,
            FormFormat::Json => serde_json::to_string_pretty(form)?,
        };
        fs::write(path, content)?;
        Ok(())
    }
}
