//! # upm_spec
//!
//! Descriptor model for Unity Package Manager packages.
//!
//! This crate holds the three records an authoring session edits, plus the
//! serializer that turns them into `package.json` and `.asmdef` files and the
//! reader that parses them back.
//!
//! ## Features
//!
//! - **Package descriptors**: name, version, author and description
//! - **Assembly descriptors**: runtime and editor `.asmdef` contents
//! - **Serialization**: Unity-style pretty JSON through [`DescriptorSerializer`]
//! - **Form files**: YAML, TOML or JSON files that pre-fill a session
//! - **Validation**: required-field errors and advisory warnings
//!
//! ## Example
//!
//! ```rust
//! use upm_spec::{DescriptorSerializer, JsonSerializer, ModuleDescriptor};
//!
//! let editor = ModuleDescriptor::editor().with_name("MyTool.Editor");
//! let json = JsonSerializer::new().serialize_module(&editor).unwrap();
//! assert!(json.contains("\"Editor\""));
//! ```

pub mod error;
pub mod form;
pub mod models;
pub mod reader;
pub mod validator;
pub mod writer;

pub use error::{SpecError, SpecResult};
pub use form::{AuthorSection, ModuleSection, PackageForm, PackageSection};
pub use models::*;
pub use reader::{FormFormat, SpecReader};
pub use validator::{DescriptorValidator, ValidationResult};
pub use writer::{DescriptorSerializer, JsonSerializer, SpecWriter};
