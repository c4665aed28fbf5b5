//! Descriptor validation.
//!
//! Errors here mirror the required-field check the assembler enforces.
//! Warnings are advisory and never block package creation.

use crate::models::{ModuleDescriptor, PackageDescriptor};

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for package and assembly descriptors.
pub struct DescriptorValidator;

impl DescriptorValidator {
    /// Names of required package fields that are empty, in form order.
    pub fn missing_required(package: &PackageDescriptor) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if package.name.is_empty() {
            missing.push("name");
        }
        if package.version.is_empty() {
            missing.push("version");
        }
        if package.author.name.is_empty() {
            missing.push("author.name");
        }
        missing
    }

    /// Validate the full descriptor set.
    pub fn validate(
        package: &PackageDescriptor,
        runtime: &ModuleDescriptor,
        editor: &ModuleDescriptor,
    ) -> ValidationResult {
        let mut result = Self::validate_package(package);
        result.merge(Self::validate_modules(runtime, editor));
        result
    }

    /// Validate a package descriptor.
    pub fn validate_package(package: &PackageDescriptor) -> ValidationResult {
        let mut result = ValidationResult::new();

        for field in Self::missing_required(package) {
            result.add_error(format!("Package {} cannot be empty", field));
        }

        if package.display_name.is_empty() {
            result.add_warning("Package display name is recommended");
        }

        if package.description.is_empty() {
            result.add_warning("Package description is recommended");
        }

        if !package.author.name.is_empty() && package.author.email.is_empty() {
            result.add_warning(format!(
                "Author '{}' has no email address",
                package.author.name
            ));
        }

        result
    }

    /// Validate the runtime/editor assembly pair.
    pub fn validate_modules(runtime: &ModuleDescriptor, editor: &ModuleDescriptor) -> ValidationResult {
        let mut result = ValidationResult::new();

        match (runtime.is_named(), editor.is_named()) {
            (false, false) => {
                result.add_warning("No assembly definitions will be generated");
            }
            (true, false) => {
                result.add_warning(format!(
                    "Runtime assembly '{}' has no matching editor assembly",
                    runtime.name
                ));
            }
            (false, true) => {
                result.add_warning(format!(
                    "Editor assembly '{}' has no runtime assembly to reference",
                    editor.name
                ));
            }
            (true, true) => {
                if runtime.name == editor.name {
                    result.add_warning(format!(
                        "Runtime and editor assemblies share the name '{}'",
                        runtime.name
                    ));
                }
            }
        }

        result
    }
}
