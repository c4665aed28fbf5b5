//! Integration tests for package creation on a real filesystem.

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use walkdir::WalkDir;

use upm_core::{
    assemble, CoreError, LocalFs, MemoryFs, NoopResolve, PlanExecutor, Session, SessionState,
};
use upm_spec::{ModuleDescriptor, PackageAuthor, PackageDescriptor, SpecReader};

fn filled_session() -> Session {
    let mut session = Session::new();
    session.set_field("package.name", "My Tool").unwrap();
    session.set_field("package.version", "1.0.0-preview-3.1").unwrap();
    session.set_field("package.displayName", "My Tool").unwrap();
    session.set_field("package.author.name", "Jane Doe").unwrap();
    session.set_field("package.author.email", "jane@example.com").unwrap();
    session.set_field("runtime.name", "MyTool").unwrap();
    session.set_field("runtime.rootNamespace", "MyTool").unwrap();
    session.set_field("editor.name", "MyTool.Editor").unwrap();
    session
}

/// Test the complete create flow against disk.
#[test]
fn test_create_package_on_disk() {
    let temp = tempdir().unwrap();
    let packages = temp.path().join("Packages");

    let mut session = filled_session();
    let report = session.create(&LocalFs, &NoopResolve, &packages).unwrap();

    let root = packages.join("com.jane-doe.my-tool");
    assert_eq!(report.root, root);
    assert_eq!(report.directories_created, 5);
    assert_eq!(report.files_written, 6);

    for dir in ["Documentation~", "Samples~", "Editor", "Runtime"] {
        assert!(root.join(dir).is_dir(), "missing directory {}", dir);
    }

    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# com.jane-doe.my-tool"
    );
    assert_eq!(fs::read_to_string(root.join("CHANGELOG.md")).unwrap(), "");
    assert!(root
        .join("Documentation~")
        .join("com.jane-doe.my-tool.md")
        .is_file());

    let package = SpecReader::read_package(root.join("package.json")).unwrap();
    assert_eq!(package.name, "com.jane-doe.my-tool");
    assert_eq!(package.version, "1.0.0-preview-3.1");
    assert_eq!(package.author.email, "jane@example.com");

    let runtime = SpecReader::read_module(root.join("Runtime").join("MyTool.asmdef")).unwrap();
    assert_eq!(runtime.root_namespace, "MyTool");
    assert!(runtime.include_platforms.is_empty());

    let editor =
        SpecReader::read_module(root.join("Editor").join("MyTool.Editor.asmdef")).unwrap();
    assert_eq!(editor.include_platforms, vec!["Editor"]);
    assert_eq!(editor.references, vec!["MyTool"]);

    // Samples~ stays empty.
    let files: Vec<_> = WalkDir::new(&root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();
    assert_eq!(files.len(), 6);
    assert_eq!(fs::read_dir(root.join("Samples~")).unwrap().count(), 0);

    assert_eq!(session.state(), SessionState::Empty);
}

/// A second create with the same identity must not touch the existing package.
#[test]
fn test_existing_package_is_left_alone() {
    let temp = tempdir().unwrap();
    let packages = temp.path().join("Packages");

    filled_session()
        .create(&LocalFs, &NoopResolve, &packages)
        .unwrap();
    let readme = packages.join("com.jane-doe.my-tool").join("README.md");
    fs::write(&readme, "# edited").unwrap();

    let mut session = filled_session();
    let err = session
        .create(&LocalFs, &NoopResolve, &packages)
        .unwrap_err();

    assert!(matches!(err, CoreError::PackageAlreadyExists(_)));
    assert_eq!(session.state(), SessionState::Rejected);
    assert_eq!(fs::read_to_string(&readme).unwrap(), "# edited");
}

/// Missing author means nothing is written at all.
#[test]
fn test_missing_author_has_no_side_effects() {
    let temp = tempdir().unwrap();
    let packages = temp.path().join("Packages");

    let mut session = Session::new();
    session.set_field("package.name", "Tool").unwrap();
    let err = session
        .create(&LocalFs, &NoopResolve, &packages)
        .unwrap_err();

    assert!(matches!(err, CoreError::MissingRequiredField { .. }));
    assert!(err.is_recoverable());
    assert!(!packages.exists());
}

/// Plans built directly can be executed on any filesystem.
#[test]
fn test_assemble_and_execute_in_memory() {
    let fs = MemoryFs::new();
    let package = PackageDescriptor::new("Tool")
        .with_version("4")
        .with_author(PackageAuthor::new("Acme Corp"));

    let plan = assemble(
        &package,
        &ModuleDescriptor::runtime(),
        &ModuleDescriptor::editor(),
        Path::new("/project/Packages"),
        &fs,
    )
    .unwrap();

    assert_eq!(plan.package_id(), "com.acme-corp.tool");
    assert_eq!(plan.package().version, "4.0.0");
    assert!(plan.runtime().is_none());
    assert!(plan.editor().is_none());

    PlanExecutor::new(&fs).execute(&plan).unwrap();
    assert!(fs.is_dir(Path::new("/project/Packages/com.acme-corp.tool/Samples~")));
    assert!(fs
        .read(Path::new("/project/Packages/com.acme-corp.tool/package.json"))
        .unwrap()
        .contains("\"version\": \"4.0.0\""));
}
