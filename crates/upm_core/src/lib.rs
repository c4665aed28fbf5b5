//! # upm_core
//!
//! Package assembly for upmkit.
//!
//! This crate turns the descriptors from `upm_spec` into a new Unity package
//! on disk: it normalizes the version, derives the canonical package id,
//! plans the directory tree, writes it, and notifies the package manager.
//!
//! # Architecture
//!
//! - **Version / naming**: pure string rules applied while editing and at assembly
//! - **Assembler**: validates descriptors and produces a [`BuildPlan`]
//! - **Executor**: realizes a plan through a [`Filesystem`]
//! - **Resolve hook**: tells the host package manager to re-scan
//! - **Session**: the editing surface and its state machine
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use upm_core::{MemoryFs, NoopResolve, Session};
//!
//! let fs = MemoryFs::new();
//! let mut session = Session::new();
//! session.set_field("package.name", "My Tool").unwrap();
//! session.set_field("package.author.name", "Jane Doe").unwrap();
//! session.set_field("runtime.name", "MyTool").unwrap();
//!
//! let report = session.create(&fs, &NoopResolve, Path::new("Packages")).unwrap();
//! assert_eq!(report.package_id, "com.jane-doe.my-tool");
//! ```

pub mod error;
pub mod executor;
pub mod fs;
pub mod naming;
pub mod plan;
pub mod resolve;
pub mod session;
pub mod version;

pub use error::{CoreError, CoreResult};
pub use executor::{ExecutionReport, PlanExecutor};
pub use fs::{Filesystem, FsOp, LocalFs, MemoryFs};
pub use naming::{ensure_single_component, hyphenate, sanitize};
pub use plan::{assemble, BuildPlan, PackageAssembler, PlanStep, PlannedFile};
pub use resolve::{CommandResolve, NoopResolve, ResolveHook};
pub use session::{Session, SessionState, FIELDS, REQUIRED_FIELDS};
pub use version::{normalize, normalize_segments};
