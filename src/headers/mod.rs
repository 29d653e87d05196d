//! Header mirroring for the build.
//!
//! Copies every header under a source tree into the same relative location
//! under a destination tree. The destination is only ever added to or
//! overwritten; stale files are left alone.
//!
//! # Example
//!
//! ```no_run
//! use beesetup::headers::HeaderSync;
//! use beesetup::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! let report = HeaderSync::new("Engine/src", "build/include")
//!     .run(&mut ui)
//!     .expect("source is a directory");
//! println!("{} headers copied", report.copied.len());
//! ```

mod sync;

pub use sync::{HeaderFile, HeaderSync, SyncReport, DEFAULT_EXTENSIONS};
