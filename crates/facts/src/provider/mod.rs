//! Current snapshot providers.
//!
//! The resolver never reads "today" values from ambient state; a
//! [`CurrentSnapshotProvider`] is injected at construction instead. Two
//! implementations ship with the crate:
//!
//! - [`StaticSnapshotProvider`]: a fixed map, for offline use and tests
//! - [`SheetSnapshotProvider`]: a spreadsheet-backed JSON endpoint over HTTP

mod static_snapshot;
mod traits;

pub mod sheet;

pub use sheet::SheetSnapshotProvider;
pub use static_snapshot::StaticSnapshotProvider;
pub use traits::CurrentSnapshotProvider;
