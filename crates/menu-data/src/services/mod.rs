pub mod aggregator;
pub mod fetchers;
pub mod sheet_source;
pub mod store;

pub use aggregator::DataLoader;
pub use fetchers::SheetFetcher;
pub use sheet_source::{HttpSheetSource, SheetKind, SheetResponse, SheetSource};
pub use store::SnapshotStore;
