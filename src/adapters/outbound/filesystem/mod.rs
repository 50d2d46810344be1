/// Filesystem adapters for catalog persistence and report output
mod catalog_store;
mod report_writer;

pub use catalog_store::JsonCatalogStore;
pub use report_writer::{FileSystemWriter, ReportWorkspace};
