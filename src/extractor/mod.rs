pub mod bundle;
pub mod bundle_writer;

pub use bundle::{assemble, ExtractionSummary, FileBlock};
pub use bundle_writer::BundleWriter;
