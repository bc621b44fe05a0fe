// src/output/mod.rs
// =============================================================================
// Turning a crawl result into text/JSON and putting it somewhere.
//
// - format: OutputFormat and rendering
// - write:  stdout or file destination
// =============================================================================

mod format;
mod write;

pub use format::OutputFormat;
pub use write::Destination;
