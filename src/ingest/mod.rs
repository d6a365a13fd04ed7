//! Draft ingest: background removal, region clustering, template processing

/// Background removal by color distance
pub mod background;
/// K-means material region extraction
pub mod regions;
/// Draft-to-template pipeline and metadata
pub mod template;

pub use background::remove_background;
pub use regions::{Region, extract_regions};
pub use template::{IngestOptions, TemplateMetadata, process_template};
