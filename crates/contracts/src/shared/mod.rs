pub mod api_error;
pub mod enrichment;
pub mod metadata;
pub mod navigation;
pub mod search;
