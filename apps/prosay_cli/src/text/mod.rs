pub mod fallback_transformer;
pub mod lookup_tables;
pub mod output_sanitizer;
