pub mod clipboard_service;
pub mod presentation_service;
pub mod response_cache_service;
pub mod text_transformation_service;
