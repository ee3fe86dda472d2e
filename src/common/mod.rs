pub mod error;
pub mod extractor;
pub mod id;
pub mod response;
