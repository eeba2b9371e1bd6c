pub mod extraction_dto;

pub use extraction_dto::*;
