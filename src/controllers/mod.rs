pub mod extraction_controller;

pub use extraction_controller::ExtractionController;
