pub mod extraction_routes;

pub use extraction_routes::build_router;
