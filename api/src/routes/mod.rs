pub mod analyze;
pub mod health_route;
pub mod index_route;
