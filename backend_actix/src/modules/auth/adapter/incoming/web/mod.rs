pub mod extractors;
pub mod routes;
