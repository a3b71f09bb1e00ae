pub mod api;
pub mod db_error;
pub mod id_generator;
pub mod ownership_gate;
