mod json_config;
mod response;

pub use json_config::{custom_json_config, custom_path_config};
pub use response::{ApiResponse, ResponseStatus};
