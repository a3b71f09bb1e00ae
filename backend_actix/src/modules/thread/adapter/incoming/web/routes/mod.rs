pub mod add_thread;
pub mod get_thread_detail;

pub use add_thread::{add_thread_handler, AddThreadRequest, AddThreadResponse};
pub use get_thread_detail::{get_thread_detail_handler, GetThreadDetailResponse};
