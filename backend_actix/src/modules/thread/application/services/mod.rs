mod add_thread_service;
mod get_thread_detail_service;

pub use add_thread_service::AddThreadService;
pub use get_thread_detail_service::GetThreadDetailService;
