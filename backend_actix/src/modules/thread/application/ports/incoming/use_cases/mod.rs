mod add_thread_use_case;
mod get_thread_detail_use_case;

pub use add_thread_use_case::{AddThreadError, AddThreadUseCase};
pub use get_thread_detail_use_case::{GetThreadDetailError, GetThreadDetailUseCase};
