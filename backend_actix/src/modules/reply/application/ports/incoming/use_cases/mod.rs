mod add_reply_use_case;
mod delete_reply_use_case;

pub use add_reply_use_case::{AddReplyError, AddReplyUseCase};
pub use delete_reply_use_case::{DeleteReplyError, DeleteReplyUseCase};
