pub mod add_reply;
pub mod delete_reply;

pub use add_reply::{add_reply_handler, AddReplyRequest, AddReplyResponse};
pub use delete_reply::{delete_reply_handler, DeleteReplyResponse};
