mod add_reply_service;
mod delete_reply_service;

pub use add_reply_service::AddReplyService;
pub use delete_reply_service::DeleteReplyService;
