pub mod add_comment;
pub mod delete_comment;

pub use add_comment::{add_comment_handler, AddCommentRequest, AddCommentResponse};
pub use delete_comment::{delete_comment_handler, DeleteCommentResponse};
