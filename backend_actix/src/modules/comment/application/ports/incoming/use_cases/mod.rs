mod add_comment_use_case;
mod delete_comment_use_case;

pub use add_comment_use_case::{AddCommentError, AddCommentUseCase};
pub use delete_comment_use_case::{DeleteCommentError, DeleteCommentUseCase};
