mod thread_repository;

pub use thread_repository::{ThreadRepository, ThreadRepositoryError};
