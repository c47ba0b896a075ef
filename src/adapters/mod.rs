mod file_builds_repository;
mod redis_builds_repository;

pub use file_builds_repository::*;
pub use redis_builds_repository::*;
