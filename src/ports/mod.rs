mod builds_repository;

pub use builds_repository::*;
