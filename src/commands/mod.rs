mod builds_command;

pub use builds_command::{create, CreateBuildError, SubmitRequest};
