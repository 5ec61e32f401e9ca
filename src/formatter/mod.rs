pub mod json;

pub use json::{JsonFormatter, SnapshotReport};
