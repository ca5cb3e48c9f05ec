pub mod engine;
pub mod sweeper;

pub use crate::domain::model::{Classification, FileFailure, FileOp, SweepReport};
pub use crate::domain::ports::DocStore;
pub use crate::utils::error::Result;
