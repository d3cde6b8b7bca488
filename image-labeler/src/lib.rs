pub mod config;
pub mod error;
pub mod handler;
pub mod webpost;

pub use config::LabelerConfig;
pub use error::{LabelerError, Result};
pub use handler::{dispatch, handler, InvocationContext};
