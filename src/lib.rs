pub mod batch;
pub mod cli;
pub mod compute;
pub mod config;
pub mod ctx;
pub mod error;
pub mod input;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod registry;
pub mod schema;
pub mod scores;

pub use compute::{ComputeOutput, compute};
pub use config::{HeuristicProfile, ModelConfig};
pub use error::OncoError;
