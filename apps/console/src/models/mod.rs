pub mod agent;
pub mod run;

pub use agent::{Category, KnownAgent};
pub use run::{RunData, RunResult};
