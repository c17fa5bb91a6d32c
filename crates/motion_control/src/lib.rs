pub mod config;
pub mod pid;
pub mod trace;

pub use config::{load_config, ControllerConfig};
pub use pid::PidController;
pub use trace::{CycleRecord, TraceRecorder};
