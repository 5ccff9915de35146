mod progress;
mod service;
mod workflow;

// Public API of the practice subsystem.
pub use crate::error::PracticeError;
pub use progress::PracticeProgress;
pub use service::PracticeService;
pub use workflow::{PracticeLoopService, PracticeSettings};
