#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod practice;

pub use drill_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, PracticeError};
pub use practice::{PracticeLoopService, PracticeProgress, PracticeService, PracticeSettings};
