//! Timer engine and persistence

mod engine;
mod service;

pub use engine::TimerEngine;
pub use service::TimerService;
