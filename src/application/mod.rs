//! Application layer - Use cases and orchestration

pub mod timeline;

pub use timeline::TimelineService;
