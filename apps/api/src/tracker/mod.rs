// Application tracking: job status model, status timeline and dashboard statistics.

pub mod handlers;
pub mod models;
pub mod stats;
pub mod timeline;
