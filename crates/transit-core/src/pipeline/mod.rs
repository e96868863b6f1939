//! Pipeline infrastructure for light-curve analysis
//!
//! This module provides the context and event types that flow through a
//! single detection run. The stages themselves live in the other
//! transit-detect crates; the orchestrator in `transit-detector` owns the
//! control flow.

pub mod context;
pub mod events;

// Re-export commonly used types
pub use context::{PipelineContext, PipelineContextBuilder, Value};
pub use events::{
    EventBus, EventHandler, LoggingHandler, MetricsHandler, NullEventHandler, PipelineEvent,
    PipelineMetrics,
};
