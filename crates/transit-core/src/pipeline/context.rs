//! Pipeline execution context
//!
//! The PipelineContext follows one analysis through every stage,
//! accumulating metadata and timing information.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Dynamic value type for metadata
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl Value {
    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Context that flows through one pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Unique trace ID for this execution
    pub trace_id: Uuid,
    /// When the pipeline started
    pub start_time: Instant,
    /// Arbitrary metadata (input name, sample counts, ...)
    pub metadata: HashMap<String, Value>,
    /// Stage timing information, in execution order
    stage_timings: Vec<(String, Duration)>,
}

impl PipelineContext {
    /// Create a new pipeline context
    pub fn new() -> Self {
        Self::with_trace_id(Uuid::new_v4())
    }

    /// Create a context with a specific trace ID
    pub fn with_trace_id(trace_id: Uuid) -> Self {
        Self {
            trace_id,
            start_time: Instant::now(),
            metadata: HashMap::new(),
            stage_timings: Vec::new(),
        }
    }

    /// Set a metadata value
    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.insert(key.into(), value);
    }

    /// Get a metadata value
    pub fn get_metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Record timing for a stage
    pub fn record_stage_timing(&mut self, stage: impl Into<String>, duration: Duration) {
        self.stage_timings.push((stage.into(), duration));
    }

    /// Time a stage execution
    pub fn time_stage<F, R>(&mut self, stage: impl Into<String>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let stage_name = stage.into();
        let start = Instant::now();
        let result = f();
        self.record_stage_timing(stage_name, start.elapsed());
        result
    }

    /// Get total elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get stage timings in the order the stages ran
    pub fn stage_timings(&self) -> &[(String, Duration)] {
        &self.stage_timings
    }

    /// Timing of a named stage, if it ran
    pub fn stage_timing(&self, stage: &str) -> Option<Duration> {
        self.stage_timings
            .iter()
            .find(|(name, _)| name == stage)
            .map(|(_, d)| *d)
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for pipeline context
#[derive(Default)]
pub struct PipelineContextBuilder {
    context: PipelineContext,
}

impl PipelineContextBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set trace ID
    pub fn trace_id(mut self, trace_id: Uuid) -> Self {
        self.context.trace_id = trace_id;
        self
    }

    /// Add metadata
    pub fn metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context.set_metadata(key, value);
        self
    }

    /// Build the context
    pub fn build(self) -> PipelineContext {
        self.context
    }
}
