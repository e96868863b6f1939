//! Event-based pipeline notification system
//!
//! Consumers (logging, metrics, test probes) observe a detection run
//! through an [`EventBus`] without the stages knowing about them.

use super::context::PipelineContext;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Pipeline event that can be emitted during execution
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// Pipeline execution started
    PipelineStarted {
        trace_id: Uuid,
        samples: usize,
    },

    /// A stage finished
    StageCompleted {
        trace_id: Uuid,
        stage: &'static str,
        samples: usize,
        diagnostics: HashMap<String, serde_json::Value>,
    },

    /// Period grid scan finished
    PeriodSearchCompleted {
        trace_id: Uuid,
        algorithm: &'static str,
        periods_evaluated: usize,
        best_period: f64,
        best_sde: f64,
    },

    /// The decision gate produced a verdict
    VerdictReached {
        trace_id: Uuid,
        accepted: bool,
        reason: Option<String>,
    },

    /// Pipeline execution completed
    PipelineCompleted {
        trace_id: Uuid,
        duration: std::time::Duration,
    },

    /// Error occurred during pipeline execution
    PipelineError {
        trace_id: Uuid,
        stage: &'static str,
        error: String,
    },
}

/// Trait for handling pipeline events
pub trait EventHandler: Send + Sync {
    /// Handle a pipeline event
    fn handle_event(&self, event: &PipelineEvent, context: &PipelineContext);

    /// Check if this handler is interested in a particular event type
    fn is_interested(&self, event: &PipelineEvent) -> bool {
        let _ = event;
        true
    }

    /// Get the name of this handler for debugging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Event bus for distributing events to multiple handlers
///
/// Handlers run outside the registry lock, so a handler may register
/// further handlers or emit follow-up events on the same bus. Handlers
/// registered during an emit see only later events.
pub struct EventBus {
    handlers: Arc<Mutex<Vec<Arc<dyn EventHandler>>>>,
    enabled: Arc<Mutex<bool>>,
}

fn lock_error(what: &str, e: impl std::fmt::Display) -> Error {
    Error::Other(anyhow::anyhow!("Failed to lock {what}: {e}"))
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(Vec::new())),
            enabled: Arc::new(Mutex::new(true)),
        }
    }

    /// Register an event handler
    pub fn register<H>(&self, handler: H) -> Result<()>
    where
        H: EventHandler + 'static,
    {
        let mut handlers = self.handlers.lock().map_err(|e| lock_error("handlers", e))?;
        handlers.push(Arc::new(handler));
        Ok(())
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: PipelineEvent, context: &PipelineContext) -> Result<()> {
        if !self.is_enabled()? {
            return Ok(());
        }

        let handlers: Vec<Arc<dyn EventHandler>> = self
            .handlers
            .lock()
            .map_err(|e| lock_error("handlers", e))?
            .clone();
        for handler in &handlers {
            if handler.is_interested(&event) {
                handler.handle_event(&event, context);
            }
        }

        Ok(())
    }

    /// Enable or disable event emission
    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        let mut state = self.enabled.lock().map_err(|e| lock_error("enabled state", e))?;
        *state = enabled;
        Ok(())
    }

    /// Check if the event bus is enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let state = self.enabled.lock().map_err(|e| lock_error("enabled state", e))?;
        Ok(*state)
    }

    /// Get the number of registered handlers
    pub fn handler_count(&self) -> Result<usize> {
        let handlers = self.handlers.lock().map_err(|e| lock_error("handlers", e))?;
        Ok(handlers.len())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            enabled: Arc::clone(&self.enabled),
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count().unwrap_or(0))
            .finish()
    }
}

/// Simple logging event handler
pub struct LoggingHandler {
    level: log::Level,
}

impl LoggingHandler {
    /// Create a new logging handler
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl EventHandler for LoggingHandler {
    fn handle_event(&self, event: &PipelineEvent, _context: &PipelineContext) {
        match event {
            PipelineEvent::PipelineStarted { trace_id, samples } => {
                log::log!(self.level, "Pipeline started: {trace_id} ({samples} samples)");
            }
            PipelineEvent::PeriodSearchCompleted {
                trace_id,
                algorithm,
                periods_evaluated,
                best_period,
                best_sde,
            } => {
                log::log!(
                    self.level,
                    "{algorithm}: best P={best_period:.4} d, SDE={best_sde:.3} \
                     over {periods_evaluated} periods (trace: {trace_id})"
                );
            }
            PipelineEvent::VerdictReached { trace_id, accepted: true, .. } => {
                log::log!(self.level, "Detection accepted (trace: {trace_id})");
            }
            PipelineEvent::VerdictReached { trace_id, accepted: false, reason } => {
                let reason = reason.as_deref().unwrap_or("unspecified");
                log::log!(self.level, "Detection rejected: {reason} (trace: {trace_id})");
            }
            PipelineEvent::PipelineCompleted { trace_id, duration } => {
                log::log!(self.level, "Pipeline completed: {trace_id} in {duration:?}");
            }
            PipelineEvent::PipelineError { trace_id, stage, error } => {
                log::error!("Pipeline error in {stage}: {error} (trace: {trace_id})");
            }
            _ => {
                log::trace!("Pipeline event: {event:?}");
            }
        }
    }
}

/// Metrics collection handler
#[derive(Clone)]
pub struct MetricsHandler {
    metrics: Arc<Mutex<PipelineMetrics>>,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineMetrics {
    pub total_runs: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub rejection_reasons: HashMap<String, usize>,
    pub errors: HashMap<String, usize>,
}

impl Default for MetricsHandler {
    fn default() -> Self {
        Self {
            metrics: Arc::new(Mutex::new(PipelineMetrics::default())),
        }
    }
}

impl MetricsHandler {
    /// Create a new metrics handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of current metrics
    pub fn snapshot(&self) -> Result<PipelineMetrics> {
        let metrics = self.metrics.lock().map_err(|e| lock_error("metrics", e))?;
        Ok(metrics.clone())
    }
}

impl EventHandler for MetricsHandler {
    fn handle_event(&self, event: &PipelineEvent, _context: &PipelineContext) {
        let Ok(mut metrics) = self.metrics.lock() else {
            log::error!("Failed to lock metrics");
            return;
        };

        match event {
            PipelineEvent::PipelineStarted { .. } => {
                metrics.total_runs += 1;
            }
            PipelineEvent::VerdictReached { accepted: true, .. } => {
                metrics.accepted += 1;
            }
            PipelineEvent::VerdictReached { accepted: false, reason, .. } => {
                metrics.rejected += 1;
                let key = reason.clone().unwrap_or_default();
                *metrics.rejection_reasons.entry(key).or_insert(0) += 1;
            }
            PipelineEvent::PipelineError { stage, .. } => {
                *metrics.errors.entry(stage.to_string()).or_insert(0) += 1;
            }
            _ => {}
        }
    }
}

/// Null event handler that does nothing
#[derive(Default, Clone)]
pub struct NullEventHandler;

impl EventHandler for NullEventHandler {
    fn handle_event(&self, _event: &PipelineEvent, _context: &PipelineContext) {}

    fn is_interested(&self, _event: &PipelineEvent) -> bool {
        false
    }
}
