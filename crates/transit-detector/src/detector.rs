//! The transit detection pipeline
//!
//! [`TransitDetector`] runs every stage in order over one light curve:
//! validate, normalize, estimate noise, clip, measure artifacts, detrend,
//! measure depth and SNR, search periods, score dip shape, probe for a
//! secondary eclipse, gate, classify. Each call builds a fresh
//! [`PipelineContext`]; the detector itself holds only configuration and an
//! optional [`EventBus`], so one instance can be shared across threads.

use crate::classifier::{Classifier, PlanetType};
use crate::config::DetectorConfig;
use crate::gate::{acceptance_scores, rejection_scores, DecisionGate};
use crate::properties::OrbitalProperties;
use crate::result::{Acceptance, DetectionMetrics, DetectionResult, Rejection};
use serde_json::json;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use transit_core::pipeline::{
    EventBus, PipelineContext, PipelineContextBuilder, PipelineEvent, Value,
};
use transit_core::{Error, Result, Sample, Series};
use transit_preprocess::{
    normalize, parse_file, parse_light_curve, SigmaClip, SlidingMedianDetrender,
};
use transit_search::{PeriodSearch, PeriodSearchProperties, PhaseFoldSearch};
use transit_spread::robust_std_dev;
use transit_vetting::{
    detect_artifacts, estimate_depth, false_alarm_probability, secondary_eclipse_depth,
    ShapeAnalyzer,
};

/// Per-call options that are not part of the detector configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOptions {
    /// Replaces the derived planet type on acceptance
    pub hint: Option<PlanetType>,
    /// Free-form name of the input, recorded in the pipeline context
    pub label: Option<String>,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, hint: PlanetType) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Light-curve transit detector
#[derive(Debug, Clone, Default)]
pub struct TransitDetector {
    config: DetectorConfig,
    event_bus: Option<EventBus>,
}

impl TransitDetector {
    /// Create a detector after validating `config`
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            event_bus: None,
        })
    }

    /// Set the event bus that observes every analysis
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn event_bus(&self) -> Option<&EventBus> {
        self.event_bus.as_ref()
    }

    /// Analyse an in-memory light curve
    pub fn analyze(&self, series: &Series) -> Result<DetectionResult> {
        self.analyze_with(series, &AnalysisOptions::default())
    }

    /// Parse comma-separated text and analyse it
    pub fn analyze_text(&self, text: &str) -> Result<DetectionResult> {
        let series = parse_light_curve(text)?;
        self.analyze(&series)
    }

    /// Parse a light-curve file and analyse it, labelled with its path
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<DetectionResult> {
        let path = path.as_ref();
        let series = parse_file(path)?;
        let options = AnalysisOptions::new().with_label(path.display().to_string());
        self.analyze_with(&series, &options)
    }

    /// Analyse a light curve with per-call options
    #[instrument(level = "debug", skip_all, fields(n = series.len()))]
    pub fn analyze_with(
        &self,
        series: &Series,
        options: &AnalysisOptions,
    ) -> Result<DetectionResult> {
        let mut builder = PipelineContextBuilder::new()
            .metadata("input_samples", Value::Integer(series.len() as i64));
        if let Some(label) = &options.label {
            builder = builder.metadata("source", Value::String(label.clone()));
        }
        let mut ctx = builder.build();

        self.emit(
            &ctx,
            PipelineEvent::PipelineStarted {
                trace_id: ctx.trace_id,
                samples: series.len(),
            },
        );

        let outcome = self.run(&mut ctx, series, options);

        self.emit(
            &ctx,
            PipelineEvent::PipelineCompleted {
                trace_id: ctx.trace_id,
                duration: ctx.elapsed(),
            },
        );
        outcome
    }

    fn run(
        &self,
        ctx: &mut PipelineContext,
        series: &Series,
        options: &AnalysisOptions,
    ) -> Result<DetectionResult> {
        let cfg = &self.config;

        let valid = self.stage(ctx, "validate", || {
            Series::validated(series.filter(Sample::is_finite).into_samples())
        })?;
        let dropped = series.len() - valid.len();
        self.stage_completed(ctx, "validate", valid.len(), [("dropped", json!(dropped))]);

        let normalized = self.stage(ctx, "normalize", || normalize(&valid))?;
        self.stage_completed(
            ctx,
            "normalize",
            valid.len(),
            [("baseline", json!(normalized.baseline))],
        );
        let normalized = normalized.series;

        let sigma = self.stage(ctx, "noise", || robust_std_dev(&normalized.flux_vec()))?;
        self.stage_completed(ctx, "noise", normalized.len(), [("robust_std_dev", json!(sigma))]);

        let clipped = ctx.time_stage("clip", || {
            SigmaClip::new(cfg.preprocess.clip_sigma).apply(&normalized, sigma)
        });
        self.stage_completed(
            ctx,
            "clip",
            clipped.series.len(),
            [("removed", json!(clipped.removed))],
        );
        let clipped = clipped.series;

        let artifacts = self.stage(ctx, "artifacts", || detect_artifacts(&clipped))?;
        self.stage_completed(
            ctx,
            "artifacts",
            clipped.len(),
            [
                ("jump_ratio", json!(artifacts.jump_ratio)),
                ("linear_trend_r_squared", json!(artifacts.linear_trend_r_squared)),
            ],
        );

        let detrender = SlidingMedianDetrender::new(
            cfg.preprocess.detrend_window_fraction,
            cfg.preprocess.detrend_min_half_window,
        );
        let detrended = self.stage(ctx, "detrend", || detrender.detrend(&clipped))?;
        self.stage_completed(
            ctx,
            "detrend",
            detrended.len(),
            [("half_window", json!(detrender.half_window(clipped.len())))],
        );

        let depth = self.stage(ctx, "depth", || estimate_depth(&detrended))?;
        self.stage_completed(
            ctx,
            "depth",
            detrended.len(),
            [
                ("depth", json!(depth.depth)),
                ("noise", json!(depth.noise)),
                ("snr", json!(depth.snr)),
            ],
        );

        let search = PhaseFoldSearch::new(cfg.period_search);
        let periods = self.stage(ctx, "period_search", || search.search(&detrended, depth.noise))?;
        self.emit(
            ctx,
            PipelineEvent::PeriodSearchCompleted {
                trace_id: ctx.trace_id,
                algorithm: search.algorithm_name(),
                periods_evaluated: periods.periods_evaluated(),
                best_period: periods.best_period(),
                best_sde: periods.best_sde(),
            },
        );

        let shape_score = ctx.time_stage("shape", || {
            ShapeAnalyzer::new(cfg.shape).score(&detrended)
        });
        self.stage_completed(ctx, "shape", detrended.len(), [("score", json!(shape_score))]);

        let metrics = DetectionMetrics {
            transit_depth: depth.depth,
            snr: depth.snr,
            best_period: periods.best_period(),
            best_sde: periods.best_sde(),
            transit_count: periods.best_transit_count(),
            jump_ratio: artifacts.jump_ratio,
            linear_trend_r_squared: artifacts.linear_trend_r_squared,
            transit_shape_score: shape_score,
            noise: depth.noise,
            secondary_eclipse_depth: secondary_eclipse_depth(&detrended, periods.best_period()),
            false_alarm_probability: false_alarm_probability(depth.snr),
        };
        debug!(?metrics, "detection metrics");

        let result = ctx.time_stage("decide", || self.decide(metrics, options));

        self.emit(
            ctx,
            PipelineEvent::VerdictReached {
                trace_id: ctx.trace_id,
                accepted: result.is_exoplanet(),
                reason: result.rejection_reason().map(|r| r.criterion.as_str().to_string()),
            },
        );
        match &result {
            DetectionResult::Acceptance(a) => info!(
                period = a.orbital_period,
                radius = a.planet_radius,
                planet_type = %a.planet_type,
                "transit accepted"
            ),
            DetectionResult::Rejection(r) => info!(reason = %r.reason, "transit rejected"),
        }
        Ok(result)
    }

    /// Gate the metrics, then classify an accepted candidate
    fn decide(&self, metrics: DetectionMetrics, options: &AnalysisOptions) -> DetectionResult {
        let cfg = &self.config;

        if let Some(reason) = DecisionGate::new(cfg.thresholds).evaluate(&metrics) {
            let (probability, confidence) = rejection_scores(metrics.snr, metrics.transit_depth);
            return DetectionResult::Rejection(Rejection {
                reason,
                probability,
                confidence,
                metrics,
            });
        }

        let classifier = Classifier::new(cfg.classifier);
        let class = classifier.classify(
            metrics.transit_depth,
            metrics.best_period,
            metrics.snr,
            options.hint,
        );
        let (probability, confidence) = acceptance_scores(metrics.snr, metrics.best_sde);

        DetectionResult::Acceptance(Acceptance {
            probability,
            confidence,
            orbital_period: metrics.best_period,
            planet_radius: class.radius,
            transit_depth: metrics.transit_depth,
            duration_hours: metrics.best_period * cfg.classifier.duration_fraction * 24.0,
            planet_type: class.planet_type,
            planet_type_confidence: class.confidence,
            properties: OrbitalProperties::from_period(metrics.best_period, &cfg.classifier.host),
            metrics,
        })
    }

    /// Time a fallible stage and report its failure on the event bus
    fn stage<R>(
        &self,
        ctx: &mut PipelineContext,
        stage: &'static str,
        f: impl FnOnce() -> Result<R>,
    ) -> Result<R> {
        let result = ctx.time_stage(stage, f);
        if let Err(e) = &result {
            let stage = match e {
                Error::Analysis { stage, .. } => *stage,
                _ => stage,
            };
            warn!(stage, error = %e, "pipeline stage failed");
            self.emit(
                ctx,
                PipelineEvent::PipelineError {
                    trace_id: ctx.trace_id,
                    stage,
                    error: e.to_string(),
                },
            );
        }
        result
    }

    fn stage_completed<const N: usize>(
        &self,
        ctx: &PipelineContext,
        stage: &'static str,
        samples: usize,
        diagnostics: [(&str, serde_json::Value); N],
    ) {
        if self.event_bus.is_none() {
            return;
        }
        let diagnostics: HashMap<String, serde_json::Value> = diagnostics
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        self.emit(
            ctx,
            PipelineEvent::StageCompleted {
                trace_id: ctx.trace_id,
                stage,
                samples,
                diagnostics,
            },
        );
    }

    fn emit(&self, ctx: &PipelineContext, event: PipelineEvent) {
        if let Some(bus) = &self.event_bus {
            if let Err(e) = bus.emit(event, ctx) {
                warn!(error = %e, "failed to emit pipeline event");
            }
        }
    }
}
