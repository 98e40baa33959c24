//! Prometheus metrics for the renderer.
//!
//! - Render metrics (rendered and failed messages by channel)
//! - Latency metrics (time to render a whole message)

mod helpers;

pub use helpers::{encode_metrics, RenderMetrics};

use lazy_static::lazy_static;
use prometheus::{register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "ace";

lazy_static! {
    /// Total messages rendered successfully by channel
    pub static ref MESSAGES_RENDERED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_messages_rendered_total", METRIC_PREFIX),
        "Total messages rendered successfully",
        &["channel"]
    ).unwrap();

    /// Total message render failures by channel and error kind
    pub static ref RENDER_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_render_failures_total", METRIC_PREFIX),
        "Total message render failures",
        &["channel", "kind"]
    ).unwrap();

    /// Time spent rendering all fields of a message
    pub static ref RENDER_DURATION: HistogramVec = register_histogram_vec!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Message render duration in seconds",
        &["channel"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]
    ).unwrap();
}
