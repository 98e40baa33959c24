//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{MESSAGES_RENDERED_TOTAL, RENDER_DURATION, RENDER_FAILURES_TOTAL};
use crate::channel::ChannelType;

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record a successfully rendered message
    pub fn record_rendered(channel: ChannelType, elapsed: Duration) {
        MESSAGES_RENDERED_TOTAL
            .with_label_values(&[channel.as_str()])
            .inc();
        RENDER_DURATION
            .with_label_values(&[channel.as_str()])
            .observe(elapsed.as_secs_f64());
    }

    /// Record a failed render
    pub fn record_failed(channel: ChannelType, kind: &str) {
        RENDER_FAILURES_TOTAL
            .with_label_values(&[channel.as_str(), kind])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_metrics_are_exported() {
        RenderMetrics::record_rendered(ChannelType::Email, Duration::from_millis(2));
        RenderMetrics::record_failed(ChannelType::Push, "not_found");

        assert!(
            MESSAGES_RENDERED_TOTAL
                .with_label_values(&["email"])
                .get()
                >= 1
        );
        assert!(
            RENDER_FAILURES_TOTAL
                .with_label_values(&["push", "not_found"])
                .get()
                >= 1
        );

        let output = encode_metrics().unwrap();
        assert!(output.contains("ace_messages_rendered_total"));
        assert!(output.contains("ace_render_duration_seconds"));
    }
}
