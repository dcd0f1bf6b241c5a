// Metrics module for observability
// Counters and histograms for the snapshot lifecycle

use metrics::{counter, describe_counter, describe_histogram, histogram};

/// Initialize all metric descriptions
/// Should be called once at application startup
pub fn init_metrics() {
    describe_counter!(
        "snapshot_previews_total",
        "Total number of CRConfig preview builds"
    );
    describe_counter!(
        "snapshot_creates_total",
        "Total number of snapshot create operations"
    );
    describe_counter!(
        "snapshot_errors_total",
        "Total number of failed snapshot operations"
    );
    describe_histogram!(
        "crconfig_generation_duration_seconds",
        "CRConfig generation duration in seconds"
    );

    tracing::info!("Metrics initialized");
}

/// Record a CRConfig preview build
pub fn record_snapshot_preview(cdn: &str, duration_secs: f64) {
    counter!("snapshot_previews_total", "cdn" => cdn.to_string()).increment(1);
    histogram!("crconfig_generation_duration_seconds", "operation" => "preview")
        .record(duration_secs);
}

/// Record a snapshot create
pub fn record_snapshot_create(cdn: &str, duration_secs: f64) {
    counter!("snapshot_creates_total", "cdn" => cdn.to_string()).increment(1);
    histogram!("crconfig_generation_duration_seconds", "operation" => "create")
        .record(duration_secs);
}

/// Record a failed snapshot operation
pub fn record_snapshot_error(operation: &str) {
    counter!("snapshot_errors_total", "operation" => operation.to_string()).increment(1);
}
