//! Operational counters and Prometheus text-format export.
//!
//! A small fixed registry of atomic counters covering the service's
//! business events, rendered in the Prometheus exposition format
//! (`# HELP` / `# TYPE` annotation lines before each metric).

use std::sync::atomic::{AtomicU64, Ordering};

/// Content type for the Prometheus text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Service-wide counters, safe to share across handlers.
#[derive(Debug, Default)]
pub struct Metrics {
    shorten_requests: AtomicU64,
    urls_shortened: AtomicU64,
    redirect_requests: AtomicU64,
    urls_not_found: AtomicU64,
    internal_errors: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a shorten attempt, valid or not.
    pub fn record_shorten_request(&self) {
        self.shorten_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a successfully created short link.
    pub fn record_url_shortened(&self) {
        self.urls_shortened.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a resolution attempt, known code or not.
    pub fn record_redirect_request(&self) {
        self.redirect_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a resolution of an unknown code.
    pub fn record_url_not_found(&self) {
        self.urls_not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an unexpected server-side failure.
    pub fn record_internal_error(&self) {
        self.internal_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Renders all metrics in the Prometheus text format.
    ///
    /// The current store size is passed in by the caller because it is a
    /// property of the mapping store, not of this registry.
    pub fn render(&self, stored_links: usize) -> String {
        let mut out = String::with_capacity(1024);

        write_counter(
            &mut out,
            "shorten_requests_total",
            "Total number of shorten requests received",
            self.shorten_requests.load(Ordering::Relaxed),
        );
        write_counter(
            &mut out,
            "urls_shortened_total",
            "Total number of URLs shortened",
            self.urls_shortened.load(Ordering::Relaxed),
        );
        write_counter(
            &mut out,
            "redirect_requests_total",
            "Total number of redirect requests received",
            self.redirect_requests.load(Ordering::Relaxed),
        );
        write_counter(
            &mut out,
            "urls_not_found_total",
            "Total number of URL not found errors",
            self.urls_not_found.load(Ordering::Relaxed),
        );
        write_counter(
            &mut out,
            "internal_errors_total",
            "Total number of internal server errors",
            self.internal_errors.load(Ordering::Relaxed),
        );
        write_metric(
            &mut out,
            "stored_links",
            "gauge",
            "Current number of short links in the store",
            stored_links as u64,
        );

        out
    }
}

fn write_counter(out: &mut String, name: &str, help: &str, value: u64) {
    write_metric(out, name, "counter", help, value);
}

fn write_metric(out: &mut String, name: &str, kind: &str, help: &str, value: u64) {
    use std::fmt::Write;

    // String's fmt::Write never fails.
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} {kind}");
    let _ = writeln!(out, "{name} {value}");
}
