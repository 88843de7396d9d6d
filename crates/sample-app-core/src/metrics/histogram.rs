use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::text::{format_value, write_header, write_sample};
use crate::error::{Result, SampleAppError};

/// Unlabeled histogram over durations.
///
/// Bucket bounds are given in seconds and kept internally in nanoseconds, so
/// observing is integer-only: one compare and at most one `fetch_add` per
/// bucket. Counts are cumulative (a sample lands in every bucket whose bound
/// is >= the sample).
pub struct Histogram {
    name: &'static str,
    help: &'static str,
    bounds: Box<[f64]>,
    bounds_nanos: Box<[u64]>,
    buckets: Box<[AtomicU64]>,
    count: AtomicU64,
    sum_nanos: AtomicU64,
}

/// Point-in-time copy of a [`Histogram`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    /// `(upper bound in seconds, cumulative count)`, excluding `+Inf`.
    pub buckets: Vec<(f64, u64)>,
    pub count: u64,
    pub sum_seconds: f64,
}

impl Histogram {
    /// Bounds must be finite, positive and strictly ascending.
    pub fn new(name: &'static str, help: &'static str, bounds: &[f64]) -> Result<Self> {
        if bounds.iter().any(|b| !b.is_finite() || *b <= 0.0) {
            return Err(SampleAppError::Internal(format!(
                "histogram {name}: bounds must be finite and positive"
            )));
        }
        if bounds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SampleAppError::Internal(format!(
                "histogram {name}: bounds must be strictly ascending"
            )));
        }

        Ok(Self {
            name,
            help,
            bounds: bounds.into(),
            bounds_nanos: bounds.iter().map(|b| (b * 1e9).round() as u64).collect(),
            buckets: bounds.iter().map(|_| AtomicU64::new(0)).collect(),
            count: AtomicU64::new(0),
            sum_nanos: AtomicU64::new(0),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn observe(&self, duration: Duration) {
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);

        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_nanos.fetch_add(nanos, Ordering::Relaxed);

        for (bucket, &le) in self.buckets.iter().zip(self.bounds_nanos.iter()) {
            if nanos <= le {
                bucket.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn snapshot(&self) -> HistogramSnapshot {
        HistogramSnapshot {
            buckets: self
                .bounds
                .iter()
                .zip(self.buckets.iter())
                .map(|(&le, b)| (le, b.load(Ordering::Relaxed)))
                .collect(),
            count: self.count.load(Ordering::Relaxed),
            sum_seconds: self.sum_nanos.load(Ordering::Relaxed) as f64 / 1e9,
        }
    }

    /// Render in Prometheus text exposition format (unit: seconds).
    pub fn render(&self, out: &mut String) {
        write_header(out, self.name, self.help, "histogram");

        let snap = self.snapshot();
        let bucket_name = format!("{}_bucket", self.name);
        for (le, count) in &snap.buckets {
            let labels = format!("le=\"{}\"", format_value(*le));
            write_sample(out, &bucket_name, &labels, &count.to_string());
        }
        write_sample(out, &bucket_name, "le=\"+Inf\"", &snap.count.to_string());
        write_sample(out, &format!("{}_sum", self.name), "", &format_value(snap.sum_seconds));
        write_sample(out, &format!("{}_count", self.name), "", &snap.count.to_string());
    }
}
