use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::text::{format_labels, write_header, write_sample};

/// Counter family with a fixed set of label names.
///
/// Label values are passed positionally in declaration order, so the arity is
/// checked at compile time and rendering keeps that order.
pub struct CounterVec<const N: usize> {
    name: &'static str,
    help: &'static str,
    label_names: [&'static str; N],
    map: DashMap<[String; N], AtomicU64>,
}

impl<const N: usize> CounterVec<N> {
    pub fn new(name: &'static str, help: &'static str, label_names: [&'static str; N]) -> Self {
        Self {
            name,
            help,
            label_names,
            map: DashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Increment by 1.
    pub fn inc(&self, values: [&str; N]) {
        self.add(values, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, values: [&str; N], v: u64) {
        let key = values.map(str::to_owned);
        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value of one series (0 if never observed).
    pub fn get(&self, values: [&str; N]) -> u64 {
        self.map
            .get(&values.map(str::to_owned))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sum over every series.
    pub fn total(&self) -> u64 {
        self.map.iter().map(|r| r.value().load(Ordering::Relaxed)).sum()
    }

    /// Render in Prometheus text exposition format, series sorted by label values.
    pub fn render(&self, out: &mut String) {
        write_header(out, self.name, self.help, "counter");

        let mut series: Vec<([String; N], u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        series.sort();

        for (values, val) in series {
            let pairs: Vec<(&str, &str)> = self
                .label_names
                .iter()
                .copied()
                .zip(values.iter().map(String::as_str))
                .collect();
            write_sample(out, self.name, &format_labels(&pairs), &val.to_string());
        }
    }
}
