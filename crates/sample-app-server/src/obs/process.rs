//! Process metrics in the shape Prometheus client libraries export by default.
//!
//! Memory, start time, uptime and CPU usage come from `sysinfo` for the current
//! pid. The open fd count is Linux only. If the process cannot be looked up
//! its series are skipped; build info is always rendered.

use std::sync::{Mutex, PoisonError};

use sample_app_core::metrics::text::{format_labels, write_gauge, write_header, write_sample};
use sysinfo::{Pid, System};

/// Values read for the current process in one refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSample {
    pub resident_memory_bytes: u64,
    pub virtual_memory_bytes: u64,
    pub start_time_seconds: u64,
    pub uptime_seconds: u64,
    /// Percent of one core since the previous refresh; 0 on the first one.
    pub cpu_usage_percent: f32,
}

pub struct ProcessCollector {
    pid: Option<Pid>,
    // Kept across scrapes so CPU usage has a previous refresh to diff against.
    system: Mutex<System>,
}

impl Default for ProcessCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessCollector {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::debug!(error = %e, "current pid unavailable, process metrics disabled");
                None
            }
        };
        Self {
            pid,
            system: Mutex::new(System::new()),
        }
    }

    /// Refresh and read the current process.
    pub fn sample(&self) -> Option<ProcessSample> {
        let pid = self.pid?;
        let mut system = self.system.lock().unwrap_or_else(PoisonError::into_inner);

        if !system.refresh_process(pid) {
            tracing::debug!(%pid, "process refresh failed");
            return None;
        }
        let process = system.process(pid)?;

        Some(ProcessSample {
            resident_memory_bytes: process.memory(),
            virtual_memory_bytes: process.virtual_memory(),
            start_time_seconds: process.start_time(),
            uptime_seconds: process.run_time(),
            cpu_usage_percent: process.cpu_usage(),
        })
    }

    pub fn render(&self, out: &mut String) {
        if let Some(p) = self.sample() {
            write_gauge(
                out,
                "process_start_time_seconds",
                "Start time of the process since unix epoch in seconds.",
                p.start_time_seconds as f64,
            );
            write_gauge(
                out,
                "process_uptime_seconds",
                "Seconds since the process started.",
                p.uptime_seconds as f64,
            );
            write_gauge(
                out,
                "process_resident_memory_bytes",
                "Resident memory size in bytes.",
                p.resident_memory_bytes as f64,
            );
            write_gauge(
                out,
                "process_virtual_memory_bytes",
                "Virtual memory size in bytes.",
                p.virtual_memory_bytes as f64,
            );
            write_gauge(
                out,
                "process_cpu_usage_percent",
                "CPU usage of the process since the previous scrape, in percent of one core.",
                f64::from(p.cpu_usage_percent),
            );
        }

        render_open_fds(out);

        write_header(out, "sample_app_build_info", "Build information.", "gauge");
        write_sample(
            out,
            "sample_app_build_info",
            &format_labels(&[("version", env!("CARGO_PKG_VERSION"))]),
            "1",
        );
    }
}

#[cfg(target_os = "linux")]
fn render_open_fds(out: &mut String) {
    match std::fs::read_dir("/proc/self/fd") {
        Ok(dir) => write_gauge(
            out,
            "process_open_fds",
            "Number of open file descriptors.",
            dir.count() as f64,
        ),
        Err(e) => tracing::debug!(error = %e, "process fd table unavailable"),
    }
}

#[cfg(not(target_os = "linux"))]
fn render_open_fds(_out: &mut String) {}
