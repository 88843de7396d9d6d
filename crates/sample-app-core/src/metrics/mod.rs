//! Lock-free metric primitives with Prometheus text rendering.
//!
//! - [`CounterVec`]: monotonically increasing counters keyed by label values
//! - [`Histogram`]: unlabeled cumulative-bucket distribution
//! - [`text`]: exposition format helpers (escaping, HELP/TYPE headers, numbers)
//!
//! Series are created lazily on first observation and never removed.

pub mod counter;
pub mod histogram;
pub mod text;

pub use counter::CounterVec;
pub use histogram::{Histogram, HistogramSnapshot};
pub use text::CONTENT_TYPE;
