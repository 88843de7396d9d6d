//! Top-level facade crate for sample-app.
//!
//! Re-exports the metric primitives and the server library so users can depend on a single crate.

pub mod core {
    pub use sample_app_core::*;
}

pub mod server {
    pub use sample_app_server::*;
}
