//! Metric sampling layer
//!
//! Provides a trait-based abstraction over the host metrics backend for
//! testability.

pub mod system;
pub mod traits;

pub use system::SystemSampler;
pub use traits::Sampler;
