#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// geodesic distance transform module.
pub mod geodesic;

/// algorithm progress reporting module.
pub mod progress;
