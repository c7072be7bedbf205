//! Hand-wired oracle graphs.
//!
//! Each module owns one data source: literal rows, wiring of cross
//! references, and the set registry that serves typed requests.

pub mod aruba;
pub mod json;
pub mod owned;
pub mod primitive;
