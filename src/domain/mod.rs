//! Domain models for sparsevn
//!
//! Pure value types shared by the resolver and the planner. These carry no
//! I/O and no knowledge of svn itself.

pub mod path_spec;
pub mod platform;

pub use path_spec::{Depth, PathSpec};
pub use platform::Platform;
