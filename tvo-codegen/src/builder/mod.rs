//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Incremental builder for indented code
//! - [`BlockGuard`] - Scope guard closing a brace block on drop

mod code_builder;

pub use code_builder::{BlockGuard, CodeBuilder, INDENT};
