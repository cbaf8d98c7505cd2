//! Isotris (workspace facade crate).
//!
//! Re-exports the member crates under one `isotris::{core,term,input,types}`
//! namespace; the implementation lives in dedicated crates under `crates/`.

pub use isotris_core as core;
pub use isotris_input as input;
pub use isotris_term as term;
pub use isotris_types as types;
