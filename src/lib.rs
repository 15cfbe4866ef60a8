//! Financial eligibility decisioning core for mortgage pre-approval workflows.
//!
//! The crate turns loosely-typed monetary intake data into canonical
//! affordability metrics and resolves an approve/disapprove verdict through an
//! external natural-language oracle, degrading deterministically whenever the
//! oracle is unreachable or answers outside its two-token contract.

pub mod config;
pub mod telemetry;
pub mod workflows;
