//! NeuroScan: a thin web application that forwards uploaded brain MRI
//! scans to a remote classification API and renders the returned label
//! and confidence scores, or a typed failure.
//!
//! Layering follows the usual split: `domain` owns the result model
//! and error taxonomy, `application` the classification use case,
//! `infrastructure` the reqwest adapter for the remote API, and
//! `presentation` the axum surface.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
