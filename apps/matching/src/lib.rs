//! Matching & classification engine for the recruiter dashboard.
//!
//! Computes skill gaps between a requirement and a candidate and classifies
//! match scores, experience claims and record sources into display badges.

pub mod batch;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
