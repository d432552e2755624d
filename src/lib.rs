//! Decision Compass - AHP Decision Engine
//!
//! This crate implements the Analytic Hierarchy Process for multi-criteria
//! decision making: pairwise comparisons are converted into priority weights,
//! checked for consistency, and combined across criteria into a ranked
//! recommendation with sensitivity analysis.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
