//! Mjengo Core — domain records, milestone vocabulary, cost aggregation, record sources.
//!
//! This crate contains the cost engine behind the site dashboard:
//! - Domain records (materials with delivery history, labour entries, projects, stock movements)
//! - Milestone vocabulary, filter, and display-ordering rules
//! - Pure milestone cost aggregation with grand totals
//! - Stored-total audit pass (opt-in, never changes aggregation)
//! - REST and snapshot-file record sources

pub mod aggregate;
pub mod data;
pub mod demo;
pub mod domain;
