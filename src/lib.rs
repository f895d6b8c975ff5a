//! Weight Compare - members' weight comparison chart viewer
//!
//! Decodes the comparison payload (or builds it from raw member entries),
//! turns it into colored per-user series and shows them as a switchable
//! line/bar chart, interactively with egui or exported with plotters.

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod gui;
