//! Planner's Assistant - Planning decision support core.
//!
//! Plan documents and their node trees, the plan-making and
//! development-management record catalog, and the workspace navigation
//! state that drives the planner's workbench. An HTTP API serves the
//! records from in-memory repositories.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
