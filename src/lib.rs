//! Proposal Kit - Versioned go-to-market proposal documents
//!
//! This crate models a business proposal with budget scenarios, projects
//! leads, closed jobs, CPL and CAC from each scenario, and moves the whole
//! document between local storage, share links and exported files.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
