//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and filter-engine calls into one caller-facing API.
//! - Keep presentation layers decoupled from storage details.

pub mod directory_service;
