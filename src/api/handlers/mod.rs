//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod health;
pub mod products;
pub mod reports;
pub mod settings;
pub mod tasks;
