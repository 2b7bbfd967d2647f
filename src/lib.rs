//! Shopping-list API
//!
//! This crate provides the REST API behind the shopping-list application:
//! - Identity-provider webhook that keeps local user records in sync
//! - Shopping lists and their items, with derived totals
//! - Categories, item templates and the activity log
//! - Per-user statistics and admin user management

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod webhook;
