//! # API Module
//!
//! HTTP API implementation for the relay service.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and translation logic
//! * `routes` - API endpoint definitions and routing
//! * `middleware` - HTTP middleware for request authorization

pub mod controllers;

pub mod middleware;

pub mod routes;
