//! Pitstop - Booking Configurator Core
//!
//! This crate implements the reservation lifecycle for a detailing studio:
//! the step-by-step booking configurator, checkout submission against an
//! external payment endpoint, and token-based cancellation management.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod telemetry;
