//! Core library exports for the local places service.
//!
//! The `data` feature exposes the persistence and domain layers on their own;
//! `server` adds forms, DTOs, routes and services used by the HTTP API.

pub mod db;
pub mod domain;
mod error_conversions;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
