//! Shared machinery behind the category and genre resources: record model,
//! payload validation, soft-delete aware repository and its stores.

pub mod dto;
pub mod memory;
pub mod messages;
pub mod model;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod store;
pub mod validator;
