//! Request handlers.
//!
//! Handlers delegate to the repository in `inventario_db` and map errors
//! via [`crate::error::AppError`].

pub mod product;
