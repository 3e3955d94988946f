//! Inventory client library.
//!
//! A view-controller over the `/api/productos` endpoints: it fetches
//! products, keeps the rendered table and the edit dialog, and reports
//! every outcome through a [`ui::Ui`] implementation. The `inventario`
//! binary drives it from a terminal.

pub mod api;
pub mod config;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod form;
pub mod model;
pub mod table;
pub mod ui;
