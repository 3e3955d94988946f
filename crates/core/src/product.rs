//! Product payload shared by the create and update routes.
//!
//! The same three fields travel in both directions: the client builds a
//! [`ProductInput`] from raw form text with [`ProductInput::parse`], and the
//! server re-checks whatever arrives with [`ProductInput::check`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Body of `POST /api/productos` and `PUT /api/productos/{id}`.
///
/// Updates are full replacements, so every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, message = "el nombre no puede estar vacío"))]
    pub nombre: String,
    #[validate(range(min = 0, message = "la cantidad no puede ser negativa"))]
    pub cantidad: i32,
    // Upper bound is the largest value `NUMERIC(12,2)` holds.
    #[validate(range(
        min = 0.0,
        max = 9_999_999_999.99,
        message = "el precio debe estar entre 0 y 9999999999.99"
    ))]
    pub precio: f64,
}

impl ProductInput {
    /// Build an input from raw form text, parsing then validating.
    ///
    /// `cantidad` must be an integer and `precio` a decimal number; surrounding
    /// whitespace is ignored. The name is trimmed.
    pub fn parse(nombre: &str, cantidad: &str, precio: &str) -> Result<Self, CoreError> {
        let input = Self {
            nombre: nombre.trim().to_string(),
            cantidad: parse_cantidad(cantidad)?,
            precio: parse_precio(precio)?,
        };
        input.check()?;
        Ok(input)
    }

    /// Run the field rules, collapsing every failure into one
    /// [`CoreError::Validation`] message.
    pub fn check(&self) -> Result<(), CoreError> {
        let mut messages = Vec::new();

        if let Err(errors) = self.validate() {
            let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
            fields.sort_by(|a, b| a.0.cmp(&b.0));
            for (field, errs) in fields {
                for err in errs {
                    match &err.message {
                        Some(msg) => messages.push(msg.to_string()),
                        None => messages.push(format!("{field} no es válido")),
                    }
                }
            }
        }

        if !self.nombre.is_empty() && self.nombre.trim().is_empty() {
            messages.push("el nombre no puede estar vacío".to_string());
        }
        if !self.precio.is_finite() {
            messages.push("el precio debe ser un número finito".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(messages.join("; ")))
        }
    }
}

/// Parse the quantity field as a whole number.
pub fn parse_cantidad(raw: &str) -> Result<i32, CoreError> {
    raw.trim().parse().map_err(|_| CoreError::InvalidNumber {
        field: "cantidad",
        value: raw.to_string(),
    })
}

/// Parse the price field as a finite decimal number.
pub fn parse_precio(raw: &str) -> Result<f64, CoreError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::InvalidNumber {
            field: "precio",
            value: raw.to_string(),
        }),
    }
}
