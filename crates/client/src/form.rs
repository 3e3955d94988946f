//! Raw text entered into the product forms.

use inventario_core::error::CoreError;
use inventario_core::product::ProductInput;

/// The three editable fields exactly as typed.
///
/// Shared by the create form and the edit dialog. Nothing is sent to the
/// server until [`ProductForm::parse`] succeeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub nombre: String,
    pub cantidad: String,
    pub precio: String,
}

impl ProductForm {
    pub fn new(
        nombre: impl Into<String>,
        cantidad: impl Into<String>,
        precio: impl Into<String>,
    ) -> Self {
        Self {
            nombre: nombre.into(),
            cantidad: cantidad.into(),
            precio: precio.into(),
        }
    }

    /// Parse the quantity as an integer and the price as a float, then
    /// validate the result.
    pub fn parse(&self) -> Result<ProductInput, CoreError> {
        ProductInput::parse(&self.nombre, &self.cantidad, &self.precio)
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
