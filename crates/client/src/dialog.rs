//! The edit dialog and its two-state visibility.

use inventario_core::format::format_price_input;
use inventario_core::types::DbId;

use crate::form::ProductForm;
use crate::model::Product;

/// Why a visible dialog was hidden without saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The dialog's own close control.
    CloseControl,
    /// A click outside the dialog's content area.
    OutsideClick,
}

/// Fields of an open dialog. The id is fixed; the rest are editable.
#[derive(Debug, Clone, PartialEq)]
pub struct EditFields {
    pub id: DbId,
    pub form: ProductForm,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Hidden,
    Visible(EditFields),
}

/// Modal edit form.
///
/// `Hidden -> Visible` only through [`EditDialog::open`], which populates the
/// fields in the same step. `Visible -> Hidden` through
/// [`EditDialog::dismiss`] or [`EditDialog::close_after_save`].
#[derive(Debug, Default)]
pub struct EditDialog {
    state: DialogState,
}

impl EditDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, DialogState::Visible(_))
    }

    /// Show the dialog filled with `product`, price formatted to two decimals.
    ///
    /// Opening while already visible replaces the fields.
    pub fn open(&mut self, product: &Product) {
        self.state = DialogState::Visible(EditFields {
            id: product.idproductos,
            form: ProductForm::new(
                product.nombre.clone(),
                product.cantidad.to_string(),
                format_price_input(product.precio),
            ),
        });
    }

    pub fn fields(&self) -> Option<&EditFields> {
        match &self.state {
            DialogState::Visible(fields) => Some(fields),
            DialogState::Hidden => None,
        }
    }

    /// Mutable access to the editable fields while visible.
    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        match &mut self.state {
            DialogState::Visible(fields) => Some(&mut fields.form),
            DialogState::Hidden => None,
        }
    }

    /// Hide without saving. Returns `false` if it was already hidden.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        let was_visible = self.is_visible();
        if was_visible {
            tracing::debug!(?reason, "Edit dialog dismissed");
        }
        self.state = DialogState::Hidden;
        was_visible
    }

    /// Hide after a successful update.
    pub fn close_after_save(&mut self) {
        self.state = DialogState::Hidden;
    }
}
