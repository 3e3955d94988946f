//! View-controller tying the API client to the table, the forms and the
//! edit dialog.
//!
//! Every flow reports its outcome to the user through [`Ui`] and logs
//! failures; nothing is retried. The returned `Result` lets callers react
//! too, but the user has already been told by the time it comes back.

use inventario_core::types::DbId;

use crate::api::ProductApi;
use crate::dialog::{DismissReason, EditDialog};
use crate::error::ClientError;
use crate::form::ProductForm;
use crate::table::{RowAction, TableView};
use crate::ui::Ui;

pub const CREATE_FAILED: &str = "Hubo un error al agregar el producto. Revisa la consola.";
pub const DELETE_FAILED: &str = "Hubo un error al eliminar el producto. Revisa la consola.";
pub const UPDATE_FAILED: &str = "Hubo un error al actualizar el producto. Revisa la consola.";

pub struct InventoryController<U> {
    api: ProductApi,
    table: TableView,
    dialog: EditDialog,
    create_form: ProductForm,
    ui: U,
}

impl<U: Ui> InventoryController<U> {
    pub fn new(api: ProductApi, ui: U) -> Self {
        Self {
            api,
            table: TableView::new(),
            dialog: EditDialog::new(),
            create_form: ProductForm::default(),
            ui,
        }
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn dialog(&self) -> &EditDialog {
        &self.dialog
    }

    /// Edit the dialog's fields while it is visible.
    pub fn dialog_form_mut(&mut self) -> Option<&mut ProductForm> {
        self.dialog.form_mut()
    }

    pub fn create_form(&self) -> &ProductForm {
        &self.create_form
    }

    pub fn create_form_mut(&mut self) -> &mut ProductForm {
        &mut self.create_form
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Fetch every product and rebuild the table.
    ///
    /// On failure the table is replaced by one inline error row pointing at
    /// the server.
    pub async fn load_and_render(&mut self) -> Result<(), ClientError> {
        match self.api.list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Products loaded");
                self.table.refresh(products);
                Ok(())
            }
            Err(err) => {
                tracing::error!(status = ?err.status(), error = %err, "Failed to load products");
                self.table.show_error(format!(
                    "Error: Asegúrate de que el servidor (inventario-api) esté corriendo en {}.",
                    self.api.base_url()
                ));
                Err(err.into())
            }
        }
    }

    /// Submit the create form.
    ///
    /// Fields that fail to parse or validate are reported and nothing is
    /// sent. On success the form is cleared and the table reloaded.
    pub async fn submit_create(&mut self) -> Result<DbId, ClientError> {
        let input = match self.create_form.parse() {
            Ok(input) => input,
            Err(err) => {
                tracing::warn!(error = %err, "Create form rejected");
                self.ui.alert(&format!("Datos inválidos: {err}"));
                return Err(err.into());
            }
        };

        match self.api.create(&input).await {
            Ok(created) => {
                tracing::info!(id = created.id, mensaje = %created.mensaje, "Product created");
                self.create_form.reset();
                self.reload().await;
                self.ui
                    .alert(&format!("¡Producto {} agregado con éxito!", input.nombre));
                Ok(created.id)
            }
            Err(err) => {
                tracing::error!(status = ?err.status(), error = %err, "Failed to create product");
                self.ui.alert(CREATE_FAILED);
                Err(err.into())
            }
        }
    }

    /// Route a row action to its handler.
    ///
    /// Only actions offered by a currently rendered row are honored.
    pub async fn dispatch(&mut self, action: RowAction) -> Result<(), ClientError> {
        if !self.table.offers(action) {
            let err = ClientError::UnknownRow(action.id());
            self.ui.alert(&err.to_string());
            return Err(err);
        }

        match action {
            RowAction::Edit(id) => self.begin_edit(id),
            RowAction::Delete(id) => self.request_delete(id).await,
        }
    }

    /// Ask for confirmation, then delete and reload.
    ///
    /// Declining is not an error; nothing is sent.
    pub async fn request_delete(&mut self, id: DbId) -> Result<(), ClientError> {
        let question = format!("¿Estás seguro de que quieres eliminar el producto con ID {id}?");
        if !self.ui.confirm(&question) {
            tracing::debug!(id, "Delete cancelled");
            return Ok(());
        }

        match self.api.delete(id).await {
            Ok(response) => {
                tracing::info!(id, mensaje = %response.mensaje, "Product deleted");
                self.ui.alert(&response.mensaje);
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    id,
                    status = ?err.status(),
                    error = %err,
                    "Failed to delete product"
                );
                self.ui.alert(DELETE_FAILED);
                Err(err.into())
            }
        }
    }

    /// Open the edit dialog with the row's data as currently rendered.
    pub fn begin_edit(&mut self, id: DbId) -> Result<(), ClientError> {
        let Some(product) = self.table.product(id) else {
            let err = ClientError::UnknownRow(id);
            self.ui.alert(&err.to_string());
            return Err(err);
        };
        self.dialog.open(product);
        Ok(())
    }

    /// Submit the edit dialog.
    ///
    /// On success the dialog closes and the table is reloaded. On failure
    /// the dialog stays open with the user's edits.
    pub async fn submit_edit(&mut self) -> Result<(), ClientError> {
        let Some(fields) = self.dialog.fields() else {
            let err = ClientError::DialogHidden;
            self.ui.alert(&err.to_string());
            return Err(err);
        };
        let id = fields.id;

        let input = match fields.form.parse() {
            Ok(input) => input,
            Err(err) => {
                tracing::warn!(id, error = %err, "Edit form rejected");
                self.ui.alert(&format!("Datos inválidos: {err}"));
                return Err(err.into());
            }
        };

        match self.api.update(id, &input).await {
            Ok(response) => {
                tracing::info!(id, mensaje = %response.mensaje, "Product updated");
                self.ui.alert(&response.mensaje);
                self.dialog.close_after_save();
                self.reload().await;
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    id,
                    status = ?err.status(),
                    error = %err,
                    "Failed to update product"
                );
                self.ui.alert(UPDATE_FAILED);
                Err(err.into())
            }
        }
    }

    /// Hide the dialog without saving.
    pub fn dismiss_dialog(&mut self, reason: DismissReason) {
        self.dialog.dismiss(reason);
    }

    /// Reload after a successful write. A failed reload already shows the
    /// inline error row, so the write itself still counts as done.
    async fn reload(&mut self) {
        let _ = self.load_and_render().await;
    }
}
