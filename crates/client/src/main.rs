//! `inventario` -- terminal front-end for the inventory server.
//!
//! # Environment variables
//!
//! | Variable             | Default                 | Description             |
//! |----------------------|-------------------------|-------------------------|
//! | `INVENTARIO_API_URL` | `http://localhost:3000` | Base URL of the server  |

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventario_client::api::ProductApi;
use inventario_client::config::ClientConfig;
use inventario_client::controller::InventoryController;
use inventario_client::dialog::DismissReason;
use inventario_client::table::RowAction;
use inventario_client::ui::{TerminalUi, Ui};

const HELP: &str = "\
Comandos:
  listar          recargar y mostrar la tabla
  agregar         agregar un producto
  editar <id>     editar un producto de la tabla
  eliminar <id>   eliminar un producto de la tabla
  ayuda           mostrar esta ayuda
  salir           terminar
";

type Controller = InventoryController<TerminalUi<io::StdinLock<'static>, io::Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventario_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Starting inventario client");

    let mut controller = InventoryController::new(
        ProductApi::new(config.api_url),
        TerminalUi::stdio(),
    );

    let _ = controller.load_and_render().await;
    show_table(&mut controller);
    controller.ui_mut().show(HELP);

    loop {
        let Some(line) = controller.ui_mut().prompt("inventario> ")? else {
            break;
        };
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let id = words.next().and_then(|w| w.parse().ok());

        match (command, id) {
            ("", _) => {}
            ("listar", _) => {
                let _ = controller.load_and_render().await;
                show_table(&mut controller);
            }
            ("agregar", _) => {
                if read_create_form(&mut controller)? && controller.submit_create().await.is_ok() {
                    show_table(&mut controller);
                }
            }
            ("editar", Some(id)) => {
                if controller.dispatch(RowAction::Edit(id)).await.is_ok() {
                    edit_dialog(&mut controller).await?;
                }
            }
            ("eliminar", Some(id)) => {
                if controller.dispatch(RowAction::Delete(id)).await.is_ok() {
                    show_table(&mut controller);
                }
            }
            ("editar" | "eliminar", None) => {
                controller.ui_mut().alert("Indica el ID numérico del producto.");
            }
            ("ayuda", _) => controller.ui_mut().show(HELP),
            ("salir", _) => break,
            (other, _) => {
                controller
                    .ui_mut()
                    .alert(&format!("Comando desconocido: {other}. Escribe 'ayuda'."));
            }
        }
    }

    Ok(())
}

fn show_table(controller: &mut Controller) {
    let rendered = controller.table().render();
    controller.ui_mut().show(&rendered);
}

/// Fill the create form. Returns `false` if input ran out.
fn read_create_form(controller: &mut Controller) -> io::Result<bool> {
    let ui = controller.ui_mut();
    let (Some(nombre), Some(cantidad), Some(precio)) = (
        ui.prompt("Nombre: ")?,
        ui.prompt("Cantidad: ")?,
        ui.prompt("Precio: ")?,
    ) else {
        return Ok(false);
    };

    let form = controller.create_form_mut();
    form.nombre = nombre;
    form.cantidad = cantidad;
    form.precio = precio;
    Ok(true)
}

/// Walk the visible dialog's fields, then save or close it.
///
/// An empty answer keeps the current value. Saving failures leave the
/// dialog open so the user can correct and retry.
async fn edit_dialog(controller: &mut Controller) -> io::Result<()> {
    while controller.dialog().is_visible() {
        let Some(mut edited) = controller.dialog().fields().map(|f| f.form.clone()) else {
            break;
        };

        for (label, value) in [
            ("Nombre", &mut edited.nombre),
            ("Cantidad", &mut edited.cantidad),
            ("Precio", &mut edited.precio),
        ] {
            match controller.ui_mut().prompt(&format!("{label} [{value}]: "))? {
                Some(answer) if !answer.trim().is_empty() => *value = answer,
                Some(_) => {}
                None => {
                    controller.dismiss_dialog(DismissReason::CloseControl);
                    return Ok(());
                }
            }
        }
        if let Some(form) = controller.dialog_form_mut() {
            *form = edited;
        }

        if controller.ui_mut().confirm("¿Guardar cambios?") {
            if controller.submit_edit().await.is_ok() {
                show_table(controller);
            }
        } else {
            controller.dismiss_dialog(DismissReason::CloseControl);
        }
    }
    Ok(())
}
