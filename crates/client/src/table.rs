//! The rendered product table.
//!
//! [`TableView`] is the owned handle to at most one [`ProductTable`]
//! instance. Each rendered row carries the actions it offers, so callers
//! dispatch on row data instead of inspecting the rendered output.

use std::fmt::Write as _;

use inventario_core::format::format_price;
use inventario_core::types::DbId;

use crate::model::Product;

const HEADERS: [&str; 5] = ["ID", "Nombre", "Cantidad", "Precio", "Acciones"];

/// A per-row action, keyed by the row's product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(DbId),
    Delete(DbId),
}

impl RowAction {
    pub fn id(&self) -> DbId {
        match self {
            RowAction::Edit(id) | RowAction::Delete(id) => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit(_) => "editar",
            RowAction::Delete(_) => "eliminar",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub product: Product,
    pub cells: [String; 4],
    pub actions: [RowAction; 2],
}

impl TableRow {
    fn new(product: Product) -> Self {
        let id = product.idproductos;
        let cells = [
            id.to_string(),
            product.nombre.clone(),
            product.cantidad.to_string(),
            format_price(product.precio),
        ];
        Self {
            product,
            cells,
            actions: [RowAction::Edit(id), RowAction::Delete(id)],
        }
    }

    fn actions_cell(&self) -> String {
        self.actions
            .iter()
            .map(|a| format!("[{} {}]", a.label(), a.id()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One initialized table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTable {
    rows: Vec<TableRow>,
}

impl ProductTable {
    fn new(products: Vec<Product>) -> Self {
        Self {
            rows: products.into_iter().map(TableRow::new).collect(),
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row(&self, id: DbId) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.product.idproductos == id)
    }

    fn render(&self) -> String {
        let body: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|r| {
                let [id, nombre, cantidad, precio] = r.cells.clone();
                [id, nombre, cantidad, precio, r.actions_cell()]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &body {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &HEADERS.map(String::from), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let _ = writeln!(out, "{}", rule.join("-+-"));
        if body.is_empty() {
            let _ = writeln!(out, "(sin productos)");
        }
        for row in &body {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

#[derive(Debug, Clone, Default, PartialEq)]
enum TableState {
    #[default]
    Empty,
    Ready(ProductTable),
    Failed(String),
}

/// Owned handle to the table, with explicit `init` / `destroy` / `refresh`.
#[derive(Debug, Default)]
pub struct TableView {
    state: TableState,
    instances: u64,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fresh table from `products`, destroying any previous instance
    /// first.
    pub fn init(&mut self, products: Vec<Product>) {
        if self.destroy() {
            tracing::debug!(instance = self.instances, "Destroyed previous table instance");
        }
        self.instances += 1;
        tracing::debug!(rows = products.len(), instance = self.instances, "Table initialized");
        self.state = TableState::Ready(ProductTable::new(products));
    }

    /// Drop the current instance, if any. Returns whether one existed.
    pub fn destroy(&mut self) -> bool {
        let existed = matches!(self.state, TableState::Ready(_));
        self.state = TableState::Empty;
        existed
    }

    /// Replace the table contents with newly fetched products.
    pub fn refresh(&mut self, products: Vec<Product>) {
        self.init(products);
    }

    /// Replace the table with a single inline error row.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.destroy();
        self.state = TableState::Failed(message.into());
    }

    pub fn table(&self) -> Option<&ProductTable> {
        match &self.state {
            TableState::Ready(table) => Some(table),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            TableState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// How many instances have been initialized over the handle's lifetime.
    pub fn instances_created(&self) -> u64 {
        self.instances
    }

    /// The product behind a rendered row, as currently displayed.
    pub fn product(&self, id: DbId) -> Option<&Product> {
        self.table()?.row(id).map(|r| &r.product)
    }

    /// Whether some rendered row offers exactly this action.
    pub fn offers(&self, action: RowAction) -> bool {
        self.table()
            .and_then(|t| t.row(action.id()))
            .is_some_and(|r| r.actions.contains(&action))
    }

    pub fn render(&self) -> String {
        match &self.state {
            TableState::Empty => String::new(),
            TableState::Ready(table) => table.render(),
            TableState::Failed(message) => format!("{message}\n"),
        }
    }
}
