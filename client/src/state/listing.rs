//! Shared list-page state: search filter, pagination, modal and delete
//! confirmation.
//!
//! DESIGN
//! ======
//! Every CRUD page holds one `ListState<T>` in a signal. The full collection
//! is kept as fetched; the filtered view and the current page are derived on
//! read so they can never go stale after a refresh. The current page is
//! clamped whenever the filtered count or the page size changes.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::types::{
    Alerta, Asignacion, Comunicado, Contacto, ExportacionHistorial, Paciente, Tambo, User, Visita,
};

/// A record that can be listed, searched and deleted by id.
pub trait Listable: Clone {
    /// Backend id; `None` for records not yet persisted.
    fn record_id(&self) -> Option<i64>;
    /// Text matched by the search box.
    fn search_text(&self) -> String;
}

/// Rows per page for a container of the given height in CSS pixels.
#[must_use]
pub fn page_size_for_height(height: f64) -> usize {
    if height >= 1280.0 {
        9
    } else if height >= 1000.0 {
        7
    } else if height >= 800.0 {
        6
    } else {
        4
    }
}

/// Number of pages for `total` rows; at least one.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Case-insensitive substring match of the term as typed; an empty term
/// matches everything.
#[must_use]
pub fn matches_term(text: &str, term: &str) -> bool {
    term.is_empty() || text.to_lowercase().contains(&term.to_lowercase())
}

/// Which modal, if any, the page shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Creating,
    Editing(T),
    Viewing(T),
}

impl<T> ModalState<T> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Record the modal was opened with.
    #[must_use]
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Editing(r) | Self::Viewing(r) => Some(r),
            Self::Closed | Self::Creating => None,
        }
    }
}

/// State of one CRUD list page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    term: String,
    page: usize,
    page_size: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub modal: ModalState<T>,
    pending_delete: Option<i64>,
}

impl<T: Listable> Default for ListState<T> {
    fn default() -> Self {
        Self::new(10)
    }
}

impl<T: Listable> ListState<T> {
    /// Empty list in the loading state.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            term: String::new(),
            page: 1,
            page_size: page_size.max(1),
            loading: true,
            error: None,
            modal: ModalState::Closed,
            pending_delete: None,
        }
    }

    /// Replace the collection after a fetch.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.clamp_page();
    }

    /// Record a failed fetch; the previous collection stays visible.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Change the search term; the view restarts at page 1.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 1;
    }

    /// Records matching the current term, in collection order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| matches_term(&item.search_text(), &self.term))
            .collect()
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.filtered_count(), self.page_size)
    }

    /// Rows of the current page.
    #[must_use]
    pub fn page_items(&self) -> Vec<T> {
        let page = self.page.clamp(1, self.page_count());
        self.filtered()
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    /// Jump to a page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Change rows per page (e.g. after a container resize).
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count());
    }

    pub fn open_create(&mut self) {
        self.modal = ModalState::Creating;
    }

    pub fn open_edit(&mut self, record: T) {
        self.modal = ModalState::Editing(record);
    }

    pub fn open_view(&mut self, record: T) {
        self.modal = ModalState::Viewing(record);
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Dismiss the confirmation; nothing is deleted.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Accept the confirmation, yielding the id to delete exactly once.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }
}

// =============================================================
// Entity search text
// =============================================================

impl Listable for User {
    fn record_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.full_name(), self.document_number, self.email)
    }
}

impl Listable for Tambo {
    fn record_id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.code)
    }
}

impl Listable for Paciente {
    fn record_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn search_text(&self) -> String {
        self.display_name()
    }
}

impl Listable for Contacto {
    fn record_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.nombre_completo, self.paciente_nombre.as_deref().unwrap_or_default())
    }
}

impl Listable for Asignacion {
    fn record_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.gestor_nombre.as_deref().unwrap_or_default(),
            self.tambo_nombre.as_deref().unwrap_or_default(),
            self.departamento,
            self.provincia,
            self.distrito
        )
    }
}

impl Listable for Visita {
    fn record_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn search_text(&self) -> String {
        self.observacion.clone()
    }
}

impl Listable for Comunicado {
    fn record_id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> String {
        self.titulo.clone()
    }
}

impl Listable for Alerta {
    fn record_id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> String {
        self.mensaje.clone()
    }
}

impl Listable for ExportacionHistorial {
    fn record_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.tipo_exportacion, self.fecha_exportacion, self.estado)
    }
}
