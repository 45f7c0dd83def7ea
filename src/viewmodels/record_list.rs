// ============================================================================
// RECORD LIST VIEWMODEL - Colección + borrador + objetivo de edición
// ============================================================================
// Un único controlador genérico para empleados y contratos. Toda mutación
// termina en un refresh completo de la colección (reemplazo, nunca merge).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::models::{Entity, ValidationError};
use crate::services::{ApiError, RecordApi};
use crate::state::reactivity::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// El usuario respondió "no" a la confirmación
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Mensaje para el usuario (validación local o mensaje del servidor)
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SubmitError::Validation(e) => e.to_string(),
            SubmitError::Api(e) => e.user_message(fallback),
        }
    }
}

pub struct RecordListController<E: Entity, A: RecordApi<E>> {
    api: Rc<A>,
    records: Rc<RefCell<Vec<E>>>,
    draft: Rc<RefCell<E::Draft>>,
    edit_target: Rc<RefCell<Option<String>>>,
    notifier: Notifier,
}

impl<E: Entity, A: RecordApi<E>> Clone for RecordListController<E, A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            records: self.records.clone(),
            draft: self.draft.clone(),
            edit_target: self.edit_target.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<E: Entity, A: RecordApi<E>> RecordListController<E, A> {
    pub fn new(api: Rc<A>) -> Self {
        Self {
            api,
            records: Rc::new(RefCell::new(Vec::new())),
            draft: Rc::new(RefCell::new(E::Draft::default())),
            edit_target: Rc::new(RefCell::new(None)),
            notifier: Notifier::new(),
        }
    }

    /// Re-render cuando cambia la colección o el modo de edición
    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.notifier.subscribe(callback);
    }

    pub fn records(&self) -> Vec<E> {
        self.records.borrow().clone()
    }

    pub fn find(&self, id: &str) -> Option<E> {
        self.records.borrow().iter().find(|r| r.id() == id).cloned()
    }

    pub fn draft(&self) -> E::Draft {
        self.draft.borrow().clone()
    }

    pub fn edit_target(&self) -> Option<String> {
        self.edit_target.borrow().clone()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.borrow().is_some()
    }

    /// Lista completa desde el API; en error se conserva la última colección
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        match self.api.list().await {
            Ok(records) => {
                let count = records.len();
                *self.records.borrow_mut() = records;
                log::info!("📋 [{}] {} registros", E::LABEL.to_uppercase(), count);
                self.notifier.notify();
                Ok(count)
            }
            Err(e) => {
                log::error!("❌ [{}] Error al obtener la lista: {}", E::LABEL.to_uppercase(), e);
                Err(e)
            }
        }
    }

    /// Copia el registro al borrador y lo marca como objetivo de edición
    pub fn begin_edit(&self, record: &E) {
        *self.draft.borrow_mut() = record.to_draft();
        *self.edit_target.borrow_mut() = Some(record.id().to_string());
        log::info!("✏️ [{}] Editando {}", E::LABEL.to_uppercase(), record.id());
        self.notifier.notify();
    }

    pub fn cancel_edit(&self) {
        self.reset_draft();
        self.notifier.notify();
    }

    /// Cambios de inputs; no dispara re-render
    pub fn update_draft<F: FnOnce(&mut E::Draft)>(&self, update: F) {
        update(&mut self.draft.borrow_mut());
    }

    /// Valida, crea o actualiza según el objetivo de edición y refresca.
    /// En cualquier error el borrador queda intacto.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        let payload = E::validate(&self.draft.borrow()).map_err(|e| {
            log::warn!("⚠️ [{}] Validación: {}", E::LABEL.to_uppercase(), e);
            SubmitError::Validation(e)
        })?;

        let target = self.edit_target.borrow().clone();
        let outcome = match target {
            Some(id) => {
                self.api.update(&id, &payload).await?;
                SubmitOutcome::Updated(id)
            }
            None => {
                self.api.create(&payload).await?;
                SubmitOutcome::Created
            }
        };
        log::info!("✅ [{}] Guardado: {:?}", E::LABEL.to_uppercase(), outcome);

        self.reset_draft();
        self.notifier.notify();
        if let Err(e) = self.refresh().await {
            log::warn!("⚠️ [{}] Guardado pero sin refrescar: {}", E::LABEL.to_uppercase(), e);
        }
        Ok(outcome)
    }

    /// Elimina tras confirmación explícita; sin confirmación no hay llamada
    pub async fn remove<F>(&self, id: &str, confirm: F) -> Result<RemoveOutcome, ApiError>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(E::DELETE_PROMPT) {
            log::info!("↩️ [{}] Eliminación cancelada: {}", E::LABEL.to_uppercase(), id);
            return Ok(RemoveOutcome::Cancelled);
        }

        self.api.delete(id).await?;
        log::info!("🗑️ [{}] Eliminado {}", E::LABEL.to_uppercase(), id);

        if let Err(e) = self.refresh().await {
            log::warn!("⚠️ [{}] Eliminado pero sin refrescar: {}", E::LABEL.to_uppercase(), e);
        }
        Ok(RemoveOutcome::Removed)
    }

    fn reset_draft(&self) {
        *self.draft.borrow_mut() = E::Draft::default();
        *self.edit_target.borrow_mut() = None;
    }
}
