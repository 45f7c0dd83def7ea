// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista compartida de callbacks; los clones notifican a los mismos subscribers
#[derive(Clone, Default)]
pub struct Notifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Copia de la lista: un callback puede suscribir otro sin panic de RefCell
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_clones_share_subscribers() {
        let notifier = Notifier::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            notifier.subscribe(move || hits.set(hits.get() + 1));
        }
        let clone = notifier.clone();
        clone.notify();
        notifier.notify();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_subscribe_during_notify() {
        let notifier = Notifier::new();
        let late_hits = Rc::new(Cell::new(0));
        {
            let inner = notifier.clone();
            let late_hits = late_hits.clone();
            notifier.subscribe(move || {
                let late_hits = late_hits.clone();
                inner.subscribe(move || late_hits.set(late_hits.get() + 1));
            });
        }
        notifier.notify();
        assert_eq!(late_hits.get(), 0);

        notifier.notify();
        assert_eq!(late_hits.get(), 1);
    }
}
