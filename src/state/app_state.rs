// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::models::{Contract, Employee, Entity};
use crate::services::ApiClient;
use crate::state::reactivity::Notifier;
use crate::state::route_guard::{guard, Route, Screen};
use crate::state::session_state::SessionContext;
use crate::utils::browser::alert;
use crate::viewmodels::{AuthViewModel, EmployeeSearch, RecordListController};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Empleados,
    Contratos,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 2] = [DashboardTab::Empleados, DashboardTab::Contratos];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Empleados => "Empleados",
            DashboardTab::Contratos => "Contratos",
        }
    }
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionContext,
    pub auth: AuthViewModel<ApiClient>,
    pub employees: RecordListController<Employee, ApiClient>,
    pub contracts: RecordListController<Contract, ApiClient>,
    pub search: EmployeeSearch<ApiClient>,

    // UI State
    pub route: Rc<RefCell<Route>>,
    pub active_tab: Rc<RefCell<DashboardTab>>,
    pub search_query: Rc<RefCell<String>>,
    pub login_pending: Rc<RefCell<bool>>,

    notifier: Notifier,
}

impl AppState {
    /// Estado con sesión en localStorage y API de CONFIG
    pub fn new(route: Route) -> Self {
        Self::with_services(route, SessionContext::browser(), Rc::new(ApiClient::new()))
    }

    pub fn with_services(route: Route, session: SessionContext, api: Rc<ApiClient>) -> Self {
        Self {
            auth: AuthViewModel::new(api.clone(), session.clone()),
            employees: RecordListController::new(api.clone()),
            contracts: RecordListController::new(api.clone()),
            search: EmployeeSearch::new(api),
            session,
            route: Rc::new(RefCell::new(route)),
            active_tab: Rc::new(RefCell::new(DashboardTab::default())),
            search_query: Rc::new(RefCell::new(String::new())),
            login_pending: Rc::new(RefCell::new(false)),
            notifier: Notifier::new(),
        }
    }

    /// Suscribirse a cambios de cualquier parte del estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback: Rc<dyn Fn()> = Rc::new(callback);
        {
            let cb = callback.clone();
            self.employees.subscribe(move || cb());
        }
        {
            let cb = callback.clone();
            self.contracts.subscribe(move || cb());
        }
        self.notifier.subscribe(move || callback());
    }

    pub fn notify_changes(&self) {
        self.notifier.notify();
    }

    /// Pantalla visible para la ruta actual
    pub fn screen(&self) -> Screen {
        guard(&self.route.borrow(), &self.session)
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    pub fn active_tab(&self) -> DashboardTab {
        *self.active_tab.borrow()
    }

    /// Cambia de pestaña; devuelve false si ya estaba activa
    pub fn select_tab(&self, tab: DashboardTab) -> bool {
        if self.active_tab() == tab {
            return false;
        }
        *self.active_tab.borrow_mut() = tab;
        log::info!("📑 [DASHBOARD] Pestaña {}", tab.label());
        self.notify_changes();
        true
    }

    /// Sin notificar: la vista de login actualiza su botón directamente
    pub fn set_login_pending(&self, pending: bool) {
        *self.login_pending.borrow_mut() = pending;
    }

    pub fn is_login_pending(&self) -> bool {
        *self.login_pending.borrow()
    }

    /// Carga la colección de la pestaña activa. Contratos también necesita
    /// los empleados para el selector.
    pub fn load_active_tab(&self) {
        let tab = self.active_tab();
        let employees = self.employees.clone();
        let contracts = self.contracts.clone();
        spawn_local(async move {
            if let Err(e) = employees.refresh().await {
                alert(&e.user_message(Employee::LOAD_ERROR));
                return;
            }
            if tab == DashboardTab::Contratos {
                if let Err(e) = contracts.refresh().await {
                    alert(&e.user_message(Contract::LOAD_ERROR));
                }
            }
        });
    }

    /// Cierra sesión y limpia lo que quedó en memoria del dashboard
    pub fn logout(&self) {
        self.auth.logout();
        self.employees.cancel_edit();
        self.contracts.cancel_edit();
        *self.active_tab.borrow_mut() = DashboardTab::default();
        self.search_query.borrow_mut().clear();
    }
}
