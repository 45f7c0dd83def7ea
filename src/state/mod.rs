// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod route_guard;
pub mod app_state;

pub use reactivity::*;
pub use session_state::*;
pub use route_guard::*;
pub use app_state::*;
