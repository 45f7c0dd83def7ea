// Búsqueda de empleado por nombre o documento (un solo resultado)

use std::rc::Rc;

use crate::services::EmployeeSearchApi;

pub const EMPTY_QUERY_HINT: &str = "Ingresa un nombre o número de documento para buscar.";
pub const NOT_FOUND: &str = "Empleado no encontrado";

pub struct EmployeeSearch<A: EmployeeSearchApi> {
    api: Rc<A>,
}

impl<A: EmployeeSearchApi> Clone for EmployeeSearch<A> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone() }
    }
}

impl<A: EmployeeSearchApi> EmployeeSearch<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self { api }
    }

    /// Texto a mostrar para la consulta; cualquier fallo se reporta como "no encontrado"
    pub async fn run(&self, query: &str) -> String {
        let query = query.trim();
        if query.is_empty() {
            return EMPTY_QUERY_HINT.to_string();
        }

        match self.api.search_employee(query).await {
            Ok(result) => {
                log::info!("🔎 [BUSCAR] {} -> {}", query, result.empleado.id);
                result.summary()
            }
            Err(e) => {
                if e.is_not_found() {
                    log::info!("🔎 [BUSCAR] {} sin resultados", query);
                } else {
                    log::warn!("⚠️ [BUSCAR] {}: {}", query, e);
                }
                NOT_FOUND.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeSearchResponse;
    use crate::services::ApiError;
    use crate::viewmodels::testing::{block_on, employee, FakeSearchApi};

    #[test]
    fn test_blank_query_makes_no_call() {
        let api = Rc::new(FakeSearchApi::new(Err(ApiError::Network("x".into()))));
        let search = EmployeeSearch::new(api.clone());
        assert_eq!(block_on(search.run("   ")), EMPTY_QUERY_HINT);
        assert!(api.queries.borrow().is_empty());
    }

    #[test]
    fn test_hit_summary() {
        let api = Rc::new(FakeSearchApi::new(Ok(EmployeeSearchResponse {
            empleado: employee("e1", "Ana"),
            cantidad_contratos: 3,
        })));
        let search = EmployeeSearch::new(api.clone());
        assert_eq!(block_on(search.run(" Ana ")), "Empleado: Ana Pérez\nContratos: 3");
        assert_eq!(api.queries.borrow().as_slice(), ["Ana".to_string()]);
    }

    #[test]
    fn test_failure_is_not_found() {
        let api = Rc::new(FakeSearchApi::new(Err(ApiError::Http { status: 404, message: None })));
        assert_eq!(block_on(EmployeeSearch::new(api).run("999")), NOT_FOUND);

        let api = Rc::new(FakeSearchApi::new(Err(ApiError::Network("offline".into()))));
        assert_eq!(block_on(EmployeeSearch::new(api).run("999")), NOT_FOUND);
    }
}
