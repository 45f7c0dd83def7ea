// Dobles de prueba para los viewmodels (solo cfg(test))

use async_trait::async_trait;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::future::Future;

use crate::models::{
    Contract, ContractPayload, Employee, EmployeePayload, EmployeeRef, EmployeeStatus,
    EmployeeSearchResponse, EmployeeSummary, Entity, Gender, LoginResponse, MessageResponse,
};
use crate::services::{ApiError, AuthApi, EmployeeSearchApi, RecordApi};

pub fn block_on<F: Future>(future: F) -> F::Output {
    futures::executor::block_on(future)
}

pub fn employee(id: &str, nombre: &str) -> Employee {
    Employee {
        id: id.into(),
        nro_documento: format!("doc-{}", id),
        nombre: nombre.into(),
        apellido: "Pérez".into(),
        edad: Some(30),
        genero: Some(Gender::Femenino),
        cargo: "Analista".into(),
        estado: EmployeeStatus::Activo,
        correo: format!("{}@rrhh.com", id),
        password: "x".into(),
    }
}

pub fn contract(id: &str, nombre: &str) -> Contract {
    Contract {
        id: id.into(),
        empleado_id: Some(EmployeeRef::Populated(EmployeeSummary {
            id: "e1".into(),
            nombre: nombre.into(),
            apellido: "Pérez".into(),
        })),
        fecha_inicio: "2024-01-01T00:00:00.000Z".into(),
        fecha_fin: "2024-12-31T00:00:00.000Z".into(),
        valor: 1000.0,
        cargo: Some("Dev".into()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(serde_json::Value),
    Update(String, serde_json::Value),
    Delete(String),
}

type Materialize<E> = fn(&str, &<E as Entity>::Payload) -> E;

/// Backend en memoria que registra cada llamada
pub struct FakeRecordApi<E: Entity> {
    records: RefCell<Vec<E>>,
    calls: RefCell<Vec<Call>>,
    failure: RefCell<Option<ApiError>>,
    next_id: Cell<usize>,
    materialize: Materialize<E>,
}

impl<E: Entity> FakeRecordApi<E> {
    fn new(seed: Vec<E>, materialize: Materialize<E>) -> Self {
        Self {
            records: RefCell::new(seed),
            calls: RefCell::new(Vec::new()),
            failure: RefCell::new(None),
            next_id: Cell::new(1),
            materialize,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// La próxima llamada falla con este error
    pub fn fail_next(&self, error: ApiError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// Simula cambios hechos por otro cliente
    pub fn replace_records(&self, records: Vec<E>) {
        *self.records.borrow_mut() = records;
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl FakeRecordApi<Employee> {
    pub fn employees(seed: Vec<Employee>) -> Self {
        Self::new(seed, |id, p: &EmployeePayload| Employee {
            id: id.into(),
            nro_documento: p.nro_documento.clone(),
            nombre: p.nombre.clone(),
            apellido: p.apellido.clone(),
            edad: Some(u32::from(p.edad)),
            genero: p.genero,
            cargo: p.cargo.clone(),
            estado: p.estado,
            correo: p.correo.clone(),
            password: p.password.clone(),
        })
    }
}

impl FakeRecordApi<Contract> {
    pub fn contracts(seed: Vec<Contract>) -> Self {
        Self::new(seed, |id, p: &ContractPayload| Contract {
            id: id.into(),
            empleado_id: Some(EmployeeRef::Id(p.empleado_id.clone())),
            fecha_inicio: p.fecha_inicio.to_string(),
            fecha_fin: p.fecha_fin.to_string(),
            valor: p.valor,
            cargo: Some(p.cargo.clone()),
        })
    }
}

fn to_value<T: Serialize>(payload: &T) -> serde_json::Value {
    serde_json::to_value(payload).unwrap_or(serde_json::Value::Null)
}

#[async_trait(?Send)]
impl<E: Entity> RecordApi<E> for FakeRecordApi<E> {
    async fn list(&self) -> Result<Vec<E>, ApiError> {
        self.record(Call::List)?;
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, payload: &E::Payload) -> Result<(), ApiError> {
        self.record(Call::Create(to_value(payload)))?;
        let id = format!("new-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        let created = (self.materialize)(&id, payload);
        self.records.borrow_mut().push(created);
        Ok(())
    }

    async fn update(&self, id: &str, payload: &E::Payload) -> Result<(), ApiError> {
        self.record(Call::Update(id.to_string(), to_value(payload)))?;
        let updated = (self.materialize)(id, payload);
        let mut records = self.records.borrow_mut();
        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => *slot = updated,
            None => return Err(ApiError::Http { status: 404, message: None }),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(id.to_string()))?;
        self.records.borrow_mut().retain(|r| r.id() != id);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthCall {
    Login(String, String),
    Recover(String),
    ChangePassword(String, String),
}

/// Backend de autenticación con respuestas fijas
#[derive(Default)]
pub struct FakeAuthApi {
    pub login_response: RefCell<Option<Result<LoginResponse, ApiError>>>,
    pub message_response: RefCell<Option<Result<MessageResponse, ApiError>>>,
    calls: RefCell<Vec<AuthCall>>,
}

impl FakeAuthApi {
    pub fn granting(token: &str) -> Self {
        let api = Self::default();
        *api.login_response.borrow_mut() = Some(Ok(LoginResponse {
            token: Some(token.into()),
            message: None,
        }));
        api
    }

    pub fn failing(error: ApiError) -> Self {
        let api = Self::default();
        *api.login_response.borrow_mut() = Some(Err(error.clone()));
        *api.message_response.borrow_mut() = Some(Err(error));
        api
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.borrow().clone()
    }

    fn message(&self) -> Result<MessageResponse, ApiError> {
        self.message_response
            .borrow()
            .clone()
            .unwrap_or(Ok(MessageResponse { message: Some("ok".into()) }))
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn login(&self, correo: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(AuthCall::Login(correo.into(), password.into()));
        self.login_response
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(LoginResponse::default()))
    }

    async fn request_password_reset(&self, correo: &str) -> Result<MessageResponse, ApiError> {
        self.calls.borrow_mut().push(AuthCall::Recover(correo.into()));
        self.message()
    }

    async fn change_password(&self, token: &str, nueva_password: &str) -> Result<MessageResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(AuthCall::ChangePassword(token.into(), nueva_password.into()));
        self.message()
    }
}

/// Búsqueda con una respuesta fija
pub struct FakeSearchApi {
    pub response: Result<EmployeeSearchResponse, ApiError>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeSearchApi {
    pub fn new(response: Result<EmployeeSearchResponse, ApiError>) -> Self {
        Self {
            response,
            queries: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl EmployeeSearchApi for FakeSearchApi {
    async fn search_employee(&self, query: &str) -> Result<EmployeeSearchResponse, ApiError> {
        self.queries.borrow_mut().push(query.to_string());
        self.response.clone()
    }
}
