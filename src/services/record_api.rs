// ============================================================================
// RECORD API - Contrato CRUD genérico que consumen los controladores de lista
// ============================================================================

use async_trait::async_trait;

use crate::models::{Contract, Employee, EmployeeSearchResponse, Entity, LoginResponse, MessageResponse};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// CRUD de una colección del backend
#[async_trait(?Send)]
pub trait RecordApi<E: Entity> {
    async fn list(&self) -> Result<Vec<E>, ApiError>;

    async fn create(&self, payload: &E::Payload) -> Result<(), ApiError>;

    async fn update(&self, id: &str, payload: &E::Payload) -> Result<(), ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Endpoints de autenticación
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, correo: &str, password: &str) -> Result<LoginResponse, ApiError>;

    async fn request_password_reset(&self, correo: &str) -> Result<MessageResponse, ApiError>;

    async fn change_password(&self, token: &str, nueva_password: &str) -> Result<MessageResponse, ApiError>;
}

/// Búsqueda de un empleado por nombre o documento
#[async_trait(?Send)]
pub trait EmployeeSearchApi {
    async fn search_employee(&self, query: &str) -> Result<EmployeeSearchResponse, ApiError>;
}

#[async_trait(?Send)]
impl RecordApi<Employee> for ApiClient {
    async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        self.list_employees().await
    }

    async fn create(&self, payload: &<Employee as Entity>::Payload) -> Result<(), ApiError> {
        self.create_employee(payload).await.map(|_| ())
    }

    async fn update(&self, id: &str, payload: &<Employee as Entity>::Payload) -> Result<(), ApiError> {
        self.update_employee(id, payload).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.delete_employee(id).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl RecordApi<Contract> for ApiClient {
    async fn list(&self) -> Result<Vec<Contract>, ApiError> {
        self.list_contracts().await
    }

    async fn create(&self, payload: &<Contract as Entity>::Payload) -> Result<(), ApiError> {
        self.create_contract(payload).await.map(|_| ())
    }

    async fn update(&self, id: &str, payload: &<Contract as Entity>::Payload) -> Result<(), ApiError> {
        self.update_contract(id, payload).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.delete_contract(id).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, correo: &str, password: &str) -> Result<LoginResponse, ApiError> {
        ApiClient::login(self, correo, password).await
    }

    async fn request_password_reset(&self, correo: &str) -> Result<MessageResponse, ApiError> {
        ApiClient::request_password_reset(self, correo).await
    }

    async fn change_password(&self, token: &str, nueva_password: &str) -> Result<MessageResponse, ApiError> {
        ApiClient::change_password(self, token, nueva_password).await
    }
}

#[async_trait(?Send)]
impl EmployeeSearchApi for ApiClient {
    async fn search_employee(&self, query: &str) -> Result<EmployeeSearchResponse, ApiError> {
        ApiClient::search_employee(self, query).await
    }
}
