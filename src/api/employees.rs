use std::sync::Arc;

use poem::Request;
use poem_openapi::param::{Path, Query};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, OpenApi};

use crate::api::helpers::{ApiTags, BearerAuth, DEFAULT_PAGE_SIZE, Deleted, authorize};
use crate::coordinators::{AuthCoordinator, EmployeeCoordinator};
use crate::errors::AdminError;
use crate::types::dto::employees::{
    CreateEmployeeRequest, EmployeeResponse, EmployeeWithUserResponse, UpdateEmployeeRequest,
};

/// Employee record endpoints
pub struct EmployeesApi {
    auth_coordinator: Arc<AuthCoordinator>,
    employee_coordinator: Arc<EmployeeCoordinator>,
}

impl EmployeesApi {
    pub fn new(auth_coordinator: Arc<AuthCoordinator>, employee_coordinator: Arc<EmployeeCoordinator>) -> Self {
        Self {
            auth_coordinator,
            employee_coordinator,
        }
    }
}

#[derive(ApiResponse)]
enum EmployeeCreated {
    #[oai(status = 201)]
    Created(Json<EmployeeResponse>),
}

#[OpenApi]
impl EmployeesApi {
    /// List employees ordered by id
    #[oai(path = "/employees", method = "get", tag = "ApiTags::Employees")]
    async fn list(
        &self,
        req: &Request,
        auth: BearerAuth,
        skip: Query<Option<u64>>,
        limit: Query<Option<u64>>,
    ) -> Result<Json<Vec<EmployeeResponse>>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        let employees = self
            .employee_coordinator
            .list(skip.0.unwrap_or(0), limit.0.unwrap_or(DEFAULT_PAGE_SIZE))
            .await?;
        Ok(Json(employees))
    }

    /// Fetch one employee with a summary of its user account
    #[oai(path = "/employees/:employee_id", method = "get", tag = "ApiTags::Employees")]
    async fn get(
        &self,
        req: &Request,
        auth: BearerAuth,
        employee_id: Path<i32>,
    ) -> Result<Json<EmployeeWithUserResponse>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.employee_coordinator.get_with_user(employee_id.0).await?))
    }

    #[oai(path = "/employees/national-id/:national_id", method = "get", tag = "ApiTags::Employees")]
    async fn get_by_national_id(
        &self,
        req: &Request,
        auth: BearerAuth,
        national_id: Path<String>,
    ) -> Result<Json<EmployeeResponse>, AdminError> {
        authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.employee_coordinator.get_by_national_id(&national_id.0).await?))
    }

    /// Create an employee, optionally with a user account
    #[oai(path = "/employees", method = "post", tag = "ApiTags::Employees")]
    async fn create(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<CreateEmployeeRequest>,
    ) -> Result<EmployeeCreated, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        let created = self.employee_coordinator.create(&ctx, body.0).await?;
        Ok(EmployeeCreated::Created(Json(created)))
    }

    /// Partially update an employee; a status change also applies to its user
    #[oai(path = "/employees/:employee_id", method = "put", tag = "ApiTags::Employees")]
    async fn update(
        &self,
        req: &Request,
        auth: BearerAuth,
        employee_id: Path<i32>,
        body: Json<UpdateEmployeeRequest>,
    ) -> Result<Json<EmployeeResponse>, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        Ok(Json(self.employee_coordinator.update(&ctx, employee_id.0, body.0).await?))
    }

    /// Deactivate an employee and its user account
    #[oai(path = "/employees/:employee_id", method = "delete", tag = "ApiTags::Employees")]
    async fn delete(&self, req: &Request, auth: BearerAuth, employee_id: Path<i32>) -> Result<Deleted, AdminError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth).await?;
        self.employee_coordinator.deactivate(&ctx, employee_id.0).await?;
        Ok(Deleted::NoContent)
    }
}
