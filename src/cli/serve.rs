use std::sync::Arc;

use poem::listener::TcpListener;
use poem::middleware::Cors;
use poem::{Endpoint, EndpointExt, Route, Server};
use poem_openapi::OpenApiService;

use crate::api::{AuthApi, EmployeesApi, HealthApi, MenuApi, ProfilesApi, UsersApi};
use crate::app_data::AppData;
use crate::coordinators::{
    AuthCoordinator, EmployeeCoordinator, MenuCoordinator, ProfileCoordinator, UserCoordinator,
};

/// Compose every API under `/api`, Swagger UI under `/swagger`, wrapped in CORS
pub fn build_routes(app_data: Arc<AppData>) -> impl Endpoint {
    let auth_coordinator = Arc::new(AuthCoordinator::new(app_data.clone()));

    let apis = (
        HealthApi::new(app_data.settings.clone()),
        AuthApi::new(auth_coordinator.clone()),
        EmployeesApi::new(
            auth_coordinator.clone(),
            Arc::new(EmployeeCoordinator::new(app_data.clone())),
        ),
        UsersApi::new(auth_coordinator.clone(), Arc::new(UserCoordinator::new(app_data.clone()))),
        ProfilesApi::new(
            auth_coordinator.clone(),
            Arc::new(ProfileCoordinator::new(app_data.clone())),
        ),
        MenuApi::new(auth_coordinator, Arc::new(MenuCoordinator::new(app_data.clone()))),
    );

    let api_service = OpenApiService::new(apis, app_data.settings.app_name(), app_data.settings.app_version())
        .server("/api");
    let ui = api_service.swagger_ui();

    let cors = Cors::new().allow_origins(app_data.settings.allowed_origins().iter().map(String::as_str));

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .with(cors)
}

/// Serve the HTTP API until the process is stopped
pub async fn run_server(app_data: Arc<AppData>, address: String) -> Result<(), std::io::Error> {
    let app = build_routes(app_data);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address)).run(app).await
}
