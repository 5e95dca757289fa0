mod common;

use business_security_backend::coordinators::{AuthCoordinator, EmployeeCoordinator, MenuCoordinator, ProfileCoordinator};
use business_security_backend::errors::internal::{LoginError, RecordError};
use business_security_backend::errors::InternalError;
use business_security_backend::stores::CredentialStore;
use business_security_backend::types::db::RecordStatus;
use business_security_backend::types::dto::employees::{CreateEmployeeRequest, UpdateEmployeeRequest};
use business_security_backend::types::dto::menu::CreateMenuRequest;
use business_security_backend::types::dto::profiles::CreateProfileRequest;
use business_security_backend::types::internal::context::RequestContext;

fn employee_request(national_id: &str) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        name: "Ana Benítez".to_string(),
        national_id: national_id.to_string(),
        phone: None,
        mobile: Some("0981-000000".to_string()),
        address: None,
        nationality: Some("Paraguaya".to_string()),
        status_id: 1,
        create_user: false,
        username: None,
        password: None,
        profile_id: None,
    }
}

fn with_user(mut request: CreateEmployeeRequest, username: &str) -> CreateEmployeeRequest {
    request.create_user = true;
    request.username = Some(username.to_string());
    request.password = Some("employee-pass".to_string());
    request.profile_id = Some(1);
    request
}

async fn seed_profile(app_data: &business_security_backend::app_data::AppData) {
    app_data
        .profile_store
        .create(&app_data.db, "Administrator".to_string(), RecordStatus::Active)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_employee_with_linked_user() {
    let app_data = common::setup_app_data().await;
    seed_profile(&app_data).await;
    let employees = EmployeeCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let created = employees.create(&ctx, with_user(employee_request("555"), "ana")).await.unwrap();
    let detail = employees.get_with_user(created.employee_id).await.unwrap();

    assert!(detail.has_user);
    assert_eq!(detail.username.as_deref(), Some("ana"));
    assert_eq!(detail.user_status.as_deref(), Some("Active"));

    let auth = AuthCoordinator::new(app_data.clone());
    assert!(auth.login(&ctx, "ana", "employee-pass").await.is_ok());
}

#[tokio::test]
async fn test_create_user_flag_requires_credentials() {
    let app_data = common::setup_app_data().await;
    let employees = EmployeeCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let mut request = employee_request("556");
    request.create_user = true;
    request.username = Some("nopass".to_string());

    let err = employees.create(&ctx, request).await.unwrap_err();
    assert!(matches!(err, InternalError::Record(RecordError::InvalidReference(_))));
    assert!(employees.get_by_national_id("556").await.is_err());
}

#[tokio::test]
async fn test_duplicate_username_rolls_back_the_employee() {
    let app_data = common::setup_app_data().await;
    seed_profile(&app_data).await;
    common::create_user(&app_data, "taken", "whatever", None).await;
    let employees = EmployeeCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let err = employees
        .create(&ctx, with_user(employee_request("557"), "taken"))
        .await
        .unwrap_err();

    assert!(matches!(err, InternalError::Record(RecordError::Duplicate { .. })));
    assert!(matches!(
        employees.get_by_national_id("557").await.unwrap_err(),
        InternalError::Record(RecordError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_duplicate_national_id_is_rejected() {
    let app_data = common::setup_app_data().await;
    let employees = EmployeeCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    employees.create(&ctx, employee_request("558")).await.unwrap();
    let err = employees.create(&ctx, employee_request("558")).await.unwrap_err();

    assert!(matches!(err, InternalError::Record(RecordError::Duplicate { .. })));
}

#[tokio::test]
async fn test_status_change_and_deactivation_cascade_to_user() {
    let app_data = common::setup_app_data().await;
    seed_profile(&app_data).await;
    let employees = EmployeeCoordinator::new(app_data.clone());
    let auth = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let created = employees.create(&ctx, with_user(employee_request("559"), "beto")).await.unwrap();

    employees
        .update(
            &ctx,
            created.employee_id,
            UpdateEmployeeRequest {
                status_id: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let detail = employees.get_with_user(created.employee_id).await.unwrap();
    assert_eq!(detail.status_id, 2);
    assert_eq!(detail.user_status.as_deref(), Some("Inactive"));
    assert!(matches!(
        auth.login(&ctx, "beto", "employee-pass").await,
        Err(InternalError::Login(LoginError::Inactive))
    ));

    employees
        .update(
            &ctx,
            created.employee_id,
            UpdateEmployeeRequest {
                status_id: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(auth.login(&ctx, "beto", "employee-pass").await.is_ok());

    employees.deactivate(&ctx, created.employee_id).await.unwrap();
    let detail = employees.get_with_user(created.employee_id).await.unwrap();
    assert_eq!(detail.status_id, 2);
    assert_eq!(detail.user_status.as_deref(), Some("Inactive"));
}

#[tokio::test]
async fn test_unknown_status_id_is_rejected() {
    let app_data = common::setup_app_data().await;
    let employees = EmployeeCoordinator::new(app_data);
    let ctx = RequestContext::for_system("test");

    let mut request = employee_request("560");
    request.status_id = 42;

    let err = employees.create(&ctx, request).await.unwrap_err();
    assert!(matches!(err, InternalError::Record(RecordError::InvalidReference(_))));
}

#[tokio::test]
async fn test_assign_menus_replaces_the_set() {
    let app_data = common::setup_app_data().await;
    let profiles = ProfileCoordinator::new(app_data.clone());
    let menus = MenuCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let profile = profiles
        .create(
            &ctx,
            CreateProfileRequest {
                description: "Clerks".to_string(),
                status_id: 1,
            },
        )
        .await
        .unwrap();

    let mut ids = Vec::new();
    for (i, name) in ["Home", "Reports", "Archive"].into_iter().enumerate() {
        let created = menus
            .create(
                &ctx,
                CreateMenuRequest {
                    description: name.to_string(),
                    url: Some(format!("/{}", name.to_lowercase())),
                    parent_id: None,
                    level: 1,
                    sort_order: i as i32,
                    status_id: 1,
                },
            )
            .await
            .unwrap();
        ids.push(created.menu_id);
    }

    let message = profiles
        .assign_menus(&ctx, profile.profile_id, &[ids[0], ids[1], ids[1]])
        .await
        .unwrap();
    assert_eq!(message.message, "2 menus assigned to profile");

    let assigned = app_data.credential_store.assigned_menus(profile.profile_id).await.unwrap();
    assert_eq!(assigned.iter().map(|m| m.id).collect::<Vec<_>>(), vec![ids[0], ids[1]]);

    profiles.assign_menus(&ctx, profile.profile_id, &[ids[2]]).await.unwrap();
    let assigned = app_data.credential_store.assigned_menus(profile.profile_id).await.unwrap();
    assert_eq!(assigned.iter().map(|m| m.id).collect::<Vec<_>>(), vec![ids[2]]);
}

#[tokio::test]
async fn test_assign_unknown_menu_keeps_current_assignments() {
    let app_data = common::setup_app_data().await;
    let profiles = ProfileCoordinator::new(app_data.clone());
    let menus = MenuCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let profile = profiles
        .create(
            &ctx,
            CreateProfileRequest {
                description: "Guests".to_string(),
                status_id: 1,
            },
        )
        .await
        .unwrap();
    let menu = menus
        .create(
            &ctx,
            CreateMenuRequest {
                description: "Home".to_string(),
                url: None,
                parent_id: None,
                level: 1,
                sort_order: 1,
                status_id: 1,
            },
        )
        .await
        .unwrap();
    profiles.assign_menus(&ctx, profile.profile_id, &[menu.menu_id]).await.unwrap();

    let err = profiles
        .assign_menus(&ctx, profile.profile_id, &[menu.menu_id, 9999])
        .await
        .unwrap_err();
    match err {
        InternalError::Record(RecordError::InvalidReference(message)) => {
            assert_eq!(message, "Some menus do not exist");
        }
        other => panic!("Expected InvalidReference, got {:?}", other),
    }

    let assigned = app_data.credential_store.assigned_menus(profile.profile_id).await.unwrap();
    assert_eq!(assigned.len(), 1);
}

#[tokio::test]
async fn test_deleting_profile_removes_it_and_its_assignments() {
    let app_data = common::setup_app_data().await;
    let profiles = ProfileCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let profile = profiles
        .create(
            &ctx,
            CreateProfileRequest {
                description: "Temporary".to_string(),
                status_id: 1,
            },
        )
        .await
        .unwrap();

    profiles.delete(&ctx, profile.profile_id).await.unwrap();

    assert!(matches!(
        profiles.get(profile.profile_id).await.unwrap_err(),
        InternalError::Record(RecordError::NotFound { .. })
    ));
    assert!(app_data.credential_store.assigned_menus(profile.profile_id).await.unwrap().is_empty());
}
