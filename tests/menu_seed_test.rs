mod common;

use business_security_backend::cli::seed::{SeedSummary, seed_database};
use business_security_backend::coordinators::{AuthCoordinator, MenuCoordinator};
use business_security_backend::errors::internal::RecordError;
use business_security_backend::errors::InternalError;
use business_security_backend::types::dto::menu::{CreateMenuRequest, MenuTreeResponse, UpdateMenuRequest};
use business_security_backend::types::internal::context::RequestContext;
use poem_openapi::types::MaybeUndefined;

fn descriptions(nodes: &[MenuTreeResponse]) -> Vec<&str> {
    nodes.iter().map(|n| n.description.as_str()).collect()
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let app_data = common::setup_app_data().await;

    let first = seed_database(&app_data).await.unwrap();
    assert_eq!(
        first,
        SeedSummary {
            profiles: 3,
            menus: 9,
            employees: 2,
            users: 2,
        }
    );

    let second = seed_database(&app_data).await.unwrap();
    assert_eq!(second, SeedSummary::default());
}

#[tokio::test]
async fn test_administrator_sees_the_whole_menu_in_order() {
    let app_data = common::setup_app_data().await;
    seed_database(&app_data).await.unwrap();

    let auth = AuthCoordinator::new(app_data.clone());
    let menus = MenuCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let token = auth.login(&ctx, "admin", "admin123").await.unwrap();
    let account = auth.authenticate_bearer(&ctx, &token.access_token).await.unwrap();
    let tree = menus.tree_for(&ctx, &account).await.unwrap();

    assert_eq!(descriptions(&tree), vec!["Dashboard", "Seguridad", "RRHH", "Reportes"]);
    assert_eq!(descriptions(&tree[1].children), vec!["Usuarios", "Perfiles", "Menú"]);
    assert_eq!(descriptions(&tree[2].children), vec!["Empleados", "Departamentos"]);
    assert!(tree[0].children.is_empty());
}

#[tokio::test]
async fn test_child_without_assigned_parent_is_dropped() {
    let app_data = common::setup_app_data().await;
    seed_database(&app_data).await.unwrap();

    let auth = AuthCoordinator::new(app_data.clone());
    let menus = MenuCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    // The User profile holds Empleados but not its parent RRHH
    let token = auth.login(&ctx, "usuario", "usuario123").await.unwrap();
    let account = auth.authenticate_bearer(&ctx, &token.access_token).await.unwrap();
    let tree = menus.tree_for(&ctx, &account).await.unwrap();

    assert_eq!(descriptions(&tree), vec!["Dashboard", "Reportes"]);
}

#[tokio::test]
async fn test_inactive_menus_leave_the_tree_and_the_default_listing() {
    let app_data = common::setup_app_data().await;
    seed_database(&app_data).await.unwrap();

    let auth = AuthCoordinator::new(app_data.clone());
    let menus = MenuCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    menus
        .update(
            &ctx,
            2,
            UpdateMenuRequest {
                status_id: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let token = auth.login(&ctx, "admin", "admin123").await.unwrap();
    let account = auth.authenticate_bearer(&ctx, &token.access_token).await.unwrap();
    let tree = menus.tree_for(&ctx, &account).await.unwrap();
    assert_eq!(descriptions(&tree), vec!["Dashboard", "RRHH", "Reportes"]);

    assert_eq!(menus.list(false).await.unwrap().len(), 8);
    assert_eq!(menus.list(true).await.unwrap().len(), 9);
}

#[tokio::test]
async fn test_listing_orders_by_level_then_sort_order() {
    let app_data = common::setup_app_data().await;
    seed_database(&app_data).await.unwrap();
    let menus = MenuCoordinator::new(app_data.clone());

    let listing = menus.list(true).await.unwrap();
    let keys: Vec<(i32, i32)> = listing.iter().map(|m| (m.level, m.sort_order)).collect();
    let mut sorted = keys.clone();
    sorted.sort();

    assert_eq!(keys, sorted);
    assert_eq!(listing[0].description, "Dashboard");
    assert_eq!(listing[4].level, 2);
}

#[tokio::test]
async fn test_menu_create_update_and_delete() {
    let app_data = common::setup_app_data().await;
    let menus = MenuCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let parent = menus
        .create(
            &ctx,
            CreateMenuRequest {
                description: "Parent".to_string(),
                url: None,
                parent_id: None,
                level: 1,
                sort_order: 1,
                status_id: 1,
            },
        )
        .await
        .unwrap();
    let child = menus
        .create(
            &ctx,
            CreateMenuRequest {
                description: "Child".to_string(),
                url: Some("/child".to_string()),
                parent_id: Some(parent.menu_id),
                level: 2,
                sort_order: 1,
                status_id: 1,
            },
        )
        .await
        .unwrap();

    // null clears the url, an absent field leaves it alone
    let cleared = menus
        .update(
            &ctx,
            child.menu_id,
            UpdateMenuRequest {
                url: MaybeUndefined::Null,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.url, None);
    assert_eq!(cleared.parent_id, Some(parent.menu_id));

    let self_parent = menus
        .update(
            &ctx,
            child.menu_id,
            UpdateMenuRequest {
                parent_id: MaybeUndefined::Value(child.menu_id),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(self_parent, InternalError::Record(RecordError::InvalidReference(_))));

    menus.delete(&ctx, parent.menu_id).await.unwrap();

    let orphan = menus.get(child.menu_id).await.unwrap();
    assert_eq!(orphan.parent_id, None);
    assert!(matches!(
        menus.get(parent.menu_id).await.unwrap_err(),
        InternalError::Record(RecordError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_menu_with_unknown_parent_is_rejected() {
    let app_data = common::setup_app_data().await;
    let menus = MenuCoordinator::new(app_data);
    let ctx = RequestContext::for_system("test");

    let err = menus
        .create(
            &ctx,
            CreateMenuRequest {
                description: "Stray".to_string(),
                url: None,
                parent_id: Some(404),
                level: 2,
                sort_order: 1,
                status_id: 1,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, InternalError::Record(RecordError::InvalidReference(_))));
}
