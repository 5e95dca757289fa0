// Demo data for a fresh database
//
// Every step skips rows that already exist, so running `seed` twice leaves
// the database unchanged.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::app_data::AppData;
use crate::coordinators::{begin, commit};
use crate::errors::InternalError;
use crate::stores::{NewEmployee, NewUser};
use crate::types::db::{RecordStatus, menu, profile, user};

const PROFILES: [(i32, &str); 3] = [(1, "Administrator"), (2, "User"), (3, "Supervisor")];

struct SeedMenu {
    id: i32,
    description: &'static str,
    url: Option<&'static str>,
    parent_id: Option<i32>,
    level: i32,
    sort_order: i32,
}

const MENUS: [SeedMenu; 9] = [
    SeedMenu { id: 1, description: "Dashboard", url: Some("/dashboard"), parent_id: None, level: 1, sort_order: 1 },
    SeedMenu { id: 2, description: "Seguridad", url: None, parent_id: None, level: 1, sort_order: 2 },
    SeedMenu { id: 3, description: "RRHH", url: None, parent_id: None, level: 1, sort_order: 3 },
    SeedMenu { id: 4, description: "Reportes", url: Some("/reportes"), parent_id: None, level: 1, sort_order: 4 },
    SeedMenu { id: 5, description: "Usuarios", url: Some("/seguridad/usuarios"), parent_id: Some(2), level: 2, sort_order: 1 },
    SeedMenu { id: 6, description: "Perfiles", url: Some("/seguridad/perfiles"), parent_id: Some(2), level: 2, sort_order: 2 },
    SeedMenu { id: 7, description: "Menú", url: Some("/seguridad/menu"), parent_id: Some(2), level: 2, sort_order: 3 },
    SeedMenu { id: 8, description: "Empleados", url: Some("/rrhh/empleados"), parent_id: Some(3), level: 2, sort_order: 1 },
    SeedMenu { id: 9, description: "Departamentos", url: Some("/rrhh/departamentos"), parent_id: Some(3), level: 2, sort_order: 2 },
];

/// Dashboard, Reportes and Empleados
const USER_PROFILE_MENUS: [i32; 3] = [1, 4, 8];

struct SeedEmployee {
    name: &'static str,
    national_id: &'static str,
    phone: &'static str,
    mobile: &'static str,
}

const EMPLOYEES: [SeedEmployee; 2] = [
    SeedEmployee { name: "Juan Pérez", national_id: "1234567", phone: "021-123456", mobile: "0981-123456" },
    SeedEmployee { name: "María González", national_id: "7654321", phone: "021-654321", mobile: "0981-654321" },
];

/// (username, password, profile id, employee national id)
const USERS: [(&str, &str, i32, &str); 2] = [
    ("admin", "admin123", 1, "1234567"),
    ("usuario", "usuario123", 2, "7654321"),
];

/// Rows inserted by one seed run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub profiles: usize,
    pub menus: usize,
    pub employees: usize,
    pub users: usize,
}

/// Populate profiles, the demo menu, profile assignments, employees and users
pub async fn seed_database(app_data: &AppData) -> Result<SeedSummary, InternalError> {
    tracing::info!("Seeding database");

    // Hash outside the transaction; only for accounts that will be inserted
    let mut pending_users = Vec::new();
    for (username, password, profile_id, national_id) in USERS {
        if find_user(&app_data.db, username).await?.is_none() {
            let password_hash = app_data.hasher.hash(password).await?;
            pending_users.push((username, password_hash, profile_id, national_id));
        }
    }

    let txn = begin(&app_data.db).await?;
    let mut summary = SeedSummary::default();
    let now = Utc::now().timestamp();

    for (id, description) in PROFILES {
        let exists = profile::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("seed_find_profile", e))?
            .is_some();
        if !exists {
            profile::ActiveModel {
                id: Set(id),
                description: Set(description.to_string()),
                status_id: Set(RecordStatus::Active),
                created_at: Set(now),
            }
            .insert(&txn)
            .await
            .map_err(|e| InternalError::database("seed_profile", e))?;
            println!("✅ Profile created: {}", description);
            summary.profiles += 1;
        }
    }

    for entry in &MENUS {
        let exists = menu::Entity::find_by_id(entry.id)
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("seed_find_menu", e))?
            .is_some();
        if !exists {
            menu::ActiveModel {
                id: Set(entry.id),
                description: Set(entry.description.to_string()),
                url: Set(entry.url.map(str::to_string)),
                parent_id: Set(entry.parent_id),
                level: Set(entry.level),
                sort_order: Set(entry.sort_order),
                status_id: Set(RecordStatus::Active),
                created_at: Set(now),
            }
            .insert(&txn)
            .await
            .map_err(|e| InternalError::database("seed_menu", e))?;
            println!("✅ Menu created: {}", entry.description);
            summary.menus += 1;
        }
    }

    let all_menus: Vec<i32> = menu::Entity::find()
        .all(&txn)
        .await
        .map_err(|e| InternalError::database("seed_list_menus", e))?
        .into_iter()
        .map(|m| m.id)
        .collect();
    let assigned = app_data.profile_store.assign_menus(&txn, 1, &all_menus).await?;
    println!("✅ {} menus assigned to Administrator", assigned);
    let assigned = app_data.profile_store.assign_menus(&txn, 2, &USER_PROFILE_MENUS).await?;
    println!("✅ {} menus assigned to User", assigned);

    for entry in &EMPLOYEES {
        let existing = app_data.employee_store.find_by_national_id(&txn, entry.national_id).await?;
        if existing.is_none() {
            app_data
                .employee_store
                .create(
                    &txn,
                    NewEmployee {
                        name: entry.name.to_string(),
                        national_id: entry.national_id.to_string(),
                        phone: Some(entry.phone.to_string()),
                        mobile: Some(entry.mobile.to_string()),
                        address: Some("Asunción".to_string()),
                        nationality: Some("Paraguaya".to_string()),
                        status: RecordStatus::Active,
                    },
                )
                .await?;
            println!("✅ Employee created: {}", entry.name);
            summary.employees += 1;
        }
    }

    for (username, password_hash, profile_id, national_id) in pending_users {
        let employee_id = app_data
            .employee_store
            .find_by_national_id(&txn, national_id)
            .await?
            .map(|e| e.id);
        app_data
            .user_store
            .create(
                &txn,
                NewUser {
                    username: username.to_string(),
                    password_hash,
                    profile_id: Some(profile_id),
                    status: RecordStatus::Active,
                    employee_id,
                },
            )
            .await?;
        println!("✅ User created: {}", username);
        summary.users += 1;
    }

    commit(txn).await?;

    tracing::info!(
        profiles = summary.profiles,
        menus = summary.menus,
        employees = summary.employees,
        users = summary.users,
        "Seed completed"
    );
    println!("\nDemo accounts:");
    println!("   - admin / admin123 (Administrator)");
    println!("   - usuario / usuario123 (User)");

    Ok(summary)
}

async fn find_user(conn: &impl ConnectionTrait, username: &str) -> Result<Option<user::Model>, InternalError> {
    user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(conn)
        .await
        .map_err(|e| InternalError::database("seed_find_user", e))
}
