use std::sync::Arc;

use crate::app_data::AppData;
use crate::coordinators::AuthCoordinator;
use crate::types::internal::context::RequestContext;

/// Unlock an account from the command line
pub async fn reset_attempts(app_data: Arc<AppData>, user_id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::for_cli("reset_attempts");
    let coordinator = AuthCoordinator::new(app_data);

    match coordinator.reset_attempts(&ctx, user_id).await {
        Ok(()) => {
            println!("✅ Login attempts reset for user {}", user_id);
            Ok(())
        }
        Err(e) => {
            println!("❌ Error: {}", e);
            Err(e.into())
        }
    }
}
