//! Repository health probing.
//!
//! Connection pooling lives in the storage adapter; the kernel only needs
//! a liveness signal for the readiness endpoint at the edge.

use crate::repository::QueryRepository;
use crate::services::USER_MODEL;

/// Check whether the repository behind the kernel is reachable.
///
/// Issues an unfiltered count against the user collection. Never panics
/// and never propagates: a failing repository is simply unhealthy.
pub async fn check_health(repository: &dyn QueryRepository) -> bool {
    match repository.count(USER_MODEL, None).await {
        Ok(_) => true,
        Err(error) => {
            tracing::error!(%error, "repository health check failed");
            false
        }
    }
}
