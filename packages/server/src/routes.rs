use utoipa_axum::router::OpenApiRouter;

use crate::handlers;
use crate::state::AppState;

/// Everything served under `/api`.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/v1", v1_routes())
}

fn v1_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/service-jobs", handlers::service_job::routes())
        .nest("/purchases", handlers::purchase::routes())
        .nest("/sales", handlers::sale::routes())
        .nest("/quotations", handlers::quotation::routes())
}
