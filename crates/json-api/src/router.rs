//! App Router

use salvo::Router;

use crate::{auth, inventory, products, reports};

/// Authenticated API routes.
pub fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(Router::with_path("stock_in").post(inventory::stock_in::handler))
                        .push(Router::with_path("stock_out").post(inventory::stock_out::handler))
                        .push(
                            Router::with_path("transactions")
                                .get(inventory::transactions::handler),
                        ),
                ),
        )
        .push(Router::with_path("dashboard").get(reports::dashboard::handler))
        .push(
            Router::with_path("reports")
                .push(Router::with_path("daily_report").get(reports::daily::handler))
                .push(Router::with_path("monthly_report").get(reports::monthly::handler)),
        )
}
