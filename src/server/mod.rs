mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::API;
use crate::server::handlers::{bookings, quotes};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router(api: DynAPI) -> Router {
    let booking_routes = Router::new()
        .route("/create-booking", post(bookings::create))
        .route("/update-booking", put(bookings::select_car))
        .route("/get-invoice-details", get(bookings::invoice_details))
        .route("/update-invoice-details", post(bookings::finalize_invoice))
        .route("/get-all-car-prices", get(quotes::all_car_prices))
        .route("/getBaseAmount", get(quotes::base_amount));

    Router::new()
        .nest("/api/booking", booking_routes)
        .layer(Extension(api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve<T: API + Sync + Send + 'static>(
    api: T,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = router(Arc::new(api));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
