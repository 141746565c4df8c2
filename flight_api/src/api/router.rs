use crate::api::handlers::flights::lookup_flights;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn router() -> Router<AppState> {
    Router::<AppState>::new().route("/flights", get(lookup_flights))
}
