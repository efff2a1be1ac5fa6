use axum::{
    body::Body,
    extract::Request,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{auth, early_access, event, guest, health, public, rsvp, user};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/auth/login", post(auth::login))

        // Landing page
        .route("/api/early-access", post(early_access::submit_lead))

        // Public guest-facing site
        .route("/api/events", get(public::list_events))
        .route("/api/events/{slug}", get(public::get_event))
        .route("/api/events/{slug}/guest/{token}", get(public::get_guest))
        .route("/api/events/{slug}/guest/{token}/opened", post(public::mark_opened))
        .route("/api/events/{slug}/rsvp", post(public::submit_rsvp))
        .route("/api/events/{slug}/rsvp-status", get(public::rsvp_status))

        // Admin: events
        .route("/api/admin/events", post(event::create_event).get(event::list_events))
        .route(
            "/api/admin/events/{event}",
            get(event::get_event).patch(event::update_event).delete(event::delete_event),
        )
        .route("/api/admin/events/{event}/owner", patch(event::update_owner))
        .route("/api/admin/events/{event}/admins", post(event::assign_admin))

        // Admin: guests & RSVPs
        .route(
            "/api/admin/events/{event}/guests",
            get(guest::list_guests).post(guest::create_guest),
        )
        .route(
            "/api/admin/events/{event}/guests/{guest_id}",
            patch(guest::update_guest).delete(guest::delete_guest),
        )
        .route("/api/admin/events/{event}/rsvps", get(rsvp::list_rsvps))

        // Admin: users & leads
        .route("/api/admin/users", post(user::create_user))
        .route("/api/admin/early-access", get(early_access::list_leads))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
