/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;
pub mod rate_limit;
pub mod upload;

use axum::routing::{delete, get, patch, post};
use axum::{Router, middleware};
use app_core::types::ServerState;
use http::header::HeaderValue;
use http::{Method, header};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors_allow_origin = if state.cli.debug {
        AllowOrigin::list(vec![
            state
                .cli
                .serve_url
                .parse::<HeaderValue>()
                .expect("Invalid serve URL"),
            format!("http://{}:{}", state.cli.ip, state.cli.port)
                .parse::<HeaderValue>()
                .expect("Invalid listen address"),
        ])
    } else {
        AllowOrigin::exact(state.cli.serve_url.parse().expect("Invalid serve URL"))
    };

    let cors = CorsLayer::new()
        .allow_origin(cors_allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .allow_credentials(true);

    // The heavy create routes carry the fixed-window limiter.
    let rate_limited = Router::new()
        .route("/users", post(endpoints::users::post))
        .route("/users/{user}", patch(endpoints::users::patch_user))
        .route("/company", post(endpoints::companies::post))
        .route("/lowongan", post(endpoints::lowongan::post))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            rate_limit::rate_limit,
        ));

    let protected = Router::new()
        .route("/users", get(endpoints::users::get))
        .route(
            "/users/{user}",
            get(endpoints::users::get_user).delete(endpoints::users::delete_user),
        )
        .route(
            "/users/{user}/applications",
            get(endpoints::users::get_user_applications),
        )
        .route(
            "/users/{user}/enrollments",
            get(endpoints::users::get_user_enrollments),
        )
        .route(
            "/company/{company}",
            patch(endpoints::companies::patch_company)
                .delete(endpoints::companies::delete_company),
        )
        .route(
            "/lowongan/{lowongan}",
            patch(endpoints::lowongan::patch_lowongan)
                .delete(endpoints::lowongan::delete_lowongan),
        )
        .route(
            "/lowongan/{lowongan}/candidates",
            get(endpoints::lowongan::get_candidates),
        )
        .route(
            "/lowongan/{lowongan}/apply",
            post(endpoints::kandidat::post_apply),
        )
        .route("/kandidat", get(endpoints::kandidat::get))
        .route(
            "/kandidat/{kandidat}",
            delete(endpoints::kandidat::delete_kandidat),
        )
        .route(
            "/kandidat/{kandidat}/status",
            patch(endpoints::kandidat::patch_status),
        )
        .route("/kursus", post(endpoints::kursus::post))
        .route(
            "/kursus/{kursus}",
            patch(endpoints::kursus::patch_kursus).delete(endpoints::kursus::delete_kursus),
        )
        .route("/kursus/{kursus}/enroll", post(endpoints::kursus::post_enroll))
        .route(
            "/kursus/{kursus}/enrolled-detail",
            get(endpoints::kursus::get_enrolled_detail),
        )
        .route(
            "/kursus/{kursus}/enrollments",
            get(endpoints::enrollments::get_for_kursus),
        )
        .route(
            "/kursus/{kursus}/topics",
            get(endpoints::topics::get).post(endpoints::topics::post),
        )
        .route(
            "/kursus/{kursus}/topics/{topic}",
            get(endpoints::topics::get_topic)
                .patch(endpoints::topics::patch_topic)
                .delete(endpoints::topics::delete_topic),
        )
        .route(
            "/kursus/{kursus}/topics/{topic}/quiz",
            post(endpoints::topics::post_quiz),
        )
        .route("/quiz/{quiz}/take", get(endpoints::quiz::get_quiz))
        .route("/quiz/{quiz}/submit", post(endpoints::quiz::post_submit))
        .route("/quiz/{quiz}", delete(endpoints::quiz::delete_quiz))
        .route("/quiz/{quiz}/questions", post(endpoints::quiz::post_question))
        .route(
            "/question/{question}",
            patch(endpoints::questions::patch_question)
                .delete(endpoints::questions::delete_question),
        )
        .route("/enrollments/me", get(endpoints::enrollments::get_my))
        .route(
            "/enrollments/{enrollment}",
            delete(endpoints::enrollments::delete_enrollment),
        )
        .route("/certificates/me", get(endpoints::certificates::get_my))
        .route("/community", post(endpoints::communities::post))
        .route(
            "/community/{community}",
            patch(endpoints::communities::patch_community)
                .delete(endpoints::communities::delete_community),
        )
        .route("/forum", get(endpoints::forum::get).post(endpoints::forum::post))
        .route("/forum/{thread}", get(endpoints::forum::get_thread))
        .route("/forum/{thread}/reply", post(endpoints::forum::post_reply))
        .route("/category", post(endpoints::categories::post))
        .route(
            "/category/{category}",
            patch(endpoints::categories::patch_category)
                .delete(endpoints::categories::delete_category),
        )
        .merge(rate_limited)
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ));

    let public = Router::new()
        .route("/health", get(endpoints::get_health))
        .route("/auth/register", post(endpoints::auth::post_register))
        .route("/auth/login", post(endpoints::auth::post_login))
        .route("/company", get(endpoints::companies::get))
        .route("/company/{company}", get(endpoints::companies::get_company))
        .route("/lowongan", get(endpoints::lowongan::get))
        .route("/lowongan/{lowongan}", get(endpoints::lowongan::get_lowongan))
        .route("/kursus", get(endpoints::kursus::get))
        .route("/kursus/{kursus}", get(endpoints::kursus::get_kursus))
        .route("/community", get(endpoints::communities::get))
        .route(
            "/community/{community}",
            get(endpoints::communities::get_community),
        )
        .route("/category", get(endpoints::categories::get))
        .route("/category/{category}", get(endpoints::categories::get_category))
        .route(
            "/certificates/{certificate}",
            get(endpoints::certificates::get_certificate),
        );

    Router::new()
        .merge(protected)
        .merge(public)
        .fallback(endpoints::handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}
