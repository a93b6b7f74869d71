use std::time::Duration;

use actix_web::http::{header, StatusCode};
use actix_web::{test, App};
use serde_json::{json, Value};

use ventureforge::api::AppState;
use ventureforge::config::Config;
use ventureforge::configure;
use ventureforge::simulator::{IncrementStrategy, SimulationSettings};

fn state() -> AppState {
    let config = Config {
        sign_in_delay: Duration::ZERO,
        search_delay: Duration::ZERO,
        chat_reply_delay: Duration::ZERO,
        ..Config::default()
    };
    // Long period: no tick lands while a test runs
    let settings = SimulationSettings {
        tick_interval: Duration::from_secs(3600),
        increments: IncrementStrategy::Fixed(17.0),
    };
    AppState::with_simulation(config, settings)
}

macro_rules! app {
    () => {
        test::init_service(App::new().configure(configure(state()))).await
    };
}

macro_rules! sign_in {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/sign-in")
            .set_json(json!({ "email": $email, "password": "secret" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        format!("Bearer {}", body["token"].as_str().expect("token"))
    }};
}

#[actix_web::test]
async fn liveness_and_health_report_ok() {
    let app = app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/live").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["jobs"], 3);
    assert_eq!(body["active_simulations"], 0);
}

#[actix_web::test]
async fn sign_in_returns_a_token_for_the_default_user() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/auth/sign-in")
        .set_json(json!({ "email": "founder@example.com", "password": "secret" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["user"]["name"], "John Doe");
    assert_eq!(body["user"]["email"], "founder@example.com");
    assert_eq!(body["user"]["is_admin"], false);

    let token = format!("Bearer {}", body["token"].as_str().expect("token"));
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header((header::AUTHORIZATION, token.clone()))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["email"], "founder@example.com");

    let req = test::TestRequest::post()
        .uri("/api/auth/sign-out")
        .insert_header((header::AUTHORIZATION, token.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header((header::AUTHORIZATION, token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn sign_in_accepts_any_non_blank_email() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/auth/sign-in")
        .set_json(json!({ "email": "founder", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "founder");

    let req = test::TestRequest::post()
        .uri("/api/auth/sign-in")
        .set_json(json!({ "email": "", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["fields"]["email"]["errors"].is_array());

    // Whitespace passes the length check and is rejected by the sign-in itself
    let req = test::TestRequest::post()
        .uri("/api/auth/sign-in")
        .set_json(json!({ "email": "   ", "password": "secret" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn admin_overview_is_gated_on_the_admin_email() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/admin/overview").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let user = sign_in!(app, "founder@example.com");
    let req = test::TestRequest::get()
        .uri("/api/admin/overview")
        .insert_header((header::AUTHORIZATION, user))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let admin = sign_in!(app, "admin@ventureforge.com");
    let req = test::TestRequest::get()
        .uri("/api/admin/overview")
        .insert_header((header::AUTHORIZATION, admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["stats"]["total_users"], 12847);
    assert!(body["recent_users"].as_array().is_some_and(|u| !u.is_empty()));
}

#[actix_web::test]
async fn navigation_redirects_anonymous_callers_to_landing() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/views/navigate")
        .set_json(json!({ "view": "dashboard", "section": "research" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["requested"]["view"], "dashboard");
    assert_eq!(body["shown"]["view"], "landing");

    let user = sign_in!(app, "founder@example.com");
    let req = test::TestRequest::post()
        .uri("/api/views/navigate")
        .insert_header((header::AUTHORIZATION, user))
        .set_json(json!({ "view": "admin" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["shown"]["view"], "landing");
}

#[actix_web::test]
async fn starting_a_job_twice_conflicts() {
    let app = app!();
    let user = sign_in!(app, "founder@example.com");

    let req = test::TestRequest::post().uri("/api/jobs/3/start").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/jobs/3/start")
        .insert_header((header::AUTHORIZATION, user.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["job"]["status"], "ANALYZING");
    assert_eq!(body["job"]["progress"], 0);
    assert_eq!(body["job"]["run_state"], "running");

    let req = test::TestRequest::post()
        .uri("/api/jobs/3/start")
        .insert_header((header::AUTHORIZATION, user.clone()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/api/jobs").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["active_simulations"], 1);

    let req = test::TestRequest::post()
        .uri("/api/jobs/3/cancel")
        .insert_header((header::AUTHORIZATION, user))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["job"]["run_state"], "cancelled");
}

#[actix_web::test]
async fn unknown_job_is_not_found() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/jobs/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not found");
}

#[actix_web::test]
async fn project_creation_validates_the_draft() {
    let app = app!();
    let user = sign_in!(app, "founder@example.com");

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header((header::AUTHORIZATION, user.clone()))
        .set_json(json!({
            "title": "AI",
            "description": "short",
            "industry": "",
            "target_market": "",
            "budget": "",
            "timeline": ""
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["fields"]["title"]["errors"].is_array());

    // Passes the length checks, fails once trimmed
    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header((header::AUTHORIZATION, user.clone()))
        .set_json(json!({
            "title": "     ",
            "description": "REMOTE VET VISITS FOR RURAL PET OWNERS",
            "industry": "HEALTH",
            "target_market": "RURAL",
            "budget": "$10K",
            "timeline": "6 MONTHS"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .insert_header((header::AUTHORIZATION, user))
        .set_json(json!({
            "title": "pet telehealth",
            "description": "Remote vet visits for rural pet owners",
            "industry": "HEALTH",
            "target_market": "RURAL",
            "budget": "$10K",
            "timeline": "6 MONTHS"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["job"]["id"], "4");
    assert_eq!(body["job"]["title"], "PET TELEHEALTH");
    assert_eq!(body["job"]["status"], "PENDING");
}

#[actix_web::test]
async fn fixtures_and_discovery_are_served() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/fixtures/trends").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().is_some_and(|t| !t.is_empty()));

    let req = test::TestRequest::get().uri("/api/fixtures/unicorns").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/problems/discover?q=zzzz").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn chat_replies_with_the_canned_answer() {
    let app = app!();
    let user = sign_in!(app, "founder@example.com");

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .insert_header((header::AUTHORIZATION, user.clone()))
        .set_json(json!({ "message": "how big is the market?" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let new_messages = body["new_messages"].as_array().expect("messages");
    assert_eq!(new_messages.len(), 2);
    assert_eq!(new_messages[0]["author"], "user");
    assert_eq!(new_messages[1]["author"], "ai");

    let req = test::TestRequest::get()
        .uri("/api/chat")
        .insert_header((header::AUTHORIZATION, user))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    // Greeting plus the exchange above
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(3));
}

#[actix_web::test]
async fn results_are_served_only_for_completed_jobs() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/jobs/2/results").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["job"]["id"], "2");
    assert_eq!(body["results"]["success_metrics"]["success_probability"], 65);

    let req = test::TestRequest::get().uri("/api/jobs/3/results").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/jobs/99/results").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn dashboard_stats_count_the_board() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/dashboard/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "total_jobs": 3, "active_jobs": 1, "completed_jobs": 1, "avg_success_rate": 75 })
    );
}

fn research_plan(frequency: &str, depth: u8) -> Value {
    json!({
        "idea_description": "AI triage for rural vet clinics",
        "frequency": frequency,
        "research_depth": depth,
        "modules": { "validation": true, "solutions": true, "infrastructure": false },
        "workflow": [{ "id": "1", "title": "Idea Validation", "requires_review": true }],
        "additional_context": ""
    })
}

#[actix_web::test]
async fn research_plan_reports_its_schedule() {
    let app = app!();
    let user = sign_in!(app, "founder@example.com");

    let req = test::TestRequest::post()
        .uri("/api/projects/research-plan")
        .insert_header((header::AUTHORIZATION, user.clone()))
        .set_json(research_plan("weekly", 80))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["depth_label"], "Expert");
    assert!(body["next_run"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/projects/research-plan")
        .insert_header((header::AUTHORIZATION, user))
        .set_json(research_plan("one-off", 10))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["depth_label"], "Quick");
    assert!(body["next_run"].is_null());
}

#[actix_web::test]
async fn malformed_research_plan_gets_the_json_error_body() {
    let app = app!();
    let user = sign_in!(app, "founder@example.com");

    let req = test::TestRequest::post()
        .uri("/api/projects/research-plan")
        .insert_header((header::AUTHORIZATION, user.clone()))
        .set_json(json!({ "idea_description": "missing everything else" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Request validation failed");

    let req = test::TestRequest::post()
        .uri("/api/projects/research-plan")
        .insert_header((header::AUTHORIZATION, user))
        .set_json(research_plan("daily", 150))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["fields"]["research_depth"]["errors"].is_array());
}
