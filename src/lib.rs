//! VentureForge: a mock startup-validation service.
//!
//! Every payload is fixture data. The one stateful piece is the research
//! simulator, which walks a job from 0 to 100% on a recurring timer and
//! emits milestone and completion toasts along the way.
pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod fixtures;
pub mod logging;
pub mod shutdown;
pub mod simulator;
pub mod store;
pub mod views;
pub mod wizard;

use actix_web::web;

use crate::api::{job::JobService, validation, AppState};

/// Register shared state and every route on an actix `App`
///
/// Used by the server and by the integration tests so both see the same routing.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let payload_config = web::PayloadConfig::default().limit(state.config.max_payload_size);
        let job_service = JobService::new(state.simulations.clone());

        cfg.app_data(payload_config)
            .app_data(validation::json_config())
            .app_data(web::Data::new(job_service))
            .app_data(web::Data::new(state))
            .configure(api::health::health_config)
            .configure(api::api_config);
    }
}
