//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod envelope;
pub mod error;
pub mod health;
pub mod properties;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;

/// Register the API handlers and request extractor configuration.
///
/// Mount under `/api/v1`. `/users/paginated` is registered ahead of
/// `/users/{id}` so the literal segment wins.
///
/// ```
/// use actix_web::{App, web};
/// use pmp_backend::inbound::http::configure_api;
///
/// let app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(validation::query_error_handler))
        .service(users::save_user)
        .service(users::get_all_users)
        .service(users::get_all_users_paginated)
        .service(users::get_user_by_id)
        .service(properties::save_property)
        .service(properties::find_all)
        .service(properties::get_property_by_id);
}
