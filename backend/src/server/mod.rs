//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;
mod state_builders;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
pub(crate) use metrics::make_metrics;
pub use settings::load_settings;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use pmp_backend::Trace;
#[cfg(debug_assertions)]
use pmp_backend::doc::ApiDoc;
use pmp_backend::inbound::http::configure_api;
use pmp_backend::inbound::http::health::{HealthState, live, ready};
use pmp_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        db_pool: _,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use pmp_backend::domain::TRACE_ID_HEADER;
    use rstest::rstest;

    fn deps() -> AppDependencies {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("addr"));
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: build_http_state(&config),
        }
    }

    #[rstest]
    #[case("/health/ready")]
    #[case("/health/live")]
    #[case("/api/v1/users")]
    #[actix_web::test]
    async fn app_routes_respond_with_trace_header(#[case] uri: &str) {
        let app = test::init_service(build_app(deps())).await;
        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }

    #[actix_web::test]
    async fn unknown_property_is_not_found_through_full_app() {
        let app = test::init_service(build_app(deps())).await;
        let request = test::TestRequest::get()
            .uri("/api/v1/properties/3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn create_server_binds_ephemeral_port() {
        let health_state = web::Data::new(HealthState::new());
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("addr"));
        assert_eq!(config.bind_addr().port(), 0);

        let server = create_server(health_state.clone(), config).expect("server binds");
        assert!(health_state.is_ready());

        let handle = server.handle();
        actix_web::rt::spawn(server);
        handle.stop(false).await;
    }
}
