use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use edupal_server::{app_state::AppState, config::Config, db::Database, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let db = Database::connect(&config)
        .await
        .expect("failed to connect to MongoDB");
    let state = AppState::new(config, &db)
        .await
        .expect("failed to initialize application state");

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(state.jwt_service.clone()))
            .app_data(web::Data::new(db.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::generate_study_material)
            .service(handlers::submit_quiz_score)
            .service(handlers::list_quiz_scores)
            .service(handlers::health_check)
    })
    .bind((host, port))?
    .run()
    .await
}
