use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use coding_party::api::{AppState, configure_routes};
use coding_party::assets::configure_assets;
use coding_party::banner;
use coding_party::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Make sure PARTY_API_URL is set in your environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let bind = (app_config.host.clone(), app_config.port);
    let state = AppState::new(app_config);

    println!("🚀 Starting server...");
    println!("📊 Page available at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .configure(configure_assets)
    })
    .bind(bind)?
    .run()
    .await
}
