use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::config::{DatabaseSettings, Settings};
use crate::repository::SubscriberRepository;
use crate::routes::{
    api_root, handle_create_subscriber, handle_delete_subscriber, handle_get_subscriber,
    handle_get_stats, handle_list_services, handle_list_subscribers, handle_send_message,
    handle_update_subscriber, health_check,
};
use crate::storage::{PgMessageLogStore, PgSubscriberStore};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let db_pool = get_connection_db_pool(&config.database);

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .expect("Failed to run migrations.");

        let repository = build_repository(db_pool);

        let listener =
            TcpListener::bind(config.get_address()).expect("Failed to bind the address.");
        let port = listener.local_addr().unwrap().port();
        let server = run(listener, repository)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    repository: SubscriberRepository,
) -> Result<Server, std::io::Error> {
    let repository = web::Data::new(repository);

    let server = HttpServer::new(move || {
        // App is where your application logic lives: routing, middlewares, request handler, etc
        App::new()
            // 'wrap' method adds a middleware to the App. This specific middleware provide incoming
            // request logger
            .wrap(TracingLogger::default())
            // The dashboard frontend is served from a different origin
            .wrap(Cors::permissive())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/", web::get().to(api_root))
                    .route("/subscribers", web::get().to(handle_list_subscribers))
                    .route("/subscribers", web::post().to(handle_create_subscriber))
                    .route(
                        "/subscribers/{subscriber_id}",
                        web::get().to(handle_get_subscriber),
                    )
                    .route(
                        "/subscribers/{subscriber_id}",
                        web::put().to(handle_update_subscriber),
                    )
                    .route(
                        "/subscribers/{subscriber_id}",
                        web::delete().to(handle_delete_subscriber),
                    )
                    .route("/stats", web::get().to(handle_get_stats))
                    .route("/send-message", web::post().to(handle_send_message))
                    .route("/services", web::get().to(handle_list_services)),
            )
            .app_data(repository.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub fn build_repository(db_pool: PgPool) -> SubscriberRepository {
    SubscriberRepository::new(
        Arc::new(PgSubscriberStore::new(db_pool.clone())),
        Arc::new(PgMessageLogStore::new(db_pool)),
    )
}

pub fn get_connection_db_pool(config: &DatabaseSettings) -> Pool<Postgres> {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(config.get_db_options())
}
