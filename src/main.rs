use stream_manager::config::get_configuration;
use stream_manager::startup::Application;
use stream_manager::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(String::from("stream_manager"), String::from("info"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");
    let application = Application::build(config.clone())
        .await
        .expect("Failed to build application.");

    tracing::info!("Server listening on {}", config.get_address());

    application.run_until_stop().await
}
