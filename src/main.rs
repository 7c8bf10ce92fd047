use anyhow::Context;

use todos::configuration::get_configuration;
use todos::startup::Application;
use todos::telemetry::{get_subscriber, initialize_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("todos".into(), "info".into(), std::io::stdout);
    initialize_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration")?;
    let application = Application::build(&configuration)
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}",
                configuration.application.address()
            )
        })?;

    application
        .run_until_stopped()
        .await
        .context("Server stopped unexpectedly")
}
