//! Terminal client entry point.
use anyhow::Result;

use client_frontend_cli::{CliConfig, CliFrontend, logging};
use client_frontend_core::{FrontendConfig, ServerEndpoint, link};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; silently skip otherwise.
    let _ = dotenvy::dotenv();

    let cli_config = CliConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let _logging = logging::init(&cli_config)?;

    let (server_link, endpoint) = link::channel(frontend_config.command_buffer);

    // The socket glue owns the endpoint. A standalone run has no glue, so
    // requests are drained into the log and the UI stays on the connect
    // screen until a server shows up.
    let glue = tokio::spawn(drain_endpoint(endpoint));

    let result = CliFrontend::new(frontend_config, cli_config)
        .run(server_link)
        .await;

    glue.abort();
    result
}

async fn drain_endpoint(mut endpoint: ServerEndpoint) {
    while let Some(request) = endpoint.next_request().await {
        tracing::debug!(?request, "request while no server is attached");
    }
}
