use anyhow::Context;

use evently_infra::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    evently_observability::init();

    let config = Config::from_env();
    let app = evently_api::app::build_app(&config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        data_file = %config.data_file.display(),
        "listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
