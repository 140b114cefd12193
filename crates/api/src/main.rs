use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = opsuite_api::config::ApiConfig::from_env()?;
    opsuite_observability::init(config.log_format);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    let app = opsuite_api::app::build_app(config);
    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
