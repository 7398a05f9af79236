use std::sync::Arc;

use db::{Store, models::student::UserRole};
use server::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(Store::new());
    db::seed::load(&store);

    let state = AppState::new(store.clone());

    // Registration generates a payment plan per student; do the same for the
    // seeded ones.
    for student in store.list_students() {
        if student.role == UserRole::Student {
            state.billing().generate_yearly_plan(student.id)?;
        }
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, server::app(state)).await?;
    Ok(())
}
