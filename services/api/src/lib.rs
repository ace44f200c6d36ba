mod chat;
mod cli;
mod demo;
mod infra;
mod render;
mod routes;
mod server;

use lifecare_triage::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
