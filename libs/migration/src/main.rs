//! Operator CLI for the customers schema.
//!
//! Reads `DATABASE_URL`; run `migration up`, `migration status` or `migration down`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
