//! Panel entry point: load settings, prepare the database, serve.

use std::net::SocketAddr;

use anyhow::Context as _;
use rampart::{build_router, configure_admin, migrations, Settings};
use rampart_admin::AdminDatabase;
use rampart_auth::Argon2Hasher;
use rampart_db::DatabaseConnection;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let settings = Settings::load().context("loading settings")?;
	let addr: SocketAddr = settings
		.bind_addr
		.parse()
		.with_context(|| format!("invalid bind address {}", settings.bind_addr))?;

	let connection = DatabaseConnection::connect(&settings.database_url)
		.await
		.with_context(|| format!("opening {}", settings.database_url))?;
	let db = AdminDatabase::new(connection);
	migrations::apply(&db).await.context("applying schema")?;
	migrations::seed(&db, &Argon2Hasher)
		.await
		.context("seeding first-boot data")?;

	let site = configure_admin(&settings.site_title)?;
	let router = build_router(&settings, site, db);

	info!(%addr, title = %settings.site_title, "admin panel listening");
	rampart_http::serve(addr, router).await?;
	Ok(())
}
