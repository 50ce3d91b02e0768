//! footy API server entry point.

use std::sync::Arc;

use footy_api::config::ApiConfig;
use footy_api::db::connect_and_migrate;
use footy_api::repo::countries::CountryRepo;
use footy_api::repo::seasons::SeasonRepo;
use footy_api::router::{build_router, AppState};
use footy_upstream::client::HttpSportsClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ApiConfig::from_env()?;
    let pool = connect_and_migrate(&config.database_url()).await?;
    let state = AppState {
        countries: CountryRepo::new(pool.clone()),
        seasons: SeasonRepo::new(pool),
        sports: Arc::new(HttpSportsClient::new(
            &config.as_base_url,
            &config.as_key,
            &config.as_host,
        )),
    };
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    log::info!("listening on {}", config.bind_addr());
    axum::serve(listener, app).await?;
    Ok(())
}
