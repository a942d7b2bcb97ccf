#[cfg(test)]
#[macro_use]
mod test_support;

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod error;
pub mod github_api;
#[doc(hidden)]
mod models;
pub mod pagination;
#[doc(hidden)]
mod routes;

pub use config::Config;
pub use error::Error;
pub use models::*;

/// Path of the configuration file used if none is passed as the first argument.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()>
{
	pretty_env_logger::init();

	// Read the config file
	let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
	let config = Config::from_file(&config_path)?;

	log::info!("read configuration from “{config_path}”");

	if !config.github_api.has_token()
	{
		log::warn!("no GitHub token configured, requests to the GitHub API will likely be \
			rejected (set it in the config file or via {})", config::GITHUB_TOKEN_ENV_VAR);
	}

	// Initialize a new GitHub API client authenticating with the configured token
	let github_api_client = github_api::Client::from_config(config.github_api)?;

	let routes = routes::routes(github_api_client);

	log::info!("listening for incoming requests on {}", config.listen_address);
	warp::serve(routes).run(config.listen_address).await;

	Ok(())
}
