/// Environment variable that takes precedence over the GitHub token in the configuration file.
pub const GITHUB_TOKEN_ENV_VAR: &str = "APPLICATION_GITHUB_TOKEN";

#[derive(serde::Deserialize)]
/// Top-level configuration of this application.
pub struct Config
{
	/// Address and port to listen on for incoming requests (optional, default: `127.0.0.1:8080`).
	#[serde(default = "default_listen_address")]
	pub listen_address: std::net::SocketAddr,
	/// Configuration options specific to the GitHub API and authentication.
	pub github_api: crate::github_api::Config,
}

#[doc(hidden)]
fn default_listen_address() -> std::net::SocketAddr
{
	([127, 0, 0, 1], 8080).into()
}

impl Config
{
	/// Attempt to read and parse the configuration from a YAML file.
	///
	/// The GitHub token is replaced with the value of [GITHUB_TOKEN_ENV_VAR] if that variable is
	/// set and not empty.
	///
	/// # Arguments
	/// `path`: Path to the configuration file in YAML format.
	pub fn from_file<P>(path: P) -> Result<Self, crate::Error>
	where
		P: AsRef<std::path::Path>
	{
		let file = std::fs::File::open(&path).map_err(crate::Error::ReadConfigFile)?;
		let config: Self = serde_yaml::from_reader(&file).map_err(crate::Error::ParseConfigFile)?;

		Ok(config.with_token_override(std::env::var(GITHUB_TOKEN_ENV_VAR).ok()))
	}

	/// Replace the configured GitHub token if a non-empty override is given.
	fn with_token_override(mut self, token: Option<String>) -> Self
	{
		if let Some(token) = token.filter(|token| !token.is_empty())
		{
			log::debug!("using GitHub token from environment variable {GITHUB_TOKEN_ENV_VAR}");
			self.github_api.token = token;
		}

		self
	}
}
