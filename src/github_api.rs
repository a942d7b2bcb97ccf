/// Media type requesting version 3 of the GitHub REST API.
pub const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Configuration of the GitHub API client.
#[derive(serde::Deserialize)]
pub struct Config
{
	/// The base URL of the GitHub API server with a trailing slash (optional, default:
	/// <https://api.github.com/>).
	#[serde(default = "github_com_api_base_url")]
	pub(crate) base_url: url::Url,
	/// The user name used for basic authentication (optional, default: `clojj`).
	#[serde(default = "default_username")]
	pub(crate) username: String,
	/// Personal access token used as the basic authentication password. Can also be provided via
	/// the `APPLICATION_GITHUB_TOKEN` environment variable.
	#[serde(default)]
	pub(crate) token: String,
	/// Maximum time in milliseconds to wait for a connection to be established (optional,
	/// default: 5000).
	#[serde(default = "default_timeout_ms")]
	pub(crate) connect_timeout_ms: u64,
	/// Maximum time in milliseconds a single read from an established connection may take before
	/// the request fails (optional, default: 5000). Responses may take longer than this in total as
	/// long as data keeps arriving.
	#[serde(default = "default_timeout_ms")]
	pub(crate) read_timeout_ms: u64,
}

impl Config
{
	/// Whether an access token was configured at all.
	pub fn has_token(&self) -> bool
	{
		!self.token.is_empty()
	}
}

#[doc(hidden)]
fn github_com_api_base_url() -> url::Url
{
	url::Url::parse("https://api.github.com/")
		.expect("this call is infallible because we know the URL to be well-formed")
}

#[doc(hidden)]
fn default_username() -> String
{
	"clojj".to_string()
}

#[doc(hidden)]
fn default_timeout_ms() -> u64
{
	5000
}

/// A GitHub API client that authenticates with a static token using basic authentication.
///
/// All requests are made relative to the configured base URL. Connection attempts are aborted after
/// the configured connect timeout, and requests fail if the connection stays silent for longer
/// than the read timeout while awaiting or reading the response.
/// Failed requests are neither retried nor translated: transport errors are returned to the caller
/// as they are.
///
/// The client can be cloned cheaply and shared between request handlers, as clones share the same
/// configuration and connection pool.
#[derive(Clone)]
pub struct Client
{
	#[doc(hidden)]
	config: std::sync::Arc<Config>,
	#[doc(hidden)]
	reqwest_client: reqwest::Client,
}

/// Decoded body of a GitHub API response along with the headers needed for pagination.
#[derive(Debug)]
pub struct ApiResponse<R>
{
	/// The decoded response body.
	pub body: R,
	/// Raw value of the `Link` header, if GitHub sent one.
	pub link: Option<String>,
}

impl Client
{
	/// Initialize a new GitHub API client with a given configuration.
	pub fn from_config(config: Config) -> Result<Self, crate::Error>
	{
		let config = std::sync::Arc::new(config);

		// Every request to the GitHub API declares the v3 media type as its content type
		let mut default_headers = reqwest::header::HeaderMap::new();
		default_headers.insert(reqwest::header::CONTENT_TYPE,
			reqwest::header::HeaderValue::from_static(GITHUB_V3_MEDIA_TYPE));

		let reqwest_client = reqwest::ClientBuilder::new()
			// Set a recognizable user agent to get meaningful debugging information from GitHub
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.default_headers(default_headers)
			.connect_timeout(std::time::Duration::from_millis(config.connect_timeout_ms))
			.read_timeout(std::time::Duration::from_millis(config.read_timeout_ms))
			.build().map_err(crate::Error::CreateHttpClient)?;

		log::debug!("created GitHub API client for {} authenticating as “{}”", config.base_url,
			config.username);

		Ok(Self
		{
			config,
			reqwest_client,
		})
	}

	/// Make an HTTP GET request to the GitHub API and decode the JSON response body.
	///
	/// # Arguments
	/// - `endpoint`: The API endpoint (without host and leading slash, example: `user/starred`).
	pub async fn get<S, R>(&self, endpoint: S) -> Result<ApiResponse<R>, crate::Error>
	where
		S: AsRef<str>,
		R: serde::de::DeserializeOwned,
	{
		// Build the API endpoint URL from the base URL and the endpoint path
		let url = self.config.base_url.join(endpoint.as_ref()).map_err(crate::Error::ParseUrl)?;

		log::debug!("GET {url}");

		let response = self.reqwest_client.get(url)
			.basic_auth(&self.config.username, Some(&self.config.token))
			.header(reqwest::header::ACCEPT, "application/json")
			.send().await.map_err(crate::Error::MakeGitHubApiRequest)?;

		// A connection going silent while the body is read is a transport error just like one
		// going silent before the response arrives
		let map_body_error = |error: reqwest::Error| match error.is_timeout()
		{
			true => crate::Error::MakeGitHubApiRequest(error),
			false => crate::Error::ReadGitHubApiResponseBody(error),
		};

		let link = response.headers()
			.get(reqwest::header::LINK)
			.and_then(|value| value.to_str().ok())
			.map(str::to_owned);

		// Return an error for all non-success statuses, keeping the body for debugging purposes
		if !response.status().is_success()
		{
			let status_code = response.status();
			let url = response.url().to_owned();
			let response_body = response.text().await.map_err(map_body_error)?;

			return Err(crate::Error::ReceivedGitHubApiError{status_code, url, response_body});
		}

		let response_body = response.bytes().await.map_err(map_body_error)?;

		let body = serde_json::from_slice(&response_body)
			.map_err(crate::Error::DecodeGitHubApiResponseBody)?;

		Ok(ApiResponse{body, link})
	}
}
