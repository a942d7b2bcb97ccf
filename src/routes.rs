use warp::Filter as _;

/// Body of the placeholder route.
pub const PLACEHOLDER_RESULT: &str = "TODO functional style";

/// All routes served by this application, including the handling of rejected requests.
///
/// Routes are tried in the order listed here, the first one matching a request handles it:
/// 1. `GET /astronomy/firstpage`: the user’s starred repositories as name–description pairs
/// 2. `GET /experimental/test`: a static placeholder
///
/// # Arguments
/// - `github_api_client`: The GitHub API client used for all upstream requests.
pub fn routes(github_api_client: crate::github_api::Client)
	-> impl warp::Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone
{
	let first_page_route = warp::path!("astronomy" / "firstpage")
		.and(warp::get())
		// Relay a handle to the client
		.and(warp::any().map(move || github_api_client.clone()))
		.and_then(handle_first_page);

	let placeholder_route = warp::path!("experimental" / "test")
		.and(warp::get())
		.map(handle_placeholder);

	first_page_route
		.or(placeholder_route)
		.recover(handle_rejection)
}

/// Request handler listing the first page of repositories starred by the authenticated user.
///
/// # Arguments
/// - `github_api_client`: A handle to the GitHub API client.
async fn handle_first_page(github_api_client: crate::github_api::Client)
	-> Result<impl warp::Reply, warp::Rejection>
{
	log::debug!("listing starred repositories");

	let response: crate::github_api::ApiResponse<Vec<crate::Repository>> =
		github_api_client.get("user/starred").await.map_err(warp::reject::custom)?;

	crate::pagination::inspect_link_header(response.link.as_deref());

	let starred_repositories = response.body.iter()
		.map(crate::StarredRepository::from)
		.collect::<Vec<_>>();

	log::info!("serving {} starred repositories", starred_repositories.len());

	Ok(warp::reply::json(&starred_repositories))
}

/// Request handler for the static placeholder route.
fn handle_placeholder() -> warp::reply::Json
{
	warp::reply::json(&PlaceholderResponse{result: PLACEHOLDER_RESULT})
}

/// Request handler for all requests that were rejected previously.
///
/// # Arguments
/// - `error`: Reasons for why this request was rejected by all routes.
async fn handle_rejection(error: warp::Rejection)
	-> Result<impl warp::Reply, std::convert::Infallible>
{
	let status_code;
	let message;

	if error.is_not_found()
	{
		status_code = warp::http::StatusCode::NOT_FOUND;
		message = "not found";
	}
	else if let Some(_) = error.find::<warp::reject::MethodNotAllowed>()
	{
		status_code = warp::http::StatusCode::METHOD_NOT_ALLOWED;
		message = "method not allowed";
	}
	// Failed upstream requests aren’t mapped to specific status codes, but we log the full error
	// chain to be able to inspect it later
	else if let Some(error) = error.find::<crate::Error>()
	{
		status_code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
		message = "internal server error";

		log::error!("could not list starred repositories: {:#?}", error);
	}
	else
	{
		status_code = warp::http::StatusCode::INTERNAL_SERVER_ERROR;
		message = "internal server error";

		log::error!("unhandled error: {:#?}", error);
	}

	let response = warp::reply::json(&ErrorResponse{error: message});

	Ok(warp::reply::with_status(response, status_code))
}

/// Response type of the placeholder route (serialized to JSON).
#[derive(serde::Serialize)]
struct PlaceholderResponse<'a>
{
	result: &'a str,
}

/// Response type informing about errors while handling requests (serialized to JSON).
#[derive(serde::Serialize)]
struct ErrorResponse<'a>
{
	/// Error message with a human-readable explanation as to why this request failed.
	error: &'a str,
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::github_api::tests::config_for;
	use crate::models::tests::repository_json;

	fn client_for(base_url: &str) -> crate::github_api::Client
	{
		crate::github_api::Client::from_config(config_for(base_url, "token", 5000, 1000))
			.expect("client must be created")
	}

	/// Client pointing to a local port nobody listens on, for routes that never reach upstream.
	fn unused_client() -> crate::github_api::Client
	{
		client_for("http://127.0.0.1:9/")
	}

	fn json_body(response: &warp::http::Response<warp::hyper::body::Bytes>) -> serde_json::Value
	{
		serde_json::from_slice(response.body()).expect("response body must be JSON")
	}

	#[tokio::test]
	async fn first_page_projects_repositories_in_upstream_order()
	{
		let upstream_body = serde_json::json!([
			repository_json("foo", None),
			repository_json("bar", Some("A bar repo")),
			repository_json("baz", Some("Another one")),
		]);
		let base_url = serve_upstream!(warp::path!("user" / "starred")
			.and(warp::get())
			.map(move || warp::reply::json(&upstream_body)));

		let response = warp::test::request()
			.method("GET")
			.path("/astronomy/firstpage")
			.reply(&routes(client_for(&base_url)))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::OK);
		assert_eq!(response.headers()["content-type"], "application/json");
		assert_eq!(json_body(&response), serde_json::json!([
			{"foo": "NO_DESCRIPTON"},
			{"bar": "A bar repo"},
			{"baz": "Another one"},
		]));
	}

	#[tokio::test]
	async fn first_page_of_empty_listing_is_empty()
	{
		let base_url = serve_upstream!(warp::path!("user" / "starred")
			.map(|| warp::reply::json(&serde_json::json!([]))));

		let response = warp::test::request()
			.path("/astronomy/firstpage")
			.reply(&routes(client_for(&base_url)))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::OK);
		assert_eq!(json_body(&response), serde_json::json!([]));
	}

	#[tokio::test]
	async fn first_page_makes_exactly_one_upstream_request()
	{
		let request_count = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
		let upstream_request_count = request_count.clone();
		let base_url = serve_upstream!(warp::path!("user" / "starred")
			.map(move ||
			{
				upstream_request_count.fetch_add(1, std::sync::atomic::Ordering::SeqCst);

				let body = serde_json::json!([repository_json("foo", None)]);

				// Announce a next page, which must not be followed
				warp::reply::with_header(warp::reply::json(&body), "link",
					"<http://127.0.0.1:9/user/starred?page=2>; rel=\"next\"")
			}));

		let response = warp::test::request()
			.path("/astronomy/firstpage")
			.reply(&routes(client_for(&base_url)))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::OK);
		assert_eq!(json_body(&response), serde_json::json!([{"foo": "NO_DESCRIPTON"}]));
		assert_eq!(request_count.load(std::sync::atomic::Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn upstream_error_status_is_internal_server_error()
	{
		let base_url = serve_upstream!(warp::path!("user" / "starred")
			.map(|| warp::reply::with_status(
				warp::reply::json(&serde_json::json!({"message": "Bad credentials"})),
				warp::http::StatusCode::UNAUTHORIZED)));

		let response = warp::test::request()
			.path("/astronomy/firstpage")
			.reply(&routes(client_for(&base_url)))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(json_body(&response), serde_json::json!({"error": "internal server error"}));
	}

	#[tokio::test]
	async fn malformed_upstream_body_is_internal_server_error()
	{
		let base_url = serve_upstream!(warp::path!("user" / "starred")
			.map(|| warp::reply::json(&serde_json::json!([{"name": "incomplete"}]))));

		let response = warp::test::request()
			.path("/astronomy/firstpage")
			.reply(&routes(client_for(&base_url)))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[tokio::test]
	async fn unreachable_upstream_is_internal_server_error()
	{
		let response = warp::test::request()
			.path("/astronomy/firstpage")
			.reply(&routes(unused_client()))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[tokio::test]
	async fn placeholder_returns_fixed_body()
	{
		let response = warp::test::request()
			.method("GET")
			.path("/experimental/test?whatever=1")
			.header("content-type", "text/plain")
			.body("ignored")
			.reply(&routes(unused_client()))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::OK);
		assert_eq!(response.headers()["content-type"], "application/json");
		assert_eq!(response.body().as_ref(), br#"{"result":"TODO functional style"}"#);
	}

	#[tokio::test]
	async fn unknown_path_is_not_found()
	{
		let response = warp::test::request()
			.path("/astronomy/secondpage")
			.reply(&routes(unused_client()))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::NOT_FOUND);
		assert_eq!(json_body(&response), serde_json::json!({"error": "not found"}));
	}

	#[tokio::test]
	async fn wrong_method_is_not_allowed()
	{
		let response = warp::test::request()
			.method("POST")
			.path("/experimental/test")
			.reply(&routes(unused_client()))
			.await;

		assert_eq!(response.status(), warp::http::StatusCode::METHOD_NOT_ALLOWED);
	}
}
