/// Serve a [warp] filter on an ephemeral local port in the background and evaluate to the base URL
/// (with a trailing slash) under which it can be reached. Used to stand in for the GitHub API.
macro_rules! serve_upstream
{
	($filter:expr) =>
	{{
		let (address, server) = warp::serve($filter).bind_ephemeral(([127, 0, 0, 1], 0));
		tokio::spawn(server);

		format!("http://{address}/")
	}};
}
