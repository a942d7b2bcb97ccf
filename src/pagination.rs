//! Inspection of the `Link` header that GitHub uses to point to further pages of a listing.
//!
//! Only the first page of starred repositories is served. Subsequent pages are not fetched, the
//! header is merely logged so that following it can be added here later on.

/// Extract the URL of the next page from the value of a `Link` header.
///
/// The header consists of comma-separated links of the form `<url>; rel="next"`. Returns `None` if
/// there is no link with the relation type `next` or its URL is malformed.
pub fn next_page_url(link_header: &str) -> Option<url::Url>
{
	link_header.split(',')
		.find_map(|link|
		{
			let mut parts = link.split(';').map(str::trim);

			let target = parts.next()?.strip_prefix('<')?.strip_suffix('>')?;

			let is_next = parts
				.filter_map(|parameter| parameter.strip_prefix("rel="))
				.map(|relation| relation.trim_matches('"'))
				.any(|relation| relation.split_whitespace().any(|relation| relation == "next"));

			match is_next
			{
				true => url::Url::parse(target).ok(),
				false => None,
			}
		})
}

/// Log the `Link` header of a GitHub API response, if any.
///
/// This doesn’t fetch any further pages.
pub fn inspect_link_header(link_header: Option<&str>)
{
	let link_header = match link_header
	{
		Some(link_header) => link_header,
		None =>
		{
			log::debug!("no Link header in response, listing fits on a single page");
			return;
		}
	};

	log::info!("Link header: {link_header}");

	if let Some(next_page_url) = next_page_url(link_header)
	{
		log::info!("further results available at {next_page_url}, not following");
	}
}
