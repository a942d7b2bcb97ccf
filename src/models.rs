/// Placeholder substituted for repositories without a description.
pub const NO_DESCRIPTION: &str = "NO_DESCRIPTON";

/// User data model as returned in responses from the GitHub API.
#[allow(dead_code)]
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User
{
	/// The user’s handle.
	pub login: String,
	pub id: u64,
	pub node_id: String,
	pub avatar_url: String,
	/// Legacy Gravatar ID, which GitHub may send as `null`.
	pub gravatar_id: Option<String>,
	pub url: String,
	pub html_url: String,
	pub followers_url: String,
	pub following_url: String,
	pub gists_url: String,
	pub starred_url: String,
	pub subscriptions_url: String,
	pub organizations_url: String,
	pub repos_url: String,
	pub events_url: String,
	pub received_events_url: String,
	/// Either `User` or `Organization`.
	#[serde(rename = "type")]
	pub type_: String,
	pub site_admin: bool,
}

/// Repository data model as returned in responses from the GitHub API.
///
/// Only the fields listed here are decoded, all other fields are ignored.
#[allow(dead_code)]
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Repository
{
	pub id: u64,
	pub node_id: String,
	/// The name of the repository.
	pub name: String,
	/// The name of the repository prefixed with its owner’s handle (example: `rust-lang/rust`).
	pub full_name: String,
	/// User or organization owning the repository.
	pub owner: User,
	pub private: bool,
	pub html_url: String,
	/// Short description, which is `null` if none was set.
	pub description: Option<String>,
	pub fork: bool,
	pub url: String,
	pub archive_url: String,
	pub assignees_url: String,
	pub blobs_url: String,
	pub branches_url: String,
	pub collaborators_url: String,
	pub comments_url: String,
	pub commits_url: String,
	pub compare_url: String,
	pub contents_url: String,
	pub contributors_url: String,
	pub deployments_url: String,
	pub downloads_url: String,
	pub events_url: String,
	pub forks_url: String,
	pub git_commits_url: String,
	pub git_refs_url: String,
	pub git_tags_url: String,
	pub git_url: String,
	pub issue_comment_url: String,
	pub issue_events_url: String,
	pub issues_url: String,
	pub keys_url: String,
	pub labels_url: String,
	pub languages_url: String,
	pub merges_url: String,
	pub milestones_url: String,
	pub notifications_url: String,
	pub pulls_url: String,
	pub releases_url: String,
	pub ssh_url: String,
	pub stargazers_url: String,
	pub statuses_url: String,
	pub subscribers_url: String,
	pub subscription_url: String,
	pub tags_url: String,
	pub teams_url: String,
	pub trees_url: String,
}

/// Projection of a starred repository onto its name and description.
///
/// Serializes to a JSON object with a single entry mapping the repository name to its description,
/// for example `{"rust": "Empowering everyone to build reliable and efficient software."}`.
#[derive(Debug, Eq, PartialEq)]
pub struct StarredRepository<'a>
{
	pub name: &'a str,
	pub description: &'a str,
}

impl<'a> From<&'a Repository> for StarredRepository<'a>
{
	fn from(repository: &'a Repository) -> Self
	{
		Self
		{
			name: &repository.name,
			description: repository.description.as_deref().unwrap_or(NO_DESCRIPTION),
		}
	}
}

impl serde::Serialize for StarredRepository<'_>
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		use serde::ser::SerializeMap as _;

		let mut map = serializer.serialize_map(Some(1))?;
		map.serialize_entry(self.name, self.description)?;
		map.end()
	}
}
