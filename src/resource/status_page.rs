//! Status page resources and incidents.

// self
use crate::{_prelude::*, client::Client, http::HttpTransport};

/// Group of monitors shown together on a status page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicGroup {
	/// Server-assigned identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Group heading.
	pub name: String,
	/// Sort weight.
	#[serde(default)]
	pub weight: i64,
	/// Monitors listed in the group.
	#[serde(default, rename = "monitorList")]
	pub monitor_list: Vec<i64>,
}

/// Status page as returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPage {
	/// Server-assigned identifier.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// URL slug, also the page's key in every endpoint.
	pub slug: String,
	/// Page title.
	pub title: String,
	/// Page description.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Theme name.
	#[serde(default)]
	pub theme: String,
	/// Whether the page is publicly visible.
	#[serde(default)]
	pub published: bool,
	/// Show monitor tags on the page.
	#[serde(default, rename = "showTags")]
	pub show_tags: bool,
	/// Custom domains serving the page.
	#[serde(default, rename = "domainNameList")]
	pub domain_name_list: Vec<String>,
	/// Footer text.
	#[serde(default, rename = "footerText", skip_serializing_if = "Option::is_none")]
	pub footer_text: Option<String>,
	/// Custom CSS.
	#[serde(default, rename = "customCSS", skip_serializing_if = "Option::is_none")]
	pub custom_css: Option<String>,
	/// Google Analytics tag id.
	#[serde(default, rename = "googleAnalyticsId", skip_serializing_if = "Option::is_none")]
	pub google_analytics_id: Option<String>,
	/// Icon URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	/// Show the "Powered by" footer.
	#[serde(default, rename = "showPoweredBy")]
	pub show_powered_by: bool,
	/// Monitor groups.
	#[serde(default, rename = "publicGroupList", skip_serializing_if = "Vec::is_empty")]
	pub public_group_list: Vec<PublicGroup>,
}

#[derive(Deserialize)]
struct StatusPageList {
	#[serde(default)]
	statuspages: Vec<StatusPage>,
}

/// Body of `POST /status-pages`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddStatusPageRequest {
	/// URL slug.
	pub slug: String,
	/// Page title.
	pub title: String,
	/// Optional message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub msg: Option<String>,
}
impl AddStatusPageRequest {
	/// Creates a request for a page at `slug` titled `title`.
	pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
		Self { slug: slug.into(), title: title.into(), msg: None }
	}
}

/// Response of `POST /status-pages`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddStatusPageResponse {
	/// Service message.
	#[serde(default)]
	pub msg: String,
}

/// Body of `POST /status-pages/{slug}`; unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveStatusPageRequest {
	/// Page title.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Page description.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Theme name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub theme: Option<String>,
	/// Whether the page is publicly visible.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub published: Option<bool>,
	/// Show monitor tags on the page.
	#[serde(default, rename = "showTags", skip_serializing_if = "Option::is_none")]
	pub show_tags: Option<bool>,
	/// Custom domains serving the page.
	#[serde(default, rename = "domainNameList", skip_serializing_if = "Option::is_none")]
	pub domain_name_list: Option<Vec<String>>,
	/// Footer text.
	#[serde(default, rename = "footerText", skip_serializing_if = "Option::is_none")]
	pub footer_text: Option<String>,
	/// Custom CSS.
	#[serde(default, rename = "customCSS", skip_serializing_if = "Option::is_none")]
	pub custom_css: Option<String>,
	/// Google Analytics tag id.
	#[serde(default, rename = "googleAnalyticsId", skip_serializing_if = "Option::is_none")]
	pub google_analytics_id: Option<String>,
	/// Icon URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<String>,
	/// Show the "Powered by" footer.
	#[serde(default, rename = "showPoweredBy", skip_serializing_if = "Option::is_none")]
	pub show_powered_by: Option<bool>,
	/// Monitor groups.
	#[serde(default, rename = "publicGroupList", skip_serializing_if = "Option::is_none")]
	pub public_group_list: Option<Vec<PublicGroup>>,
}

/// Response of `POST /status-pages/{slug}`; the detail shape varies by service version.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveStatusPageResponse {
	/// Service detail payload.
	#[serde(default)]
	pub detail: serde_json::Value,
}

/// Response carrying a single detail message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
	/// Service message.
	#[serde(default)]
	pub detail: String,
}

/// Body of `POST /status-pages/{slug}/incident`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIncidentRequest {
	/// Incident headline.
	pub title: String,
	/// Incident body.
	pub content: String,
	/// Banner style: primary, info, warning, danger, light, or dark.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
}

/// Incident pinned to a status page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
	/// Server-assigned identifier.
	pub id: i64,
	/// Incident headline.
	pub title: String,
	/// Incident body.
	pub content: String,
	/// Banner style.
	#[serde(default)]
	pub style: String,
	/// Creation timestamp as reported by the service.
	#[serde(default, rename = "createdDate")]
	pub created_date: String,
	/// Whether the incident is pinned.
	#[serde(default)]
	pub pin: bool,
}

/// Operations on `/status-pages`.
pub struct StatusPages<'a, T>
where
	T: ?Sized + HttpTransport,
{
	client: &'a Client<T>,
}
impl<'a, T> StatusPages<'a, T>
where
	T: ?Sized + HttpTransport,
{
	pub(crate) fn new(client: &'a Client<T>) -> Self {
		Self { client }
	}

	/// Lists every status page.
	pub async fn list(&self) -> Result<Vec<StatusPage>> {
		let list: StatusPageList = self.client.get("/status-pages").await?;

		Ok(list.statuspages)
	}

	/// Fetches one status page.
	pub async fn get(&self, slug: &str) -> Result<StatusPage> {
		self.client.get(&format!("/status-pages/{slug}")).await
	}

	/// Creates an empty status page.
	pub async fn create(&self, request: &AddStatusPageRequest) -> Result<AddStatusPageResponse> {
		self.client.post("/status-pages", request).await
	}

	/// Saves the fields set in `request`.
	pub async fn update(
		&self,
		slug: &str,
		request: &SaveStatusPageRequest,
	) -> Result<SaveStatusPageResponse> {
		self.client.post(&format!("/status-pages/{slug}"), request).await
	}

	/// Deletes a status page.
	pub async fn delete(&self, slug: &str) -> Result<DetailResponse> {
		self.client.delete(&format!("/status-pages/{slug}")).await
	}

	/// Posts (and pins) an incident on a status page.
	pub async fn post_incident(
		&self,
		slug: &str,
		request: &PostIncidentRequest,
	) -> Result<Incident> {
		self.client.post(&format!("/status-pages/{slug}/incident"), request).await
	}

	/// Unpins the current incident of a status page.
	pub async fn unpin_incident(&self, slug: &str) -> Result<DetailResponse> {
		self.client.delete(&format!("/status-pages/{slug}/incident/unpin")).await
	}
}
