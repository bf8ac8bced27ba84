//! Tag resources.

// self
use crate::{_prelude::*, client::Client, http::HttpTransport};

/// Tag that can be attached to monitors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
	/// Server-assigned identifier; omitted on create.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Display name.
	pub name: String,
	/// Hex color, e.g. `#FF0000`.
	pub color: String,
}
impl Tag {
	/// Creates an unsaved tag.
	pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
		Self { id: None, name: name.into(), color: color.into() }
	}
}

/// Operations on `/tags`.
pub struct Tags<'a, T>
where
	T: ?Sized + HttpTransport,
{
	client: &'a Client<T>,
}
impl<'a, T> Tags<'a, T>
where
	T: ?Sized + HttpTransport,
{
	pub(crate) fn new(client: &'a Client<T>) -> Self {
		Self { client }
	}

	/// Lists every tag.
	pub async fn list(&self) -> Result<Vec<Tag>> {
		self.client.get("/tags").await
	}

	/// Fetches one tag.
	pub async fn get(&self, id: i64) -> Result<Tag> {
		self.client.get(&format!("/tags/{id}")).await
	}

	/// Creates a tag and returns it with its assigned identifier.
	pub async fn create(&self, tag: &Tag) -> Result<Tag> {
		self.client.post("/tags", tag).await
	}

	/// Deletes a tag.
	pub async fn delete(&self, id: i64) -> Result<()> {
		self.client.send(Method::DELETE, &format!("/tags/{id}"), None::<&()>).await
	}
}
