//! Request model shared by the transport, the paginator and the endpoint adapters.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::endpoint::{Endpoint, ORDER_BY_BLOCK_HEIGHT_ASC, ORDER_PARAM};

/// Query parameter carrying the pagination offset
pub const OFFSET_PARAM: &str = "offset";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
	Get,
	Post,
}

/// Content type of a request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
	Json,
	Cbor,
}

impl ContentType {
	pub fn as_mime(&self) -> &'static str {
		match self {
			Self::Json => "application/json",
			Self::Cbor => "application/cbor",
		}
	}
}

/// Query string parameters
///
/// Kept sorted by key so the generated query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
		self.0.insert(key.into(), value.to_string());
		self
	}

	/// Inserts a boolean as a lowercase string
	pub fn insert_flag(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
		self.insert(key, value)
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.0.remove(key)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		for (key, value) in iter {
			params.insert(key, value);
		}
		params
	}
}

/// JSON object sent as a POST body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BodyParams(Map<String, Value>);

impl BodyParams {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		self.0.insert(key.into(), value.into());
		self
	}

	/// Inserts a boolean as a lowercase string, the form Koios expects in bodies
	pub fn insert_flag(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
		self.insert(key, value.to_string())
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.0)
	}
}

/// Request body
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
	#[default]
	Empty,
	Json(Value),
	/// Raw CBOR bytes, used for transaction submission
	Cbor(Vec<u8>),
}

impl RequestBody {
	pub fn content_type(&self) -> ContentType {
		match self {
			Self::Cbor(_) => ContentType::Cbor,
			_ => ContentType::Json,
		}
	}
}

/// A single call to a Koios endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct KoiosRequest {
	pub endpoint: Endpoint,
	pub method: HttpMethod,
	pub query: QueryParams,
	pub body: RequestBody,
}

impl KoiosRequest {
	/// Creates a request for the endpoint with the endpoint's HTTP method
	///
	/// Ordered endpoints get `order=block_height.asc` so that pages accumulate in
	/// chronological order.
	pub fn new(endpoint: Endpoint) -> Self {
		let mut query = QueryParams::new();
		if endpoint.is_ordered() {
			query.insert(ORDER_PARAM, ORDER_BY_BLOCK_HEIGHT_ASC);
		}
		Self {
			method: endpoint.method(),
			endpoint,
			query,
			body: RequestBody::Empty,
		}
	}

	/// Adds query parameters, keeping any already present
	pub fn with_query(mut self, query: QueryParams) -> Self {
		for (key, value) in query.0 {
			self.query.0.insert(key, value);
		}
		self
	}

	pub fn with_body(mut self, body: BodyParams) -> Self {
		self.body = RequestBody::Json(body.into_value());
		self
	}

	pub fn with_json(mut self, body: Value) -> Self {
		self.body = RequestBody::Json(body);
		self
	}

	pub fn with_cbor(mut self, bytes: Vec<u8>) -> Self {
		self.body = RequestBody::Cbor(bytes);
		self
	}

	pub fn content_type(&self) -> ContentType {
		self.body.content_type()
	}

	/// Current pagination offset, 0 when absent
	pub fn offset(&self) -> u64 {
		self.query
			.get(OFFSET_PARAM)
			.and_then(|offset| offset.parse().ok())
			.unwrap_or(0)
	}

	/// Sets the pagination offset; an offset of 0 removes the parameter
	pub fn set_offset(&mut self, offset: u64) {
		if offset > 0 {
			self.query.insert(OFFSET_PARAM, offset);
		} else {
			self.query.remove(OFFSET_PARAM);
		}
	}
}

/// Offset and result limit for paginated endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
	/// Number of records to skip before the first page
	pub offset: u64,
	/// Maximum number of records to return; `None` or `Some(0)` fetches everything
	pub limit: Option<usize>,
}

impl Pagination {
	/// Fetch every record
	pub fn all() -> Self {
		Self::default()
	}

	/// Fetch at most `limit` records; 0 means no limit
	pub fn limit(limit: usize) -> Self {
		Self {
			offset: 0,
			limit: Some(limit),
		}
	}

	pub fn starting_at(mut self, offset: u64) -> Self {
		self.offset = offset;
		self
	}

	/// The limit with 0 treated as unbounded
	pub fn effective_limit(&self) -> Option<usize> {
		self.limit.filter(|limit| *limit > 0)
	}
}

/// JSON-RPC envelope for the Ogmios passthrough
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgmiosRequest {
	pub jsonrpc: String,
	pub method: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub params: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<Value>,
}

impl OgmiosRequest {
	/// JSON-RPC 2.0 request for an Ogmios method such as `queryNetwork/tip`
	pub fn new(method: impl Into<String>) -> Self {
		Self {
			jsonrpc: "2.0".to_string(),
			method: method.into(),
			params: None,
			id: None,
		}
	}

	pub fn with_params(mut self, params: Value) -> Self {
		self.params = Some(params);
		self
	}

	pub fn with_id(mut self, id: impl Into<Value>) -> Self {
		self.id = Some(id.into());
		self
	}
}
