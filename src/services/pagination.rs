//! Offset based pagination over Koios list endpoints.
//!
//! Koios returns at most `page_size` records per response. The [`Paginator`] walks the
//! `offset` query parameter forward until the service answers with a short page or the
//! caller's limit is reached, and returns all records in arrival order.

use serde_json::Value;

use crate::{
	models::{KoiosRequest, Pagination},
	services::transport::{KoiosTransport, TransportError},
};

/// Sequential page fetcher on top of a transport
pub struct Paginator<'a, T: KoiosTransport + ?Sized> {
	transport: &'a T,
	page_size: usize,
}

impl<'a, T: KoiosTransport + ?Sized> Paginator<'a, T> {
	/// Creates a paginator
	///
	/// # Arguments
	/// * `transport` - Transport used for every page
	/// * `page_size` - Maximum number of records the service returns per response
	pub fn new(transport: &'a T, page_size: usize) -> Self {
		Self {
			transport,
			page_size: page_size.max(1),
		}
	}

	/// Fetches pages until the data or the limit runs out
	///
	/// The first request carries `pagination.offset` (omitted when 0); each following one
	/// advances it by the length of the previous page. Any transport error aborts the walk
	/// and no partial result is returned.
	///
	/// # Arguments
	/// * `request` - Request template; its offset is overwritten
	/// * `pagination` - Starting offset and optional limit
	///
	/// # Returns
	/// * `Result<Vec<Value>, TransportError>` - Concatenated records, truncated to the limit
	pub async fn fetch_all(
		&self,
		mut request: KoiosRequest,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let limit = pagination.effective_limit();
		let mut offset = pagination.offset;
		let mut records = Vec::new();

		loop {
			request.set_offset(offset);
			let page = match self.transport.send_request(&request).await? {
				Value::Array(page) => page,
				_ => {
					return Err(TransportError::unexpected_response(
						request.endpoint,
						"a JSON array",
					))
				}
			};

			let page_len = page.len();
			tracing::debug!(
				endpoint = %request.endpoint,
				offset,
				page_len,
				"Fetched page"
			);
			records.extend(page);

			if let Some(limit) = limit {
				if records.len() >= limit {
					records.truncate(limit);
					break;
				}
			}

			if page_len < self.page_size {
				break;
			}
			offset += page_len as u64;
		}

		Ok(records)
	}
}
