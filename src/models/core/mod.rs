mod endpoint;
mod identifiers;
mod request;

pub use endpoint::{Endpoint, ORDER_BY_BLOCK_HEIGHT_ASC, ORDER_PARAM};
pub use identifiers::{AssetId, Identifiers, OneOrMany, ParseAssetIdError};
pub use request::{
	BodyParams, ContentType, HttpMethod, KoiosRequest, OgmiosRequest, Pagination, QueryParams,
	RequestBody, OFFSET_PARAM,
};
