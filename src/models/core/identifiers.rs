//! Identifier arguments accepted by batch-capable endpoints.

use std::{fmt, str::FromStr};

/// A single identifier or a batch of identifiers
///
/// Batch-capable endpoints accept either form; both are normalized to a list before the
/// request is built, so `"stake1..."` and `vec!["stake1..."]` produce identical requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
	One(T),
	Many(Vec<T>),
}

/// String identifiers such as addresses, hashes or pool ids
pub type Identifiers = OneOrMany<String>;

impl<T> OneOrMany<T> {
	pub fn into_vec(self) -> Vec<T> {
		match self {
			Self::One(item) => vec![item],
			Self::Many(items) => items,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Self::One(_) => 1,
			Self::Many(items) => items.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl From<&str> for OneOrMany<String> {
	fn from(value: &str) -> Self {
		Self::One(value.to_string())
	}
}

impl From<String> for OneOrMany<String> {
	fn from(value: String) -> Self {
		Self::One(value)
	}
}

impl From<&String> for OneOrMany<String> {
	fn from(value: &String) -> Self {
		Self::One(value.clone())
	}
}

impl From<Vec<String>> for OneOrMany<String> {
	fn from(values: Vec<String>) -> Self {
		Self::Many(values)
	}
}

impl From<Vec<&str>> for OneOrMany<String> {
	fn from(values: Vec<&str>) -> Self {
		Self::Many(values.into_iter().map(str::to_string).collect())
	}
}

impl From<&[&str]> for OneOrMany<String> {
	fn from(values: &[&str]) -> Self {
		Self::Many(values.iter().map(|v| v.to_string()).collect())
	}
}

impl From<&[String]> for OneOrMany<String> {
	fn from(values: &[String]) -> Self {
		Self::Many(values.to_vec())
	}
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
	fn from(values: [&str; N]) -> Self {
		Self::Many(values.iter().map(|v| v.to_string()).collect())
	}
}

/// Native asset identifier: policy id plus hex-encoded asset name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId {
	pub policy_id: String,
	/// Hex-encoded name; empty for the policy's nameless asset
	pub asset_name: String,
}

impl AssetId {
	pub fn new(policy_id: impl Into<String>, asset_name: impl Into<String>) -> Self {
		Self {
			policy_id: policy_id.into(),
			asset_name: asset_name.into(),
		}
	}

	/// `[policy_id, asset_name]` pair as used in `_asset_list` bodies
	pub fn to_pair(&self) -> [String; 2] {
		[self.policy_id.clone(), self.asset_name.clone()]
	}
}

/// Error returned when an asset identifier cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid asset id '{0}': expected '<policy_id>.<asset_name_hex>'")]
pub struct ParseAssetIdError(pub String);

impl FromStr for AssetId {
	type Err = ParseAssetIdError;

	/// Parses `<policy_id>.<asset_name_hex>`; the name part may be omitted
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (policy_id, asset_name) = s.split_once('.').unwrap_or((s, ""));
		if policy_id.is_empty() || asset_name.contains('.') {
			return Err(ParseAssetIdError(s.to_string()));
		}
		Ok(Self::new(policy_id, asset_name))
	}
}

impl fmt::Display for AssetId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.asset_name.is_empty() {
			write!(f, "{}", self.policy_id)
		} else {
			write!(f, "{}.{}", self.policy_id, self.asset_name)
		}
	}
}
