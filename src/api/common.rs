//
//  fmeflow-client
//  api/common.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Shared wire types for the FME Flow REST API.
//!
//! FME Flow wraps every collection response in an `items` envelope:
//!
//! ```json
//! {"items": [{"name": "Samples"}, {"name": "Utilities"}]}
//! ```
//!
//! [`Items`] is the typed form of that envelope. There is no fallback for
//! responses missing the envelope: a collection endpoint that answers with
//! a different shape surfaces as
//! [`Error::Decode`](crate::Error::Decode) at the call site.
//!
//! Individual record fields are a different story: [`null_to_empty`] lets
//! the defaulted string fields of listing records treat an explicit JSON
//! `null` the same as a missing key, so one malformed entry cannot poison
//! a whole collection.

use serde::{Deserialize, Deserializer};

/// The `{"items": [...]}` envelope FME Flow wraps collections in.
///
/// Managers unwrap this immediately and hand callers the `Vec<T>`; the
/// envelope never crosses the crate boundary.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Items<T> {
    /// The wrapped collection, in server-listing order.
    pub items: Vec<T>,
}

/// Deserializes a string field treating JSON `null` like a missing key.
///
/// Pair with `#[serde(default)]` so the field decodes to `""` whether the
/// server omits it or sends an explicit null.
pub(crate) fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
