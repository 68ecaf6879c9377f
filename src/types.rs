//! Types for common values in Steam community responses.

/// An opaque key grouping inventory items by application context, as assigned by Steam.
/// Not guaranteed to be numeric or stable.
pub type ContextKey = String;
/// The raw `g_rgAppContextData` object, keyed by [`ContextKey`] in source order.
pub type AppContextData = serde_json::Map<String, serde_json::Value>;

pub(crate) type HttpClient = reqwest::Client;
