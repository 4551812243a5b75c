use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct TagFrequency {
    pub tag: String,
    pub count: u64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct PostSummary {
    pub permlink : String,
    pub author   : String,
    pub title    : String,
    pub created  : i64,
    pub tags     : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image    : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct MediaSource {
    pub url: String,
    pub kind: MediaKind,
    pub gateway_index: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct VisitCount {
    pub page: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// Error message.
    pub message: String,
}
