use std::{fmt, str::FromStr};

use strum::{AsRefStr, Display};
use thiserror::Error;
use url::Url;

/// File name suffixes that are rendered as videos.
pub const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".mov"];

/// A content addressed identifier of an immutable media file,
/// optionally followed by a file name, e.g. `QmXyz/beach.mp4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid content identifier")]
pub struct ContentIdParseError;

impl ContentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_file_name(&self.0)
    }
}

impl FromStr for ContentId {
    type Err = ContentIdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty()
            || s.starts_with('/')
            || s.contains("..")
            || s.contains(|c: char| c.is_whitespace() || c == '?' || c == '#')
        {
            return Err(ContentIdParseError);
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The element type that is needed to render a media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_file_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if VIDEO_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// A network endpoint that serves content by its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    base_url: Url,
}

#[derive(Debug, Error)]
pub enum GatewayParseError {
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("Gateway URL must not contain a path, query or fragment")]
    NotABaseUrl,
}

impl Gateway {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Checks if the given URL is served by this gateway.
    pub fn serves(&self, url: &Url) -> bool {
        self.base_url.origin() == url.origin()
    }
}

impl FromStr for Gateway {
    type Err = GatewayParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base_url: Url = s.parse()?;
        if base_url.cannot_be_a_base()
            || base_url.path() != "/"
            || base_url.query().is_some()
            || base_url.fragment().is_some()
        {
            return Err(GatewayParseError::NotABaseUrl);
        }
        Ok(Self { base_url })
    }
}

/// A media file together with the gateways it could be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    pub content_id: ContentId,
    /// Ordered by preference.
    pub gateways: Vec<Gateway>,
    pub access_token: Option<String>,
}

/// A loadable URL of a media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    pub url: Url,
    pub kind: MediaKind,
    pub gateway_index: usize,
}
