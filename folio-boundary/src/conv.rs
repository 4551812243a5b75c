use super::*;
use folio_entities as e;

impl From<e::tag::TagFrequency> for TagFrequency {
    fn from(from: e::tag::TagFrequency) -> Self {
        let e::tag::TagFrequency(tag, count) = from;
        Self { tag, count }
    }
}

impl From<e::media::MediaKind> for MediaKind {
    fn from(from: e::media::MediaKind) -> Self {
        use e::media::MediaKind as E;
        match from {
            E::Image => Self::Image,
            E::Video => Self::Video,
        }
    }
}

impl From<e::media::MediaSource> for MediaSource {
    fn from(from: e::media::MediaSource) -> Self {
        let e::media::MediaSource {
            url,
            kind,
            gateway_index,
        } = from;
        Self {
            url: url.into(),
            kind: kind.into(),
            gateway_index,
        }
    }
}

impl From<e::visit::VisitCount> for VisitCount {
    fn from(from: e::visit::VisitCount) -> Self {
        let e::visit::VisitCount { page, count } = from;
        Self { page, count }
    }
}

impl From<(e::post::Post, e::post::PostMetadata)> for PostSummary {
    fn from((post, metadata): (e::post::Post, e::post::PostMetadata)) -> Self {
        let e::post::Post {
            permlink,
            author,
            title,
            created,
            ..
        } = post;
        let e::post::PostMetadata { tags, images } = metadata;
        Self {
            permlink,
            author,
            title,
            created: created.as_secs(),
            tags,
            image: images.into_iter().next(),
        }
    }
}
