use super::prelude::*;
use folio_entities::url::Url;

/// The path under which gateways serve content by its identifier.
pub const CONTENT_PATH: &str = "ipfs/";

/// Query parameter that carries the gateway access token.
pub const ACCESS_TOKEN_PARAM: &str = "pinataGatewayToken";

/// Public gateways in the order they are tried.
pub const DEFAULT_GATEWAYS: [&str; 3] = [
    "https://ipfs.io",
    "https://cloudflare-ipfs.com",
    "https://gateway.pinata.cloud",
];

pub fn default_gateways() -> Vec<Gateway> {
    DEFAULT_GATEWAYS
        .iter()
        .map(|gw| gw.parse().expect("Valid default gateway URL"))
        .collect()
}

pub fn media_reference(
    content_id: &str,
    gateways: Vec<Gateway>,
    access_token: Option<String>,
) -> Result<MediaReference> {
    if gateways.is_empty() {
        return Err(Error::NoGateway);
    }
    if let Some(gateway) = duplicate_gateway(&gateways) {
        log::warn!("Gateway {} is listed more than once", gateway.base_url());
        return Err(Error::InvalidGateway);
    }
    let content_id = content_id.parse()?;
    let access_token = access_token.filter(|t| !t.trim().is_empty());
    Ok(MediaReference {
        content_id,
        gateways,
        access_token,
    })
}

/// The first gateway that shares its origin with an earlier one.
///
/// Gateways are told apart by origin, so a list with duplicates
/// could never be exhausted by [`fallback_media`].
pub fn duplicate_gateway(gateways: &[Gateway]) -> Option<&Gateway> {
    gateways.iter().enumerate().find_map(|(i, gw)| {
        gateways[..i]
            .iter()
            .any(|other| other.base_url().origin() == gw.base_url().origin())
            .then_some(gw)
    })
}

/// Builds the URL of the media file served by the gateway at `gateway_index`.
pub fn resolve_media(reference: &MediaReference, gateway_index: usize) -> Result<MediaSource> {
    let gateway = reference
        .gateways
        .get(gateway_index)
        .ok_or(Error::NoGateway)?;
    let mut url = gateway
        .base_url()
        .join(&format!("{CONTENT_PATH}{}", reference.content_id))
        .map_err(|_| Error::InvalidContentId)?;
    if let Some(token) = &reference.access_token {
        url.query_pairs_mut().append_pair(ACCESS_TOKEN_PARAM, token);
    }
    Ok(MediaSource {
        url,
        kind: reference.content_id.kind(),
        gateway_index,
    })
}

pub fn next_gateway_index(current: usize, gateway_count: usize) -> Option<usize> {
    let next = current.checked_add(1)?;
    (next < gateway_count).then_some(next)
}

/// The position of the gateway that served `url`.
pub fn active_gateway_index(gateways: &[Gateway], url: &Url) -> Option<usize> {
    gateways.iter().position(|gw| gw.serves(url))
}

/// Re-resolves a media file after `failed_url` could not be loaded.
///
/// Returns `None` if there is no further gateway to try
/// or if `failed_url` was not served by any of the gateways.
pub fn fallback_media(reference: &MediaReference, failed_url: &Url) -> Option<MediaSource> {
    let current = active_gateway_index(&reference.gateways, failed_url)?;
    let next = next_gateway_index(current, reference.gateways.len())?;
    log::debug!(
        "Loading {} failed on gateway #{current}, trying gateway #{next}",
        reference.content_id
    );
    resolve_media(reference, next).ok()
}
