use super::*;
use folio_core::entities::MediaReference;
use folio_entities::url::Url;

fn media_reference(
    cfg: &Cfg,
    cid: &str,
    token: Option<String>,
) -> result::Result<MediaReference, ApiError> {
    let access_token = token.or_else(|| cfg.media_access_token.clone());
    Ok(usecases::media_reference(
        cid,
        cfg.gateways.clone(),
        access_token,
    )?)
}

/// The URL of a media file on the preferred gateway.
#[get("/media?<cid>&<token>")]
pub fn get_media(
    cfg: &State<Cfg>,
    cid: String,
    token: Option<String>,
) -> Result<json::MediaSource> {
    let reference = media_reference(cfg, &cid, token)?;
    let source = usecases::resolve_media(&reference, 0)?;
    Ok(Json(source.into()))
}

/// The URL of a media file on the gateway following
/// the one that failed to deliver `failed`.
///
/// Responds with `null` if all gateways have been tried.
#[get("/media/fallback?<cid>&<failed>&<token>")]
pub fn get_media_fallback(
    cfg: &State<Cfg>,
    cid: String,
    failed: String,
    token: Option<String>,
) -> Result<Option<json::MediaSource>> {
    let reference = media_reference(cfg, &cid, token)?;
    let failed_url: Url = failed.parse().map_err(|err| {
        ApiError::OtherWithStatus(anyhow!("Invalid URL: {err}"), Status::BadRequest)
    })?;
    let source = usecases::fallback_media(&reference, &failed_url);
    if source.is_none() {
        log::debug!("No gateway left to load {cid}");
    }
    Ok(Json(source.map(Into::into)))
}
