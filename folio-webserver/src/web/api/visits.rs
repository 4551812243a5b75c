use super::*;
use std::path::{Path, PathBuf};

fn page_name(page: &Path) -> result::Result<String, ApiError> {
    let segments: Option<Vec<&str>> = page.iter().map(|s| s.to_str()).collect();
    segments
        .map(|s| s.join("/"))
        .ok_or_else(|| usecases::Error::InvalidPage.into())
}

#[get("/visits/<page..>")]
pub fn get_visits(visits: &State<Visits>, page: PathBuf) -> Result<json::VisitCount> {
    let page = page_name(&page)?;
    let count = usecases::get_visits(&*visits.0, &page)?;
    Ok(Json(count.into()))
}

#[post("/visits/<page..>")]
pub fn post_visit(visits: &State<Visits>, page: PathBuf) -> Result<json::VisitCount> {
    let page = page_name(&page)?;
    let count = usecases::count_visit(&*visits.0, &page)?;
    log::debug!("Page '{}' has been visited {} times", count.page, count.count);
    Ok(Json(count.into()))
}
