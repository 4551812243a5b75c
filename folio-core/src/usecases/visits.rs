use super::prelude::*;

pub const MAX_PAGE_NAME_LEN: usize = 128;

fn validate_page(page: &str) -> Result<()> {
    let valid = !page.is_empty()
        && page.len() <= MAX_PAGE_NAME_LEN
        && page
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.'));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidPage)
    }
}

pub fn count_visit<R: VisitCounterRepo + ?Sized>(repo: &R, page: &str) -> Result<VisitCount> {
    validate_page(page)?;
    let count = repo.increment_visits(page)?;
    Ok(VisitCount {
        page: page.to_owned(),
        count,
    })
}

pub fn get_visits<R: VisitCounterRepo + ?Sized>(repo: &R, page: &str) -> Result<VisitCount> {
    validate_page(page)?;
    let count = repo.visits(page)?;
    Ok(VisitCount {
        page: page.to_owned(),
        count,
    })
}
