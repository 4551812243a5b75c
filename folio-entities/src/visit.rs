/// Number of recorded visits of a single page.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VisitCount {
    pub page: String,
    pub count: u64,
}
