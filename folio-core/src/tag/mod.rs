/// Posts listing this tag are not shown in public listings.
pub const HIDDEN_TAG: &str = "hidden";

pub fn is_hidden(tag: &str) -> bool {
    tag == HIDDEN_TAG
}
