mod count_tags;
mod error;
mod filter_posts;
mod load_posts;
mod resolve_media;
mod sitemap;
mod visits;

#[cfg(test)]
pub mod tests;

pub use self::{
    count_tags::*, error::Error, filter_posts::*, load_posts::*, resolve_media::*, sitemap::*,
    visits::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::blog::BlogGateway, repositories::*};
}
