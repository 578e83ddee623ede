//! Content records stored by the portal, their typed write inputs, and the
//! public form payloads.
//!
//! Every mutable entity has three shapes:
//! - the record itself, as read back from the store;
//! - a `New*` input with every required field, accepted by `/create` routes;
//! - a `*Update` input whose fields are all optional, accepted by `/update`
//!   routes. `apply_to` merges only the submitted fields into a record.

pub mod article;
pub mod auction;
pub mod directorate;
pub mod forms;
pub mod hero;
pub mod institution;
pub mod market;
pub mod report;

pub use article::{Article, ArticleUpdate, Category, NewArticle};
pub use auction::{
    AuctionResult, AuctionResultUpdate, NewAuctionResult, NewUpcomingAuction, UpcomingAuction,
    UpcomingAuctionUpdate,
};
pub use directorate::{Directorate, DirectorateUpdate, NewDirectorate};
pub use forms::{ContactRequest, InvestorRegistration, LoginRequest};
pub use hero::{HeroSlide, HeroSlideUpdate, NewHeroSlide};
pub use institution::{
    NewOrganigramme, Organigramme, Personnel, PersonnelInput, PersonnelRole, UnknownRole,
};
pub use market::{MarketStat, MarketStatUpdate, NewMarketStat};
pub use report::{NewReport, Report, ReportUpdate};

/// Assigns `$value` to `$target` when the update carried it.
macro_rules! merge {
    ($target:expr, $value:expr) => {
        if let Some(v) = $value {
            $target = v;
        }
    };
}

pub(crate) use merge;
