pub mod company_card;
pub mod facet_select;
pub mod sector_badge;
pub mod toast;
