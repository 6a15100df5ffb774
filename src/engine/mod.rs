//! Equipment aggregation engine.
//!
//! Pure functions over a snapshot of the equipment collection: filtering,
//! date sorting, pagination, grouping by direction/bureau and by date, field
//! tallies and the statistics derived from them. Nothing here holds state or
//! performs I/O; callers pass the snapshot in on every call.

pub mod dates;
pub mod filter;
pub mod grouping;
pub mod paginate;
pub mod sort;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use filter::filter_equipment;
pub use grouping::{
    by_brand, by_category, group_by_date, group_by_direction_and_bureau, rank_directions,
    search_bureau, tally_by, BureauMatch, DirectionGrouping, DirectionStats,
};
pub use paginate::{
    clamp_page, next_page, paginate, prev_page, Page, DIRECTION_STATS_PAGE_SIZE,
    EQUIPMENT_PAGE_SIZE,
};
pub use sort::{sort_by_date, sort_newest_first};
pub use stats::{
    average_per_bureau, percentage, reform_rate_percent, status_breakdown, top_n,
    unique_bureau_count, StatusBreakdown, StatusShare,
};
