use saborbr_shared::GroceryList;
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(EnumString, Display, Clone, Copy, Debug, Default, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Period {
    #[default]
    All,
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    fn max_days(&self) -> Option<f64> {
        match self {
            Period::All => None,
            Period::Daily => Some(1.0),
            Period::Weekly => Some(7.0),
            Period::Monthly => Some(30.0),
        }
    }
}

/// Whole days between two instants, rounded up.
fn days_between(a: OffsetDateTime, b: OffsetDateTime) -> f64 {
    ((a - b).abs().as_seconds_f64() / 86_400.0).ceil()
}

/// Lists created within `period` of `now`, keeping the input order.
pub fn filter_by_period(
    lists: &[GroceryList],
    period: Period,
    now: OffsetDateTime,
) -> Vec<&GroceryList> {
    let Some(max_days) = period.max_days() else {
        return lists.iter().collect();
    };

    lists
        .iter()
        .filter(|list| days_between(now, list.created_at) <= max_days)
        .collect()
}
