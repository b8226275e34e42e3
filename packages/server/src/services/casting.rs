use crate::domain::{Artist, Demo};
use crate::error::AppError;
use crate::repository::Store;

/// Casting criteria. Only `tag_id` is mandatory; every other bound applies
/// when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastingFilter {
    /// Demo type to match.
    pub tag_id: i32,
    pub job_id: Option<i32>,
    /// Case-sensitive substring of the artist's nickname.
    pub nick_name_contains: Option<String>,
    pub price_low: Option<i64>,
    pub price_high: Option<i64>,
}

impl CastingFilter {
    pub fn admits(&self, artist: &Artist) -> bool {
        let salary = i64::from(artist.salary);
        self.job_id.is_none_or(|job| artist.job == job)
            && self
                .nick_name_contains
                .as_deref()
                .is_none_or(|needle| artist.nick_name.contains(needle))
            && self.price_low.is_none_or(|low| salary >= low)
            && self.price_high.is_none_or(|high| salary <= high)
    }
}

/// Demos of the requested type whose artist passes the filter, in demo id
/// order.
pub async fn select_casting(
    store: &dyn Store,
    filter: &CastingFilter,
) -> Result<Vec<(Demo, Artist)>, AppError> {
    let rows = store.list_demos_with_artist(filter.tag_id).await?;
    Ok(rows
        .into_iter()
        .filter(|(_, artist)| filter.admits(artist))
        .collect())
}
