use chrono::{DateTime, Months, NaiveDate, Utc};
use crate::domain::models::member::{MembershipPlan, MemberStatus};
use crate::error::AppError;

/// Computes the membership end from the start and the plan using
/// calendar-aware month addition. Month-length overflow clamps to the last
/// day of the target month (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap
/// year).
pub fn membership_end(start: DateTime<Utc>, plan: MembershipPlan) -> Result<DateTime<Utc>, AppError> {
    start
        .checked_add_months(Months::new(plan.months()))
        .ok_or_else(|| AppError::Validation("membership_start out of representable range".into()))
}

/// Read-time status classification. The stored status is a cache that can go
/// stale relative to `membership_end`; `inactive` is an explicit owner
/// override and is preserved as-is.
pub fn effective_status(now: DateTime<Utc>, membership_end: DateTime<Utc>, stored: MemberStatus) -> MemberStatus {
    match stored {
        MemberStatus::Inactive => MemberStatus::Inactive,
        _ if membership_end < now => MemberStatus::Expired,
        other => other,
    }
}

/// True iff the membership ends within `threshold_days` from `today`,
/// inclusive of both bounds. Already-expired memberships are not "expiring".
pub fn is_expiring_soon(today: NaiveDate, membership_end: NaiveDate, threshold_days: i64) -> bool {
    let days_left = (membership_end - today).num_days();
    (0..=threshold_days).contains(&days_left)
}

pub const DEFAULT_EXPIRY_THRESHOLD_DAYS: i64 = 7;
