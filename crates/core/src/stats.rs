//! Placement statistics aggregation.
//!
//! [`summarize`] reduces an owner's already-fetched counts and confirmed
//! placements into the fixed [`PlacementStats`] record served by
//! `GET /stats`. It is pure: no I/O, no clock, never fails. Empty input
//! produces zero counts and empty lists.

use std::collections::HashSet;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum entries in [`PlacementStats::top_companies`].
pub const TOP_COMPANIES_LIMIT: usize = 5;

/// Maximum entries in [`PlacementStats::recent_placements`].
pub const RECENT_PLACEMENTS_LIMIT: usize = 5;

/// Display name used when a joined student or company name is missing.
pub const UNKNOWN_NAME: &str = "Unknown";

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A placement whose status is `Confirmed`, with display names already joined.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedPlacement {
    pub student_id: DbId,
    pub student_name: Option<String>,
    pub company_name: Option<String>,
    pub position: String,
    pub package: Decimal,
    pub placement_date: Date,
}

/// Row counts fetched alongside the confirmed placements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCounts {
    pub students: i64,
    pub companies: i64,
    /// Interviews dated at or after the moment of the request.
    pub upcoming_interviews: i64,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One entry of the top-companies ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub name: String,
    pub count: i64,
}

/// One entry of the recent-placements list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentPlacement {
    pub student_name: String,
    pub company_name: String,
    pub position: String,
    pub package: Decimal,
    pub date: Date,
}

/// Aggregate placement summary for one owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementStats {
    pub total_students: i64,
    pub total_companies: i64,
    pub total_placements: i64,
    pub unique_students_placed: i64,
    /// Percentage, two decimal places. Not capped at 100.
    pub placement_rate: f64,
    /// Mean package, two decimal places.
    pub average_package: Decimal,
    pub upcoming_interviews: i64,
    pub top_companies: Vec<CompanyCount>,
    pub recent_placements: Vec<RecentPlacement>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Build the summary from counts and confirmed placements.
///
/// `placements` may arrive in any order; recent placements are always
/// re-sorted by date, newest first, with ties kept in input order.
pub fn summarize(counts: EntityCounts, placements: &[ConfirmedPlacement]) -> PlacementStats {
    let total_placements = placements.len() as i64;

    let unique_students_placed = placements
        .iter()
        .map(|p| p.student_id)
        .collect::<HashSet<_>>()
        .len() as i64;

    let placement_rate = if counts.students > 0 {
        round_to_cents(unique_students_placed as f64 / counts.students as f64 * 100.0)
    } else {
        0.0
    };

    PlacementStats {
        total_students: counts.students,
        total_companies: counts.companies,
        total_placements,
        unique_students_placed,
        placement_rate,
        average_package: average_package(placements),
        upcoming_interviews: counts.upcoming_interviews,
        top_companies: top_companies(placements),
        recent_placements: recent_placements(placements),
    }
}

/// Exact decimal mean of all packages, rounded to two places. Zero when empty.
pub fn average_package(placements: &[ConfirmedPlacement]) -> Decimal {
    if placements.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = placements.iter().map(|p| p.package).sum();
    (sum / Decimal::from(placements.len())).round_dp(2)
}

/// Count placements per company name and keep the five largest groups.
///
/// Groups are accumulated in first-appearance order and sorted with a
/// stable sort, so equal counts keep that order.
pub fn top_companies(placements: &[ConfirmedPlacement]) -> Vec<CompanyCount> {
    let mut counts: IndexMap<&str, i64> = IndexMap::new();
    for p in placements {
        *counts.entry(display_name(&p.company_name)).or_insert(0) += 1;
    }

    let mut ranked: Vec<CompanyCount> = counts
        .into_iter()
        .map(|(name, count)| CompanyCount {
            name: name.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_COMPANIES_LIMIT);
    ranked
}

/// The five newest placements by date. Same-day placements keep input order.
pub fn recent_placements(placements: &[ConfirmedPlacement]) -> Vec<RecentPlacement> {
    let mut ordered: Vec<&ConfirmedPlacement> = placements.iter().collect();
    ordered.sort_by(|a, b| b.placement_date.cmp(&a.placement_date));

    ordered
        .into_iter()
        .take(RECENT_PLACEMENTS_LIMIT)
        .map(|p| RecentPlacement {
            student_name: display_name(&p.student_name).to_string(),
            company_name: display_name(&p.company_name).to_string(),
            position: p.position.clone(),
            package: p.package,
            date: p.placement_date,
        })
        .collect()
}

fn display_name(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or(UNKNOWN_NAME)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
