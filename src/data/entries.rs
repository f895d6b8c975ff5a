//! Member Entries Module
//! Aligns each member's weight entries onto one shared date axis.

use super::payload::WeightDataset;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Date format used for the shared x-axis labels.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight: f64,
}

/// All entries of one gym member.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberEntries {
    pub username: String,
    pub entries: Vec<WeightEntry>,
}

impl MemberEntries {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            entries: Vec::new(),
        }
    }
}

/// Inclusive date filter. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }
}

/// Build the comparison dataset from raw member entries.
///
/// The x-axis is the sorted union of every in-range date. Members keep
/// their input order; a member without an entry on a date gets a gap
/// there. When a member has several entries on one date the last wins.
pub fn build_comparison(members: &[MemberEntries], range: DateRange) -> WeightDataset {
    let axis: BTreeSet<NaiveDate> = members
        .iter()
        .flat_map(|m| m.entries.iter())
        .map(|e| e.date)
        .filter(|d| range.contains(*d))
        .collect();

    let position: HashMap<NaiveDate, usize> =
        axis.iter().enumerate().map(|(i, d)| (*d, i)).collect();

    let user_weights = members
        .iter()
        .map(|member| {
            let mut weights = vec![None; axis.len()];
            for entry in &member.entries {
                if let Some(&idx) = position.get(&entry.date) {
                    weights[idx] = Some(entry.weight);
                }
            }
            (member.username.clone(), weights)
        })
        .collect();

    WeightDataset {
        dates: axis
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect(),
        user_weights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn member(name: &str, entries: &[(&str, f64)]) -> MemberEntries {
        MemberEntries {
            username: name.to_string(),
            entries: entries
                .iter()
                .map(|(d, w)| WeightEntry {
                    date: day(d),
                    weight: *w,
                })
                .collect(),
        }
    }

    #[test]
    fn aligns_members_on_union_of_dates() {
        let members = vec![
            member("alice", &[("2021-01-02", 71.0), ("2021-01-01", 70.0)]),
            member("bob", &[("2021-01-01", 80.0)]),
        ];
        let dataset = build_comparison(&members, DateRange::default());

        assert_eq!(dataset.dates, vec!["2021-01-01", "2021-01-02"]);
        assert_eq!(dataset.weights_for("alice"), Some(&[Some(70.0), Some(71.0)][..]));
        assert_eq!(dataset.weights_for("bob"), Some(&[Some(80.0), None][..]));
    }

    #[test]
    fn range_is_inclusive() {
        let members = vec![member(
            "alice",
            &[("2021-01-01", 70.0), ("2021-01-05", 69.0), ("2021-01-09", 68.0)],
        )];
        let range = DateRange {
            min: Some(day("2021-01-05")),
            max: Some(day("2021-01-09")),
        };
        let dataset = build_comparison(&members, range);
        assert_eq!(dataset.dates, vec!["2021-01-05", "2021-01-09"]);
        assert_eq!(dataset.user_weights[0].1, vec![Some(69.0), Some(68.0)]);
    }

    #[test]
    fn last_duplicate_entry_wins() {
        let members = vec![member("alice", &[("2021-01-01", 70.0), ("2021-01-01", 72.5)])];
        let dataset = build_comparison(&members, DateRange::default());
        assert_eq!(dataset.user_weights[0].1, vec![Some(72.5)]);
    }

    #[test]
    fn member_without_entries_in_range_is_all_gaps() {
        let members = vec![
            member("alice", &[("2021-03-01", 70.0)]),
            member("carol", &[("2020-01-01", 60.0)]),
        ];
        let range = DateRange {
            min: Some(day("2021-01-01")),
            max: None,
        };
        let dataset = build_comparison(&members, range);
        assert_eq!(dataset.usernames(), vec!["alice", "carol"]);
        assert_eq!(dataset.weights_for("carol"), Some(&[None][..]));
    }
}
