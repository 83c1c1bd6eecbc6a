//! Record visibility: a single linear scan applying every criterion.

use crate::domain::{AuthorFilter, FavoriteSet, FilterCriteria, Record, SearchScope};

/// Return the records visible under `criteria`, in their original order.
pub fn apply(records: &[Record], favorites: &FavoriteSet, criteria: &FilterCriteria) -> Vec<Record> {
    let needle = criteria.needle();
    records
        .iter()
        .filter(|record| matches(record, favorites, criteria, needle.as_deref()))
        .cloned()
        .collect()
}

/// Whether a single record passes every predicate.
///
/// `needle` is the already-folded query from [`FilterCriteria::needle`].
pub fn matches(
    record: &Record,
    favorites: &FavoriteSet,
    criteria: &FilterCriteria,
    needle: Option<&str>,
) -> bool {
    passes_favorites(record, favorites, criteria)
        && passes_author(record, &criteria.author)
        && needle.map_or(true, |needle| passes_text(record, criteria.scope, needle))
        && passes_dates(record, criteria)
}

fn passes_favorites(record: &Record, favorites: &FavoriteSet, criteria: &FilterCriteria) -> bool {
    !criteria.favorites_only || favorites.contains(record.id)
}

fn passes_author(record: &Record, author: &AuthorFilter) -> bool {
    match author {
        AuthorFilter::All => true,
        AuthorFilter::Only(name) => record.author.as_deref() == Some(name.as_str()),
    }
}

fn passes_text(record: &Record, scope: SearchScope, needle: &str) -> bool {
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle)
    };

    match scope {
        SearchScope::Title => contains(&record.title),
        SearchScope::Content => contains(&record.content),
        SearchScope::Both => contains(&record.title) || contains(&record.content),
    }
}

// Records without a parseable date are always in range.
fn passes_dates(record: &Record, criteria: &FilterCriteria) -> bool {
    if !criteria.has_date_bounds() {
        return true;
    }
    let Some(date) = record.calendar_date() else {
        return true;
    };
    if criteria.start_date.is_some_and(|start| date < start) {
        return false;
    }
    if criteria.end_date.is_some_and(|end| date > end) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64, title: &str, author: &str, content: &str) -> Record {
        Record {
            title: Some(title.into()),
            author: Some(author.into()),
            content: Some(content.into()),
            ..Record::new(id)
        }
    }

    fn dated(id: i64, date: Option<&str>) -> Record {
        Record {
            date: date.map(String::from),
            ..record(id, "t", "a", "c")
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(1, "Wall", "A", "stone"),
            record(2, "Gate", "B", "wood wall"),
        ]
    }

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_unfiltered_returns_everything_in_order() {
        let records = sample();
        let out = apply(&records, &FavoriteSet::new(), &FilterCriteria::default());
        assert_eq!(out, records);
    }

    #[test]
    fn test_text_both_matches_title_or_content() {
        let criteria = FilterCriteria {
            text: "wall".into(),
            scope: SearchScope::Both,
            ..Default::default()
        };
        let out = apply(&sample(), &FavoriteSet::new(), &criteria);
        assert_eq!(ids(&out), vec![1, 2]);
    }

    #[test]
    fn test_text_scope_title_and_content() {
        let mut criteria = FilterCriteria {
            text: "wall".into(),
            scope: SearchScope::Title,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&sample(), &FavoriteSet::new(), &criteria)), vec![1]);

        criteria.scope = SearchScope::Content;
        assert_eq!(ids(&apply(&sample(), &FavoriteSet::new(), &criteria)), vec![2]);
    }

    #[test]
    fn test_both_is_union_of_title_and_content() {
        let records = vec![
            record(1, "Alpha", "A", "beta"),
            record(2, "Gamma", "A", "alphabet"),
            record(3, "Delta", "A", "epsilon"),
            record(4, "ALPHA again", "A", "alpha too"),
        ];
        let favorites = FavoriteSet::new();
        let run = |scope| {
            let criteria = FilterCriteria {
                text: "alpha".into(),
                scope,
                ..Default::default()
            };
            ids(&apply(&records, &favorites, &criteria))
        };

        let title = run(SearchScope::Title);
        let content = run(SearchScope::Content);
        let both = run(SearchScope::Both);

        let mut union: Vec<i64> = title.iter().chain(content.iter()).copied().collect();
        union.sort_unstable();
        union.dedup();
        assert_eq!(both, union);
        assert_eq!(both, vec![1, 2, 4]);
    }

    #[test]
    fn test_text_is_case_insensitive_substring_and_trimmed() {
        let criteria = FilterCriteria {
            text: "  TON ".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&sample(), &FavoriteSet::new(), &criteria)), vec![1]);
    }

    #[test]
    fn test_text_missing_field_is_empty() {
        let records = vec![Record::new(1)];
        let criteria = FilterCriteria {
            text: "x".into(),
            ..Default::default()
        };
        assert!(apply(&records, &FavoriteSet::new(), &criteria).is_empty());
    }

    #[test]
    fn test_author_exact_match() {
        let criteria = FilterCriteria {
            author: AuthorFilter::Only("B".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&sample(), &FavoriteSet::new(), &criteria)), vec![2]);

        let lower = FilterCriteria {
            author: AuthorFilter::Only("b".into()),
            ..Default::default()
        };
        assert!(apply(&sample(), &FavoriteSet::new(), &lower).is_empty());
    }

    #[test]
    fn test_author_filter_skips_authorless_records() {
        let records = vec![Record::new(1), record(2, "t", "A", "c")];
        let criteria = FilterCriteria {
            author: AuthorFilter::Only("A".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &FavoriteSet::new(), &criteria)), vec![2]);
    }

    #[test]
    fn test_favorites_only() {
        let favorites = FavoriteSet::from(vec![2, 42]);
        let criteria = FilterCriteria {
            favorites_only: true,
            ..Default::default()
        };
        let out = apply(&sample(), &favorites, &criteria);
        assert_eq!(ids(&out), vec![2]);
        assert!(out.iter().all(|r| favorites.contains(r.id)));
    }

    #[test]
    fn test_favorites_never_exclude_when_flag_off() {
        let favorites = FavoriteSet::from(vec![2]);
        let out = apply(&sample(), &favorites, &FilterCriteria::default());
        assert_eq!(ids(&out), vec![1, 2]);
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let records = vec![
            dated(1, Some("2024-06-05")),
            dated(2, Some("2024-06-06")),
            dated(3, Some("2024-06-09")),
            dated(4, Some("2024-06-12")),
            dated(5, Some("2024-06-13")),
        ];
        let criteria = FilterCriteria {
            start_date: ymd(2024, 6, 6),
            end_date: ymd(2024, 6, 12),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &FavoriteSet::new(), &criteria)), vec![2, 3, 4]);
    }

    #[test]
    fn test_date_single_bound() {
        let records = vec![dated(1, Some("2024-01-01")), dated(2, Some("2024-12-31"))];
        let from = FilterCriteria {
            start_date: ymd(2024, 6, 1),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &FavoriteSet::new(), &from)), vec![2]);

        let to = FilterCriteria {
            end_date: ymd(2024, 6, 1),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &FavoriteSet::new(), &to)), vec![1]);
    }

    #[test]
    fn test_undated_and_unparseable_never_excluded() {
        let records = vec![dated(1, None), dated(2, Some("someday")), dated(3, Some("1999-01-01"))];
        let criteria = FilterCriteria {
            start_date: ymd(2024, 1, 1),
            end_date: ymd(2024, 12, 31),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &FavoriteSet::new(), &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_timestamp_dates_compare_by_day() {
        let records = vec![dated(1, Some("2024-06-12T23:59:00Z"))];
        let criteria = FilterCriteria {
            end_date: ymd(2024, 6, 12),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &FavoriteSet::new(), &criteria)), vec![1]);
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let records: Vec<Record> = (1..=20)
            .map(|i| record(i, &format!("title {}", i), if i % 3 == 0 { "A" } else { "B" }, "x"))
            .collect();
        let favorites = FavoriteSet::from(vec![18, 3, 9, 7]);
        let criteria = FilterCriteria {
            text: "1".into(),
            scope: SearchScope::Title,
            author: AuthorFilter::Only("A".into()),
            favorites_only: false,
            ..Default::default()
        };

        let out = ids(&apply(&records, &favorites, &criteria));
        assert_eq!(out, vec![12, 15, 18]);

        let mut it = records.iter().map(|r| r.id);
        assert!(out.iter().all(|id| it.any(|x| x == *id)));
    }

    #[test]
    fn test_predicates_combine() {
        let favorites = FavoriteSet::from(vec![1, 2]);
        let criteria = FilterCriteria {
            text: "wall".into(),
            author: AuthorFilter::Only("A".into()),
            favorites_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&sample(), &favorites, &criteria)), vec![1]);
    }
}
