use crate::entities::DateRange;

/// Merges overlapping ranges into the minimal sorted set of disjoint ranges.
///
/// Ranges that share a boundary day merge; ranges separated by a gap, even a
/// single day (31 Mar followed by 1 Apr), stay separate.
pub fn consolidate_date_ranges(ranges: &[DateRange]) -> Vec<DateRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|range| range.start_date);

    sorted
        .into_iter()
        .fold(Vec::with_capacity(ranges.len()), |mut consolidated, next| {
            match consolidated.last_mut() {
                // Wholly contained.
                Some(last) if next.end_date <= last.end_date => {}
                Some(last) if next.start_date <= last.end_date => {
                    last.end_date = next.end_date;
                }
                _ => consolidated.push(next),
            }
            consolidated
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).unwrap()
    }

    fn covered_days(ranges: &[DateRange]) -> HashSet<NaiveDate> {
        ranges
            .iter()
            .flat_map(|r| r.start_date.iter_days().take(r.num_days() as usize))
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(consolidate_date_ranges(&[]).is_empty());
    }

    #[test]
    fn merges_overlapping_and_drops_contained() {
        let result = consolidate_date_ranges(&[
            range(d(2022, 6, 1), d(2022, 9, 30)),
            range(d(2022, 4, 1), d(2022, 6, 30)),
            range(d(2022, 7, 1), d(2022, 7, 31)),
        ]);
        assert_eq!(result, vec![range(d(2022, 4, 1), d(2022, 9, 30))]);
    }

    #[test]
    fn merges_on_shared_boundary_day() {
        let result = consolidate_date_ranges(&[
            range(d(2022, 4, 1), d(2022, 6, 30)),
            range(d(2022, 6, 30), d(2022, 8, 31)),
        ]);
        assert_eq!(result, vec![range(d(2022, 4, 1), d(2022, 8, 31))]);
    }

    #[test]
    fn keeps_adjacent_ranges_separate() {
        let input = vec![
            range(d(2022, 4, 1), d(2022, 6, 30)),
            range(d(2022, 7, 1), d(2022, 8, 31)),
        ];
        assert_eq!(consolidate_date_ranges(&input), input);
    }

    #[test]
    fn keeps_disjoint_ranges_sorted() {
        let result = consolidate_date_ranges(&[
            range(d(2023, 1, 1), d(2023, 3, 31)),
            range(d(2022, 4, 1), d(2022, 6, 30)),
        ]);
        assert_eq!(
            result,
            vec![
                range(d(2022, 4, 1), d(2022, 6, 30)),
                range(d(2023, 1, 1), d(2023, 3, 31)),
            ]
        );
    }

    fn arb_ranges() -> impl Strategy<Value = Vec<DateRange>> {
        prop::collection::vec((0i64..400, 0i64..90), 0..12).prop_map(|spans| {
            let base = d(2022, 4, 1);
            spans
                .into_iter()
                .map(|(offset, len)| {
                    let start = base + Duration::days(offset);
                    range(start, start + Duration::days(len))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn output_is_sorted_and_disjoint(ranges in arb_ranges()) {
            let result = consolidate_date_ranges(&ranges);
            for pair in result.windows(2) {
                prop_assert!(pair[0].end_date < pair[1].start_date);
            }
        }

        #[test]
        fn covered_days_are_preserved(ranges in arb_ranges()) {
            let result = consolidate_date_ranges(&ranges);
            prop_assert_eq!(covered_days(&result), covered_days(&ranges));
        }

        #[test]
        fn consolidation_is_idempotent(ranges in arb_ranges()) {
            let once = consolidate_date_ranges(&ranges);
            let twice = consolidate_date_ranges(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
