//! Row-major ordering of detected card regions.
//!
//! When the detection count matches `rows × cols`, regions are walked by
//! vertical centre and split into rows wherever a centre moves more than half
//! a card height away from the current row's anchor; each row is then sorted
//! by horizontal centre.
//!
//! Otherwise a single stable sort with a fuzzy comparator is used: two regions
//! on roughly the same line compare by x, everything else by y. That
//! comparator is not a total order (the "same line" test depends on the
//! height of the left operand only, and is not transitive under skew), so it
//! is driven through [`stable_sort_by`] which reproduces the reference
//! runtime's ordering for fewer than 32 regions and never panics on
//! inconsistent answers, unlike `slice::sort_by`.

use crate::geometry::CardRegion;
use crate::types::GridShape;
use serde::Serialize;
use std::cmp::Ordering;

/// Which ordering strategy produced the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum OrderingPath {
    /// Count matched the grid; rows were grouped explicitly.
    RowGrouped { rows_found: usize },
    /// Count mismatch; fuzzy comparator sort.
    FuzzyFallback,
}

/// Sort `regions` into reading order for `grid`.
pub fn order_regions(regions: &[CardRegion], grid: GridShape) -> (Vec<CardRegion>, OrderingPath) {
    if regions.len() != grid.expected_count() {
        let mut sorted = regions.to_vec();
        stable_sort_by(&mut sorted, fuzzy_compare);
        return (sorted, OrderingPath::FuzzyFallback);
    }
    if regions.is_empty() {
        return (Vec::new(), OrderingPath::RowGrouped { rows_found: 0 });
    }

    let mut by_y = regions.to_vec();
    by_y.sort_by_key(|r| r.center_y());

    let mut rows: Vec<Vec<CardRegion>> = Vec::new();
    let mut current: Vec<CardRegion> = Vec::new();
    let mut anchor_y = by_y[0].center_y();
    for region in by_y {
        if (region.center_y() - anchor_y).abs() > region.height() / 2 {
            rows.push(std::mem::take(&mut current));
            anchor_y = region.center_y();
        }
        current.push(region);
    }
    rows.push(current);

    let rows_found = rows.len();
    let ordered = rows
        .into_iter()
        .flat_map(|mut row| {
            row.sort_by_key(|r| r.center_x());
            row
        })
        .collect();
    (ordered, OrderingPath::RowGrouped { rows_found })
}

/// Same-line regions compare by x, others by y.
pub fn fuzzy_compare(a: &CardRegion, b: &CardRegion) -> Ordering {
    if (a.center_y() - b.center_y()).abs() < a.height() / 2 {
        a.center_x().cmp(&b.center_x())
    } else {
        a.center_y().cmp(&b.center_y())
    }
}

/// Stable sort tolerant of comparators that are not total orders.
///
/// Detects the leading ascending (or strictly descending, then reversed) run
/// and binary-inserts the remaining elements. For short inputs this is
/// exactly the comparison sequence TimSort performs, so fallback orders stay
/// compatible; longer inputs still get a deterministic stable result.
pub fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n < 2 {
        return;
    }

    let run = if compare(&items[1], &items[0]) == Ordering::Less {
        let mut run = 2;
        while run < n && compare(&items[run], &items[run - 1]) == Ordering::Less {
            run += 1;
        }
        items[..run].reverse();
        run
    } else {
        let mut run = 2;
        while run < n && compare(&items[run], &items[run - 1]) != Ordering::Less {
            run += 1;
        }
        run
    };

    for start in run..n {
        let (mut left, mut right) = (0, start);
        while left < right {
            let mid = (left + right) / 2;
            if compare(&items[start], &items[mid]) == Ordering::Less {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        items[left..=start].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(cx: i32, cy: i32) -> CardRegion {
        CardRegion::new(cx - 50, cy - 70, cx + 50, cy + 70)
    }

    fn grid_3x2() -> Vec<CardRegion> {
        vec![
            card(100, 100),
            card(250, 100),
            card(100, 300),
            card(250, 300),
            card(100, 500),
            card(250, 500),
        ]
    }

    #[test]
    fn exact_count_groups_rows() {
        let expected = grid_3x2();
        let mut shuffled = expected.clone();
        shuffled.reverse();
        shuffled.swap(1, 4);
        let (ordered, path) = order_regions(&shuffled, GridShape::new(3, 2));
        assert_eq!(ordered, expected);
        assert_eq!(path, OrderingPath::RowGrouped { rows_found: 3 });
    }

    #[test]
    fn small_vertical_jitter_stays_in_row() {
        let regions = vec![card(250, 112), card(100, 95), card(100, 300), card(250, 290)];
        let (ordered, _) = order_regions(&regions, GridShape::new(2, 2));
        assert_eq!(
            ordered,
            vec![card(100, 95), card(250, 112), card(100, 300), card(250, 290)]
        );
    }

    #[test]
    fn mismatch_uses_fuzzy_order() {
        let mut regions = grid_3x2();
        regions.remove(3);
        regions.reverse();
        let (ordered, path) = order_regions(&regions, GridShape::new(3, 2));
        assert_eq!(path, OrderingPath::FuzzyFallback);
        assert_eq!(
            ordered,
            vec![
                card(100, 100),
                card(250, 100),
                card(100, 300),
                card(100, 500),
                card(250, 500)
            ]
        );
    }

    // a ~ b and b ~ c share a line, a and c do not: fuzzy_compare is
    // intransitive here (c < b < a < c).
    fn skewed() -> [CardRegion; 4] {
        let a = CardRegion::new(250, 50, 350, 150); // centre (300, 100)
        let b = CardRegion::new(150, 90, 250, 190); // centre (200, 140)
        let c = CardRegion::new(50, 130, 150, 230); // centre (100, 180)
        let d = CardRegion::new(150, 350, 250, 450); // centre (200, 400)
        [a, b, c, d]
    }

    #[test]
    fn fuzzy_order_is_intransitive_on_skewed_rows() {
        let [a, b, c, _] = skewed();
        assert_eq!(fuzzy_compare(&b, &a), Ordering::Less);
        assert_eq!(fuzzy_compare(&c, &b), Ordering::Less);
        assert_eq!(fuzzy_compare(&a, &c), Ordering::Less);
    }

    #[test]
    fn skewed_input_follows_run_and_binary_insertion() {
        let [a, b, c, d] = skewed();

        // descending run covers everything and is reversed
        let mut items = vec![a, b, c];
        stable_sort_by(&mut items, fuzzy_compare);
        assert_eq!(items, vec![c, b, a]);

        // same three regions, different start: a different "sorted" order
        let mut items = vec![c, a, b];
        stable_sort_by(&mut items, fuzzy_compare);
        assert_eq!(items, vec![b, a, c]);

        // run [a, d], then b is inserted at 0 and c between a and d
        let (ordered, path) = order_regions(&[a, d, b, c], GridShape::new(2, 3));
        assert_eq!(path, OrderingPath::FuzzyFallback);
        assert_eq!(ordered, vec![b, a, c, d]);
    }

    #[test]
    fn stable_sort_matches_std_on_total_orders() {
        let mut values: Vec<(i32, usize)> = [5, 3, 9, 3, 1, 5, 7, 0, 3]
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();
        let mut expected = values.clone();
        expected.sort_by_key(|&(v, _)| v);
        stable_sort_by(&mut values, |a, b| a.0.cmp(&b.0));
        assert_eq!(values, expected);
    }

    #[test]
    fn stable_sort_reverses_leading_descending_run() {
        let mut values = vec![9, 7, 4, 2, 8, 1];
        stable_sort_by(&mut values, |a, b| a.cmp(b));
        assert_eq!(values, vec![1, 2, 4, 7, 8, 9]);
    }

    #[test]
    fn stable_sort_survives_intransitive_comparator() {
        // rock-paper-scissors: no total order exists
        let beats = |a: &u8, b: &u8| match (a, b) {
            (0, 1) | (1, 2) | (2, 0) => Ordering::Less,
            (x, y) if x == y => Ordering::Equal,
            _ => Ordering::Greater,
        };
        let mut values = vec![0u8, 1, 2, 0, 1, 2, 2, 1, 0];
        stable_sort_by(&mut values, beats);
        let mut again = vec![0u8, 1, 2, 0, 1, 2, 2, 1, 0];
        stable_sort_by(&mut again, beats);
        assert_eq!(values, again);
        assert_eq!(values.len(), 9);
    }
}
