//! Property tests for keyboard navigation.

use proptest::prelude::*;

use strata::navigation::{any_item, navigate, navigate_horizontal, RowScope};
use strata::{ItemId, NavItem, NavKey, NavOutcome, VisibleItems};

/// Item counts per level, levels numbered from 1
fn layout() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(1usize..7, 1..5)
}

fn items(counts: &[usize]) -> VisibleItems {
    counts
        .iter()
        .enumerate()
        .flat_map(|(l, &count)| (0..count).map(move |i| NavItem::button(l + 1, format!("i{i}"))))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Up on the first item and Down on the last item keep focus.
    #[test]
    fn property_navigation_boundaries(counts in layout(), level in 1usize..5) {
        let level = 1 + (level - 1) % counts.len();
        let items = items(&counts);
        let first = ItemId::new(level, "i0");
        let last = ItemId::new(level, format!("i{}", counts[level - 1] - 1));

        prop_assert_eq!(navigate(NavKey::Up, &first, &items, any_item), NavOutcome::Stay);
        prop_assert_eq!(navigate(NavKey::Down, &last, &items, any_item), NavOutcome::Stay);
    }

    /// PROPERTY: Up/Down never leave the level and never wrap.
    #[test]
    fn property_vertical_moves_by_one(counts in layout(), level in 1usize..5, index in 0usize..7) {
        let level = 1 + (level - 1) % counts.len();
        let count = counts[level - 1];
        let index = index % count;
        let items = items(&counts);
        let current = ItemId::new(level, format!("i{index}"));

        let down = navigate(NavKey::Down, &current, &items, any_item);
        if index + 1 < count {
            prop_assert_eq!(down, NavOutcome::Focus(ItemId::new(level, format!("i{}", index + 1))));
        } else {
            prop_assert_eq!(down, NavOutcome::Stay);
        }

        let up = navigate(NavKey::Up, &current, &items, any_item);
        if index > 0 {
            prop_assert_eq!(up, NavOutcome::Focus(ItemId::new(level, format!("i{}", index - 1))));
        } else {
            prop_assert_eq!(up, NavOutcome::Stay);
        }
    }

    /// PROPERTY: Right from any item of level L focuses the first item of L+1.
    #[test]
    fn property_cross_level_drill(counts in layout(), level in 1usize..5, index in 0usize..7) {
        let level = 1 + (level - 1) % counts.len();
        let items = items(&counts);
        let current = ItemId::new(level, format!("i{}", index % counts[level - 1]));

        let outcome = navigate(NavKey::Right, &current, &items, any_item);
        if level < counts.len() {
            prop_assert_eq!(outcome, NavOutcome::Focus(ItemId::new(level + 1, "i0")));
        } else {
            prop_assert_eq!(outcome, NavOutcome::Stay);
        }
    }

    /// PROPERTY: row navigation never panics and only targets visible items.
    #[test]
    fn property_row_navigation_stays_visible(
        rows in proptest::collection::vec(1usize..4, 1..5),
        row in 0usize..5,
        index in 0usize..4,
        key in prop_oneof![
            Just(NavKey::Up),
            Just(NavKey::Down),
            Just(NavKey::Left),
            Just(NavKey::Right),
        ],
    ) {
        let items: VisibleItems = rows
            .iter()
            .enumerate()
            .flat_map(|(r, &count)| {
                (0..count).map(move |i| NavItem::button(1, format!("r{r}c{i}")).in_row(format!("row-{r}")))
            })
            .collect();
        let row = row % rows.len();
        let current = ItemId::new(1, format!("r{row}c{}", index % rows[row]));
        let data_id = format!("row-{row}");

        let outcome = navigate_horizontal(key, &current, &items, RowScope::new(&data_id));
        prop_assert!(outcome.is_handled());
        if let Some(target) = outcome.target() {
            prop_assert!(items.contains(target));
        }
    }
}
