//! Property tests for cascading selection.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use strata::selection::{default_selections, SelectionManager, SelectorKind};
use strata::{LevelKey, OptionNode, SelectionState};

#[derive(Debug, Clone)]
struct Shape(Vec<Shape>);

fn shape() -> impl Strategy<Value = Shape> {
    Just(Shape(Vec::new())).prop_recursive(4, 48, 4, |inner| {
        proptest::collection::vec(inner, 0..4).prop_map(Shape)
    })
}

fn build(shape: &Shape, prefix: &str) -> Vec<OptionNode> {
    shape
        .0
        .iter()
        .enumerate()
        .map(|(i, child)| {
            let id = format!("{prefix}{i}");
            OptionNode::new(id.clone(), format!("Option {id}"))
                .with_children(build(child, &format!("{id}-")))
        })
        .collect()
}

fn tree() -> impl Strategy<Value = Vec<OptionNode>> {
    proptest::collection::vec(shape(), 1..4).prop_map(|roots| build(&Shape(roots), "n"))
}

fn kind() -> impl Strategy<Value = SelectorKind> {
    prop_oneof![Just(SelectorKind::Default), Just(SelectorKind::AdvancedSelector)]
}

/// Pick the `index`-th option visible at `level`, if any
fn pick(manager: &SelectionManager, level: usize, index: usize) -> Option<OptionNode> {
    let options = manager.level_data(level);
    (!options.is_empty()).then(|| options[index % options.len()].clone())
}

fn assert_cascaded(state: &SelectionState, from: usize, levels: usize) -> Result<(), TestCaseError> {
    for level in from + 1..=levels {
        let expected = state.at(level - 1).and_then(OptionNode::first_child);
        prop_assert_eq!(
            state.at(level).map(|o| o.id.as_str()),
            expected.map(|o| o.id.as_str()),
            "level {} does not hold the first child of level {}",
            level,
            level - 1
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every level below the selected one holds the first child
    /// of the level above it.
    #[test]
    fn property_cascade_invariant(
        data in tree(),
        levels in 1usize..5,
        kind in kind(),
        picks in proptest::collection::vec((1usize..5, 0usize..8), 1..6),
    ) {
        let mut manager = SelectionManager::new(data, levels, kind);
        assert_cascaded(manager.state(), 1, levels)?;

        for (level, index) in picks {
            let level = 1 + (level - 1) % levels;
            if let Some(option) = pick(&manager, level, index) {
                manager.select_option(LevelKey::level(level), option);
                assert_cascaded(manager.state(), level, levels)?;
            }
        }
    }

    /// PROPERTY: selecting the same option twice equals selecting it once.
    #[test]
    fn property_select_is_idempotent(
        data in tree(),
        levels in 1usize..5,
        kind in kind(),
        level in 1usize..5,
        index in 0usize..8,
    ) {
        let mut manager = SelectionManager::new(data, levels, kind);
        let level = 1 + (level - 1) % levels;
        if let Some(option) = pick(&manager, level, index) {
            manager.select_option(LevelKey::level(level), option.clone());
            let once = manager.state().clone();
            manager.select_option(LevelKey::level(level), option);
            prop_assert_eq!(manager.state(), &once);
        }
    }

    /// PROPERTY: default selections equal selecting the first root option
    /// on an empty state.
    #[test]
    fn property_default_selection_equivalence(
        data in tree(),
        levels in 1usize..5,
        kind in kind(),
    ) {
        let expected = default_selections(&data, levels, kind.policy().as_ref());
        let first = data[0].clone();
        let mut manager = SelectionManager::new(data, levels, kind)
            .with_default_value(SelectionState::blank(levels));
        manager.select_option(LevelKey::level(1), first);

        prop_assert_eq!(manager.state(), &expected);
        prop_assert_eq!(&manager.default_selections(), &expected);
    }

    /// PROPERTY: on_change fires once per selection with the level passed in.
    #[test]
    fn property_on_change_reports_selected_level(
        data in tree(),
        levels in 1usize..5,
        kind in kind(),
        picks in proptest::collection::vec((1usize..5, 0usize..8), 1..8),
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut manager = SelectionManager::new(data, levels, kind)
            .on_change(move |_, level| sink.borrow_mut().push(level));

        let mut expected = Vec::new();
        for (level, index) in picks {
            let level = 1 + (level - 1) % levels;
            if let Some(option) = pick(&manager, level, index) {
                manager.select_option(LevelKey::level(level), option);
                expected.push(level);
            }
        }
        prop_assert_eq!(&*calls.borrow(), &expected);
    }

    /// PROPERTY: the canonical tree is never mutated by selections.
    #[test]
    fn property_selection_never_mutates_data(
        data in tree(),
        levels in 1usize..5,
        picks in proptest::collection::vec((1usize..5, 0usize..8), 1..6),
    ) {
        let original = data.clone();
        let mut manager = SelectionManager::new(data, levels, SelectorKind::AdvancedSelector);
        for (level, index) in picks {
            let level = 1 + (level - 1) % levels;
            if let Some(option) = pick(&manager, level, index) {
                manager.select_option(LevelKey::level(level), option);
            }
        }
        prop_assert_eq!(manager.data(), original.as_slice());
    }
}
