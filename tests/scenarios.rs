//! End-to-end selector scenarios through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use strata::ui::widgets::MultiSelect;
use strata::{ItemId, LevelKey, NavKey, OptionNode, SelectionManager, SelectorKind};

fn group_a() -> Vec<OptionNode> {
    vec![OptionNode::new("a", "Group A").with_children(vec![
        OptionNode::new("a1", "Item 1"),
        OptionNode::new("a2", "Item 2"),
    ])]
}

#[test]
fn selecting_the_last_level_closes_the_selector() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let data = group_a();
    let manager = SelectionManager::new(data.clone(), 2, SelectorKind::Default)
        .on_change(move |state, level| sink.borrow_mut().push((state.path_ids().join("/"), level)));
    assert_eq!(manager.state().path_ids(), vec!["a", "a1"]);

    let mut select = MultiSelect::new(manager);
    select.open();

    // Re-selecting the root option leaves the state unchanged.
    let before = select.state().clone();
    select.activate(&ItemId::new(1, "a"));
    assert_eq!(select.state(), &before);
    assert!(select.is_open());

    assert!(select.focus_item(ItemId::new(2, "a2")));
    select.navigate(NavKey::Activate);

    assert_eq!(select.state().path_ids(), vec!["a", "a2"]);
    assert!(!select.is_open());
    assert_eq!(
        *calls.borrow(),
        vec![("a/a1".to_string(), 1), ("a/a2".to_string(), 2)]
    );
}

#[test]
fn select_path_drives_the_same_state_as_navigation() {
    let mut manager = SelectionManager::new(group_a(), 2, SelectorKind::Default);
    manager.select_path(&["a", "a2"]).unwrap();

    let mut select = MultiSelect::new(SelectionManager::new(group_a(), 2, SelectorKind::Default));
    select.open();
    select.navigate(NavKey::Right);
    select.navigate(NavKey::Down);
    select.navigate(NavKey::Activate);

    assert_eq!(select.state(), manager.state());
}

#[test]
fn advanced_selector_keeps_nested_choice_in_its_own_slot() {
    let data = vec![OptionNode::new("m", "Model").with_children(vec![
        OptionNode::new("v1", "V1"),
        OptionNode::new("v2", "V2"),
    ])];
    let mut manager = SelectionManager::new(data, 1, SelectorKind::AdvancedSelector);
    assert_eq!(
        manager.state().get(LevelKey::nested(1, 1)).map(|o| o.id.as_str()),
        Some("v1")
    );

    manager.select_path(&["m", "v2"]).unwrap();
    let json = serde_json::to_value(manager.state()).unwrap();
    assert_eq!(json["level1"]["id"], "m");
    assert_eq!(json["level1_1"]["id"], "v2");
}
