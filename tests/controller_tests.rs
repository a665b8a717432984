//! Integration tests for the controller's edit/undo/redo flow.
//!
//! Covers the core editing scenarios: button creation with sequential
//! ids, grouped undo/redo with linear history, redo invalidation, and
//! the bounded undo stack.

mod common;

use common::RecordingHost;
use rigpicker::controller::PickerController;
use rigpicker::models::{ButtonSpec, Picker, Vec2};

fn controller_with_picker(name: &str) -> PickerController<RecordingHost> {
    let mut controller = PickerController::new(RecordingHost::new());
    controller.create_picker(name);
    controller.set_current_picker(name);
    controller
}

fn current_picker(controller: &PickerController<RecordingHost>) -> &Picker {
    controller.model().current().expect("a current picker")
}

#[test]
fn test_add_select_button_undo_redo_keeps_id() {
    let mut controller = controller_with_picker("P1");

    let id = controller
        .add_button(
            ButtonSpec::default()
                .at(Vec2::new(50.0, 50.0))
                .sized(Vec2::new(80.0, 40.0)),
        )
        .unwrap();
    assert_eq!(id, "button_1");
    assert_eq!(current_picker(&controller).buttons.len(), 1);

    assert!(controller.undo());
    assert_eq!(current_picker(&controller).buttons.len(), 0);

    assert!(controller.redo());
    let picker = current_picker(&controller);
    assert_eq!(picker.buttons.len(), 1);
    assert_eq!(picker.buttons[0].id, "button_1");
    assert_eq!(picker.buttons[0].position, Vec2::new(50.0, 50.0));
    assert_eq!(picker.buttons[0].size, Vec2::new(80.0, 40.0));
}

#[test]
fn test_sequential_ids_are_distinct() {
    let mut controller = controller_with_picker("P1");
    let ids: Vec<String> = (0..6)
        .map(|_| controller.add_button(ButtonSpec::default()).unwrap())
        .collect();

    assert_eq!(
        ids,
        ["button_1", "button_2", "button_3", "button_4", "button_5", "button_6"]
    );
}

#[test]
fn test_three_buttons_two_undos_two_redos() {
    let mut controller = controller_with_picker("P1");
    for _ in 0..3 {
        controller.add_button(ButtonSpec::default());
    }

    controller.undo();
    controller.undo();
    let ids: Vec<&str> = current_picker(&controller)
        .buttons
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, ["button_1"]);

    controller.redo();
    controller.redo();
    let ids: Vec<&str> = current_picker(&controller)
        .buttons
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, ["button_1", "button_2", "button_3"]);
}

#[test]
fn test_undo_redo_inverse_law() {
    let mut controller = controller_with_picker("P1");

    // A mixed action sequence, snapshotting the store after each commit.
    let mut snapshots = vec![controller.model().clone()];
    controller.add_button(ButtonSpec::default());
    snapshots.push(controller.model().clone());
    controller.add_button(ButtonSpec::default().labeled("Second"));
    snapshots.push(controller.model().clone());
    controller.move_button("button_1", Vec2::new(120.0, 30.0));
    snapshots.push(controller.model().clone());
    controller.update_button("button_2", "Recolor Button", |b| {
        b.color = rigpicker::models::Color::new(1.0, 0.0, 0.0);
    });
    snapshots.push(controller.model().clone());
    controller.remove_button("button_1");
    snapshots.push(controller.model().clone());

    let k = snapshots.len() - 1;

    // Undo k times, matching each intermediate snapshot on the way down.
    for step in (0..k).rev() {
        assert!(controller.undo());
        assert_eq!(controller.model(), &snapshots[step], "undo to state {step}");
    }
    assert!(!controller.undo());

    // Redo k times, matching each intermediate snapshot on the way up.
    for step in 1..=k {
        assert!(controller.redo());
        assert_eq!(controller.model(), &snapshots[step], "redo to state {step}");
    }
    assert!(!controller.redo());
}

#[test]
fn test_redo_invalidated_by_new_commit() {
    let mut controller = controller_with_picker("P1");
    controller.add_button(ButtonSpec::default());
    controller.undo();

    // A fresh action clears the redo stack.
    controller.add_button(ButtonSpec::default());
    assert!(!controller.redo());
    assert_eq!(current_picker(&controller).buttons.len(), 1);
}

#[test]
fn test_history_bound_evicts_oldest() {
    let mut controller = controller_with_picker("P1");
    for _ in 0..51 {
        controller.add_button(ButtonSpec::default());
    }

    let mut undone = 0;
    while controller.undo() {
        undone += 1;
    }
    assert_eq!(undone, 50);
    // The first Add Button fell off the stack, so one button survives.
    assert_eq!(current_picker(&controller).buttons.len(), 1);
    assert_eq!(current_picker(&controller).buttons[0].id, "button_1");
}

#[test]
fn test_add_button_without_current_picker() {
    let mut controller = PickerController::new(RecordingHost::new());
    controller.create_picker("P1");
    // Never made current.
    assert_eq!(controller.add_button(ButtonSpec::default()), None);
}

#[test]
fn test_labels_track_stack_tops() {
    let mut controller = controller_with_picker("P1");
    assert_eq!(controller.undo_label(), "Undo");
    assert_eq!(controller.redo_label(), "Redo");

    controller.add_button(ButtonSpec::default());
    controller.move_button("button_1", Vec2::new(10.0, 10.0));
    assert_eq!(controller.undo_label(), "Undo Move Button");

    controller.undo();
    assert_eq!(controller.undo_label(), "Undo Add Button");
    assert_eq!(controller.redo_label(), "Redo Move Button");
}

#[test]
fn test_update_button_noop_commits_nothing() {
    let mut controller = controller_with_picker("P1");
    controller.add_button(ButtonSpec::default());
    let label_before = controller.undo_label();

    assert!(controller.update_button("button_1", "Touch Nothing", |_| {}));
    assert_eq!(controller.undo_label(), label_before);
}

#[test]
fn test_update_unknown_button_fails() {
    let mut controller = controller_with_picker("P1");
    assert!(!controller.update_button("button_9", "Rename", |b| {
        b.label = "ghost".to_string();
    }));
    assert!(!controller.remove_button("button_9"));
}

#[test]
fn test_undo_batch_runs_inside_one_host_chunk() {
    let mut controller = controller_with_picker("P1");
    controller.add_button(ButtonSpec::default());

    controller.host().chunk_events.borrow_mut().clear();
    controller.undo();
    controller.redo();
    assert_eq!(
        *controller.host().chunk_events.borrow(),
        ["open", "close", "open", "close"]
    );

    // An empty undo never touches the host boundary.
    controller.host().chunk_events.borrow_mut().clear();
    let mut empty = PickerController::new(RecordingHost::new());
    assert!(!empty.undo());
    assert!(empty.host().chunk_events.borrow().is_empty());
}

#[test]
fn test_removing_current_picker_clears_selection_state() {
    let mut controller = controller_with_picker("P1");
    controller.create_picker("P2");
    controller.remove_picker("P1");

    assert!(controller.model().current().is_none());
    assert_eq!(controller.add_button(ButtonSpec::default()), None);

    assert!(controller.set_current_picker("P2"));
    assert!(controller.add_button(ButtonSpec::default()).is_some());
}
