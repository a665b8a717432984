//! Integration tests for picker file save/load.

mod common;

use common::RecordingHost;
use rigpicker::controller::PickerController;
use rigpicker::models::{
    AttributeOp, ButtonKind, ButtonSpec, Color, PoseData, ScriptLanguage, Shape,
    SliderOrientation, TextAlignment, Vec2,
};
use rigpicker::services::PickerFileService;
use std::fs;

fn every_variant() -> Vec<ButtonKind> {
    let mut pose = PoseData::new();
    pose.entry("spine_ctrl".to_string())
        .or_default()
        .insert("rotateX".to_string(), 45.0);

    vec![
        ButtonKind::Select {
            target_nodes: vec!["L_arm_ctrl".to_string()],
            hierarchical: true,
            mirror: true,
            mirror_axis: rigpicker::models::MirrorAxis::Xy,
        },
        ButtonKind::Script {
            script: "print('pose')".to_string(),
            language: ScriptLanguage::Python,
        },
        ButtonKind::Pose {
            target_nodes: vec!["spine_ctrl".to_string()],
            pose_data: pose,
        },
        ButtonKind::Attribute {
            target_node: "hand_ctrl".to_string(),
            attribute: "grip".to_string(),
            operation: AttributeOp::Toggle,
            value: 1.0,
            nudge_amount: 0.1,
        },
        ButtonKind::Slider {
            target_node: "jaw_ctrl".to_string(),
            attribute: "open".to_string(),
            range_min: 0.0,
            range_max: 10.0,
            current_value: 3.0,
            is_2d: true,
            second_attribute: "sideways".to_string(),
            second_range_min: -5.0,
            second_range_max: 5.0,
            second_current_value: 1.0,
            orientation: SliderOrientation::Vertical,
        },
        ButtonKind::Checkbox {
            target_node: "eye_ctrl".to_string(),
            attribute: "visibility".to_string(),
            checked_value: 1.0,
            unchecked_value: 0.0,
            is_checked: true,
        },
        ButtonKind::Radius {
            target_node: "hip_ctrl".to_string(),
            attribute: "spread".to_string(),
            min_value: 0.0,
            max_value: 20.0,
            current_value: 2.0,
        },
        ButtonKind::Text {
            font_size: 18,
            is_bold: true,
            is_italic: true,
            text_alignment: TextAlignment::Right,
        },
    ]
}

#[test]
fn test_full_variant_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pickers.json");

    let mut controller = PickerController::new(RecordingHost::new());
    {
        let picker = controller.create_picker("Body");
        picker.background_image = Some("rigs/body.png".to_string());
        picker.canvas_size = Vec2::new(1024.0, 768.0);
        picker.view_center = Vec2::new(12.0, -8.0);
        picker.view_zoom = 1.5;
    }
    controller.set_current_picker("Body");
    for (i, kind) in every_variant().into_iter().enumerate() {
        controller.add_button(
            ButtonSpec::new(kind)
                .at(Vec2::new(i as f32 * 60.0, 40.0))
                .colored(Color::new(0.2, 0.4, 0.8))
                .shaped(Shape::Hexagon)
                .labeled(format!("Button {i}")),
        );
    }

    assert!(controller.save_pickers(&path));

    let mut reloaded = PickerController::new(RecordingHost::new());
    assert!(reloaded.load_pickers(&path));

    assert_eq!(
        reloaded.model().pickers.get("Body"),
        controller.model().pickers.get("Body")
    );
    // The first (only) picker becomes current on load.
    assert_eq!(reloaded.model().current().unwrap().name, "Body");
}

#[test]
fn test_load_preserves_picker_and_button_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pickers.json");

    let mut controller = PickerController::new(RecordingHost::new());
    for name in ["Zebra", "Alpha", "Face"] {
        controller.create_picker(name);
    }
    controller.set_current_picker("Zebra");
    for _ in 0..3 {
        controller.add_button(ButtonSpec::default());
    }
    assert!(controller.save_pickers(&path));

    let mut reloaded = PickerController::new(RecordingHost::new());
    assert!(reloaded.load_pickers(&path));

    let names: Vec<&str> = reloaded.model().pickers.keys().map(String::as_str).collect();
    assert_eq!(names, ["Zebra", "Alpha", "Face"]);
    assert_eq!(reloaded.model().current().unwrap().name, "Zebra");

    let ids: Vec<&str> = reloaded.model().pickers["Zebra"]
        .buttons
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, ["button_1", "button_2", "button_3"]);
}

#[test]
fn test_sparse_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparse.json");
    fs::write(
        &path,
        r#"{
            "pickers": {
                "Legacy": {
                    "name": "Legacy",
                    "buttons": [
                        {"id": "button_1", "type": "select"},
                        {"id": "button_2", "type": "slider", "target_node": "jaw_ctrl"}
                    ]
                }
            }
        }"#,
    )
    .unwrap();

    let store = PickerFileService::load(&path).unwrap();
    let picker = &store.pickers["Legacy"];
    assert_eq!(picker.canvas_size, Vec2::new(800.0, 600.0));
    assert_eq!(picker.view_zoom, 1.0);

    let button = &picker.buttons[0];
    assert_eq!(button.size, Vec2::new(50.0, 50.0));
    assert_eq!(button.color, Color::with_alpha(0.5, 0.5, 0.5, 1.0));
    assert!(button.visible);

    match &picker.buttons[1].kind {
        ButtonKind::Slider {
            target_node,
            range_max,
            orientation,
            ..
        } => {
            assert_eq!(target_node, "jaw_ctrl");
            assert_eq!(*range_max, 100.0);
            assert_eq!(*orientation, SliderOrientation::Horizontal);
        }
        other => panic!("expected slider, got {}", other.tag()),
    }
}

#[test]
fn test_load_failure_reports_false_and_keeps_model() {
    let dir = tempfile::tempdir().unwrap();

    let mut controller = PickerController::new(RecordingHost::new());
    controller.create_picker("Keep");
    controller.set_current_picker("Keep");

    // Missing file
    assert!(!controller.load_pickers(&dir.path().join("nope.json")));

    // Malformed JSON
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{\"pickers\":").unwrap();
    assert!(!controller.load_pickers(&broken));

    // The parse happened before any mutation, so the model is intact.
    assert_eq!(controller.model().current().unwrap().name, "Keep");
}

#[test]
fn test_save_failure_reports_false() {
    let controller = PickerController::new(RecordingHost::new());
    // Parent is a file, not a directory: create_dir_all fails.
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file").unwrap();
    assert!(!controller.save_pickers(&blocker.join("pickers.json")));
}

#[test]
fn test_load_clears_undo_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pickers.json");

    let mut controller = PickerController::new(RecordingHost::new());
    controller.create_picker("Body");
    controller.set_current_picker("Body");
    controller.add_button(ButtonSpec::default());
    assert!(controller.save_pickers(&path));

    assert!(controller.load_pickers(&path));
    // The history referenced the replaced model and was dropped with it.
    assert!(!controller.undo());
    assert_eq!(controller.undo_label(), "Undo");
}

#[test]
fn test_empty_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    let controller = PickerController::new(RecordingHost::new());
    assert!(controller.save_pickers(&path));

    let mut reloaded = PickerController::new(RecordingHost::new());
    assert!(reloaded.load_pickers(&path));
    assert!(reloaded.model().pickers.is_empty());
    assert!(reloaded.model().current().is_none());
}
