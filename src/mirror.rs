//! Mirroring helpers: node names by convention, positions across an axis.
//!
//! Rigs conventionally name paired controls `L_*`/`R_*`, `*_L`/`*_R`, or
//! with `Left`/`Right` embedded. These helpers flip a name to its
//! opposite side and reflect canvas positions, which together produce a
//! mirrored copy of a button ready to re-insert through the creation
//! entry point.

use crate::models::{Button, ButtonKind, MirrorAxis, PoseData, Vec2};
use regex::Regex;
use std::sync::OnceLock;

/// Side-swap rules in priority order: prefix, suffix, then embedded
/// words. The first rule that matches is applied.
fn mirror_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"^L_", "R_"),
            (r"^R_", "L_"),
            (r"_L$", "_R"),
            (r"_R$", "_L"),
            (r"Left", "Right"),
            (r"Right", "Left"),
            (r"left", "right"),
            (r"right", "left"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| {
            // The patterns are literals; compilation cannot fail.
            (Regex::new(pattern).unwrap(), replacement)
        })
        .collect()
    })
}

/// Flips a node name to the opposite side by naming convention.
///
/// Names that match no convention are returned unchanged.
///
/// # Examples
///
/// ```
/// use rigpicker::mirror::mirror_node_name;
///
/// assert_eq!(mirror_node_name("L_arm_ctrl"), "R_arm_ctrl");
/// assert_eq!(mirror_node_name("handLeft"), "handRight");
/// assert_eq!(mirror_node_name("spine_ctrl"), "spine_ctrl");
/// ```
#[must_use]
pub fn mirror_node_name(name: &str) -> String {
    for (pattern, replacement) in mirror_patterns() {
        if pattern.is_match(name) {
            return pattern.replace_all(name, *replacement).into_owned();
        }
    }
    name.to_string()
}

/// Reflects a canvas position across the given axis about `center`.
#[must_use]
pub fn mirror_position(position: Vec2, axis: MirrorAxis, center: Vec2) -> Vec2 {
    match axis {
        MirrorAxis::X => Vec2::new(2.0 * center.x - position.x, position.y),
        MirrorAxis::Y => Vec2::new(position.x, 2.0 * center.y - position.y),
        MirrorAxis::Xy => Vec2::new(2.0 * center.x - position.x, 2.0 * center.y - position.y),
    }
}

/// Produces a mirrored copy of a button: position reflected, every node
/// name in the payload flipped to the opposite side.
///
/// The copy keeps the source id; insertion goes back through the
/// creation entry point (via [`crate::models::ButtonSpec::from_button`]),
/// which assigns a fresh one.
#[must_use]
pub fn mirror_button(button: &Button, axis: MirrorAxis, center: Vec2) -> Button {
    let mut mirrored = button.clone();
    mirrored.position = mirror_position(button.position, axis, center);
    mirrored.kind = mirror_kind(&button.kind);
    mirrored
}

fn mirror_kind(kind: &ButtonKind) -> ButtonKind {
    match kind {
        ButtonKind::Select {
            target_nodes,
            hierarchical,
            mirror,
            mirror_axis,
        } => ButtonKind::Select {
            target_nodes: mirror_names(target_nodes),
            hierarchical: *hierarchical,
            mirror: *mirror,
            mirror_axis: *mirror_axis,
        },
        ButtonKind::Pose {
            target_nodes,
            pose_data,
        } => ButtonKind::Pose {
            target_nodes: mirror_names(target_nodes),
            pose_data: mirror_pose_data(pose_data),
        },
        ButtonKind::Attribute {
            target_node,
            attribute,
            operation,
            value,
            nudge_amount,
        } => ButtonKind::Attribute {
            target_node: mirror_node_name(target_node),
            attribute: attribute.clone(),
            operation: *operation,
            value: *value,
            nudge_amount: *nudge_amount,
        },
        ButtonKind::Slider {
            target_node,
            attribute,
            range_min,
            range_max,
            current_value,
            is_2d,
            second_attribute,
            second_range_min,
            second_range_max,
            second_current_value,
            orientation,
        } => ButtonKind::Slider {
            target_node: mirror_node_name(target_node),
            attribute: attribute.clone(),
            range_min: *range_min,
            range_max: *range_max,
            current_value: *current_value,
            is_2d: *is_2d,
            second_attribute: second_attribute.clone(),
            second_range_min: *second_range_min,
            second_range_max: *second_range_max,
            second_current_value: *second_current_value,
            orientation: *orientation,
        },
        ButtonKind::Checkbox {
            target_node,
            attribute,
            checked_value,
            unchecked_value,
            is_checked,
        } => ButtonKind::Checkbox {
            target_node: mirror_node_name(target_node),
            attribute: attribute.clone(),
            checked_value: *checked_value,
            unchecked_value: *unchecked_value,
            is_checked: *is_checked,
        },
        ButtonKind::Radius {
            target_node,
            attribute,
            min_value,
            max_value,
            current_value,
        } => ButtonKind::Radius {
            target_node: mirror_node_name(target_node),
            attribute: attribute.clone(),
            min_value: *min_value,
            max_value: *max_value,
            current_value: *current_value,
        },
        // Scripts and labels carry no node references to flip.
        ButtonKind::Script { .. } | ButtonKind::Text { .. } => kind.clone(),
    }
}

fn mirror_names(names: &[String]) -> Vec<String> {
    names.iter().map(|n| mirror_node_name(n)).collect()
}

fn mirror_pose_data(pose_data: &PoseData) -> PoseData {
    pose_data
        .iter()
        .map(|(node, attrs)| (mirror_node_name(node), attrs.clone()))
        .collect()
}
