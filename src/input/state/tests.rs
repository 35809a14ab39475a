use super::*;
use crate::config::{Action, Config};
use crate::draw::{BLACK, CursorPreview, Mark, Repaint};
use crate::input::Key;

fn create_test_controller() -> InputController {
    InputController::from_config_with_rng(&Config::default(), fastrand::Rng::with_seed(42)).unwrap()
}

fn stroke(controller: &mut InputController, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    controller.on_pointer_down(first.0, first.1);
    for &(x, y) in rest {
        controller.on_pointer_move(x, y);
    }
    controller.on_pointer_up();
}

fn press_with_ctrl(controller: &mut InputController, c: char) {
    controller.on_key_press(Key::Ctrl);
    controller.on_key_press(Key::Char(c));
    controller.on_key_release(Key::Char(c));
    controller.on_key_release(Key::Ctrl);
}

#[test]
fn test_starts_idle_with_thin_marker() {
    let controller = create_test_controller();
    assert!(controller.history.is_empty());
    assert!(!controller.is_drawing());
    assert_eq!(controller.tool.thickness(), Some(2.0));
    assert_eq!(controller.tool.color(), BLACK);
    assert!(controller.scene().preview.is_none());
}

#[test]
fn test_stroke_lifecycle() {
    let mut controller = create_test_controller();

    controller.on_pointer_down(10.0, 10.0);
    assert!(controller.is_drawing());
    assert_eq!(controller.take_repaint(), Some(Repaint::SceneChanged));

    controller.on_pointer_move(20.0, 20.0);
    controller.on_pointer_move(30.0, 25.0);
    let Some(Mark::Stroke(in_progress)) = controller.in_progress() else {
        panic!("stroke in progress expected");
    };
    assert_eq!(in_progress.points().len(), 3);
    assert!(controller.history.is_empty());

    controller.on_pointer_up();
    assert!(!controller.is_drawing());
    assert_eq!(controller.history.len(), 1);
    assert_eq!(controller.take_repaint(), Some(Repaint::SceneChanged));
}

#[test]
fn test_undo_then_new_stroke_discards_redo() {
    let mut controller = create_test_controller();
    stroke(&mut controller, &[(0.0, 0.0), (5.0, 5.0)]);
    stroke(&mut controller, &[(10.0, 0.0), (15.0, 5.0)]);

    assert!(controller.undo());
    assert!(controller.history.can_redo());

    stroke(&mut controller, &[(20.0, 0.0), (25.0, 5.0)]);
    assert_eq!(controller.history.len(), 2);
    assert!(!controller.history.can_redo());
    assert!(!controller.redo());

    let latest = controller.history.items()[1].as_stroke().unwrap().points();
    assert_eq!(latest[0].x, 20.0);
}

#[test]
fn test_redo_cleared_on_press_not_on_commit() {
    let mut controller = create_test_controller();
    stroke(&mut controller, &[(0.0, 0.0)]);
    controller.undo();

    controller.on_pointer_down(1.0, 1.0);
    assert!(!controller.history.can_redo());
    assert!(controller.history.is_empty());
}

#[test]
fn test_noop_undo_and_redo_do_not_repaint() {
    let mut controller = create_test_controller();
    assert!(!controller.history.can_undo());
    assert!(!controller.undo());
    assert!(!controller.redo());
    assert_eq!(controller.take_repaint(), None);

    controller.on_pointer_down(1.0, 1.0);
    controller.on_pointer_up();
    controller.take_repaint();
    assert!(controller.history.can_undo());
    assert!(controller.undo());
    assert!(!controller.history.can_undo());
    assert!(!controller.undo());
    assert_eq!(controller.take_repaint(), Some(Repaint::SceneChanged));
}

#[test]
fn test_preview_hidden_while_drawing() {
    let mut controller = create_test_controller();
    controller.on_pointer_move(40.0, 40.0);
    assert!(controller.scene().preview.is_some());
    assert_eq!(controller.take_repaint(), Some(Repaint::ToolMoved));

    controller.on_pointer_down(40.0, 40.0);
    assert!(controller.scene().preview.is_none());

    controller.on_pointer_up();
    let preview = controller.scene().preview.expect("preview visible after release");
    assert_eq!(preview.position().x, 40.0);
}

#[test]
fn test_pointer_leave_commits_and_hides_preview() {
    let mut controller = create_test_controller();
    controller.on_pointer_down(5.0, 5.0);
    controller.on_pointer_move(6.0, 7.0);

    controller.on_pointer_leave();
    assert!(!controller.is_drawing());
    assert_eq!(controller.history.len(), 1);
    assert!(controller.scene().preview.is_none());
    assert_eq!(controller.take_repaint(), Some(Repaint::SceneChanged));

    controller.on_pointer_leave();
    assert_eq!(controller.take_repaint(), None);
}

#[test]
fn test_pointer_up_without_press_is_ignored() {
    let mut controller = create_test_controller();
    controller.on_pointer_up();
    assert!(controller.history.is_empty());
    assert_eq!(controller.take_repaint(), None);
}

#[test]
fn test_sticker_drag_rotate_and_commit() {
    let mut controller = create_test_controller();
    controller.select_sticker("🐱");
    controller.on_pointer_move(50.0, 50.0);

    controller.on_pointer_down(50.0, 50.0);
    controller.on_pointer_move(60.0, 70.0);
    controller.rotate_sticker(15.0);
    controller.on_pointer_move(80.0, 90.0);
    controller.on_pointer_up();

    let sticker = controller.history.items()[0].as_sticker().unwrap();
    assert_eq!(sticker.symbol(), "🐱");
    assert_eq!(sticker.position().x, 80.0);
    assert_eq!(sticker.position().y, 90.0);
    assert_eq!(sticker.rotation(), 15.0);

    // The pending sticker keeps the rotation for the next placement
    assert_eq!(controller.tool.sticker_rotation(), Some(15.0));
}

#[test]
fn test_counterclockwise_rotation_wraps() {
    let mut controller = create_test_controller();
    controller.select_sticker("⭐");
    controller.handle_action(Action::RotateCounterclockwise);
    assert_eq!(controller.tool.sticker_rotation(), Some(345.0));
    assert_eq!(controller.take_repaint(), Some(Repaint::ToolMoved));
}

#[test]
fn test_rotate_with_marker_is_noop() {
    let mut controller = create_test_controller();
    controller.rotate_sticker(15.0);
    assert_eq!(controller.take_repaint(), None);
}

#[test]
fn test_palette_cycling_wraps_both_ways() {
    let mut controller = create_test_controller();
    controller.next_sticker();
    assert_eq!(controller.tool.sticker_symbol(), Some("🌮"));
    controller.next_sticker();
    controller.next_sticker();
    assert_eq!(controller.tool.sticker_symbol(), Some("⭐"));
    controller.next_sticker();
    assert_eq!(controller.tool.sticker_symbol(), Some("🌮"));
    controller.previous_sticker();
    assert_eq!(controller.tool.sticker_symbol(), Some("⭐"));

    controller.select_marker(6.0);
    controller.previous_sticker();
    assert_eq!(controller.tool.sticker_symbol(), Some("⭐"));
}

#[test]
fn test_custom_sticker() {
    let mut controller = create_test_controller();
    assert!(!controller.add_custom_sticker("   "));
    assert_eq!(controller.palette().len(), 3);
    assert_eq!(controller.tool.sticker_symbol(), None);

    assert!(controller.add_custom_sticker(" 🦀 "));
    assert_eq!(controller.palette().len(), 4);
    assert_eq!(controller.tool.sticker_symbol(), Some("🦀"));

    // Adding it again reuses the existing entry
    assert!(controller.add_custom_sticker("🦀"));
    assert_eq!(controller.palette().len(), 4);
    controller.next_sticker();
    assert_eq!(controller.tool.sticker_symbol(), Some("🌮"));
}

#[test]
fn test_marker_keys_switch_thickness() {
    let mut controller = create_test_controller();
    controller.on_key_press(Key::Char('2'));
    assert_eq!(controller.tool.thickness(), Some(6.0));
    controller.on_key_press(Key::Char('1'));
    assert_eq!(controller.tool.thickness(), Some(2.0));
}

#[test]
fn test_keybindings_undo_redo() {
    let mut controller = create_test_controller();
    stroke(&mut controller, &[(0.0, 0.0), (1.0, 1.0)]);

    press_with_ctrl(&mut controller, 'z');
    assert!(controller.history.is_empty());

    press_with_ctrl(&mut controller, 'y');
    assert_eq!(controller.history.len(), 1);

    controller.undo();
    controller.on_key_press(Key::Ctrl);
    controller.on_key_press(Key::Shift);
    controller.on_key_press(Key::Char('Z'));
    assert_eq!(controller.history.len(), 1);
}

#[test]
fn test_plain_z_without_ctrl_does_nothing() {
    let mut controller = create_test_controller();
    stroke(&mut controller, &[(0.0, 0.0)]);
    controller.on_key_press(Key::Char('z'));
    assert_eq!(controller.history.len(), 1);
}

#[test]
fn test_clear_drops_history_redo_and_in_progress() {
    let mut controller = create_test_controller();
    stroke(&mut controller, &[(0.0, 0.0)]);
    stroke(&mut controller, &[(1.0, 0.0)]);
    controller.undo();
    controller.on_pointer_down(3.0, 3.0);

    controller.on_key_press(Key::Delete);
    assert!(controller.history.is_empty());
    assert!(!controller.history.can_redo());
    assert!(!controller.is_drawing());
}

#[test]
fn test_escape_cancels_drawing_then_exits() {
    let mut controller = create_test_controller();
    controller.on_pointer_down(0.0, 0.0);

    controller.on_key_press(Key::Escape);
    assert!(!controller.is_drawing());
    assert!(controller.history.is_empty());
    assert!(!controller.should_exit);

    controller.on_key_press(Key::Escape);
    assert!(controller.should_exit);
}

#[test]
fn test_export_request_is_taken_once() {
    let mut controller = create_test_controller();
    press_with_ctrl(&mut controller, 's');
    assert!(controller.take_pending_export());
    assert!(!controller.take_pending_export());
}

#[test]
fn test_repaint_signals_coalesce() {
    let mut controller = create_test_controller();
    controller.on_pointer_move(1.0, 1.0);
    controller.on_pointer_down(1.0, 1.0);
    controller.on_pointer_up();
    controller.on_pointer_move(2.0, 2.0);
    assert_eq!(controller.take_repaint(), Some(Repaint::SceneChanged));
    assert_eq!(controller.take_repaint(), None);
}

#[test]
fn test_random_color_changes_per_selection() {
    let mut config = Config::default();
    config.marker.randomize_color = true;
    let mut controller =
        InputController::from_config_with_rng(&config, fastrand::Rng::with_seed(1)).unwrap();

    let first = controller.tool.color();
    controller.select_marker(2.0);
    let second = controller.tool.color();
    assert_ne!(first, second);

    controller.on_pointer_move(0.0, 0.0);
    let Some(CursorPreview::Marker(preview)) = controller.scene().preview else {
        panic!("marker preview expected");
    };
    assert_eq!(preview.color(), second);
}

#[test]
fn test_duplicate_bindings_rejected() {
    let mut config = Config::default();
    config.keybindings.export = vec!["Delete".to_string()];
    assert!(InputController::from_config(&config).is_err());
}
