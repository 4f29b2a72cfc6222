use egui::Pos2;
use sketchpad::{CommandHistory, Drawable};

fn stroke(x: f32) -> Drawable {
    Drawable::new_stroke(2, vec![Pos2::new(x, 0.0), Pos2::new(x, 10.0)])
}

#[test]
fn test_undo_then_redo_restores_committed() {
    let mut history = CommandHistory::new();
    history.commit(stroke(1.0));
    history.commit(stroke(2.0));
    history.commit(Drawable::new_stamp("🌸", Pos2::new(3.0, 3.0)));
    let before = history.committed().to_vec();

    assert!(history.undo());
    assert!(history.redo());

    assert_eq!(history.committed(), before.as_slice());
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_commit_after_undo_invalidates_redo() {
    let mut history = CommandHistory::new();
    history.commit(stroke(1.0));
    history.commit(stroke(2.0));
    history.undo();
    assert!(history.can_redo());

    history.commit(stroke(3.0));
    assert!(!history.can_redo());

    // Redo is now a no-op
    let committed = history.committed().to_vec();
    assert!(!history.redo());
    assert_eq!(history.committed(), committed.as_slice());
}

#[test]
fn test_undo_sequence_scenario() {
    let a = stroke(1.0);
    let b = stroke(2.0);
    let mut history = CommandHistory::new();
    history.commit(a.clone());
    history.commit(b.clone());

    history.undo();
    assert_eq!(history.committed(), &[a.clone()]);
    assert_eq!(history.redo_stack(), &[b.clone()]);

    history.undo();
    assert!(history.committed().is_empty());
    assert_eq!(history.redo_stack(), &[b.clone(), a.clone()]);

    history.redo();
    assert_eq!(history.committed(), &[a]);
    assert_eq!(history.redo_stack(), &[b]);
}

#[test]
fn test_undo_redo_on_empty_are_noops() {
    let mut history = CommandHistory::new();
    assert!(!history.undo());
    assert!(!history.redo());
    assert!(history.committed().is_empty());
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_clear_empties_both_stacks() {
    let mut history = CommandHistory::new();
    history.commit(stroke(1.0));
    history.commit(stroke(2.0));
    history.undo();

    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    // Clearing again is harmless
    history.clear();
    assert!(history.committed().is_empty());
}
