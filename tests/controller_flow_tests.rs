use glam::Vec2;
use spline_builder::{AppCommand, AppIntent, ControlPointKind, DragState, Selection};
use spline_builder::{EditorController, EditorSession};

fn frame(
    controller: &mut EditorController,
    session: &mut EditorSession,
    x: f32,
    y: f32,
    primary_down: bool,
) {
    controller.handle_intent(
        session,
        AppIntent::FrameSampled {
            world_pos: Vec2::new(x, y),
            primary_down,
        },
    );
}

/// Ein Klick: drücken und im nächsten Frame loslassen.
fn click(controller: &mut EditorController, session: &mut EditorSession, x: f32, y: f32) {
    frame(controller, session, x, y, true);
    frame(controller, session, x, y, false);
}

fn two_node_session(controller: &mut EditorController) -> EditorSession {
    let mut session = EditorSession::new();
    click(controller, &mut session, 0.0, 0.0);
    click(controller, &mut session, 200.0, 0.0);
    assert_eq!(session.path.len(), 2);
    session
}

#[test]
fn test_press_on_empty_canvas_places_first_node() {
    let mut controller = EditorController::new();
    let mut session = EditorSession::new();

    frame(&mut controller, &mut session, 100.0, 100.0, true);

    assert_eq!(session.path.len(), 1);
    let node = session.path.node(0).expect("Node sollte existieren");
    assert_eq!(node.anchor, Vec2::new(100.0, 100.0));
    assert_eq!(node.handle_a.enabled(), Some(Vec2::new(100.0, 150.0)));
    assert!(!node.handle_b.is_enabled());

    // Hover wird nach der Mutation bestimmt: der neue Anker liegt unter dem Zeiger
    assert_eq!(
        session.interaction.hover,
        Some(Selection::new(0, ControlPointKind::Anchor))
    );
    // Platzieren startet keinen Drag
    assert_eq!(session.interaction.drag, DragState::Idle);
}

#[test]
fn test_held_button_does_not_place_more_nodes() {
    let mut controller = EditorController::new();
    let mut session = EditorSession::new();

    frame(&mut controller, &mut session, 100.0, 100.0, true);
    frame(&mut controller, &mut session, 400.0, 100.0, true);
    frame(&mut controller, &mut session, 600.0, 100.0, true);

    assert_eq!(session.path.len(), 1);
}

#[test]
fn test_drag_handle_mirrors_sibling_and_leaves_other_node() {
    let mut controller = EditorController::new();
    let mut session = two_node_session(&mut controller);
    let other = *session.path.node(1).expect("Node 1 erwartet");

    // Handle A von Node 0 liegt bei (0, 50)
    frame(&mut controller, &mut session, 2.0, 52.0, true);
    assert_eq!(
        session.interaction.drag,
        DragState::Dragging(Selection::new(0, ControlPointKind::HandleA))
    );
    // Greifen allein verändert nichts
    assert_eq!(
        session.path.node(0).expect("Node 0 erwartet").handle_a.position(),
        Vec2::new(0.0, 50.0)
    );

    frame(&mut controller, &mut session, -40.0, 30.0, true);

    let node = session.path.node(0).expect("Node 0 erwartet");
    assert_eq!(node.handle_a.position(), Vec2::new(-40.0, 30.0));
    assert_eq!(node.handle_b.position(), Vec2::new(40.0, -30.0));
    assert_eq!(*session.path.node(1).expect("Node 1 erwartet"), other);
}

#[test]
fn test_drag_anchor_moves_handles_along() {
    let mut controller = EditorController::new();
    let mut session = two_node_session(&mut controller);

    frame(&mut controller, &mut session, 201.0, 1.0, true);
    frame(&mut controller, &mut session, 250.0, 80.0, true);
    frame(&mut controller, &mut session, 260.0, 90.0, true);

    let node = session.path.node(1).expect("Node 1 erwartet");
    assert_eq!(node.anchor, Vec2::new(260.0, 90.0));
    assert_eq!(node.handle_a.position(), Vec2::new(260.0, 140.0));
    assert_eq!(node.handle_b.position(), Vec2::new(260.0, 40.0));
    assert_eq!(session.path.len(), 2);
}

#[test]
fn test_release_ends_drag_and_next_press_places_node() {
    let mut controller = EditorController::new();
    let mut session = two_node_session(&mut controller);

    frame(&mut controller, &mut session, 200.0, 0.0, true);
    assert!(session.interaction.drag.is_dragging());

    frame(&mut controller, &mut session, 200.0, 0.0, false);
    assert_eq!(session.interaction.drag, DragState::Idle);

    // Bewegung ohne Taste verändert den Pfad nicht
    let before = session.path.clone();
    frame(&mut controller, &mut session, 350.0, 0.0, false);
    assert_eq!(session.path, before);

    frame(&mut controller, &mut session, 400.0, 0.0, true);
    assert_eq!(session.path.len(), 3);
    assert_eq!(
        session.path.last().expect("Letzter Node erwartet").anchor,
        Vec2::new(400.0, 0.0)
    );
}

#[test]
fn test_press_near_start_prepends_node() {
    let mut controller = EditorController::new();
    let mut session = two_node_session(&mut controller);

    click(&mut controller, &mut session, -150.0, 10.0);

    assert_eq!(session.path.len(), 3);
    let first = session.path.first().expect("Erster Node erwartet");
    assert_eq!(first.anchor, Vec2::new(-150.0, 10.0));
    assert!(!first.handle_a.is_enabled());
    assert!(first.handle_b.is_enabled());
}

#[test]
fn test_hover_is_refreshed_while_idle() {
    let mut controller = EditorController::new();
    let mut session = two_node_session(&mut controller);

    frame(&mut controller, &mut session, 199.0, -48.0, false);
    // Node 1 ist das Ende: Handle B deaktiviert, kein Hover darauf
    assert_eq!(session.interaction.hover, None);

    frame(&mut controller, &mut session, 1.0, -49.0, false);
    assert_eq!(
        session.interaction.hover,
        Some(Selection::new(0, ControlPointKind::HandleB))
    );

    frame(&mut controller, &mut session, 100.0, 0.0, false);
    assert_eq!(session.interaction.hover, None);
}

#[test]
fn test_hover_tracks_dragged_point() {
    let mut controller = EditorController::new();
    let mut session = two_node_session(&mut controller);
    let anchor = Selection::new(1, ControlPointKind::Anchor);

    frame(&mut controller, &mut session, 201.0, 1.0, true);
    frame(&mut controller, &mut session, 230.0, 45.0, true);
    assert_eq!(session.interaction.drag, DragState::Dragging(anchor));
    assert_eq!(session.interaction.hover, Some(anchor));

    frame(&mut controller, &mut session, 260.0, 90.0, true);
    assert_eq!(session.interaction.hover, Some(anchor));

    // Handle-Drag: Hover liegt auf dem gezogenen Handle, nicht auf dem Gegenstück
    frame(&mut controller, &mut session, 260.0, 90.0, false);
    frame(&mut controller, &mut session, 0.0, -50.0, true);
    frame(&mut controller, &mut session, 50.0, -120.0, true);
    let handle_b = Selection::new(0, ControlPointKind::HandleB);
    assert_eq!(session.interaction.drag, DragState::Dragging(handle_b));
    assert_eq!(session.interaction.hover, Some(handle_b));
}

#[test]
fn test_clear_mid_drag_resets_and_held_button_places_nothing() {
    let mut controller = EditorController::new();
    let mut session = two_node_session(&mut controller);

    frame(&mut controller, &mut session, 0.0, 0.0, true);
    assert!(session.interaction.drag.is_dragging());

    controller.handle_intent(&mut session, AppIntent::ClearPathRequested);
    frame(&mut controller, &mut session, 30.0, 30.0, true);

    assert!(session.path.is_empty());
    assert_eq!(session.interaction.drag, DragState::Idle);

    frame(&mut controller, &mut session, 30.0, 30.0, false);
    frame(&mut controller, &mut session, 30.0, 30.0, true);
    assert_eq!(session.path.len(), 1);
}

#[test]
fn test_commands_are_logged_in_execution_order() {
    let mut controller = EditorController::new();
    let mut session = EditorSession::new();

    frame(&mut controller, &mut session, 10.0, 10.0, true);
    frame(&mut controller, &mut session, 10.0, 10.0, false);
    controller.handle_intent(&mut session, AppIntent::ClearPathRequested);

    let pos = Vec2::new(10.0, 10.0);
    assert_eq!(
        session.command_log.entries(),
        &[
            AppCommand::PrimaryPressed { world_pos: pos },
            AppCommand::RefreshHover { world_pos: pos },
            AppCommand::PrimaryReleased,
            AppCommand::RefreshHover { world_pos: pos },
            AppCommand::ClearPath,
        ]
    );
}
