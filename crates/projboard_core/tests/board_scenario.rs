use projboard_core::{
    Board, BoardConfig, BoardEvent, CancelReason, ConfigError, DropOutcome, EventOutcome,
    ItemStatus, MoveOutcome,
};

#[test]
fn submit_reject_drag_and_redundant_drag() {
    let mut board = Board::new();
    let active = board.attach_list(ItemStatus::Active);
    let finished = board.attach_list(ItemStatus::Finished);

    let id = board
        .submit("Build API", "Implement REST endpoints", "3")
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active.items()[0].people_count, 3);
    assert_eq!(active.refresh_count(), 1);

    assert!(board.submit("", "x", "1").is_err());
    assert_eq!(board.store().len(), 1);
    assert_eq!(active.refresh_count(), 1);

    let session = board.start_drag(id).unwrap();
    let outcome = board.end_drag(session, Some(ItemStatus::Finished));
    assert!(outcome.changed_store());
    assert_eq!(board.store().get(id).unwrap().status, ItemStatus::Finished);
    assert_eq!(active.refresh_count(), 2);
    assert_eq!(finished.refresh_count(), 2);
    assert!(active.is_empty());
    assert_eq!(finished.entries()[0].assignees, "3 persons assigned");

    let session = board.start_drag(id).unwrap();
    assert_eq!(
        board.end_drag(session, Some(ItemStatus::Finished)),
        DropOutcome::Dropped(MoveOutcome::Unchanged)
    );
    assert_eq!(active.refresh_count(), 2);
    assert_eq!(finished.refresh_count(), 2);
}

#[test]
fn events_route_through_handle() {
    let mut board = Board::new();

    let EventOutcome::Submitted(Ok(id)) = board.handle(BoardEvent::FormSubmit {
        title: "Write docs".to_string(),
        description: "Document the public API".to_string(),
        people: "1".to_string(),
    }) else {
        panic!("submission should be accepted");
    };

    let EventOutcome::DragStarted(session) = board.handle(BoardEvent::GestureStart { item_id: id })
    else {
        panic!("gesture on a known item should start a session");
    };

    match board.handle(BoardEvent::GestureEnd {
        session,
        over: None,
    }) {
        EventOutcome::Drop(outcome) => {
            assert_eq!(outcome, DropOutcome::Cancelled(CancelReason::NoTarget));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert!(matches!(
        board.handle(BoardEvent::GestureStart {
            item_id: uuid::Uuid::new_v4()
        }),
        EventOutcome::DragIgnored
    ));
}

#[test]
fn from_config_rejects_inverted_rules() {
    let mut config = BoardConfig::default();
    config.form.description.min_length = Some(10);
    config.form.description.max_length = Some(3);

    let err = Board::from_config(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvertedBounds {
            field: "description",
            ..
        }
    ));
}

#[test]
fn from_config_applies_form_rules() {
    let mut config = BoardConfig::default();
    config.form.people.max = Some(3.0);
    let mut board = Board::from_config(&config).unwrap();

    assert!(board.submit("Build API", "Implement REST endpoints", "4").is_err());
    assert!(board.submit("Build API", "Implement REST endpoints", "3").is_ok());
}

#[test]
fn released_lists_do_not_accumulate() {
    let mut board = Board::new();
    for _ in 0..10 {
        let _list = board.attach_list(ItemStatus::Active);
        board.submit("Build API", "Implement REST endpoints", "2").unwrap();
    }
    assert_eq!(board.store().subscriber_count(), 0);
    assert_eq!(board.store().len(), 10);
}
