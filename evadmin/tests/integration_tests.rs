use evadmin::events::{AppCommand, DataEvent, RemoteCall};
use evadmin::input::{Key, KeyEvent};
use evadmin::state::controller::SaveOutcome;
use evadmin::state::notification::NotificationLevel;
use evadmin::state::{HomeState, InputMode, LoadingState, ResourcePageState};
use evadmin::testing::TestApp;
use evadmin::ui::screens::Screen;
use evadmin_api::{FieldValue, Record, RecordId, ResourceKind};

fn location(id: i64, title: &str) -> Record {
    Record::new(id)
        .with_field("title", title)
        .with_field("address", "Main St 1")
        .with_field("coordinates", "40.4,-3.7")
}

fn resource_screen(kind: ResourceKind) -> std::mem::Discriminant<Screen> {
    std::mem::discriminant(&Screen::Resource(Box::new(ResourcePageState::new(kind))))
}

/// Opens the locations page and answers its initial load.
fn locations_page(records: Vec<Record>) -> TestApp {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));
    let job = app.take_single_job();
    assert_eq!(job.kind, ResourceKind::Locations);
    assert_eq!(job.call, RemoteCall::List);

    app.send_data_event(DataEvent::RecordsLoaded {
        session: job.session,
        records,
    });
    app
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();
    app.assert_not_quit();

    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();
    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_open_page_from_home() {
    let mut app = TestApp::new();
    app.assert_screen_type(std::mem::discriminant(&Screen::Home(HomeState::default())));

    // Home lists events first
    app.send_key(Key::Enter);

    app.assert_screen_type(resource_screen(ResourceKind::Events));
    let job = app.take_single_job();
    assert_eq!(job.kind, ResourceKind::Events);
    assert_eq!(job.session, app.page().session());
    assert!(matches!(
        app.page().controller.loading(),
        LoadingState::Loading(_)
    ));
}

#[test]
fn test_back_returns_home() {
    let mut app = locations_page(vec![]);
    app.send_key(Key::Char('h'));
    app.assert_screen_type(std::mem::discriminant(&Screen::Home(HomeState::default())));
}

#[test]
fn test_create_flow() {
    let mut app = locations_page(vec![location(1, "Existing")]);

    app.send_key(Key::Char('n'));
    assert_eq!(app.page().input_mode, InputMode::Form);

    app.type_text("HQ");
    app.send_key(Key::Tab);
    app.type_text("Gran Via 2");
    app.send_key(Key::Tab);
    app.type_text("40.42,-3.70");
    app.send_key(Key::Enter);

    let job = app.take_single_job();
    let RemoteCall::Create { draft } = job.call else {
        panic!("expected a create call, got {:?}", job.call);
    };
    assert_eq!(draft.get("title"), Some(&FieldValue::text("HQ")));
    assert_eq!(draft.get("address"), Some(&FieldValue::text("Gran Via 2")));
    assert_eq!(app.page().input_mode, InputMode::Normal);
    // The blank form is ready for the next record
    assert!(app.page().editor.value("title").is_blank());

    app.send_data_event(DataEvent::RecordSaved {
        session: job.session,
        outcome: SaveOutcome::Created(location(2, "HQ")),
    });

    let store = app.page().controller.store();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).map(Record::id), Some(&RecordId::from(2)));
    assert_eq!(
        app.state().notification.as_ref().map(|n| n.level),
        Some(NotificationLevel::Success)
    );
}

#[test]
fn test_incomplete_form_is_not_sent() {
    let mut app = locations_page(vec![]);

    app.send_key(Key::Char('n'));
    app.type_text("Only a title");
    app.send_key(Key::Enter);

    assert!(app.take_jobs().is_empty());
    assert_eq!(app.page().input_mode, InputMode::Form);
    assert!(app.page().editor.validation_error().is_some());
    assert_eq!(
        app.state().notification.as_ref().map(|n| n.level),
        Some(NotificationLevel::Error)
    );
}

#[test]
fn test_edit_flow() {
    let mut app = locations_page(vec![location(7, "Old"), location(8, "Other")]);

    app.send_key(Key::Char('e'));
    assert_eq!(app.page().input_mode, InputMode::Form);
    assert_eq!(app.page().editor.bound_id(), Some(&RecordId::from(7)));
    assert_eq!(app.page().editor.input_text("title"), "Old");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('u')));
    app.type_text("New");
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('s')));

    let job = app.take_single_job();
    let RemoteCall::Update { id, draft } = job.call else {
        panic!("expected an update call, got {:?}", job.call);
    };
    assert_eq!(id, RecordId::from(7));
    assert_eq!(draft.get("title"), Some(&FieldValue::text("New")));

    app.send_data_event(DataEvent::RecordSaved {
        session: job.session,
        outcome: SaveOutcome::Updated {
            id: RecordId::from(7),
            record: location(7, "New"),
        },
    });

    let page = app.page();
    assert_eq!(page.controller.store().len(), 2);
    assert_eq!(
        page.controller.store().get(0).and_then(|r| r.field("title")),
        Some(&FieldValue::text("New"))
    );
    assert!(!page.editor.is_editing());
    assert!(page.controller.selection().id().is_none());
}

#[test]
fn test_failed_update_releases_form() {
    let mut app = locations_page(vec![location(7, "Old")]);

    app.send_key(Key::Char('e'));
    app.send_key(Key::Enter);
    let job = app.take_single_job();

    app.send_data_event(DataEvent::RecordSaved {
        session: job.session,
        outcome: SaveOutcome::Failed {
            error: "HTTP 500".into(),
        },
    });

    assert!(!app.page().editor.is_editing());
    assert_eq!(
        app.page().controller.store().get(0),
        Some(&location(7, "Old"))
    );
    assert_eq!(
        app.state().notification.as_ref().map(|n| n.level),
        Some(NotificationLevel::Error)
    );
}

#[test]
fn test_delete_flow() {
    let mut app = locations_page(vec![location(1, "A"), location(2, "B")]);

    app.send_keys(&[Key::Char('j'), Key::Char('d')]);
    assert_eq!(app.page().input_mode, InputMode::DeleteConfirmation);
    assert_eq!(app.page().delete_confirmation_id, Some(RecordId::from(2)));

    app.send_key(Key::Char('y'));
    let job = app.take_single_job();
    assert_eq!(
        job.call,
        RemoteCall::Delete {
            id: RecordId::from(2)
        }
    );

    app.send_data_event(DataEvent::RecordDeleted {
        session: job.session,
        id: RecordId::from(2),
    });

    let page = app.page();
    assert_eq!(page.controller.store().len(), 1);
    assert_eq!(page.table_state.borrow().selected(), Some(0));
}

#[test]
fn test_deleting_another_record_keeps_edit_in_progress() {
    let mut app = locations_page(vec![location(1, "A"), location(2, "B")]);

    app.send_key(Key::Char('e'));
    app.send_key_event(KeyEvent::with_ctrl(Key::Char('u')));
    app.type_text("Edited");
    app.send_key(Key::Esc);

    app.execute(AppCommand::InitiateDelete {
        id: RecordId::from(2),
    });
    app.send_key(Key::Char('y'));
    let job = app.take_single_job();
    app.send_data_event(DataEvent::RecordDeleted {
        session: job.session,
        id: RecordId::from(2),
    });

    let page = app.page();
    assert_eq!(page.controller.store().len(), 1);
    assert_eq!(page.controller.selection().id(), Some(&RecordId::from(1)));
    assert_eq!(page.editor.bound_id(), Some(&RecordId::from(1)));
    assert_eq!(page.editor.input_text("title"), "Edited");
}

#[test]
fn test_cancel_delete_plans_nothing() {
    let mut app = locations_page(vec![location(1, "A")]);

    app.send_key(Key::Char('d'));
    app.send_key(Key::Esc);

    assert!(app.take_jobs().is_empty());
    assert_eq!(app.page().input_mode, InputMode::Normal);
    assert_eq!(app.page().controller.store().len(), 1);
}

#[test]
fn test_result_for_left_page_is_discarded() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('2'));
    let stale = app.take_single_job();

    app.send_key(Key::Char('3'));
    app.assert_screen_type(resource_screen(ResourceKind::Contacts));
    let current = app.take_single_job();
    assert_ne!(stale.session, current.session);

    app.send_data_event(DataEvent::RecordsLoaded {
        session: stale.session,
        records: vec![location(1, "A")],
    });

    assert!(app.page().controller.store().is_empty());
    assert!(matches!(
        app.page().controller.loading(),
        LoadingState::Loading(_)
    ));
}

#[test]
fn test_reload_plans_list_call() {
    let mut app = locations_page(vec![location(1, "A")]);

    app.send_key(Key::Char('r'));
    let job = app.take_single_job();
    assert_eq!(job.call, RemoteCall::List);
    assert_eq!(job.session, app.page().session());
}
