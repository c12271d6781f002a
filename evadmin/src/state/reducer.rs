use super::controller::SaveOutcome;
use super::notification::Notification;
use super::AppState;
use crate::events::DataEvent;
use crate::i18n::{fill, resource_name, t};

/// Pure state transition function for data events
///
/// Events from a page visit that is no longer on screen are dropped.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    let session = event.session();
    let Some(page) = state.active_page_mut(session) else {
        tracing::debug!("Discarding result for inactive page session {}", session);
        return;
    };
    let kind = page.kind();
    let resource = resource_name(kind);
    let texts = t();

    let notification = match event {
        DataEvent::RecordsLoaded { records, .. } => {
            page.controller.apply_loaded(records);
            None
        }

        DataEvent::LoadFailed { error, .. } => {
            page.controller.apply_load_failed(error);
            None
        }

        DataEvent::RecordSaved { outcome, .. } => {
            page.controller.apply_saved(&outcome);
            let notification = match &outcome {
                SaveOutcome::Created(_) => Notification::success(fill(
                    texts.notify.created,
                    &[("resource", resource)],
                )),
                SaveOutcome::Updated { id, .. } => Notification::success(fill(
                    texts.notify.updated,
                    &[("resource", resource), ("id", id.as_str())],
                )),
                SaveOutcome::Failed { error } => Notification::error(fill(
                    texts.notify.save_failed,
                    &[("resource", resource), ("error", error.as_str())],
                )),
            };
            Some(notification)
        }

        DataEvent::RecordDeleted { id, .. } => {
            page.controller.apply_deleted(&id);
            Some(Notification::success(fill(
                texts.notify.deleted,
                &[("resource", resource), ("id", id.as_str())],
            )))
        }

        DataEvent::DeleteFailed { id, error, .. } => {
            tracing::error!("Deleting {} {} failed: {}", kind, id, error);
            Some(Notification::error(fill(
                texts.notify.delete_failed,
                &[
                    ("resource", resource),
                    ("id", id.as_str()),
                    ("error", error.as_str()),
                ],
            )))
        }
    };

    page.sync_editor();
    page.clamp_table_selection();

    if let Some(notification) = notification {
        state.notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::controller::PageSession;
    use crate::state::notification::NotificationLevel;
    use crate::state::ResourcePageState;
    use crate::ui::screens::Screen;
    use evadmin_api::{Record, RecordId, ResourceKind};

    fn state_on(kind: ResourceKind) -> (AppState, PageSession) {
        let mut state = AppState::new();
        let page = ResourcePageState::new(kind);
        let session = page.session();
        state.route_to(Screen::Resource(Box::new(page)));
        (state, session)
    }

    fn location(id: i64, title: &str) -> Record {
        Record::new(id).with_field("title", title)
    }

    #[test]
    fn test_records_loaded_fills_table() {
        let (mut state, session) = state_on(ResourceKind::Locations);

        reduce_data_event(
            &mut state,
            DataEvent::RecordsLoaded {
                session,
                records: vec![location(1, "A"), location(2, "B")],
            },
        );

        let page = state.resource_page().unwrap();
        assert_eq!(page.controller.store().len(), 2);
        assert_eq!(page.table_state.borrow().selected(), Some(0));
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_stale_session_is_discarded() {
        let (mut state, _) = state_on(ResourceKind::Locations);

        reduce_data_event(
            &mut state,
            DataEvent::RecordsLoaded {
                session: PageSession::new(),
                records: vec![location(1, "A")],
            },
        );

        assert!(state.resource_page().unwrap().controller.store().is_empty());
    }

    #[test]
    fn test_update_rebinds_editor_to_blank() {
        let (mut state, session) = state_on(ResourceKind::Locations);
        reduce_data_event(
            &mut state,
            DataEvent::RecordsLoaded {
                session,
                records: vec![location(7, "Old")],
            },
        );
        {
            let page = state.resource_page_mut().unwrap();
            page.controller.edit(&RecordId::from(7)).unwrap();
            page.sync_editor();
        }

        reduce_data_event(
            &mut state,
            DataEvent::RecordSaved {
                session,
                outcome: SaveOutcome::Updated {
                    id: RecordId::from(7),
                    record: location(7, "New"),
                },
            },
        );

        let page = state.resource_page().unwrap();
        assert_eq!(page.controller.store().get(0), Some(&location(7, "New")));
        assert!(!page.editor.is_editing());
        assert_eq!(
            state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Success)
        );
    }

    #[test]
    fn test_failed_save_notifies_error() {
        let (mut state, session) = state_on(ResourceKind::Events);

        reduce_data_event(
            &mut state,
            DataEvent::RecordSaved {
                session,
                outcome: SaveOutcome::Failed {
                    error: "HTTP 400".into(),
                },
            },
        );

        let notification = state.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert!(notification.message.contains("HTTP 400"));
    }

    #[test]
    fn test_delete_failure_keeps_record() {
        let (mut state, session) = state_on(ResourceKind::Locations);
        reduce_data_event(
            &mut state,
            DataEvent::RecordsLoaded {
                session,
                records: vec![location(1, "A")],
            },
        );

        reduce_data_event(
            &mut state,
            DataEvent::DeleteFailed {
                session,
                id: RecordId::from(1),
                error: "HTTP 404".into(),
            },
        );

        assert_eq!(state.resource_page().unwrap().controller.store().len(), 1);
        assert_eq!(
            state.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }
}
