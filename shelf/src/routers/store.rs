use iced::Task;

use super::sidebar;
use crate::app::{App, AppEvent};
use crate::store::{StoreAction, StoreError};

/// Apply a store action and let the sidebar see the new state.
pub(crate) fn route(app: &mut App, action: StoreAction) -> Task<AppEvent> {
    match apply(app, action) {
        Ok(()) => sidebar::sync(app),
        Err(err) => {
            log::warn!("store action rejected: {err}");
            Task::none()
        },
    }
}

/// Apply a store action, returning the rejection to the caller.
pub(crate) fn apply(
    app: &mut App,
    action: StoreAction,
) -> Result<(), StoreError> {
    log::debug!("store action: {action:?}");
    app.store.reduce(action)
}
