use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_mounted;
use crate::state::{DashboardAction, DashboardState};

/// Load the property list into the dashboard reducer.
///
/// Fetches once on mount and returns a callback that fetches again, used
/// after a create or update and by the retry button.
#[hook]
pub fn use_properties(
    dispatcher: UseReducerDispatcher<DashboardState>,
) -> Callback<()> {
    let mounted = use_mounted();

    let refetch = use_callback(dispatcher, move |_: (), dispatcher| {
        let dispatcher = dispatcher.clone();
        let mounted = mounted.clone();

        dispatcher.dispatch(DashboardAction::ListRequested);

        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            let result = api_client.list_properties().await;

            if !mounted.is_mounted() {
                tracing::debug!("Dropping property list after unmount");
                return;
            }

            match result {
                Ok(properties) => {
                    tracing::debug!(count = properties.len(), "Loaded properties");
                    dispatcher.dispatch(DashboardAction::ListLoaded(properties));
                }
                Err(e) => {
                    tracing::warn!("Failed to load properties: {e}");
                    dispatcher.dispatch(DashboardAction::ListFailed);
                }
            }
        });
    });

    // Auto-fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
        });
    }

    refetch
}
