use payloads::FormMode;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_mounted;
use crate::state::{FormAction, FormState};

/// Fetch the record being edited into the form reducer.
///
/// Does nothing in create mode. The reducer ignores results for any id
/// other than the one currently being edited.
#[hook]
pub fn use_property(mode: FormMode, dispatcher: UseReducerDispatcher<FormState>) {
    let mounted = use_mounted();

    use_effect_with(mode, move |mode| {
        if let FormMode::Edit(id) = *mode {
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = api_client.get_property(&id).await;

                if !mounted.is_mounted() {
                    tracing::debug!(%id, "Dropping property after unmount");
                    return;
                }

                match result {
                    Ok(property) => {
                        dispatcher.dispatch(FormAction::Loaded(property));
                    }
                    Err(e) => {
                        if e.is_not_found() {
                            tracing::warn!(%id, "Property no longer exists");
                        } else {
                            tracing::warn!(%id, "Failed to load property: {e}");
                        }
                        dispatcher.dispatch(FormAction::LoadFailed(id));
                    }
                }
            });
        }
    });
}
