use payloads::{Property, PropertyId};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::{
    ConfirmationModal, OutcomeModal, PropertyForm, PropertyTable,
    layout::MainLayout,
};
use crate::get_api_client;
use crate::hooks::{FetchState, use_mounted, use_properties};
use crate::state::{
    DashboardAction, DashboardState, DashboardView, FormCompletion, Followup,
    SubmitGuard,
};
use crate::theme::use_theme;

#[function_component]
pub fn AdminDashboardPage() -> Html {
    html! {
        <MainLayout>
            <AdminDashboard />
        </MainLayout>
    }
}

/// Property list with add, edit and delete.
///
/// The list is fetched on mount and again after every successful create or
/// update. Deletes remove the row locally without a refetch.
#[function_component]
pub fn AdminDashboard() -> Html {
    let state = use_reducer(DashboardState::default);
    let refetch = use_properties(state.dispatcher());
    let delete_guard = use_memo((), |_| SubmitGuard::default());
    let mounted = use_mounted();
    let (theme, _) = use_theme();

    let on_add = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(DashboardAction::AddClicked)
        })
    };

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: PropertyId| {
            dispatcher.dispatch(DashboardAction::EditClicked(id))
        })
    };

    let on_form_close = {
        let dispatcher = state.dispatcher();
        let refetch = refetch.clone();
        Callback::from(move |completion: FormCompletion| {
            dispatch_with_followup(
                &dispatcher,
                &refetch,
                DashboardAction::FormClosed(completion),
            );
        })
    };

    let on_delete_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |property: Property| {
            dispatcher.dispatch(DashboardAction::DeleteClicked(property))
        })
    };

    let on_delete_cancel = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::DeleteCancelled))
    };

    let on_delete_confirm = {
        let state = state.clone();
        let guard = delete_guard.clone();
        let mounted = mounted.clone();
        let refetch = refetch.clone();

        Callback::from(move |_: ()| {
            let Some(property) = state.delete_target.clone() else {
                return;
            };
            if !guard.try_begin() {
                return;
            }

            state.dispatch(DashboardAction::DeleteStarted);

            let dispatcher = state.dispatcher();
            let guard = Rc::clone(&guard);
            let mounted = mounted.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = api_client.delete_property(&property.id).await;
                guard.finish();

                if !mounted.is_mounted() {
                    tracing::debug!("Dropping delete result after unmount");
                    return;
                }

                let action = match result {
                    Ok(()) => {
                        tracing::info!(id = %property.id, "Deleted property");
                        DashboardAction::DeleteSucceeded(property)
                    }
                    Err(e) => {
                        tracing::warn!(id = %property.id, "Failed to delete property: {e}");
                        DashboardAction::DeleteFailed
                    }
                };
                dispatch_with_followup(&dispatcher, &refetch, action);
            });
        })
    };

    let on_outcome_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::OutcomeDismissed))
    };

    let list = match &state.properties {
        FetchState::Loading => html! {
            <div class="text-center py-12">
                <div class="inline-block h-8 w-8 animate-spin rounded-full
                            border-4 border-blue-600 border-t-transparent"></div>
                <p class="mt-3 text-neutral-600 dark:text-neutral-400">
                    {"Loading properties..."}
                </p>
            </div>
        },
        FetchState::Failed(error) => {
            let on_retry = refetch.reform(|_: MouseEvent| ());
            html! {
                <div class="text-center py-12 space-y-3">
                    <p class="text-red-600 dark:text-red-400">
                        {error}
                    </p>
                    <button
                        onclick={on_retry}
                        class="px-4 py-2 rounded-md border border-neutral-300
                               dark:border-neutral-600 hover:bg-neutral-100
                               dark:hover:bg-neutral-700"
                    >
                        {"Retry"}
                    </button>
                </div>
            }
        }
        FetchState::Loaded(properties) => html! {
            <PropertyTable
                properties={properties.clone()}
                on_edit={on_edit}
                on_delete={on_delete_click}
            />
        },
    };

    let content = match state.view {
        DashboardView::Form(mode) => html! {
            <PropertyForm
                key={format!("{mode:?}")}
                mode={mode}
                dark_mode={theme.is_dark()}
                on_close={on_form_close}
            />
        },
        DashboardView::List => html! {
            <div class="rounded-lg border border-neutral-200 dark:border-neutral-700
                        bg-white dark:bg-neutral-800 shadow-sm">
                <div class="flex items-center justify-between px-6 py-4 border-b
                            border-neutral-200 dark:border-neutral-700">
                    <h2 class="text-xl font-semibold">{"Property Management"}</h2>
                    <button
                        onclick={on_add}
                        class="px-4 py-2 rounded-md bg-blue-600 text-white
                               font-medium hover:bg-blue-700"
                    >
                        {"+ Add Property"}
                    </button>
                </div>
                {list}
            </div>
        },
    };

    html! {
        <>
            {content}
            if let Some(property) = &state.delete_target {
                <ConfirmationModal
                    property_name={property.name.clone()}
                    on_confirm={on_delete_confirm}
                    on_close={on_delete_cancel}
                    is_loading={state.is_deleting}
                />
            }
            if let Some(outcome) = &state.outcome {
                <OutcomeModal
                    outcome={outcome.clone()}
                    on_close={on_outcome_close}
                />
            }
        </>
    }
}

fn dispatch_with_followup(
    dispatcher: &UseReducerDispatcher<DashboardState>,
    refetch: &Callback<()>,
    action: DashboardAction,
) {
    let followup = action.followup();
    dispatcher.dispatch(action);
    if followup == Followup::RefetchList {
        refetch.emit(());
    }
}
