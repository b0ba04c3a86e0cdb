use payloads::{FormMode, PropertyField};
use std::rc::Rc;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{use_mounted, use_property};
use crate::state::{
    FormAction, FormCompletion, FormPhase, FormState, SubmitGuard,
    submitted_message,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Render with the dark palette
    #[prop_or_default]
    pub dark_mode: bool,
    pub mode: FormMode,
    /// Called once the form is done, saved or dismissed
    pub on_close: Callback<FormCompletion>,
}

/// Create or edit a single listing.
///
/// In edit mode the record is fetched first and the inputs stay hidden
/// until it arrives. A successful save reports back through `on_close`;
/// a failed one keeps the form open with the error above the inputs.
#[function_component]
pub fn PropertyForm(props: &Props) -> Html {
    let mode = props.mode;
    let state = use_reducer(move || FormState::new(mode));
    let guard = use_memo((), |_| SubmitGuard::default());
    let mounted = use_mounted();

    use_property(mode, state.dispatcher());

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let Some(field) = PropertyField::from_input_name(&input.name())
            else {
                return;
            };
            // number inputs report "" for half-typed text like "12e"
            if field.is_numeric() && input.validity().bad_input() {
                return;
            }
            dispatcher.dispatch(FormAction::FieldChanged(field, input.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        let guard = guard.clone();
        let mounted = mounted.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if state.phase != FormPhase::Ready || !guard.try_begin() {
                return;
            }

            let details = match state.draft.to_details() {
                Ok(details) => details,
                Err(e) => {
                    guard.finish();
                    state.dispatch(FormAction::Invalid(capitalize(&e.to_string())));
                    return;
                }
            };

            state.dispatch(FormAction::SubmitStarted);

            let dispatcher = state.dispatcher();
            let guard = Rc::clone(&guard);
            let mounted = mounted.clone();
            let on_close = on_close.clone();
            let mode = state.mode;

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = api_client.submit_property(&mode, &details).await;
                guard.finish();

                if !mounted.is_mounted() {
                    tracing::debug!("Dropping submit result after unmount");
                    return;
                }

                match result {
                    Ok(property) => {
                        tracing::info!(id = %property.id, "Saved property");
                        let message = submitted_message(&mode, &property.name);
                        on_close.emit(FormCompletion::saved(message));
                    }
                    Err(e) => {
                        tracing::warn!("Failed to submit property: {e}");
                        dispatcher.dispatch(FormAction::SubmitFailed);
                    }
                }
            });
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        let guard = guard.clone();
        let can_close = state.can_close();
        Callback::from(move |_: MouseEvent| {
            if can_close && !guard.in_flight() {
                on_close.emit(FormCompletion::dismissed());
            }
        })
    };

    let is_edit = mode.editing_id().is_some();
    let title = if is_edit { "Edit Property" } else { "Add New Property" };

    let card_class = if props.dark_mode {
        "bg-neutral-800 text-neutral-100 border-neutral-700"
    } else {
        "bg-white text-neutral-900 border-neutral-200"
    };
    let input_class = if props.dark_mode {
        "bg-neutral-700 border-neutral-600 text-white placeholder-neutral-400"
    } else {
        "bg-white border-neutral-300 text-neutral-900 placeholder-neutral-400"
    };

    let body = if state.phase == FormPhase::Loading {
        html! {
            <div class="text-center py-10">
                <div class="inline-block h-8 w-8 animate-spin rounded-full
                            border-4 border-blue-600 border-t-transparent"></div>
                <p class="mt-3 text-sm opacity-80">{"Loading property details..."}</p>
            </div>
        }
    } else {
        let draft = &state.draft;
        let is_submitting = state.is_submitting();
        let submit_text = match (is_edit, is_submitting) {
            (false, false) => "Add Property",
            (false, true) => "Adding Property...",
            (true, false) => "Update Property",
            (true, true) => "Updating Property...",
        };
        let input = |field: PropertyField,
                     label: &'static str,
                     kind: &'static str,
                     placeholder: &'static str,
                     min: Option<&'static str>| {
            let required = field != PropertyField::ImageUrl;
            html! {
                <div>
                    <label
                        for={field.input_name()}
                        class="block text-sm font-medium mb-1"
                    >
                        {label}
                    </label>
                    <input
                        id={field.input_name()}
                        name={field.input_name()}
                        type={kind}
                        min={min}
                        step={(field == PropertyField::Price).then_some("any")}
                        required={required}
                        placeholder={placeholder}
                        value={draft.value(field)}
                        oninput={on_input.clone()}
                        disabled={is_submitting}
                        class={classes!(
                            "w-full", "px-3", "py-2", "rounded-md", "border",
                            "focus:outline-none", "focus:ring-2",
                            "focus:ring-blue-500", input_class
                        )}
                    />
                </div>
            }
        };

        html! {
            <form onsubmit={on_submit} class="space-y-4">
                if let Some(error) = &state.error {
                    <div
                        role="alert"
                        class="p-3 rounded-md bg-red-50 border border-red-200
                               text-red-700 dark:bg-red-900/20
                               dark:border-red-800 dark:text-red-400"
                    >
                        {error}
                    </div>
                }
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {input(PropertyField::Name, "Property Name", "text",
                        "Enter property name", None)}
                    {input(PropertyField::Price, "Price ($/month)", "number",
                        "Enter monthly rent", Some("1"))}
                </div>
                {input(PropertyField::Location, "Location", "text",
                    "Enter property location", None)}
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {input(PropertyField::Bedrooms, "Bedrooms", "number",
                        "Number of bedrooms", Some("0"))}
                    {input(PropertyField::Bathrooms, "Bathrooms", "number",
                        "Number of bathrooms", Some("0"))}
                </div>
                <div>
                    {input(PropertyField::ImageUrl, "Image URL", "url",
                        "Enter image URL (optional)", None)}
                    <p class="mt-1 text-xs opacity-70">
                        {"Provide a direct URL to an image of the property."}
                    </p>
                </div>
                <div class="flex justify-end">
                    <button
                        type="submit"
                        disabled={is_submitting}
                        class="px-4 py-2 rounded-md bg-blue-600 text-white
                               font-medium hover:bg-blue-700
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {submit_text}
                    </button>
                </div>
            </form>
        }
    };

    html! {
        <div class={classes!("rounded-lg", "border", "shadow-sm", card_class)}>
            <div class="flex items-center justify-between px-6 py-4 border-b
                        border-inherit">
                <h2 class="text-xl font-semibold">{title}</h2>
                <button
                    type="button"
                    onclick={on_close_click}
                    disabled={!state.can_close()}
                    aria-label="Close"
                    class="text-2xl leading-none opacity-70 hover:opacity-100
                           disabled:opacity-30 disabled:cursor-not-allowed"
                >
                    {"×"}
                </button>
            </div>
            <div class="px-6 py-6">
                {body}
            </div>
        </div>
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::DraftError;

    #[test]
    fn validation_messages_start_uppercase() {
        let message = DraftError::Missing(PropertyField::Location).to_string();
        assert_eq!(capitalize(&message), "Location is required");
        assert_eq!(capitalize(""), "");
    }
}
