use yew::prelude::*;

use super::{Modal, ModalTone};

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// Name of the property about to be deleted
    pub property_name: AttrValue,
    /// Called when user confirms the deletion
    pub on_confirm: Callback<()>,
    /// Called when user cancels
    pub on_close: Callback<()>,
    /// Whether the delete request is in flight
    #[prop_or_default]
    pub is_loading: bool,
}

/// Asks before deleting a listing.
///
/// The backdrop does not dismiss it, and both buttons lock while the request
/// runs.
#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let on_confirm_click = props.on_confirm.reform(|_: MouseEvent| ());

    let on_close = {
        let on_close = props.on_close.clone();
        let is_loading = props.is_loading;
        Callback::from(move |_| {
            if !is_loading {
                on_close.emit(());
            }
        })
    };
    let on_cancel_click = on_close.reform(|_: MouseEvent| ());

    let footer = html! {
        <>
            <button
                onclick={on_cancel_click}
                disabled={props.is_loading}
                class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                       bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600
                       rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors"
            >
                {"Cancel"}
            </button>
            <button
                onclick={on_confirm_click}
                disabled={props.is_loading}
                class="px-4 py-2 text-sm font-medium text-white
                       bg-red-600 hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-600
                       rounded-md disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors"
            >
                {if props.is_loading { "Deleting..." } else { "Delete Property" }}
            </button>
        </>
    };

    html! {
        <Modal
            title="⚠ Confirm Deletion"
            tone={ModalTone::Danger}
            close_on_backdrop={false}
            on_close={on_close}
            footer={footer}
        >
            <p class="text-sm">
                {"Are you sure you want to delete property "}
                <strong>{&props.property_name}</strong>
                {"?"}
            </p>
            <p class="text-sm text-red-600 dark:text-red-400 mt-3">
                <strong>{"Warning:"}</strong>
                {" This action cannot be undone."}
            </p>
        </Modal>
    }
}
