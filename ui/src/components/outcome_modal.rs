use yew::prelude::*;

use super::{Modal, ModalTone};
use crate::state::Outcome;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub outcome: Outcome,
    pub on_close: Callback<()>,
}

/// Reports how a create, update or delete ended.
#[function_component]
pub fn OutcomeModal(props: &Props) -> Html {
    let (title, tone, button_class) = if props.outcome.is_success() {
        ("Success", ModalTone::Success, "bg-green-600 hover:bg-green-700")
    } else {
        ("Error", ModalTone::Danger, "bg-red-600 hover:bg-red-700")
    };

    let footer = html! {
        <button
            onclick={props.on_close.reform(|_: MouseEvent| ())}
            class={classes!(
                "px-4", "py-2", "text-sm", "font-medium", "text-white",
                "rounded-md", "transition-colors", button_class
            )}
        >
            {"Close"}
        </button>
    };

    html! {
        <Modal
            title={title}
            tone={tone}
            on_close={props.on_close.clone()}
            footer={footer}
        >
            <p class="mb-0">{props.outcome.message().to_string()}</p>
        </Modal>
    }
}
