use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Header color of a [`Modal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTone {
    Success,
    Danger,
}

impl ModalTone {
    fn header_class(&self) -> &'static str {
        match self {
            ModalTone::Success => "bg-green-600 text-white",
            ModalTone::Danger => "bg-red-600 text-white",
        }
    }
}

/// A dialog with a colored title bar, a close button and a backdrop.
///
/// # Example
///
/// ```rust,ignore
/// html! {
///     <Modal
///         title="Success"
///         tone={ModalTone::Success}
///         on_close={close_modal}
///         footer={html! { <button onclick={close}>{"Close"}</button> }}
///     >
///         <p>{"Saved."}</p>
///     </Modal>
/// }
/// ```
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    /// Body content (passed as children)
    pub children: Html,
    /// Buttons rendered right-aligned under the body
    #[prop_or_default]
    pub footer: Html,
    /// Called on the header close button or a backdrop click
    pub on_close: Callback<()>,
    pub tone: ModalTone,
    /// Whether to allow closing by clicking backdrop (default: true)
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let close_on_backdrop = props.close_on_backdrop;

        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }

            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            role="dialog"
            aria-modal="true"
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl
                        w-full max-w-md overflow-hidden">
                <div class={classes!(
                    "flex", "items-center", "justify-between", "px-6", "py-4",
                    props.tone.header_class()
                )}>
                    <h3 class="text-lg font-semibold">{&props.title}</h3>
                    <button
                        onclick={on_close_click}
                        aria-label="Close"
                        class="text-xl leading-none opacity-80 hover:opacity-100"
                    >
                        {"×"}
                    </button>
                </div>
                <div class="px-6 py-6 text-neutral-800 dark:text-neutral-200">
                    {props.children.clone()}
                </div>
                <div class="flex justify-end gap-3 px-6 pb-6">
                    {props.footer.clone()}
                </div>
            </div>
        </div>
    }
}
