use yew::prelude::*;

use crate::contexts::use_session;
use crate::hooks::use_logout;
use crate::theme::ThemeToggle;

#[function_component]
pub fn Header() -> Html {
    let session = use_session();
    let role = session.session().signed_in_role().map(str::to_string);
    let on_logout = use_logout();

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200
                       dark:border-neutral-700 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="flex items-center gap-2 text-xl font-semibold
                                       text-neutral-900 dark:text-white">
                        <span>{"🏢"}</span>
                        <span>{"Premium Properties"}</span>
                        <span class="hidden sm:inline text-sm font-normal
                                     text-neutral-500 dark:text-neutral-400">
                            {"Admin Dashboard"}
                        </span>
                    </a>
                    <div class="flex items-center gap-3">
                        if let Some(role) = role {
                            <span class="hidden sm:inline text-sm
                                         text-neutral-600 dark:text-neutral-300">
                                {role}
                            </span>
                        }
                        <ThemeToggle />
                        <button
                            onclick={on_logout}
                            class="px-3 py-1.5 text-sm rounded-md border
                                   border-neutral-300 dark:border-neutral-600
                                   hover:bg-neutral-100 dark:hover:bg-neutral-700"
                        >
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
