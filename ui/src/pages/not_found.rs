use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <main class="min-h-screen flex items-center justify-center
                     bg-neutral-50 dark:bg-neutral-900">
            <div class="text-center space-y-3">
                <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">{"404"}</h1>
                <p class="text-neutral-600 dark:text-neutral-300">{"Page not found"}</p>
                <Link<Route>
                    to={Route::Admin}
                    classes="text-blue-600 dark:text-blue-400 hover:underline"
                >
                    {"Back to the dashboard"}
                </Link<Route>>
            </div>
        </main>
    }
}
