use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;
pub mod theme;
mod utils;

use contexts::SessionProvider;
use pages::{AdminDashboardPage, NotFoundPage};

/// API client for the property backend.
///
/// Uses `BACKEND_URL` when set at build time, otherwise the page origin.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(page_origin);

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

fn page_origin() -> String {
    match web_sys::window().map(|w| w.location().origin()) {
        Some(Ok(origin)) => origin,
        _ => {
            tracing::error!("Could not read page origin, using relative URLs");
            String::new()
        }
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Admin => html! { <AdminDashboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
