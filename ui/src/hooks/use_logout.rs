use yew::prelude::*;

use crate::contexts::use_session;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let session = use_session();

    Callback::from(move |_| {
        tracing::info!("Logging out");
        session.logout();
    })
}
