//! Composition root for the resolver page.
//!
//! Derives the resolver query token from the page URL once at startup and
//! mounts the two independent views: the navbar (config + providers) and
//! the resolver (dataset lookup and redirect). Neither view depends on
//! the other; both kick off their fetches on first render.

use yew::{html, Component, Context, Html};

use crate::components::navbar::NavbarComponent;
use crate::components::resolver::ResolverComponent;

pub struct App {
    token: String,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let href = web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default();
        Self {
            token: common::resolver::query_token(&href).to_string(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <NavbarComponent />
                <ResolverComponent token={self.token.clone()} />
            </div>
        }
    }
}
