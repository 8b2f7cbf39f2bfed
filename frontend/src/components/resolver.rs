//! Dataset resolver view.
//!
//! Looks up the dataset behind the query token and redirects the browser
//! to its detail page. Lookup failure of any kind (transport error,
//! non-200 status, malformed payload) collapses into a single "Not Found"
//! rendering; there is no retry, the user re-navigates to try again.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::dataset::Dataset;
use common::resolver::{asset_url, dataset_url};

pub enum Msg {
    Resolved(Dataset),
    NotFound,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResolverProps {
    /// Opaque token taken from the tail of the page URL.
    pub token: String,
}

pub struct ResolverComponent {
    not_found: bool,
    loaded: bool,
}

impl Component for ResolverComponent {
    type Message = Msg;
    type Properties = ResolverProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            not_found: false,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Resolved(dataset) => {
                // Full-page navigation; this view is discarded with the page.
                redirect(&dataset_url(&dataset.id));
                false
            }
            Msg::NotFound => {
                self.not_found = true;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.not_found {
            html! { <h1>{ "Not Found" }</h1> }
        } else {
            html! {
                <div class="resolver">
                    <p>{ "Looking up your dataset..." }</p>
                </div>
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let token = ctx.props().token.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get(&asset_url(&token)).send().await {
                    Ok(resp) if resp.status() == 200 => match resp.json::<Dataset>().await {
                        Ok(dataset) => link.send_message(Msg::Resolved(dataset)),
                        Err(err) => {
                            error!(format!("malformed dataset payload: {err}"));
                            link.send_message(Msg::NotFound);
                        }
                    },
                    _ => link.send_message(Msg::NotFound),
                }
            });
        }
    }
}

fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(url).is_err() {
            error!(format!("redirect to {url} failed"));
        }
    }
}
