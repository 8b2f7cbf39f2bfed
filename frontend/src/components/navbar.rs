//! Shared navigation bar.
//!
//! Populated from two endpoints fetched in parallel: the resolver config
//! (merged wholesale into the link state) and the providers payload (only
//! the regional association and national partner lists are read). The
//! template renders exactly once, after both fetches have settled; a
//! failed fetch simply contributes no fields.

use gloo_console::log;
use gloo_net::http::Request;
use serde_json::Value;
use yew::prelude::*;

use common::nav::{self, NavLinks};
use common::resolver::{CONFIG_URL, PROVIDERS_URL};

pub enum Msg {
    LinksLoaded(NavLinks),
}

pub struct NavbarComponent {
    links: Option<NavLinks>,
    loaded: bool,
}

impl Component for NavbarComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            links: None,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LinksLoaded(links) => {
                self.links = Some(links);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.links {
            Some(links) => view_links(links),
            // Empty shell until both fetches have settled.
            None => html! { <nav class="navbar" /> },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                let links = nav::collect_links(
                    fetch_json(CONFIG_URL, "got config"),
                    fetch_json(PROVIDERS_URL, "got providers"),
                )
                .await;
                link.send_message(Msg::LinksLoaded(links));
            });
        }
    }
}

/// Best-effort JSON fetch: any transport error, non-200 status, or
/// malformed body collapses to `None`.
async fn fetch_json(url: &str, breadcrumb: &str) -> Option<Value> {
    match Request::get(url).send().await {
        Ok(resp) if resp.status() == 200 => match resp.json::<Value>().await {
            Ok(value) => {
                log!(breadcrumb.to_string());
                Some(value)
            }
            Err(_) => None,
        },
        _ => None,
    }
}

fn view_links(links: &NavLinks) -> Html {
    let general = links
        .iter()
        .filter(|(name, _)| !nav::PROVIDER_FIELDS.contains(&name.as_str()));
    html! {
        <nav class="navbar">
            <a class="navbar-brand" href="/">{ "Dataset Catalog" }</a>
            <ul class="nav-links">
                { for general.map(|(name, value)| view_link(name, value)) }
            </ul>
            { view_list("Regional Associations", links.get("ra_providers")) }
            { view_list("National Partners", links.get("national_partners")) }
        </nav>
    }
}

fn view_link(name: &str, value: &Value) -> Html {
    let href = match value {
        Value::String(url) => Some(url.clone()),
        Value::Object(fields) => fields
            .get("url")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    };
    match href {
        Some(href) => html! { <li><a href={href}>{ name.to_string() }</a></li> },
        None => html! { <li>{ name.to_string() }</li> },
    }
}

fn view_list(title: &str, entries: Option<&Value>) -> Html {
    let Some(Value::Array(entries)) = entries else {
        return html! {};
    };
    html! {
        <div class="nav-group">
            <span class="nav-group-title">{ title.to_string() }</span>
            <ul>
                { for entries.iter().map(view_list_entry) }
            </ul>
        </div>
    }
}

fn view_list_entry(entry: &Value) -> Html {
    let label = match entry {
        Value::String(name) => name.clone(),
        Value::Object(fields) => fields
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    };
    html! { <li>{ label }</li> }
}
