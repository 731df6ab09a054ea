use yew::{classes, html, Component, Context, Html};

use crate::components::invoice::form::InvoiceFormComponent;
use crate::components::invoice::history::InvoiceHistoryComponent;

/// The two pages of the app. No router: the backend serves the SPA from any
/// path, and a plain enum keeps the shell small.
#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Create,
    History,
}

pub enum AppMsg {
    ShowPage(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Create }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ShowPage(page) => {
                if self.page == page {
                    false
                } else {
                    self.page = page;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let nav_button = |label: &str, page: Page| {
            let active = if self.page == page { "active" } else { "" };
            html! {
                <button
                    class={classes!("nav-btn", active)}
                    onclick={ctx.link().callback(move |_| AppMsg::ShowPage(page))}
                >
                    { label }
                </button>
            }
        };

        html! {
            <div class="app-root">
                <nav class="top-nav">
                    { nav_button("Create Invoice", Page::Create) }
                    { nav_button("Invoice History", Page::History) }
                </nav>
                {
                    match self.page {
                        Page::Create => html! { <InvoiceFormComponent /> },
                        Page::History => html! { <InvoiceHistoryComponent /> },
                    }
                }
            </div>
        }
    }
}
