//! Invoice history: a paginated, read-only table of every saved invoice with
//! a top-sheet viewer for individual invoices. Pages come from
//! `GET /api/invoices/history`, newest save first.

mod view;

use common::requests::HistoryPage;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::top_sheet::{close_top_sheet, open_top_sheet};

const PAGE_SIZE: u32 = 10;

pub enum HistoryMsg {
    Load(u32),
    Loaded(HistoryPage),
    Failed(String),
    View(usize),
    CloseViewer,
    Print,
}

pub struct InvoiceHistoryComponent {
    pub page: Option<HistoryPage>,
    pub loading: bool,
    pub error: Option<String>,
    /// Index into the current page's invoices shown in the viewer.
    pub viewing: Option<usize>,
    pub viewer_ref: NodeRef,
}

impl Component for InvoiceHistoryComponent {
    type Message = HistoryMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: None,
            loading: false,
            error: None,
            viewing: None,
            viewer_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(HistoryMsg::Load(1));
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HistoryMsg::Load(page) => {
                self.loading = true;
                self.error = None;

                let link = ctx.link().clone();
                spawn_local(async move {
                    let url = format!("/api/invoices/history?page={}&limit={}", page, PAGE_SIZE);
                    match Request::get(&url).send().await {
                        Ok(resp) if resp.status() == 200 => {
                            match resp.json::<HistoryPage>().await {
                                Ok(page) => link.send_message(HistoryMsg::Loaded(page)),
                                Err(err) => link.send_message(HistoryMsg::Failed(err.to_string())),
                            }
                        }
                        Ok(resp) => link.send_message(HistoryMsg::Failed(
                            resp.text().await.unwrap_or_default(),
                        )),
                        Err(err) => link.send_message(HistoryMsg::Failed(err.to_string())),
                    }
                });
                true
            }
            HistoryMsg::Loaded(page) => {
                self.page = Some(page);
                self.loading = false;
                true
            }
            HistoryMsg::Failed(message) => {
                gloo_console::error!(format!("Failed to load invoice history: {}", message));
                self.error = Some("Failed to load invoice history.".to_string());
                self.loading = false;
                true
            }
            HistoryMsg::View(index) => {
                self.viewing = Some(index);
                open_top_sheet(self.viewer_ref.clone());
                true
            }
            HistoryMsg::CloseViewer => {
                close_top_sheet(self.viewer_ref.clone());
                self.viewing = None;
                true
            }
            HistoryMsg::Print => {
                if let Some(window) = web_sys::window() {
                    let _ = window.print();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
