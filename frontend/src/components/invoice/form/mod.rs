//! Invoice form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, helpers and local
//! draft persistence.
//!
//! On creation the component reloads any persisted draft, so an unsaved
//! invoice survives a page reload, and generates an invoice number when the
//! draft has none.

mod draft;
pub mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::{BankField, ContactField, ContactRole, ItemField, Msg};
pub use state::InvoiceFormComponent;

use yew::prelude::*;

impl Component for InvoiceFormComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut component = InvoiceFormComponent::new();
        if let Some(saved) = draft::load() {
            component.restore(saved);
        }
        if component.details.invoice_no.is_empty() {
            component.details.invoice_no = helpers::generate_invoice_no();
        }
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
