//! Rendering for the invoice history table, pagination controls and the
//! read-only invoice viewer.

use common::model::invoice::Invoice;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::invoice::format;
use crate::top_sheet::TopSheet;

use super::{HistoryMsg, InvoiceHistoryComponent};

pub fn view(component: &InvoiceHistoryComponent, ctx: &Context<InvoiceHistoryComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="history-page">
            <h2 class="no-print">{"Invoice History"}</h2>
            {
                if let Some(error) = &component.error {
                    html! { <p class="field-error">{ error.clone() }</p> }
                } else if component.loading && component.page.is_none() {
                    html! { <p>{"Loading..."}</p> }
                } else {
                    build_table(component, link)
                }
            }
            { build_viewer(component, link) }
        </div>
    }
}

fn build_table(component: &InvoiceHistoryComponent, link: &Scope<InvoiceHistoryComponent>) -> Html {
    let Some(page) = &component.page else {
        return html! {};
    };

    if page.invoices.is_empty() {
        return html! { <p>{"No invoices saved yet."}</p> };
    }

    let rows = page
        .invoices
        .iter()
        .enumerate()
        .map(|(index, invoice)| {
            html! {
                <tr onclick={link.callback(move |_| HistoryMsg::View(index))}>
                    <td>{ invoice.invoice_no.clone() }</td>
                    <td>{ format::display_date(&invoice.invoice_date) }</td>
                    <td>{ invoice.business.name.clone() }</td>
                    <td>{ invoice.sender.name.clone() }</td>
                    <td class="amount">{ format::currency(invoice.total) }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <table class="history-table">
                <thead>
                    <tr>
                        <th>{"Invoice No."}</th>
                        <th>{"Date"}</th>
                        <th>{"Billed To"}</th>
                        <th>{"From"}</th>
                        <th>{"Total"}</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
            { build_pagination(page.current_page, page.total_pages, component.loading, link) }
        </>
    }
}

fn build_pagination(
    current: u32,
    total: u32,
    loading: bool,
    link: &Scope<InvoiceHistoryComponent>,
) -> Html {
    let prev = current.saturating_sub(1);
    let next = current + 1;

    html! {
        <div class="pagination no-print">
            <button
                disabled={current <= 1 || loading}
                onclick={link.callback(move |_| HistoryMsg::Load(prev))}
            >
                {"Previous"}
            </button>
            <span>{ format!("Page {} of {}", current, total.max(1)) }</span>
            <button
                disabled={current >= total || loading}
                onclick={link.callback(move |_| HistoryMsg::Load(next))}
            >
                {"Next"}
            </button>
            <button
                disabled={loading}
                onclick={link.callback(move |_| HistoryMsg::Load(current))}
            >
                {"Refresh"}
            </button>
        </div>
    }
}

/// Read-only rendering of one saved invoice inside a top sheet, printable as
/// displayed.
fn build_viewer(component: &InvoiceHistoryComponent, link: &Scope<InvoiceHistoryComponent>) -> Html {
    let invoice = component
        .viewing
        .and_then(|index| component.page.as_ref()?.invoices.get(index));

    html! {
        <TopSheet node_ref={component.viewer_ref.clone()}>
            <div class="dialog-panel invoice-viewer">
                {
                    if let Some(invoice) = invoice {
                        build_invoice_sheet(invoice)
                    } else {
                        html! {}
                    }
                }
                <div class="dialog-actions no-print">
                    <button onclick={link.callback(|_| HistoryMsg::CloseViewer)}>{"Close"}</button>
                    <button class="primary" onclick={link.callback(|_| HistoryMsg::Print)}>{"Print"}</button>
                </div>
            </div>
        </TopSheet>
    }
}

fn build_invoice_sheet(invoice: &Invoice) -> Html {
    let items = invoice
        .items
        .iter()
        .map(|item| {
            html! {
                <tr>
                    <td>{ format::display_date(&item.date) }</td>
                    <td>{ item.description.clone() }</td>
                    <td>{ item.qty }</td>
                    <td class="amount">{ format::currency(item.rate) }</td>
                    <td class="amount">{ format::currency(item.amount) }</td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <div class="invoice-sheet">
            <div class="invoice-header">
                <h1>{"INVOICE"}</h1>
                <div class="invoice-meta">
                    <p>{"Invoice No: "}{ invoice.invoice_no.clone() }</p>
                    <p>{"Invoice Date: "}{ format::display_date(&invoice.invoice_date) }</p>
                    <p>{"Due Date: "}{ format::display_date(&invoice.due_date) }</p>
                </div>
            </div>

            <div class="invoice-parties">
                { contact_lines("From", &invoice.sender) }
                { contact_lines("To", &invoice.business) }
                {
                    if invoice.recipient.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="party-block">
                                <h4>{"Attention Of"}</h4>
                                <p>{ invoice.recipient.clone() }</p>
                            </div>
                        }
                    }
                }
            </div>

            <table class="invoice-items">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Description"}</th>
                        <th>{"Qty"}</th>
                        <th>{"Rate"}</th>
                        <th>{"Amount"}</th>
                    </tr>
                </thead>
                <tbody>{ items }</tbody>
            </table>

            <div class="invoice-totals">
                <div class="totals-row">
                    <span>{"Sub Total"}</span>
                    <span>{ format::currency(invoice.sub_total) }</span>
                </div>
                <div class="totals-row">
                    <span>{"Tax"}</span>
                    <span>{ format!("{}%", invoice.tax) }</span>
                </div>
                <div class="totals-row total">
                    <span>{"Total"}</span>
                    <span>{ format::currency(invoice.total) }</span>
                </div>
            </div>

            <div class="bank-block">
                <h4>{"Payment Details"}</h4>
                <p>{ invoice.bank_details.account_name.clone() }</p>
                <p>{"Account No: "}{ format::account_number(&invoice.bank_details.account) }</p>
                <p>{"Sort Code: "}{ format::sort_code(&invoice.bank_details.sort_code) }</p>
            </div>
        </div>
    }
}

fn contact_lines(title: &str, contact: &common::model::contact::ContactDetails) -> Html {
    let lines = [
        &contact.name,
        &contact.address1,
        &contact.address2,
        &contact.city,
        &contact.state,
        &contact.country,
        &contact.postcode,
        &contact.email,
        &contact.phone,
    ];

    html! {
        <div class="party-block">
            <h4>{ title }</h4>
            {
                lines
                    .iter()
                    .filter(|line| !line.is_empty())
                    .map(|line| html! { <p>{ line.clone() }</p> })
                    .collect::<Html>()
            }
        </div>
    }
}
