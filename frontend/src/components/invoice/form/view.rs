//! View rendering for the invoice form.
//!
//! The page is a sidebar of actions (print, save, clear, load) next to the
//! printable invoice sheet. The sender, business and bank blocks on the sheet
//! are clickable and open their picker dialogs; committed line items stay
//! editable in place.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::invoice::dialogs::{bank_dialog, contact_dialog};
use crate::components::invoice::format;

use super::messages::{ContactRole, ItemField, Msg};
use super::state::InvoiceFormComponent;

pub fn view(component: &InvoiceFormComponent, ctx: &Context<InvoiceFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="invoice-page">
            { build_sidebar(component, link) }

            <div class="invoice-sheet">
                { build_header(component, link) }
                { build_parties(component, link) }
                { build_items_table(component, link) }
                { build_totals(component, link) }
                { build_bank_block(component, link) }
            </div>

            { contact_dialog(component, link) }
            { bank_dialog(component, link) }
        </div>
    }
}

fn build_sidebar(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    html! {
        <div class="sidebar no-print">
            <button class="action-btn" onclick={link.callback(|_| Msg::Print)}>{"Print"}</button>
            <button class="action-btn" onclick={link.callback(|_| Msg::SaveInvoice)}>{"Save"}</button>
            <button class="action-btn" onclick={link.callback(|_| Msg::ClearInvoice)}>{"Clear"}</button>
            <button class="action-btn" onclick={link.callback(|_| Msg::FetchSavedInvoices)}>{"Load"}</button>
            { build_invoice_list(component, link) }
        </div>
    }
}

/// The "load invoice" side panel, shown after Load is pressed.
fn build_invoice_list(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    if !component.show_invoice_list {
        return html! {};
    }

    let rows = if component.loading_invoices {
        html! { <p>{"Loading..."}</p> }
    } else if component.saved_invoices.is_empty() {
        html! { <p>{"No saved invoices."}</p> }
    } else {
        component
            .saved_invoices
            .iter()
            .enumerate()
            .map(|(index, invoice)| {
                html! {
                    <div
                        class="invoice-list-row"
                        onclick={link.callback(move |_| Msg::LoadInvoice(index))}
                    >
                        <span class="invoice-list-no">{ invoice.invoice_no.clone() }</span>
                        <span>{ format::display_date(&invoice.invoice_date) }</span>
                        <span>{ format::currency(invoice.total) }</span>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="invoice-list">
            <div class="invoice-list-header">
                <h3>{"Saved Invoices"}</h3>
                <button onclick={link.callback(|_| Msg::HideInvoiceList)}>{"×"}</button>
            </div>
            { rows }
        </div>
    }
}

fn build_header(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    let details = &component.details;

    html! {
        <div class="invoice-header">
            <h1>{"INVOICE"}</h1>
            <div class="invoice-meta">
                <label>{"Invoice No."}
                    <input
                        type="text"
                        value={details.invoice_no.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::UpdateInvoiceNo(input_value(&e)))}
                    />
                </label>
                <label>{"Invoice Date"}
                    <input
                        type="date"
                        value={details.invoice_date.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::UpdateInvoiceDate(input_value(&e)))}
                    />
                </label>
                <label>{"Due Date"}
                    <input
                        type="date"
                        value={details.due_date.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::UpdateDueDate(input_value(&e)))}
                    />
                </label>
                <label>{"Date"}
                    <input
                        type="date"
                        value={details.date.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::UpdateDate(input_value(&e)))}
                    />
                </label>
            </div>
        </div>
    }
}

fn build_parties(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    html! {
        <div class="invoice-parties">
            { contact_block("From", &component.sender, link.callback(|_| Msg::OpenContactDialog(ContactRole::Sender))) }
            { contact_block("To", &component.business, link.callback(|_| Msg::OpenContactDialog(ContactRole::Business))) }
            <div class="party-block">
                <h4>{"Attention Of"}</h4>
                <input
                    type="text"
                    placeholder="Recipient"
                    value={component.details.recipient.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::UpdateRecipient(input_value(&e)))}
                />
            </div>
        </div>
    }
}

/// A clickable address block that opens the matching picker dialog.
fn contact_block(
    title: &str,
    contact: &common::model::contact::ContactDetails,
    on_click: Callback<MouseEvent>,
) -> Html {
    let body = if contact.name.is_empty() {
        html! { <p class="placeholder">{"Click to add details"}</p> }
    } else {
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
        lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| html! { <p>{ line.clone() }</p> })
            .collect::<Html>()
    };

    html! {
        <div class="party-block clickable" onclick={on_click}>
            <h4>{ title }</h4>
            { body }
        </div>
    }
}

fn build_items_table(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    let committed = component
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            html! {
                <tr>
                    <td>
                        <input
                            type="date"
                            value={item.date.clone()}
                            oninput={link.callback(move |e: InputEvent| Msg::EditItem(index, ItemField::Date, input_value(&e)))}
                        />
                    </td>
                    <td>
                        <input
                            type="text"
                            value={item.description.clone()}
                            oninput={link.callback(move |e: InputEvent| Msg::EditItem(index, ItemField::Description, input_value(&e)))}
                        />
                    </td>
                    <td>
                        <input
                            type="number"
                            min="1"
                            value={item.qty.to_string()}
                            oninput={link.callback(move |e: InputEvent| Msg::EditItem(index, ItemField::Qty, input_value(&e)))}
                        />
                    </td>
                    <td>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            value={item.rate.to_string()}
                            oninput={link.callback(move |e: InputEvent| Msg::EditItem(index, ItemField::Rate, input_value(&e)))}
                        />
                    </td>
                    <td class="amount">{ format::currency(item.amount) }</td>
                    <td class="no-print">
                        <button onclick={link.callback(move |_| Msg::RemoveItem(index))}>{"×"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let current = &component.current_item;

    html! {
        <div class="invoice-items">
            <table>
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Description"}</th>
                        <th>{"Qty"}</th>
                        <th>{"Rate"}</th>
                        <th>{"Amount"}</th>
                        <th class="no-print"></th>
                    </tr>
                </thead>
                <tbody>
                    { committed }
                    <tr class="add-item-row no-print">
                        <td>
                            <input
                                type="date"
                                value={current.date.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::UpdateCurrentItem(ItemField::Date, input_value(&e)))}
                            />
                        </td>
                        <td>
                            <input
                                type="text"
                                placeholder="Description"
                                value={current.description.clone()}
                                oninput={link.callback(|e: InputEvent| Msg::UpdateCurrentItem(ItemField::Description, input_value(&e)))}
                            />
                        </td>
                        <td>
                            <input
                                type="number"
                                min="1"
                                value={current.qty.to_string()}
                                oninput={link.callback(|e: InputEvent| Msg::UpdateCurrentItem(ItemField::Qty, input_value(&e)))}
                            />
                        </td>
                        <td>
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                value={current.rate.to_string()}
                                oninput={link.callback(|e: InputEvent| Msg::UpdateCurrentItem(ItemField::Rate, input_value(&e)))}
                            />
                        </td>
                        <td></td>
                        <td>
                            <button onclick={link.callback(|_| Msg::AddItem)}>{"Add"}</button>
                        </td>
                    </tr>
                </tbody>
            </table>
            {
                if let Some(error) = &component.item_error {
                    html! { <p class="field-error no-print">{ error.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_totals(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    let details = &component.details;

    html! {
        <div class="invoice-totals">
            <div class="totals-row">
                <span>{"Sub Total"}</span>
                <span>{ format::currency(details.sub_total) }</span>
            </div>
            <div class="totals-row">
                <span>{"Tax (%)"}</span>
                <input
                    type="number"
                    min="0"
                    step="0.1"
                    value={details.tax.to_string()}
                    oninput={link.callback(|e: InputEvent| Msg::UpdateTax(input_value(&e)))}
                />
            </div>
            <div class="totals-row total">
                <span>{"Total"}</span>
                <span>{ format::currency(details.total) }</span>
            </div>
        </div>
    }
}

fn build_bank_block(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    let details = &component.bank_details;
    let body = if details.account_name.is_empty() {
        html! { <p class="placeholder">{"Click to add bank details"}</p> }
    } else {
        html! {
            <>
                <p>{ details.account_name.clone() }</p>
                <p>{"Account No: "}{ format::account_number(&details.account) }</p>
                <p>{"Sort Code: "}{ format::sort_code(&details.sort_code) }</p>
            </>
        }
    };

    html! {
        <div class="bank-block clickable" onclick={link.callback(|_| Msg::OpenBankDialog)}>
            <h4>{"Payment Details"}</h4>
            { body }
        </div>
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}
