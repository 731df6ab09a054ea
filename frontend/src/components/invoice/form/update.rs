//! Update function for the invoice form, Elm-style: receives the current
//! state, the `Context` and a `Msg`, mutates the state and returns whether
//! the view must re-render.
//!
//! Key behaviors
//! - Derived totals recompute on every item add/edit/remove and tax change.
//! - Adding an item is validated (qty, rate, description); editing a
//!   committed item in place is not, matching the shipped behavior.
//! - Every mutation mirrors the draft to localStorage; Clear and a
//!   successful Save drop it.
//! - Dialog pickers fetch their registries on open and create-and-save new
//!   entries; failures surface as toasts and console errors.

use common::model::bank::BankDetails;
use common::model::contact::ContactDetails;
use common::model::invoice::{Invoice, InvoiceDetails, InvoiceItem};
use common::requests::SaveInvoiceRequest;
use common::totals;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::top_sheet::{close_top_sheet, open_top_sheet};

use super::draft;
use super::helpers::{self, show_toast};
use super::messages::{BankField, ContactField, ContactRole, ItemField, Msg};
use super::state::InvoiceFormComponent;

pub fn update(
    component: &mut InvoiceFormComponent,
    ctx: &Context<InvoiceFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateCurrentItem(field, value) => {
            set_item_field(&mut component.current_item, field, &value);
            draft::store(component);
            true
        }
        Msg::AddItem => {
            let item = &component.current_item;
            if item.qty <= 0 || item.rate <= 0.0 || item.description.trim().is_empty() {
                component.item_error = Some(
                    "Invalid item details. Please check quantity, rate, and description."
                        .to_string(),
                );
                return true;
            }

            let mut item = component.current_item.clone();
            item.amount = totals::line_amount(item.qty, item.rate);
            component.items.push(item);
            component.current_item = InvoiceItem::default();
            component.item_error = None;
            apply_totals(component);
            draft::store(component);
            true
        }
        Msg::EditItem(index, field, value) => {
            // Deliberately unvalidated, unlike AddItem: committed rows can be
            // edited freely and totals still follow.
            if let Some(item) = component.items.get_mut(index) {
                set_item_field(item, field, &value);
                apply_totals(component);
                draft::store(component);
                true
            } else {
                false
            }
        }
        Msg::RemoveItem(index) => {
            if index < component.items.len() {
                component.items.remove(index);
                apply_totals(component);
                draft::store(component);
                true
            } else {
                false
            }
        }

        Msg::UpdateInvoiceNo(value) => update_header(component, |d| d.invoice_no = value),
        Msg::UpdateInvoiceDate(value) => update_header(component, |d| d.invoice_date = value),
        Msg::UpdateDueDate(value) => update_header(component, |d| d.due_date = value),
        Msg::UpdateDate(value) => update_header(component, |d| d.date = value),
        Msg::UpdateRecipient(value) => update_header(component, |d| d.recipient = value),
        Msg::UpdateTax(value) => {
            component.details.tax = value.parse().unwrap_or(0.0);
            apply_totals(component);
            draft::store(component);
            true
        }

        Msg::OpenContactDialog(role) => {
            component.dialog_role = role;
            component.contact_errors.clear();
            component.dialog_busy = true;
            open_top_sheet(component.contact_dialog_ref.clone());

            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get(role.api_path()).send().await {
                    Ok(resp) if resp.status() == 200 => {
                        match resp.json::<Vec<ContactDetails>>().await {
                            Ok(contacts) => {
                                link.send_message(Msg::SavedContactsLoaded(role, contacts))
                            }
                            Err(err) => {
                                link.send_message(Msg::DialogRequestFailed(err.to_string()))
                            }
                        }
                    }
                    Ok(resp) => link.send_message(Msg::DialogRequestFailed(
                        resp.text().await.unwrap_or_default(),
                    )),
                    Err(err) => link.send_message(Msg::DialogRequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::OpenBankDialog => {
            component.bank_errors.clear();
            component.dialog_busy = true;
            open_top_sheet(component.bank_dialog_ref.clone());

            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get("/api/bank-details").send().await {
                    Ok(resp) if resp.status() == 200 => {
                        match resp.json::<Vec<BankDetails>>().await {
                            Ok(details) => link.send_message(Msg::SavedBankDetailsLoaded(details)),
                            Err(err) => {
                                link.send_message(Msg::DialogRequestFailed(err.to_string()))
                            }
                        }
                    }
                    Ok(resp) => link.send_message(Msg::DialogRequestFailed(
                        resp.text().await.unwrap_or_default(),
                    )),
                    Err(err) => link.send_message(Msg::DialogRequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::CloseDialogs => {
            close_top_sheet(component.contact_dialog_ref.clone());
            close_top_sheet(component.bank_dialog_ref.clone());
            component.dialog_busy = false;
            true
        }

        Msg::UpdateContactField(field, value) => {
            set_contact_field(component.active_contact_mut(), field, value);
            component.contact_errors.remove(&field);
            draft::store(component);
            true
        }
        Msg::UpdateBankField(field, value) => {
            match field {
                BankField::Account => {
                    component.bank_details.account = helpers::sanitize_digits(&value, 8)
                }
                BankField::SortCode => {
                    component.bank_details.sort_code = helpers::sanitize_digits(&value, 6)
                }
                BankField::AccountName => component.bank_details.account_name = value,
            }
            component.bank_errors.remove(&field);
            draft::store(component);
            true
        }

        Msg::SavedContactsLoaded(role, contacts) => {
            match role {
                ContactRole::Sender => component.saved_senders = contacts,
                ContactRole::Business => component.saved_businesses = contacts,
            }
            component.dialog_busy = false;
            true
        }
        Msg::SavedBankDetailsLoaded(details) => {
            component.saved_bank_details = details;
            component.dialog_busy = false;
            true
        }

        Msg::PickSavedContact(id) => {
            let picked = component
                .active_saved_contacts()
                .iter()
                .find(|c| c.id == Some(id))
                .cloned();
            if let Some(contact) = picked {
                *component.active_contact_mut() = contact;
                component.contact_errors.clear();
                draft::store(component);
                true
            } else {
                false
            }
        }
        Msg::PickSavedBankDetails(id) => {
            let picked = component
                .saved_bank_details
                .iter()
                .find(|d| d.id == Some(id))
                .cloned();
            if let Some(details) = picked {
                component.bank_details = details;
                component.bank_errors.clear();
                draft::store(component);
                true
            } else {
                false
            }
        }

        Msg::SaveContact => {
            let errors = helpers::validate_contact(component.active_contact());
            if !errors.is_empty() {
                component.contact_errors = errors;
                return true;
            }

            component.dialog_busy = true;
            let role = component.dialog_role;
            let contact = component.active_contact().clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::post(role.api_path())
                    .json(&contact)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(resp) if resp.status() == 200 => {
                        match resp.json::<ContactDetails>().await {
                            Ok(saved) => link.send_message(Msg::ContactSaved(saved)),
                            Err(err) => {
                                link.send_message(Msg::DialogRequestFailed(err.to_string()))
                            }
                        }
                    }
                    Ok(resp) => link.send_message(Msg::DialogRequestFailed(
                        resp.text().await.unwrap_or_default(),
                    )),
                    Err(err) => link.send_message(Msg::DialogRequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::ContactSaved(saved) => {
            show_toast(&format!("Saved {} details.", component.dialog_role.label()));
            *component.active_contact_mut() = saved.clone();
            match component.dialog_role {
                ContactRole::Sender => component.saved_senders.insert(0, saved),
                ContactRole::Business => component.saved_businesses.insert(0, saved),
            }
            component.dialog_busy = false;
            close_top_sheet(component.contact_dialog_ref.clone());
            draft::store(component);
            true
        }

        Msg::SaveBankDetails => {
            let errors = helpers::validate_bank(&component.bank_details);
            if !errors.is_empty() {
                component.bank_errors = errors;
                return true;
            }

            component.dialog_busy = true;
            let details = component.bank_details.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::post("/api/bank-details")
                    .json(&details)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(resp) if resp.status() == 200 => match resp.json::<BankDetails>().await {
                        Ok(saved) => link.send_message(Msg::BankDetailsSaved(saved)),
                        Err(err) => link.send_message(Msg::DialogRequestFailed(err.to_string())),
                    },
                    Ok(resp) => link.send_message(Msg::DialogRequestFailed(
                        resp.text().await.unwrap_or_default(),
                    )),
                    Err(err) => link.send_message(Msg::DialogRequestFailed(err.to_string())),
                }
            });
            true
        }
        Msg::BankDetailsSaved(saved) => {
            show_toast("Saved bank details.");
            component.bank_details = saved.clone();
            component.saved_bank_details.insert(0, saved);
            component.dialog_busy = false;
            close_top_sheet(component.bank_dialog_ref.clone());
            draft::store(component);
            true
        }

        Msg::DialogRequestFailed(message) => {
            gloo_console::error!(format!("Request failed: {}", message));
            show_toast(&format!("Request failed: {}", message));
            component.dialog_busy = false;
            true
        }

        Msg::SaveInvoice => {
            if !confirm("Are you sure you want to save the invoice?") {
                return false;
            }
            if component.sender.name.is_empty()
                || component.business.name.is_empty()
                || component.bank_details.account_name.is_empty()
            {
                show_toast(
                    "Please fill in all required details (Sender, Business, and Bank Details)",
                );
                return false;
            }

            let request = SaveInvoiceRequest {
                invoice_details: InvoiceDetails {
                    items: component.items.clone(),
                    ..component.details.clone()
                },
                sender: component.sender.clone(),
                business: component.business.clone(),
                bank_details: component.bank_details.clone(),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::post("/api/invoices")
                    .json(&request)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(resp) if resp.status() == 200 => {
                        show_toast("Invoice saved successfully!");
                        link.send_message(Msg::InvoiceSaved);
                    }
                    Ok(resp) => {
                        let body = resp.text().await.unwrap_or_default();
                        gloo_console::error!(format!("Failed to save invoice: {}", body));
                        show_toast(&format!("Failed to save invoice: {}", body));
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Error saving invoice: {}", err));
                        show_toast("An error occurred while saving the invoice. Please try again.");
                    }
                }
            });
            false
        }
        Msg::InvoiceSaved => {
            component.reset();
            component.details.invoice_no = helpers::generate_invoice_no();
            draft::clear();
            true
        }
        Msg::ClearInvoice => {
            if !confirm("Are you sure you want to clear the invoice?") {
                return false;
            }
            component.reset();
            component.details.invoice_no = helpers::generate_invoice_no();
            draft::clear();
            true
        }

        Msg::FetchSavedInvoices => {
            component.loading_invoices = true;
            component.show_invoice_list = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get("/api/invoices").send().await {
                    Ok(resp) if resp.status() == 200 => match resp.json::<Vec<Invoice>>().await {
                        Ok(invoices) => link.send_message(Msg::SavedInvoicesLoaded(invoices)),
                        Err(err) => {
                            gloo_console::error!(format!("Error fetching invoices: {}", err));
                            link.send_message(Msg::SavedInvoicesLoaded(Vec::new()));
                        }
                    },
                    Ok(resp) => {
                        let body = resp.text().await.unwrap_or_default();
                        gloo_console::error!(format!("Error fetching invoices: {}", body));
                        link.send_message(Msg::SavedInvoicesLoaded(Vec::new()));
                    }
                    Err(err) => {
                        gloo_console::error!(format!("Error fetching invoices: {}", err));
                        link.send_message(Msg::SavedInvoicesLoaded(Vec::new()));
                    }
                }
            });
            true
        }
        Msg::SavedInvoicesLoaded(invoices) => {
            component.saved_invoices = invoices;
            component.loading_invoices = false;
            true
        }
        Msg::HideInvoiceList => {
            component.show_invoice_list = false;
            true
        }
        Msg::LoadInvoice(index) => {
            if let Some(invoice) = component.saved_invoices.get(index).cloned() {
                component.items = invoice.items.clone();
                component.details = InvoiceDetails {
                    items: invoice.items,
                    invoice_no: invoice.invoice_no,
                    invoice_date: invoice.invoice_date,
                    due_date: invoice.due_date,
                    recipient: invoice.recipient,
                    date: invoice.date,
                    tax: invoice.tax,
                    sub_total: invoice.sub_total,
                    total: invoice.total,
                };
                component.sender = invoice.sender;
                component.business = invoice.business;
                component.bank_details = invoice.bank_details;
                component.show_invoice_list = false;
                component.item_error = None;
                draft::store(component);
                true
            } else {
                false
            }
        }

        Msg::Print => {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
            false
        }
    }
}

/// Refreshes every committed item's amount and the invoice totals.
fn apply_totals(component: &mut InvoiceFormComponent) {
    totals::recalculate(&mut component.items);
    let (sub_total, total) = totals::invoice_totals(&component.items, component.details.tax);
    component.details.sub_total = sub_total;
    component.details.total = total;
}

fn update_header(
    component: &mut InvoiceFormComponent,
    apply: impl FnOnce(&mut InvoiceDetails),
) -> bool {
    apply(&mut component.details);
    draft::store(component);
    true
}

fn set_item_field(item: &mut InvoiceItem, field: ItemField, value: &str) {
    match field {
        ItemField::Date => item.date = value.to_string(),
        ItemField::Description => item.description = value.to_string(),
        ItemField::Qty => item.qty = value.parse().unwrap_or(0),
        ItemField::Rate => item.rate = value.parse().unwrap_or(0.0),
    }
}

fn set_contact_field(contact: &mut ContactDetails, field: ContactField, value: String) {
    match field {
        ContactField::Name => contact.name = value,
        ContactField::Address1 => contact.address1 = value,
        ContactField::Address2 => contact.address2 = value,
        ContactField::City => contact.city = value,
        ContactField::State => contact.state = value,
        ContactField::Country => contact.country = value,
        ContactField::Postcode => contact.postcode = value,
        ContactField::Email => contact.email = value,
        ContactField::Phone => contact.phone = value,
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
