//! Bank details picker dialog. Account and sort-code inputs are sanitized as
//! the user types (digits only, capped length); full validation runs on Save.

use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::invoice::form::{BankField, InvoiceFormComponent, Msg};
use crate::top_sheet::{close_top_sheet, TopSheet};

pub fn bank_dialog(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    let dialog_ref = component.bank_dialog_ref.clone();
    let on_cancel = {
        let dr = dialog_ref.clone();
        let cb_link = link.clone();
        Callback::from(move |_| {
            close_top_sheet(dr.clone());
            cb_link.send_message(Msg::CloseDialogs);
        })
    };

    let details = &component.bank_details;
    let fields = [
        (BankField::AccountName, "Account Name", details.account_name.clone()),
        (BankField::Account, "Account Number", details.account.clone()),
        (BankField::SortCode, "Sort Code", details.sort_code.clone()),
    ];

    html! {
        <TopSheet node_ref={dialog_ref}>
            <div class="dialog-panel">
                <h3>{"Edit Bank Details"}</h3>

                { build_saved_picker(component, link) }

                {
                    fields
                        .into_iter()
                        .map(|(field, label, value)| build_field(component, link, field, label, value))
                        .collect::<Html>()
                }

                <div class="dialog-actions">
                    <button onclick={on_cancel} disabled={component.dialog_busy}>{"Cancel"}</button>
                    <button
                        class="primary"
                        onclick={link.callback(|_| Msg::SaveBankDetails)}
                        disabled={component.dialog_busy}
                    >
                        {"Save"}
                    </button>
                </div>
            </div>
        </TopSheet>
    }
}

fn build_saved_picker(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    let options = component
        .saved_bank_details
        .iter()
        .filter_map(|saved| saved.id.map(|id| (id, saved.account_name.clone())))
        .map(|(id, name)| {
            html! { <option value={id.to_string()}>{ name }</option> }
        })
        .collect::<Html>();

    html! {
        <label class="dialog-field">
            {"Saved entries"}
            <select onchange={link.batch_callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                value.parse::<i64>().ok().map(Msg::PickSavedBankDetails)
            })}>
                <option value="" selected=true>{"New entry..."}</option>
                { options }
            </select>
        </label>
    }
}

fn build_field(
    component: &InvoiceFormComponent,
    link: &Scope<InvoiceFormComponent>,
    field: BankField,
    label: &str,
    value: String,
) -> Html {
    let error = component.bank_errors.get(&field).cloned();

    html! {
        <label class="dialog-field">
            { label }
            <input
                type="text"
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateBankField(field, value)
                })}
            />
            {
                if let Some(error) = error {
                    html! { <span class="field-error">{ error }</span> }
                } else {
                    html! {}
                }
            }
        </label>
    }
}
