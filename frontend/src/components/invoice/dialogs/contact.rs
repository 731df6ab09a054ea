//! Contact picker dialog, shared by the sender and business blocks. The role
//! currently being edited lives in the form state (`dialog_role`), so one
//! dialog serves both registries.

use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::invoice::form::{ContactField, InvoiceFormComponent, Msg};
use crate::top_sheet::{close_top_sheet, TopSheet};

pub fn contact_dialog(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    let dialog_ref = component.contact_dialog_ref.clone();
    let on_cancel = {
        let dr = dialog_ref.clone();
        let cb_link = link.clone();
        Callback::from(move |_| {
            close_top_sheet(dr.clone());
            cb_link.send_message(Msg::CloseDialogs);
        })
    };

    let contact = component.active_contact();
    let fields = [
        (ContactField::Name, "Name", contact.name.clone()),
        (ContactField::Address1, "Address Line 1", contact.address1.clone()),
        (ContactField::Address2, "Address Line 2", contact.address2.clone()),
        (ContactField::City, "City", contact.city.clone()),
        (ContactField::State, "County / State", contact.state.clone()),
        (ContactField::Country, "Country", contact.country.clone()),
        (ContactField::Postcode, "Postcode", contact.postcode.clone()),
        (ContactField::Email, "Email", contact.email.clone()),
        (ContactField::Phone, "Phone", contact.phone.clone()),
    ];

    html! {
        <TopSheet node_ref={dialog_ref}>
            <div class="dialog-panel">
                <h3>{ component.dialog_role.title() }</h3>

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
                        onclick={link.callback(|_| Msg::SaveContact)}
                        disabled={component.dialog_busy}
                    >
                        {"Save"}
                    </button>
                </div>
            </div>
        </TopSheet>
    }
}

/// Dropdown over previously saved entries for the active registry. Picking
/// one copies it into the form; the blank option leaves the fields editable
/// as a new entry.
fn build_saved_picker(component: &InvoiceFormComponent, link: &Scope<InvoiceFormComponent>) -> Html {
    let options = component
        .active_saved_contacts()
        .iter()
        .filter_map(|saved| saved.id.map(|id| (id, saved.name.clone())))
        .map(|(id, name)| {
            html! { <option value={id.to_string()}>{ name }</option> }
        })
        .collect::<Html>();

    html! {
        <label class="dialog-field">
            {"Saved entries"}
            <select onchange={link.batch_callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                value.parse::<i64>().ok().map(Msg::PickSavedContact)
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
    field: ContactField,
    label: &str,
    value: String,
) -> Html {
    let error = component.contact_errors.get(&field).cloned();

    html! {
        <label class="dialog-field">
            { label }
            <input
                type="text"
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateContactField(field, value)
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
