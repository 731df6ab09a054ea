use common::model::bank::BankDetails;
use common::model::contact::ContactDetails;
use common::model::invoice::Invoice;

/// Which contact registry the contact dialog is editing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    Sender,
    Business,
}

impl ContactRole {
    pub fn api_path(self) -> &'static str {
        match self {
            ContactRole::Sender => "/api/senders",
            ContactRole::Business => "/api/businesses",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ContactRole::Sender => "Edit Sender Information",
            ContactRole::Business => "Edit Business Information",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactRole::Sender => "sender",
            ContactRole::Business => "business",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Address1,
    Address2,
    City,
    State,
    Country,
    Postcode,
    Email,
    Phone,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankField {
    Account,
    SortCode,
    AccountName,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Date,
    Description,
    Qty,
    Rate,
}

pub enum Msg {
    // Draft line item and committed items.
    UpdateCurrentItem(ItemField, String),
    AddItem,
    EditItem(usize, ItemField, String),
    RemoveItem(usize),

    // Invoice header fields.
    UpdateInvoiceNo(String),
    UpdateInvoiceDate(String),
    UpdateDueDate(String),
    UpdateDate(String),
    UpdateRecipient(String),
    UpdateTax(String),

    // Dialog pickers.
    OpenContactDialog(ContactRole),
    OpenBankDialog,
    CloseDialogs,
    UpdateContactField(ContactField, String),
    UpdateBankField(BankField, String),
    SavedContactsLoaded(ContactRole, Vec<ContactDetails>),
    SavedBankDetailsLoaded(Vec<BankDetails>),
    PickSavedContact(i64),
    PickSavedBankDetails(i64),
    SaveContact,
    ContactSaved(ContactDetails),
    SaveBankDetails,
    BankDetailsSaved(BankDetails),
    DialogRequestFailed(String),

    // Whole-invoice actions.
    SaveInvoice,
    InvoiceSaved,
    ClearInvoice,
    FetchSavedInvoices,
    SavedInvoicesLoaded(Vec<Invoice>),
    HideInvoiceList,
    LoadInvoice(usize),
    Print,
}
