pub mod dialogs;
pub mod form;
pub mod format;
pub mod history;
