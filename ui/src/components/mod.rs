pub mod confirmation_modal;
pub mod layout;
pub mod modal;
pub mod outcome_modal;
pub mod property_form;
pub mod property_table;

pub use confirmation_modal::ConfirmationModal;
pub use modal::{Modal, ModalTone};
pub use outcome_modal::OutcomeModal;
pub use property_form::PropertyForm;
pub use property_table::PropertyTable;
