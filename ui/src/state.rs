//! State machines for the admin dashboard and the property form.
//!
//! Both are plain `Reducible` types so every transition can be exercised
//! without a browser; components only dispatch actions and render.

use payloads::{FormMode, Property, PropertyDraft, PropertyField, PropertyId};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::FetchState;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation completed successfully!";
pub const DELETE_FAILED_MESSAGE: &str =
    "Failed to delete property. Please try again.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load property details.";
pub const LIST_FAILED_MESSAGE: &str = "Failed to load properties.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Failed to submit property. Please try again.";

pub fn deleted_message(name: &str) -> String {
    format!("Property \"{name}\" has been deleted successfully!")
}

pub fn submitted_message(mode: &FormMode, name: &str) -> String {
    match mode {
        FormMode::Create => {
            format!("Property \"{name}\" has been added successfully!")
        }
        FormMode::Edit(_) => {
            format!("Property \"{name}\" has been updated successfully!")
        }
    }
}

/// Result of a finished mutation, shown in the outcome dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// What the property form reports back when it goes away.
#[derive(Debug, Clone, PartialEq)]
pub struct FormCompletion {
    pub success: bool,
    pub message: Option<String>,
}

impl FormCompletion {
    pub fn saved(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
        }
    }

    pub fn dismissed() -> Self {
        Self {
            success: false,
            message: None,
        }
    }

    /// The list is only stale after the server accepted a change.
    pub fn requires_refetch(&self) -> bool {
        self.success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    List,
    Form(FormMode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub properties: FetchState<Vec<Property>>,
    pub view: DashboardView,
    /// Property awaiting delete confirmation
    pub delete_target: Option<Property>,
    pub is_deleting: bool,
    pub outcome: Option<Outcome>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            properties: FetchState::Loading,
            view: DashboardView::List,
            delete_target: None,
            is_deleting: false,
            outcome: None,
        }
    }
}

pub enum DashboardAction {
    ListRequested,
    ListLoaded(Vec<Property>),
    ListFailed,
    AddClicked,
    EditClicked(PropertyId),
    FormClosed(FormCompletion),
    DeleteClicked(Property),
    DeleteCancelled,
    DeleteStarted,
    DeleteSucceeded(Property),
    DeleteFailed,
    OutcomeDismissed,
}

/// Work left for the dashboard once an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    None,
    RefetchList,
}

impl DashboardAction {
    /// Only a save reported by the form invalidates the list. A delete
    /// already removed its row locally.
    pub fn followup(&self) -> Followup {
        match self {
            Self::FormClosed(completion) if completion.requires_refetch() => {
                Followup::RefetchList
            }
            _ => Followup::None,
        }
    }
}

impl DashboardState {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::ListRequested => {
                // keep showing the current rows while a refresh is in flight
                if !self.properties.is_loaded() {
                    self.properties = FetchState::Loading;
                }
            }
            DashboardAction::ListLoaded(properties) => {
                self.properties = FetchState::Loaded(properties);
            }
            DashboardAction::ListFailed => {
                self.properties =
                    FetchState::Failed(LIST_FAILED_MESSAGE.into());
            }
            DashboardAction::AddClicked => {
                self.view = DashboardView::Form(FormMode::Create);
            }
            DashboardAction::EditClicked(id) => {
                self.view = DashboardView::Form(FormMode::Edit(id));
            }
            DashboardAction::FormClosed(completion) => {
                self.view = DashboardView::List;
                if completion.success {
                    let message = completion
                        .message
                        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.into());
                    self.outcome = Some(Outcome::Success(message));
                }
            }
            DashboardAction::DeleteClicked(property) => {
                // one delete target at a time
                if !self.is_deleting {
                    self.delete_target = Some(property);
                }
            }
            DashboardAction::DeleteCancelled => {
                if !self.is_deleting {
                    self.delete_target = None;
                }
            }
            DashboardAction::DeleteStarted => {
                self.is_deleting = self.delete_target.is_some();
            }
            DashboardAction::DeleteSucceeded(property) => {
                if let FetchState::Loaded(properties) = &mut self.properties {
                    properties.retain(|p| p.id != property.id);
                }
                self.delete_target = None;
                self.is_deleting = false;
                self.outcome =
                    Some(Outcome::Success(deleted_message(&property.name)));
            }
            DashboardAction::DeleteFailed => {
                self.delete_target = None;
                self.is_deleting = false;
                self.outcome =
                    Some(Outcome::Failure(DELETE_FAILED_MESSAGE.into()));
            }
            DashboardAction::OutcomeDismissed => {
                self.outcome = None;
            }
        }
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fetching the record being edited
    Loading,
    Ready,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub phase: FormPhase,
    pub draft: PropertyDraft,
    pub error: Option<String>,
}

impl FormState {
    pub fn new(mode: FormMode) -> Self {
        let phase = match mode {
            FormMode::Create => FormPhase::Ready,
            FormMode::Edit(_) => FormPhase::Loading,
        };
        Self {
            mode,
            phase,
            draft: PropertyDraft::default(),
            error: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// The form stays open until its request settles, so a save is always
    /// reported back.
    pub fn can_close(&self) -> bool {
        !self.is_submitting()
    }

    /// Responses for a record other than the one being edited are stale.
    fn is_current(&self, id: PropertyId) -> bool {
        self.mode == FormMode::Edit(id)
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Loaded(property) => {
                if self.is_current(property.id) {
                    self.draft = PropertyDraft::from(&property);
                    self.phase = FormPhase::Ready;
                }
            }
            FormAction::LoadFailed(id) => {
                if self.is_current(id) {
                    self.draft = PropertyDraft::default();
                    self.error = Some(LOAD_FAILED_MESSAGE.into());
                    self.phase = FormPhase::Ready;
                }
            }
            FormAction::FieldChanged(field, raw) => {
                self.draft.set(field, &raw);
            }
            FormAction::Invalid(message) => {
                self.error = Some(message);
                self.phase = FormPhase::Ready;
            }
            FormAction::SubmitStarted => {
                self.error = None;
                self.phase = FormPhase::Submitting;
            }
            FormAction::SubmitFailed => {
                self.error = Some(SUBMIT_FAILED_MESSAGE.into());
                self.phase = FormPhase::Ready;
            }
        }
    }
}

pub enum FormAction {
    Loaded(Property),
    LoadFailed(PropertyId),
    FieldChanged(PropertyField, String),
    /// The draft failed client-side checks
    Invalid(String),
    SubmitStarted,
    SubmitFailed,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// In-flight flag checked synchronously on submit.
///
/// Reducer updates only land on the next render, so two clicks delivered
/// back to back would both see `Ready`. The guard closes that window.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    in_flight: Cell<bool>,
}

impl SubmitGuard {
    /// Returns false if a submission is already running.
    pub fn try_begin(&self) -> bool {
        !self.in_flight.replace(true)
    }

    pub fn finish(&self) {
        self.in_flight.set(false);
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::PropertyDetails;
    use rust_decimal::dec;

    fn lakeview() -> Property {
        Property {
            id: PropertyId(1),
            details: PropertyDetails {
                name: "Lakeview".into(),
                price: dec!(1200),
                location: "Lakeside".into(),
                bedrooms: 2,
                bathrooms: 1,
                image_url: None,
            },
        }
    }

    fn harbor() -> Property {
        Property {
            id: PropertyId(2),
            details: PropertyDetails {
                name: "Harbor Flat".into(),
                price: dec!(2150),
                location: "Pier 4".into(),
                bedrooms: 1,
                bathrooms: 1,
                image_url: None,
            },
        }
    }

    fn loaded(properties: Vec<Property>) -> DashboardState {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::ListLoaded(properties));
        state
    }

    #[test]
    fn dashboard_starts_loading_the_list() {
        let state = DashboardState::default();
        assert!(state.properties.is_loading());
        assert_eq!(state.view, DashboardView::List);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn list_failure_is_an_explicit_state() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::ListFailed);
        assert_eq!(state.properties.error(), Some(LIST_FAILED_MESSAGE));

        // a retry goes back to loading
        state.apply(DashboardAction::ListRequested);
        assert!(state.properties.is_loading());
    }

    #[test]
    fn refetch_keeps_rows_until_the_new_list_arrives() {
        let mut state = loaded(vec![lakeview()]);
        state.apply(DashboardAction::ListRequested);
        assert_eq!(state.properties.as_ref().map(Vec::len), Some(1));

        state.apply(DashboardAction::ListLoaded(vec![lakeview(), harbor()]));
        assert_eq!(state.properties.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn add_and_edit_open_the_form_in_the_right_mode() {
        let mut state = loaded(vec![lakeview()]);
        state.apply(DashboardAction::EditClicked(PropertyId(1)));
        assert_eq!(
            state.view,
            DashboardView::Form(FormMode::Edit(PropertyId(1)))
        );

        state.apply(DashboardAction::FormClosed(FormCompletion::dismissed()));
        state.apply(DashboardAction::AddClicked);
        assert_eq!(state.view, DashboardView::Form(FormMode::Create));
    }

    #[test]
    fn successful_form_shows_outcome_and_requests_refetch() {
        let mut state = loaded(vec![]);
        state.apply(DashboardAction::AddClicked);

        let completion = FormCompletion::saved(submitted_message(
            &FormMode::Create,
            "Lakeview",
        ));
        assert!(completion.requires_refetch());
        state.apply(DashboardAction::FormClosed(completion));

        assert_eq!(state.view, DashboardView::List);
        assert_eq!(
            state.outcome,
            Some(Outcome::Success(
                "Property \"Lakeview\" has been added successfully!".into()
            ))
        );
    }

    #[test]
    fn success_without_message_uses_default() {
        let mut state = loaded(vec![]);
        state.apply(DashboardAction::FormClosed(FormCompletion {
            success: true,
            message: None,
        }));
        assert_eq!(
            state.outcome.as_ref().map(Outcome::message),
            Some(DEFAULT_SUCCESS_MESSAGE)
        );
    }

    #[test]
    fn dismissed_form_returns_to_list_quietly() {
        let mut state = loaded(vec![lakeview()]);
        state.apply(DashboardAction::EditClicked(PropertyId(1)));
        let completion = FormCompletion::dismissed();
        assert!(!completion.requires_refetch());
        state.apply(DashboardAction::FormClosed(completion));

        assert_eq!(state.view, DashboardView::List);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn confirmed_delete_removes_row_locally() {
        let mut state = loaded(vec![lakeview()]);
        state.apply(DashboardAction::DeleteClicked(lakeview()));
        assert_eq!(state.delete_target, Some(lakeview()));

        state.apply(DashboardAction::DeleteStarted);
        assert!(state.is_deleting);
        state.apply(DashboardAction::DeleteSucceeded(lakeview()));

        assert_eq!(state.properties, FetchState::Loaded(vec![]));
        assert!(state.delete_target.is_none());
        assert!(!state.is_deleting);
        assert_eq!(
            state.outcome,
            Some(Outcome::Success(
                "Property \"Lakeview\" has been deleted successfully!".into()
            ))
        );
    }

    #[test]
    fn failed_delete_keeps_row_and_reports_failure() {
        let mut state = loaded(vec![lakeview(), harbor()]);
        state.apply(DashboardAction::DeleteClicked(harbor()));
        state.apply(DashboardAction::DeleteStarted);
        state.apply(DashboardAction::DeleteFailed);

        assert_eq!(state.properties.as_ref().map(Vec::len), Some(2));
        assert!(state.delete_target.is_none());
        let outcome = state.outcome.unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), DELETE_FAILED_MESSAGE);
    }

    #[test]
    fn delete_target_is_locked_while_deleting() {
        let mut state = loaded(vec![lakeview(), harbor()]);
        state.apply(DashboardAction::DeleteClicked(lakeview()));
        state.apply(DashboardAction::DeleteStarted);

        state.apply(DashboardAction::DeleteClicked(harbor()));
        state.apply(DashboardAction::DeleteCancelled);
        assert_eq!(state.delete_target, Some(lakeview()));
    }

    #[test]
    fn delete_cannot_start_without_target() {
        let mut state = loaded(vec![lakeview()]);
        state.apply(DashboardAction::DeleteStarted);
        assert!(!state.is_deleting);
    }

    #[test]
    fn outcome_can_be_dismissed() {
        let mut state = loaded(vec![lakeview()]);
        state.apply(DashboardAction::DeleteClicked(lakeview()));
        state.apply(DashboardAction::DeleteFailed);
        state.apply(DashboardAction::OutcomeDismissed);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn create_form_is_ready_immediately() {
        let state = FormState::new(FormMode::Create);
        assert_eq!(state.phase, FormPhase::Ready);
        assert_eq!(state.draft, PropertyDraft::default());
    }

    #[test]
    fn edit_form_fills_fields_from_fetched_record() {
        let mut state = FormState::new(FormMode::Edit(PropertyId(1)));
        assert_eq!(state.phase, FormPhase::Loading);

        state.apply(FormAction::Loaded(lakeview()));
        assert_eq!(state.phase, FormPhase::Ready);
        assert_eq!(state.draft.value(PropertyField::Name), "Lakeview");
        assert_eq!(state.draft.value(PropertyField::Price), "1200");
        assert_eq!(state.draft.value(PropertyField::Location), "Lakeside");
        assert_eq!(state.draft.value(PropertyField::Bedrooms), "2");
        assert_eq!(state.draft.value(PropertyField::Bathrooms), "1");
        assert_eq!(state.draft.to_details().unwrap(), lakeview().details);
    }

    #[test]
    fn stale_load_for_other_record_is_ignored() {
        let mut state = FormState::new(FormMode::Edit(PropertyId(1)));
        state.apply(FormAction::Loaded(harbor()));
        state.apply(FormAction::LoadFailed(PropertyId(2)));
        assert_eq!(state.phase, FormPhase::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn load_failure_leaves_empty_recoverable_form() {
        let mut state = FormState::new(FormMode::Edit(PropertyId(1)));
        state.apply(FormAction::LoadFailed(PropertyId(1)));
        assert_eq!(state.phase, FormPhase::Ready);
        assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
        assert_eq!(state.draft, PropertyDraft::default());

        state.apply(FormAction::FieldChanged(
            PropertyField::Name,
            "Recovered".into(),
        ));
        assert_eq!(state.draft.name, "Recovered");
    }

    #[test]
    fn field_edits_coerce_numbers() {
        let mut state = FormState::new(FormMode::Create);
        state.apply(FormAction::FieldChanged(
            PropertyField::Bedrooms,
            "3".into(),
        ));
        state.apply(FormAction::FieldChanged(
            PropertyField::Price,
            "950".into(),
        ));
        assert_eq!(state.draft.bedrooms(), Some(3));
        assert_eq!(state.draft.price(), Some(dec!(950)));
    }

    #[test]
    fn form_cannot_close_while_submitting() {
        let mut state = FormState::new(FormMode::Create);
        assert!(state.can_close());

        state.apply(FormAction::SubmitStarted);
        assert!(!state.can_close());

        state.apply(FormAction::SubmitFailed);
        assert!(state.can_close());
    }

    #[test]
    fn only_a_saved_form_triggers_a_refetch() {
        let saved = DashboardAction::FormClosed(FormCompletion::saved(
            submitted_message(&FormMode::Edit(PropertyId(1)), "Lakeview"),
        ));
        assert_eq!(saved.followup(), Followup::RefetchList);

        let dismissed =
            DashboardAction::FormClosed(FormCompletion::dismissed());
        assert_eq!(dismissed.followup(), Followup::None);
    }

    #[test]
    fn delete_never_triggers_a_refetch() {
        let actions = [
            DashboardAction::DeleteClicked(lakeview()),
            DashboardAction::DeleteStarted,
            DashboardAction::DeleteSucceeded(lakeview()),
            DashboardAction::DeleteFailed,
            DashboardAction::DeleteCancelled,
        ];
        for action in actions {
            assert_eq!(action.followup(), Followup::None);
        }
    }

    #[test]
    fn list_actions_do_not_chain_refetches() {
        let actions = [
            DashboardAction::ListRequested,
            DashboardAction::ListLoaded(vec![lakeview()]),
            DashboardAction::ListFailed,
            DashboardAction::AddClicked,
            DashboardAction::EditClicked(PropertyId(1)),
            DashboardAction::OutcomeDismissed,
        ];
        for action in actions {
            assert_eq!(action.followup(), Followup::None);
        }
    }

    #[test]
    fn submit_failure_reenables_form_with_error() {
        let mut state = FormState::new(FormMode::Create);
        state.apply(FormAction::SubmitStarted);
        assert!(state.is_submitting());

        state.apply(FormAction::SubmitFailed);
        assert_eq!(state.phase, FormPhase::Ready);
        assert_eq!(state.error.as_deref(), Some(SUBMIT_FAILED_MESSAGE));

        // a new attempt clears the previous error
        state.apply(FormAction::SubmitStarted);
        assert!(state.error.is_none());
    }

    #[test]
    fn submit_guard_admits_one_submission_at_a_time() {
        let guard = SubmitGuard::default();
        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        assert!(guard.in_flight());

        guard.finish();
        assert!(guard.try_begin());
    }

    #[test]
    fn submitted_message_names_the_property() {
        assert_eq!(
            submitted_message(&FormMode::Edit(PropertyId(4)), "Beach House"),
            "Property \"Beach House\" has been updated successfully!"
        );
    }
}
