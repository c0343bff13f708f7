use crate::api::{
    ApiClient, ApiError, DraftField, EmployeeRef, LeaveDraft, LeaveRecord, EXCEL_CONTENT_TYPE,
};
use crate::config::UiSettings;
use crate::pages::leaves::{
    repository::LeavesRepository,
    utils::{dispatch_submit_once, FetchTicket, HistoryCommand, HistorySync, MessageState},
};
use crate::utils::trigger_blob_download;
use leptos::*;

pub const EXPORT_FILENAME: &str = "leave_details.xlsx";

pub type DirectoryResource = Resource<(), Result<Vec<EmployeeRef>, ApiError>>;

#[derive(Clone, Copy)]
pub struct LeaveFormViewModel {
    pub draft: RwSignal<LeaveDraft>,
    pub directory_resource: DirectoryResource,
    pub directory: Memo<Vec<EmployeeRef>>,
    pub reset_signal: RwSignal<bool>,
    pub message: RwSignal<MessageState>,
    pub submit_action: Action<LeaveDraft, Result<(), ApiError>>,
    pub emp_id: Memo<String>,
    pub emp_name: Memo<String>,
    pub settings: UiSettings,
}

fn directory_entries(result: Option<Result<Vec<EmployeeRef>, ApiError>>) -> Vec<EmployeeRef> {
    match result {
        Some(Ok(list)) => list,
        Some(Err(err)) => {
            log::error!("Error fetching employee data: {}", err);
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn apply_submit_result(result: Option<Result<(), ApiError>>, message: RwSignal<MessageState>) {
    if let Some(result) = result {
        match result {
            Ok(()) => {
                log::info!("Leave details submitted successfully");
                message.update(|msg| msg.set_success("Leave details submitted successfully."));
            }
            Err(err) => {
                log::error!("Error submitting leave details: {}", err);
                message.update(|msg| msg.set_error(err));
            }
        }
    }
}

impl LeaveFormViewModel {
    pub fn new(settings: UiSettings) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeavesRepository::new(api));

        let draft = create_rw_signal(LeaveDraft::default());
        let reset_signal = create_rw_signal(false);
        let message = create_rw_signal(MessageState::default());

        // Loaded once per session; never refetched.
        let directory_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_directory().await }
            },
        );
        let directory = create_memo(move |_| directory_entries(directory_resource.get()));

        let submit_action = create_action(move |draft: &LeaveDraft| {
            let repo = repository.get_value();
            let draft = draft.clone();
            async move { repo.submit_leave(draft).await }
        });

        create_effect(move |_| {
            apply_submit_result(submit_action.value().get(), message);
        });

        let emp_id = create_memo(move |_| draft.with(|d| d.employee.emp_id.clone()));
        let emp_name = create_memo(move |_| draft.with(|d| d.employee.emp_name.clone()));

        Self {
            draft,
            directory_resource,
            directory,
            reset_signal,
            message,
            submit_action,
            emp_id,
            emp_name,
            settings,
        }
    }

    /// Returns false, leaving the draft untouched, when `emp_id` is not in the directory.
    pub fn select_employee(&self, emp_id: &str) -> bool {
        let mut next = self.draft.get_untracked();
        let found = self
            .directory
            .with_untracked(|directory| next.select_employee(directory, emp_id));
        if !found {
            log::warn!("Employee {:?} is not in the directory", emp_id);
            return false;
        }
        // Lower the reset signal after the id changes so the history sees one fetch.
        self.draft.set(next);
        if self.reset_signal.get_untracked() {
            self.reset_signal.set(false);
        }
        true
    }

    pub fn edit_field(&self, field: DraftField, value: String) {
        self.draft.update(|d| d.edit_field(field, value));
    }

    pub fn edit_named_field(&self, name: &str, value: String) -> Result<(), ApiError> {
        let field: DraftField = name.parse()?;
        self.edit_field(field, value);
        Ok(())
    }

    pub fn select_leave_type(&self, raw: &str) -> bool {
        let mut next = self.draft.get_untracked();
        match next.select_leave_type(raw) {
            Ok(()) => {
                self.draft.set(next);
                true
            }
            Err(err) => {
                log::warn!("Ignoring leave type selection: {}", err);
                false
            }
        }
    }

    pub fn submit(&self) -> bool {
        let action = self.submit_action;
        let pending = action.pending().get_untracked();
        dispatch_submit_once(pending, self.draft.get_untracked(), |draft| {
            self.message.update(|msg| msg.clear());
            action.dispatch(draft);
        })
    }

    /// The reset signal the history list observes; absent unless resets cascade.
    pub fn history_reset_signal(&self) -> Option<Signal<bool>> {
        self.settings
            .cascade_reset
            .then(|| Signal::from(self.reset_signal))
    }

    pub fn reset(&self) {
        if self.settings.cascade_reset {
            self.reset_signal.set(true);
        }
        self.draft.update(LeaveDraft::reset);
        self.message.update(|msg| msg.clear());
    }
}

pub fn use_leave_form_view_model(settings: UiSettings) -> LeaveFormViewModel {
    match use_context::<LeaveFormViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveFormViewModel::new(settings);
            provide_context(vm);
            vm
        }
    }
}

#[derive(Clone, Copy)]
pub struct HistoryViewModel {
    pub records: RwSignal<Vec<LeaveRecord>>,
    pub loading: RwSignal<bool>,
    pub export_action: Action<String, Result<Vec<u8>, ApiError>>,
    sync: StoredValue<HistorySync>,
    repository: StoredValue<LeavesRepository>,
}

fn apply_history_result(
    is_current: bool,
    ticket: &FetchTicket,
    result: Result<Vec<LeaveRecord>, ApiError>,
    records: RwSignal<Vec<LeaveRecord>>,
    loading: RwSignal<bool>,
) -> bool {
    if !is_current {
        log::debug!("Discarding stale leave history for {}", ticket.emp_id);
        return false;
    }
    loading.set(false);
    match result {
        Ok(list) => {
            records.set(list);
            true
        }
        Err(err) => {
            log::error!("Error fetching leave data for {}: {}", ticket.emp_id, err);
            false
        }
    }
}

fn apply_export_result<F>(result: Option<Result<Vec<u8>, ApiError>>, download: F) -> bool
where
    F: FnOnce(&[u8]) -> Result<(), String>,
{
    match result {
        Some(Ok(bytes)) => match download(&bytes) {
            Ok(()) => true,
            Err(err) => {
                log::error!("Error downloading Excel file: {}", err);
                false
            }
        },
        Some(Err(err)) => {
            log::error!("Error downloading Excel file: {}", err);
            false
        }
        None => false,
    }
}

impl HistoryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeavesRepository::new(api));
        let records = create_rw_signal(Vec::<LeaveRecord>::new());
        let loading = create_rw_signal(false);
        let sync = store_value(HistorySync::default());

        let export_action = create_action(move |emp_id: &String| {
            let repo = repository.get_value();
            let emp_id = emp_id.clone();
            async move { repo.export_history(&emp_id).await }
        });

        create_effect(move |_| {
            apply_export_result(export_action.value().get(), |bytes| {
                trigger_blob_download(EXPORT_FILENAME, EXCEL_CONTENT_TYPE, bytes)
            });
        });

        Self {
            records,
            loading,
            export_action,
            sync,
            repository,
        }
    }

    /// Reacts to a new employee id (or reset signal) from the form.
    pub fn on_selection(&self, emp_id: &str, reset_active: bool) {
        let Some(command) = self
            .sync
            .try_update_value(|sync| sync.on_selection(emp_id, reset_active))
        else {
            return;
        };
        match command {
            HistoryCommand::Clear => {
                self.loading.set(false);
                self.records.set(Vec::new());
            }
            HistoryCommand::Fetch(ticket) => {
                let vm = *self;
                spawn_local(async move {
                    vm.load(ticket).await;
                });
            }
        }
    }

    /// Reads the tracked selection inputs; run inside an effect.
    pub fn follow_selection(&self, emp_id: Signal<String>, reset: Option<Signal<bool>>) {
        let id = emp_id.get();
        let reset_active = reset.map(|signal| signal.get()).unwrap_or(false);
        self.on_selection(&id, reset_active);
    }

    pub async fn load(self, ticket: FetchTicket) -> bool {
        self.loading.set(true);
        let repo = self.repository.get_value();
        let result = repo.list_history(&ticket.emp_id).await;
        let is_current = self
            .sync
            .with_value(|sync| sync.is_current(&ticket));
        apply_history_result(is_current, &ticket, result, self.records, self.loading)
    }

    pub fn current_emp_id(&self) -> Option<String> {
        self.sync
            .with_value(|sync| sync.current_emp_id().map(str::to_string))
    }

    pub fn export(&self) -> bool {
        let Some(emp_id) = self.current_emp_id() else {
            log::warn!("No employee selected; nothing to export");
            return false;
        };
        if self.export_action.pending().get_untracked() {
            return false;
        }
        self.export_action.dispatch(emp_id);
        true
    }
}
