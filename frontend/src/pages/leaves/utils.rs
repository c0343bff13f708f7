use crate::api::{ApiError, LeaveDraft};

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Identifies one history fetch; only the most recent ticket may apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub emp_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCommand {
    Clear,
    Fetch(FetchTicket),
}

/// Tracks which employee the history table is showing.
#[derive(Debug, Clone, Default)]
pub struct HistorySync {
    generation: u64,
    current: Option<String>,
}

impl HistorySync {
    /// Every call invalidates outstanding tickets. Only an active reset signal
    /// suppresses the fetch; an empty id is still requested.
    pub fn on_selection(&mut self, emp_id: &str, reset_active: bool) -> HistoryCommand {
        self.generation = self.generation.wrapping_add(1);
        if reset_active {
            self.current = None;
            return HistoryCommand::Clear;
        }
        self.current = Some(emp_id.to_string());
        HistoryCommand::Fetch(FetchTicket {
            generation: self.generation,
            emp_id: emp_id.to_string(),
        })
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && self.current.as_deref() == Some(&ticket.emp_id)
    }

    /// The selected id, if any; an empty id counts as no selection.
    pub fn current_emp_id(&self) -> Option<&str> {
        self.current.as_deref().filter(|id| !id.trim().is_empty())
    }
}

/// Dispatches `draft` unless a submission is already in flight.
pub fn dispatch_submit_once<F>(pending: bool, draft: LeaveDraft, dispatch: F) -> bool
where
    F: FnOnce(LeaveDraft),
{
    if pending {
        log::warn!("Leave submission already in progress; ignoring repeat submit");
        return false;
    }
    dispatch(draft);
    true
}

pub fn zebra_row_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "bg-white"
    } else {
        "bg-gray-100"
    }
}
