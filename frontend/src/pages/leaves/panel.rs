use crate::config::{self, UiSettings};
use crate::pages::leaves::{
    components::{history::LeaveHistoryList, leave_form::LeaveForm},
    layout::LeaveLayout,
    view_model::use_leave_form_view_model,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LeavePage() -> impl IntoView {
    let settings = use_context::<UiSettings>().unwrap_or_else(config::ui_settings);
    let vm = use_leave_form_view_model(settings);

    view! {
        <Title text="Leave Details"/>
        <LeaveLayout>
            <LeaveForm vm=vm />
            <LeaveHistoryList
                emp_id=vm.emp_id
                emp_name=vm.emp_name
                reset=vm.history_reset_signal()
                layout=settings.history_layout
            />
        </LeaveLayout>
    }
}
