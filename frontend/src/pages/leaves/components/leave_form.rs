use crate::api::{DraftField, LeaveType};
use crate::components::layout::{ErrorMessage, SuccessMessage};
use crate::pages::leaves::{components::employee_select::EmployeeSelect, view_model::LeaveFormViewModel};
use leptos::*;

#[component]
pub fn RequiredMark() -> impl IntoView {
    view! { <span class="required text-red-600 ml-0.5">{"*"}</span> }
}

#[component]
fn DateField(vm: LeaveFormViewModel, field: DraftField, label: &'static str) -> impl IntoView {
    let value = create_memo(move |_| vm.draft.with(|d| d.field(field).to_string()));
    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-gray-700">{label}<RequiredMark/></label>
            <input
                type="date"
                id=field.name()
                name=field.name()
                class="mt-1 block w-full border rounded px-2 py-1"
                prop:value=move || value.get()
                on:input=move |ev| vm.edit_field(field, event_target_value(&ev))
                required
            />
        </div>
    }
}

#[component]
pub fn LeaveForm(vm: LeaveFormViewModel) -> impl IntoView {
    let pending = vm.submit_action.pending();
    let message = vm.message;
    let leave_type = create_memo(move |_| {
        vm.draft
            .with(|d| d.leave_type.map(|t| t.code().to_string()).unwrap_or_default())
    });
    let reason = create_memo(move |_| vm.draft.with(|d| d.leave_reason.clone()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let on_reset = move |_| vm.reset();

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-gray-900">{"Leave Details Form"}</h2>
            <Show when=move || message.get().error.is_some()>
                <ErrorMessage message=message.get().error.map(String::from).unwrap_or_default() />
            </Show>
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message=message.get().success.unwrap_or_default() />
            </Show>
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <EmployeeSelect
                        directory=vm.directory_resource
                        entries=vm.directory
                        selected=vm.emp_id
                        on_select=Callback::new(move |emp_id: String| {
                            vm.select_employee(&emp_id);
                        })
                    />
                    <div class="space-y-1">
                        <label for="empName" class="block text-sm font-medium text-gray-700">{"Employee Name"}</label>
                        <input
                            type="text"
                            id="empName"
                            name="empName"
                            class="w-full border rounded px-2 py-1 bg-gray-100"
                            prop:value=move || vm.emp_name.get()
                            disabled
                        />
                    </div>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <DateField vm=vm field=DraftField::LeaveStartDate label="Leave Start Date" />
                    <DateField vm=vm field=DraftField::LeaveEndDate label="Leave End Date" />
                </div>
                <div>
                    <label for="leaveType" class="block text-sm font-medium text-gray-700">{"Leave Type"}<RequiredMark/></label>
                    <select
                        id="leaveType"
                        name="leaveType"
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| {
                            vm.select_leave_type(&event_target_value(&ev));
                        }
                        required
                    >
                        <option value="">{"Select Leave Type"}</option>
                        {LeaveType::ALL
                            .iter()
                            .map(|kind| view! { <option value=kind.code()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label for="leaveReason" class="block text-sm font-medium text-gray-700">{"Leave Reason"}<RequiredMark/></label>
                    <textarea
                        id="leaveReason"
                        name="leaveReason"
                        rows=3
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || reason.get()
                        on:input=move |ev| vm.edit_field(DraftField::LeaveReason, event_target_value(&ev))
                        required
                    ></textarea>
                </div>
                <div class="flex gap-2">
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit" }}
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 rounded border border-gray-300 text-gray-700"
                        on:click=on_reset
                    >
                        {"Reset"}
                    </button>
                </div>
            </form>
        </div>
    }
}
