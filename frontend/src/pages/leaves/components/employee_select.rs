use crate::{
    api::EmployeeRef,
    pages::leaves::{components::leave_form::RequiredMark, view_model::DirectoryResource},
};
use leptos::{ev, *};

#[component]
pub fn EmployeeSelect(
    directory: DirectoryResource,
    #[prop(into)] entries: Signal<Vec<EmployeeRef>>,
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<String>,
    #[prop(default = "Select Employee ID".to_string())] placeholder: String,
) -> impl IntoView {
    let loading = directory.loading();

    let on_change = move |ev: ev::Event| on_select.call(event_target_value(&ev));

    view! {
        <div class="space-y-1">
            <label for="empId" class="block text-sm font-medium text-gray-700">{"Employee ID"}<RequiredMark/></label>
            <select
                id="empId"
                name="empId"
                class="w-full border rounded px-2 py-1 bg-white disabled:opacity-50"
                on:change=on_change
                prop:value=move || selected.get()
                disabled=move || loading.get()
                required
            >
                <option value="">{placeholder.clone()}</option>
                <For
                    each=move || entries.get()
                    key=|employee| employee.emp_id.clone()
                    children=move |employee| {
                        let value = employee.emp_id.clone();
                        view! { <option value=value>{employee.emp_id}</option> }
                    }
                />
            </select>
        </div>
    }
}
