use crate::api::{LeaveRecord, LeaveType};
use crate::components::layout::LoadingSpinner;
use crate::config::HistoryLayout;
use crate::pages::leaves::{utils::zebra_row_class, view_model::HistoryViewModel};
use leptos::*;

const CELL: &str = "px-4 py-2 text-sm text-gray-900 border border-gray-200";
const HEADER_CELL: &str =
    "px-4 py-2 text-left text-xs font-medium text-gray-600 uppercase border border-gray-200";

pub fn history_heading(layout: HistoryLayout, emp_id: &str, emp_name: &str) -> String {
    match layout {
        HistoryLayout::Extended if !emp_name.is_empty() => {
            format!("Leaves Taken by {} (Employee ID: {})", emp_name, emp_id)
        }
        _ => format!("Leaves Taken by Employee ID: {}", emp_id),
    }
}

#[component]
pub fn HistoryTable(
    #[prop(into)] records: Signal<Vec<LeaveRecord>>,
    #[prop(optional)] layout: HistoryLayout,
) -> impl IntoView {
    let extended = layout == HistoryLayout::Extended;
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full border-collapse">
                <thead class="bg-gray-50">
                    <tr>
                        <th class=HEADER_CELL>{"Leave Type"}</th>
                        <th class=HEADER_CELL>{"Leave Start Date"}</th>
                        <th class=HEADER_CELL>{"Leave End Date"}</th>
                        <th class=HEADER_CELL>{"Leave Reason"}</th>
                        <Show when=move || extended>
                            <th class=HEADER_CELL>{"Applied Date"}</th>
                        </Show>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        records
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, record)| {
                                let applied = record.applied_date.clone().unwrap_or_default();
                                view! {
                                    <tr class=zebra_row_class(index)>
                                        <td class=CELL>{LeaveType::display_code(&record.leave_type)}</td>
                                        <td class=CELL>{record.leave_start_date}</td>
                                        <td class=CELL>{record.leave_end_date}</td>
                                        <td class=CELL>{record.leave_reason}</td>
                                        <Show when=move || extended>
                                            <td class=CELL>{applied.clone()}</td>
                                        </Show>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Leave history for the employee currently selected in the form.
#[component]
pub fn LeaveHistoryList(
    #[prop(into)] emp_id: Signal<String>,
    #[prop(into)] emp_name: Signal<String>,
    #[prop(optional_no_strip)] reset: Option<Signal<bool>>,
    #[prop(optional)] layout: HistoryLayout,
) -> impl IntoView {
    let vm = HistoryViewModel::new();

    create_effect(move |_| vm.follow_selection(emp_id, reset));

    let export_pending = vm.export_action.pending();
    let heading = move || history_heading(layout, &emp_id.get(), &emp_name.get());
    let on_export = move |_| {
        vm.export();
    };

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-medium text-gray-900">{heading}</h2>
                <button
                    type="button"
                    class="px-4 py-2 rounded bg-green-600 text-white disabled:opacity-50"
                    on:click=on_export
                    disabled=move || export_pending.get() || emp_id.get().is_empty()
                >
                    {move || if export_pending.get() { "Exporting..." } else { "Export to Excel" }}
                </button>
            </div>
            <Show when=move || vm.loading.get()>
                <LoadingSpinner />
            </Show>
            <HistoryTable records=vm.records layout=layout />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::leave_record;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_table_still_renders_header() {
        let html = render_to_string(move || {
            view! { <HistoryTable records=Signal::derive(Vec::new) /> }
        });
        assert!(html.contains("Leave Type"));
        assert!(html.contains("Leave Reason"));
        assert!(!html.contains("<td"));
        assert!(!html.contains("Applied Date"));
    }

    #[test]
    fn rows_alternate_and_show_leave_labels() {
        let html = render_to_string(move || {
            let rows = vec![
                leave_record("E1", "2024-01-01", "SL"),
                leave_record("E1", "2024-02-01", "cl"),
                leave_record("E1", "2024-03-01", "XX"),
            ];
            view! { <HistoryTable records=Signal::derive(move || rows.clone()) /> }
        });
        assert!(html.contains("Sick Leave"));
        assert!(html.contains("Casual Leave"));
        assert!(html.contains("XX"));
        let white = html.find("bg-white").expect("even row");
        let grey = html.find("bg-gray-100").expect("odd row");
        assert!(white < grey);
        assert_eq!(html.matches("bg-white").count(), 2);
    }

    #[test]
    fn extended_layout_adds_applied_date_column() {
        let html = render_to_string(move || {
            let mut record = leave_record("E1", "2024-01-01", "PL");
            record.applied_date = Some("2023-12-20".into());
            view! {
                <HistoryTable
                    records=Signal::derive(move || vec![record.clone()])
                    layout=HistoryLayout::Extended
                />
            }
        });
        assert!(html.contains("Applied Date"));
        assert!(html.contains("2023-12-20"));
        assert!(html.contains("Paid Leave"));
    }

    #[test]
    fn heading_follows_layout() {
        assert_eq!(
            history_heading(HistoryLayout::Basic, "E1", "Alice"),
            "Leaves Taken by Employee ID: E1"
        );
        assert_eq!(
            history_heading(HistoryLayout::Extended, "E1", "Alice"),
            "Leaves Taken by Alice (Employee ID: E1)"
        );
        assert_eq!(
            history_heading(HistoryLayout::Extended, "", ""),
            "Leaves Taken by Employee ID: "
        );
    }

    #[test]
    fn history_list_renders_heading_and_export() {
        let html = render_to_string(move || {
            view! {
                <LeaveHistoryList
                    emp_id=Signal::derive(|| "E2".to_string())
                    emp_name=Signal::derive(|| "Bob".to_string())
                />
            }
        });
        assert!(html.contains("Leaves Taken by Employee ID: E2"));
        assert!(html.contains("Export to Excel"));
    }
}
