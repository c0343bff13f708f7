use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn LeaveLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Leave Management"}</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        {"Record leave for an employee and review the leave they have already taken."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
