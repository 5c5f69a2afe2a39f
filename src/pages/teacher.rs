//! Teacher dashboard: entry points for assigned classes and teaching tools.

use leptos::prelude::*;

use crate::components::toolbar::Toolbar;

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page dashboard-page--teacher">
            <Toolbar title="Teaching"/>

            <section class="dashboard-page__cards">
                <div class="card">"My Classes"</div>
                <div class="card">"Assignments"</div>
                <div class="card">"Live Classes"</div>
                <div class="card">"Question Bank"</div>
            </section>
        </div>
    }
}
