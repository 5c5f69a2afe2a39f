//! Student dashboard: lessons, homework, and scheduled live classes.

use leptos::prelude::*;

use crate::components::toolbar::Toolbar;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page dashboard-page--student">
            <Toolbar title="My Lessons"/>

            <section class="dashboard-page__cards">
                <div class="card">"Subjects"</div>
                <div class="card">"Assignments"</div>
                <div class="card">"Live Classes"</div>
                <div class="card">"My Package"</div>
            </section>
        </div>
    }
}
