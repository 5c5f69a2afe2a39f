//! Parent dashboard: children overview and payment entry points.

use leptos::prelude::*;

use crate::components::toolbar::Toolbar;

#[component]
pub fn ParentDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page dashboard-page--parent">
            <Toolbar title="Family"/>

            <section class="dashboard-page__cards">
                <div class="card">"My Children"</div>
                <div class="card">"Progress Reports"</div>
                <div class="card">"Payments"</div>
            </section>
        </div>
    }
}
