//! Admin dashboard: curriculum overview and platform management entry
//! points.
//!
//! The grade list is fetched through the gateway on mount; any non-auth
//! failure is rendered here as page-level error text (auth failures are
//! the gateway's business and never reach this page).

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::toolbar::Toolbar;
use crate::net::api::ApiClient;
use crate::net::types::Grade;

fn grade_list_failed_message(status: u16) -> String {
    format!("grade list failed: {status}")
}

async fn fetch_grades(api: ApiClient) -> Result<Vec<Grade>, String> {
    let response = api.get("/grades").await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(grade_list_failed_message(response.status()));
    }
    response.json::<Vec<Grade>>().map_err(|e| e.to_string())
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let grades = LocalResource::new(move || fetch_grades(api.clone()));

    view! {
        <div class="dashboard-page dashboard-page--admin">
            <Toolbar title="Administration"/>

            <section class="dashboard-page__section">
                <h2>"Curriculum Grades"</h2>
                <Suspense fallback=move || view! { <p>"Loading grades..."</p> }>
                    {move || {
                        grades.get().map(|result| match result {
                            Ok(items) => {
                                view! {
                                    <ul class="dashboard-page__chips">
                                        {items
                                            .into_iter()
                                            .map(|grade| view! { <li class="chip">{grade.name}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(message) => {
                                view! { <p class="dashboard-page__error">{message}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__cards">
                <div class="card">"Subjects & Units"</div>
                <div class="card">"Classes & Teachers"</div>
                <div class="card">"Question Bank"</div>
                <div class="card">"Packages"</div>
            </section>
        </div>
    }
}
