//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::net::api::ApiClient;
use crate::pages::{
    admin::AdminDashboardPage, home::HomePage, login::LoginPage, parent::ParentDashboardPage,
    student::StudentDashboardPage, teacher::TeacherDashboardPage,
};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::guard::{ADMIN_ROUTES, PARENT_ROUTES, STUDENT_ROUTES, TEACHER_ROUTES};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the session store and API gateway once per process, provides
/// them (plus the shared auth signal) via context, and sets up client-side
/// routing. Every protected route group is wrapped in a `RouteGuard` with
/// its compile-time role descriptor.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::from_browser();
    let api = ApiClient::from_browser(session.clone());
    let auth = RwSignal::new(AuthState::default());

    provide_context(session);
    provide_context(api);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/derslik.css"/>
        <Title text="Atlas Derslik"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=admin_section/>
                <Route path=StaticSegment("teacher") view=teacher_section/>
                <Route path=StaticSegment("student") view=student_section/>
                <Route path=StaticSegment("parent") view=parent_section/>
            </Routes>
        </Router>
    }
}

fn admin_section() -> impl IntoView {
    view! {
        <RouteGuard access=ADMIN_ROUTES>
            <AdminDashboardPage/>
        </RouteGuard>
    }
}

fn teacher_section() -> impl IntoView {
    view! {
        <RouteGuard access=TEACHER_ROUTES>
            <TeacherDashboardPage/>
        </RouteGuard>
    }
}

fn student_section() -> impl IntoView {
    view! {
        <RouteGuard access=STUDENT_ROUTES>
            <StudentDashboardPage/>
        </RouteGuard>
    }
}

fn parent_section() -> impl IntoView {
    view! {
        <RouteGuard access=PARENT_ROUTES>
            <ParentDashboardPage/>
        </RouteGuard>
    }
}
