//! Main application component with routing.

use core_types::Destination;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{LandingPage, LoginPage, RegisterPage, StudentDashboardPage, TeacherDashboardPage};
use crate::services::SessionProvider;

/// Application routes.
///
/// Dashboards render demo data and are reachable without a session.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/student/dashboard")]
    StudentDashboard,
    #[at("/teacher/dashboard")]
    TeacherDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Landing => Route::Landing,
            Destination::Login => Route::Login,
            Destination::Register => Route::Register,
            Destination::StudentDashboard => Route::StudentDashboard,
            Destination::TeacherDashboard => Route::TeacherDashboard,
        }
    }
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <LandingPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::StudentDashboard => html! { <StudentDashboardPage /> },
        Route::TeacherDashboard => html! { <TeacherDashboardPage /> },
        Route::NotFound => html! {
            <p class="not-found">{"404 - Page Not Found"}</p>
        },
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths_match_routes() {
        let destinations = [
            Destination::Landing,
            Destination::Login,
            Destination::Register,
            Destination::StudentDashboard,
            Destination::TeacherDashboard,
        ];

        for destination in destinations {
            assert_eq!(Route::from(destination).to_path(), destination.path());
        }
    }
}
