//! Student dashboard page component.

use core_types::Severity;
use core_types::demo::{
    load_demo_recent_activity, load_demo_student, load_demo_subjects, load_demo_upcoming_classes,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{Card, StatCard, TrendChart};
use crate::services::use_session;

/// Student dashboard page component.
#[function_component(StudentDashboardPage)]
pub fn student_dashboard_page() -> Html {
    let navigator = use_navigator();
    let session = use_session();

    let student = load_demo_student();
    let subjects = load_demo_subjects();
    let recent = load_demo_recent_activity();
    let upcoming = load_demo_upcoming_classes();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let destination = session.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::from(destination));
            }
        })
    };

    let overall = Severity::classify(f64::from(student.overall_attendance));

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{"PresenX Student Dashboard"}</h1>
                <div class="dashboard-user">
                    if let Some(current) = session.current() {
                        <span class="text-secondary">{ current.email }</span>
                    }
                    <div class="avatar">{ &student.avatar }</div>
                    <button class="btn btn-secondary" onclick={on_logout}>{"Logout"}</button>
                </div>
            </header>

            <div class="stats-grid">
                <StatCard
                    label={"Overall Attendance"}
                    value={format!("{}%", student.overall_attendance)}
                    tone={classes!(overall.css_class())}
                />
                <StatCard
                    label={"Defaulter Status"}
                    value={student.defaulter_status.clone()}
                    tone={classes!(Severity::Medium.css_class())}
                />
                <StatCard
                    label={"Reward Points"}
                    value={student.reward_points.to_string()}
                    tone={classes!("tone-accent")}
                />
                <StatCard
                    label={"Streak"}
                    value={format!("{} Days 🔥", student.streak_days)}
                    tone={classes!(Severity::High.css_class())}
                />
            </div>

            <div class="dashboard-grid">
                <Card title="Subject-wise Attendance" class={classes!("span-2")}>
                    { for subjects.iter().map(|s| {
                        let severity = Severity::classify(f64::from(s.attendance));
                        html! {
                            <div class="list-row">
                                <span>{ format!("{} ({})", s.name, s.code) }</span>
                                <span class={classes!("badge", severity.css_class())}>
                                    { format!("{}%", s.attendance) }
                                </span>
                            </div>
                        }
                    })}
                </Card>

                <Card title="Recent Attendance">
                    { for recent.iter().map(|a| html! {
                        <div class="list-item">
                            <p class="list-title">{ &a.subject }</p>
                            <p class="list-meta">
                                { format!("{} • {} • {}", a.date, a.time, a.status.label()) }
                            </p>
                        </div>
                    })}
                </Card>

                <Card title="7-Day Attendance Trend" class={classes!("span-2")}>
                    <TrendChart values={student.trend.clone()} />
                </Card>

                <Card title="Upcoming Classes">
                    { for upcoming.iter().map(|c| html! {
                        <div class="list-item">
                            <p class="list-title">{ &c.subject }</p>
                            <p class="list-meta">{ format!("{} • {}", c.time, c.room) }</p>
                        </div>
                    })}
                </Card>
            </div>
        </div>
    }
}
