//! Teacher dashboard page component.

use std::rc::Rc;

use chrono::Utc;
use core_types::demo::{DEMO_TEACHER_NAME, load_demo_classes, load_demo_roster};
use core_types::{AttendanceBook, ClassId, StudentId, is_defaulter};
use yew::prelude::*;

use crate::components::{InfoField, StatCard};

/// Class selected when the dashboard opens.
const FIRST_CLASS: ClassId = 1;

/// Selected class plus the attendance marks of every visited class.
#[derive(Debug, Clone, PartialEq)]
struct DashboardState {
    selected: ClassId,
    book: AttendanceBook,
}

impl DashboardState {
    fn new(selected: ClassId) -> Self {
        let mut book = AttendanceBook::new();
        book.ensure_initialized(selected, &load_demo_roster(selected));
        Self { selected, book }
    }
}

enum DashboardAction {
    /// Switch the sidebar selection; first visit seeds the class.
    Select(ClassId),
    /// Flip one student in the selected class.
    Toggle(StudentId),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            DashboardAction::Select(class_id) => {
                next.selected = class_id;
                next.book
                    .ensure_initialized(class_id, &load_demo_roster(class_id));
            }
            DashboardAction::Toggle(student_id) => {
                let class_id = next.selected;
                if next
                    .book
                    .toggle(class_id, student_id, &load_demo_roster(class_id))
                    .is_none()
                {
                    log::warn!("student {student_id} is not on the roster of class {class_id}");
                }
            }
        }

        next.into()
    }
}

/// Teacher dashboard page component.
#[function_component(TeacherDashboardPage)]
pub fn teacher_dashboard_page() -> Html {
    let classes = use_memo((), |_| load_demo_classes());
    let state = use_reducer(|| DashboardState::new(FIRST_CLASS));

    let selected = state.selected;
    let roster = use_memo(selected, |class_id| load_demo_roster(*class_id));
    let stats = state.book.stats(selected, &roster);
    let selected_class = classes.iter().find(|c| c.id == selected);

    let today = Utc::now().date_naive();

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1>{"Teacher Dashboard"}</h1>
                    <p class="text-secondary">{ today.format("%a %b %d %Y").to_string() }</p>
                </div>
                <div class="dashboard-user">
                    <div>
                        <p class="text-secondary">{"Welcome back"}</p>
                        <p class="user-name">{ DEMO_TEACHER_NAME }</p>
                    </div>
                </div>
            </header>

            <div class="teacher-layout">
                <aside class="card class-list">
                    <div class="card-header">
                        <h2 class="card-title">{"My Classes"}</h2>
                    </div>
                    { for classes.iter().map(|class| {
                        let dispatcher = state.dispatcher();
                        let class_id = class.id;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(DashboardAction::Select(class_id));
                        });
                        html! {
                            <button
                                class={classes!("class-item", (class.id == selected).then_some("active"))}
                                {onclick}
                            >
                                <p class="class-name">{ &class.name }</p>
                                <p class="text-secondary">{ &class.subject }</p>
                                <p class="class-defaulters">
                                    { format!("{} defaulters", class.defaulter_count) }
                                </p>
                            </button>
                        }
                    })}
                </aside>

                <section class="teacher-main">
                    if let Some(class) = selected_class {
                        <div class="card info-grid">
                            <InfoField label="Class" value={class.name.clone()} />
                            <InfoField label="Subject" value={class.subject.clone()} />
                            <InfoField label="Schedule" value={class.schedule.clone()} />
                            <InfoField label="Room" value={class.room.clone()} />
                        </div>
                    }

                    <div class="stats-grid">
                        <StatCard
                            label={"Present"}
                            value={stats.present.to_string()}
                            tone={classes!("severity-high")}
                        />
                        <StatCard
                            label={"Absent"}
                            value={stats.absent().to_string()}
                            tone={classes!("severity-low")}
                        />
                        <StatCard
                            label={"Attendance %"}
                            value={format!("{}%", stats.percentage_label())}
                            tone={classes!("tone-accent")}
                        />
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">{"Mark Attendance"}</h2>
                            <span class="text-secondary">{ today.format("%Y-%m-%d").to_string() }</span>
                        </div>
                        <table class="attendance-table">
                            <thead>
                                <tr>
                                    <th>{"Roll"}</th>
                                    <th>{"Student"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Attendance %"}</th>
                                    <th>{"Action"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for roster.iter().map(|student| {
                                    let present = state.book.is_present(selected, student);
                                    let dispatcher = state.dispatcher();
                                    let student_id = student.id;
                                    let on_toggle = Callback::from(move |_: MouseEvent| {
                                        dispatcher.dispatch(DashboardAction::Toggle(student_id));
                                    });
                                    let history_class = if is_defaulter(f64::from(student.percentage)) {
                                        "text-danger"
                                    } else {
                                        "text-success"
                                    };

                                    html! {
                                        <tr key={student.id.to_string()}>
                                            <td>{ &student.roll_no }</td>
                                            <td class="student-name">{ &student.name }</td>
                                            <td>
                                                <span class={classes!("status-pill", if present { "present" } else { "absent" })}>
                                                    { if present { "Present" } else { "Absent" } }
                                                </span>
                                            </td>
                                            <td class={history_class}>{ format!("{}%", student.percentage) }</td>
                                            <td>
                                                <button class="btn btn-primary btn-small" onclick={on_toggle}>
                                                    {"Toggle"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                </section>
            </div>
        </div>
    }
}
