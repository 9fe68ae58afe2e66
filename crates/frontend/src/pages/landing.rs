//! Marketing landing page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "📊",
        title: "Smart Attendance Tracking",
        description: "Automatically track attendance with advanced analytics and insights.",
    },
    Feature {
        icon: "👤",
        title: "Face Recognition / QR Check-in",
        description: "Multiple check-in methods including facial recognition and QR codes.",
    },
    Feature {
        icon: "📈",
        title: "Real-time Analytics & Reports",
        description: "Generate detailed reports instantly and monitor trends in real-time.",
    },
    Feature {
        icon: "🔗",
        title: "Seamless Integration",
        description: "Works seamlessly with colleges, offices, and existing systems.",
    },
];

const STEPS: [Feature; 3] = [
    Feature {
        icon: "🏢",
        title: "Register Organization",
        description: "Set up your institution or company in minutes.",
    },
    Feature {
        icon: "📱",
        title: "Users Check In",
        description: "Check in via face recognition, QR, or mobile.",
    },
    Feature {
        icon: "✅",
        title: "Automatic Reports",
        description: "Attendance is recorded and reports generated instantly.",
    },
];

const BENEFITS: [&str; 5] = [
    "Saves time and reduces manual errors",
    "Prevents proxy attendance",
    "Works on mobile & desktop",
    "Scales for institutions and companies",
    "Real-time alerts and analytics",
];

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Dr. Sarah Johnson",
        role: "Dean, State University",
        quote: "PresenX completely transformed how we manage attendance.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "HR Manager, Tech Corp",
        quote: "Accurate, fast, and super easy to use.",
    },
    Testimonial {
        name: "Emma Williams",
        role: "Principal, Central High",
        quote: "Proxy attendance dropped drastically.",
    },
];

/// Landing page component.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let menu_open = use_state(|| false);

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <div class="landing">
            <header class="landing-header">
                <Link<Route> to={Route::Login} classes={classes!("brand")}>
                    <span class="brand-mark">{"P"}</span>
                    <span class="brand-name">{"PresenX"}</span>
                </Link<Route>>

                <nav class={classes!("landing-nav", menu_open.then_some("open"))}>
                    <a href="#features">{"Features"}</a>
                    <a href="#how">{"How it Works"}</a>
                    <a href="#benefits">{"Benefits"}</a>
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    <Link<Route> to={Route::Register} classes={classes!("btn", "btn-outline")}>
                        {"Register"}
                    </Link<Route>>
                </nav>

                <button class="menu-toggle" onclick={on_menu_toggle} aria-label="Toggle menu">
                    {"☰"}
                </button>
            </header>

            <section class="hero">
                <h1>{"Attendance "}<span class="accent">{"Automated."}</span></h1>
                <p class="text-secondary">
                    {"Smart AI-powered attendance management for institutions and organizations."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Register} classes={classes!("btn", "btn-primary")}>
                        {"Get Started (Register)"}
                    </Link<Route>>
                    <Link<Route> to={Route::Login} classes={classes!("btn", "btn-secondary")}>
                        {"Log In"}
                    </Link<Route>>
                </div>
            </section>

            <section id="features" class="section section-muted">
                <h2>{"Features"}</h2>
                <div class="grid grid-4">
                    { for FEATURES.iter().map(|f| html! {
                        <div class="card feature">
                            <div class="feature-icon">{ f.icon }</div>
                            <h3>{ f.title }</h3>
                            <p class="text-secondary">{ f.description }</p>
                        </div>
                    })}
                </div>
            </section>

            <section id="how" class="section">
                <h2>{"How It Works"}</h2>
                <div class="grid grid-3">
                    { for STEPS.iter().map(|s| html! {
                        <div class="step">
                            <div class="step-icon">{ s.icon }</div>
                            <h3>{ s.title }</h3>
                            <p class="text-secondary">{ s.description }</p>
                        </div>
                    })}
                </div>
            </section>

            <section id="benefits" class="section section-muted">
                <h2>{"Why PresenX?"}</h2>
                <ul class="benefits">
                    { for BENEFITS.iter().map(|b| html! {
                        <li><span class="accent">{"✔"}</span>{ *b }</li>
                    })}
                </ul>
            </section>

            <section class="section">
                <h2>{"Testimonials"}</h2>
                <div class="grid grid-3">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="card testimonial">
                            <p class="quote">{ format!("\"{}\"", t.quote) }</p>
                            <div class="testimonial-name">{ t.name }</div>
                            <div class="text-secondary">{ t.role }</div>
                        </div>
                    })}
                </div>
            </section>

            <section id="contact" class="section cta">
                <h2>{"Simplify Attendance Today"}</h2>
                <Link<Route> to={Route::Register} classes={classes!("btn", "btn-light")}>
                    {"Start Using PresenX"}
                </Link<Route>>
            </section>

            <footer class="landing-footer">
                {"© 2026 PresenX. All rights reserved."}
            </footer>
        </div>
    }
}
