//! Landing page component

use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::{use_toasts, Icon, IconSvg};
use crate::landing::{
    copyright, WaitlistForm, WaitlistOutcome, BRAND, FEATURES, FOOTER_LINKS, NAV_LINKS, PROBLEMS,
    SOLUTIONS, STATS,
};
use crate::routes::Route;

/// Landing page - marketing sections plus waitlist capture
#[component]
pub fn Home() -> Element {
    // Scroll to top only on initial mount
    use_effect(|| {
        #[cfg(feature = "web")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-white to-green-50",
            NavBar {}
            HeroSection {}
            ProblemsSection {}
            SolutionSection {}
            FeaturesSection {}
            WaitlistSection {}
            Footer {}
        }
    }
}

// -- Navigation ---------------------------------------------------------------

#[component]
fn NavBar() -> Element {
    let mut is_menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-lg border-b border-gray-200",
            nav {
                class: "max-w-7xl mx-auto px-4 h-16 flex items-center justify-between",
                div {
                    class: "flex items-center space-x-2",
                    IconSvg { icon: Icon::MessageSquare, class: "w-6 h-6 text-green-600" }
                    Link { to: Route::Home {}, class: "font-bold text-xl", "{BRAND}" }
                }

                div {
                    class: "hidden md:flex items-center space-x-8",
                    for link in NAV_LINKS {
                        a {
                            key: "{link.href}",
                            href: "{link.href}",
                            class: "text-sm font-medium text-gray-500 hover:text-gray-900 transition-colors",
                            "{link.label}"
                        }
                    }
                    Link {
                        to: Route::Register {},
                        class: "px-4 py-2 bg-green-600 text-white rounded-md text-sm font-medium hover:bg-green-700",
                        "Get Started"
                    }
                }

                button {
                    class: "md:hidden p-2",
                    onclick: move |_| is_menu_open.toggle(),
                    if is_menu_open() {
                        IconSvg { icon: Icon::X, class: "w-6 h-6" }
                    } else {
                        IconSvg { icon: Icon::Menu, class: "w-6 h-6" }
                    }
                }
            }

            if is_menu_open() {
                div {
                    class: "md:hidden absolute top-16 left-0 right-0 bg-white border-b border-gray-200",
                    div {
                        class: "px-4 py-4 flex flex-col space-y-4",
                        for link in NAV_LINKS {
                            a {
                                key: "{link.href}",
                                href: "{link.href}",
                                class: "text-sm font-medium text-gray-500 hover:text-gray-900 transition-colors",
                                onclick: move |_| is_menu_open.set(false),
                                "{link.label}"
                            }
                        }
                        Link {
                            to: Route::Register {},
                            class: "w-full text-center px-4 py-2 bg-green-600 text-white rounded-md text-sm font-medium",
                            "Get Started"
                        }
                    }
                }
            }
        }
    }
}

// -- Hero ---------------------------------------------------------------------

#[component]
fn HeroSection() -> Element {
    rsx! {
        section {
            class: "relative min-h-screen flex items-center justify-center px-4 pt-24 pb-32",
            div {
                class: "max-w-6xl mx-auto text-center animate-fade-in",
                span {
                    class: "inline-flex items-center px-6 py-2 rounded-full bg-green-100 text-green-700 mb-8 text-sm font-medium",
                    IconSvg { icon: Icon::Sparkles, class: "w-4 h-4 mr-2" }
                    "Coming Soon - Register for Early Access"
                }
                h1 {
                    class: "text-4xl md:text-7xl font-bold mb-8 text-gray-900",
                    "Transform Your Job Search with WhatsApp"
                }
                p {
                    class: "text-lg md:text-xl text-gray-500 mb-12 max-w-2xl mx-auto",
                    "Be among the first to experience the future of job hunting. Register today for exclusive early access and special launch benefits."
                }
                div {
                    class: "flex flex-col sm:flex-row gap-4 justify-center items-center mb-16",
                    Link {
                        to: Route::Register {},
                        class: "inline-flex items-center rounded-full px-8 py-4 text-lg bg-green-600 text-white hover:bg-green-700",
                        "Register for Beta"
                        IconSvg { icon: Icon::ArrowRight, class: "ml-2 h-5 w-5" }
                    }
                }

                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-8 max-w-3xl mx-auto",
                    for stat in STATS {
                        div {
                            key: "{stat.label}",
                            class: "text-center",
                            IconSvg { icon: stat.icon, class: "w-6 h-6 text-green-600 mx-auto mb-2" }
                            div { class: "text-2xl font-bold text-gray-900", "{stat.value}" }
                            div { class: "text-sm text-gray-500", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

// -- Problems -----------------------------------------------------------------

#[component]
fn ProblemsSection() -> Element {
    rsx! {
        section {
            id: "problems",
            class: "relative py-16 md:py-24 bg-green-700 text-white",
            div {
                class: "max-w-7xl mx-auto px-4",
                div {
                    class: "text-center max-w-2xl mx-auto mb-16",
                    span {
                        class: "inline-flex items-center px-4 py-1.5 rounded-full bg-white/10 mb-4",
                        IconSvg { icon: Icon::Target, class: "w-4 h-4 mr-2" }
                        "Key Challenges"
                    }
                    h2 { class: "text-3xl md:text-5xl font-bold", "The Problems We Solve" }
                    p {
                        class: "mt-4 text-lg text-white/80",
                        "Job seekers and employers face significant challenges in today's hiring landscape"
                    }
                }

                div {
                    class: "grid md:grid-cols-3 gap-8",
                    for problem in PROBLEMS {
                        div {
                            key: "{problem.title}",
                            class: "group p-8 rounded-xl bg-white/10 border border-white/20 hover:bg-white/20 transition-all duration-300",
                            IconSvg { icon: problem.icon, class: "w-12 h-12 text-white/90 mb-6" }
                            h3 { class: "text-2xl font-semibold mb-4", "{problem.title}" }
                            ul {
                                class: "space-y-3",
                                for point in problem.points {
                                    li {
                                        key: "{point}",
                                        class: "flex items-start text-white/80",
                                        IconSvg { icon: Icon::CheckCircle, class: "w-5 h-5 mr-2 mt-1 flex-shrink-0" }
                                        "{point}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// -- Solution -----------------------------------------------------------------

#[component]
fn SolutionSection() -> Element {
    rsx! {
        section {
            id: "solution",
            class: "relative py-16 md:py-24 bg-white",
            div {
                class: "max-w-7xl mx-auto px-4",
                div {
                    class: "text-center max-w-2xl mx-auto mb-16",
                    span {
                        class: "inline-flex items-center px-4 py-1.5 rounded-full bg-green-100 text-green-700 mb-4",
                        IconSvg { icon: Icon::Sparkles, class: "w-4 h-4 mr-2" }
                        "The Solution"
                    }
                    h2 { class: "text-3xl md:text-5xl font-bold text-gray-900", "Our Revolutionary Approach" }
                    p {
                        class: "mt-4 text-lg text-gray-500",
                        "A WhatsApp-based Job Notifier that transforms how you find opportunities"
                    }
                }

                div {
                    class: "grid md:grid-cols-2 lg:grid-cols-4 gap-8",
                    for solution in SOLUTIONS {
                        div {
                            key: "{solution.title}",
                            class: "group p-8 rounded-xl bg-green-50 border border-green-100 hover:shadow-lg transition-all duration-300",
                            IconSvg { icon: solution.icon, class: "w-12 h-12 text-green-600 mb-6" }
                            h3 { class: "text-xl font-semibold mb-2 group-hover:text-green-700", "{solution.title}" }
                            p { class: "text-gray-500 group-hover:text-gray-900", "{solution.description}" }
                        }
                    }
                }
            }
        }
    }
}

// -- Features -----------------------------------------------------------------

#[component]
fn FeaturesSection() -> Element {
    rsx! {
        section {
            id: "features",
            class: "relative py-16 md:py-24 bg-gray-50",
            div {
                class: "text-center max-w-2xl mx-auto mb-16",
                h2 { class: "text-3xl md:text-4xl font-bold", "Powerful Features" }
                p {
                    class: "mt-4 text-lg text-gray-500",
                    "Everything you need for a seamless job search experience"
                }
            }

            div {
                class: "max-w-7xl mx-auto px-4 grid md:grid-cols-3 gap-8",
                for feature in FEATURES {
                    div {
                        key: "{feature.title}",
                        class: "p-8 rounded-xl bg-white shadow-sm hover:shadow-md transition-shadow",
                        IconSvg { icon: feature.icon, class: "w-10 h-10 text-green-600 mb-4" }
                        h3 { class: "text-xl font-semibold mb-2", "{feature.title}" }
                        p { class: "text-gray-500", "{feature.description}" }
                    }
                }
            }
        }
    }
}

// -- Waitlist -----------------------------------------------------------------

#[component]
fn WaitlistSection() -> Element {
    let toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let form = WaitlistForm { email: email() };

        match form.submit() {
            WaitlistOutcome::Ignored => {}
            WaitlistOutcome::Invalid(errors) => error.set(errors.get("email").cloned()),
            WaitlistOutcome::Joined(notice) => {
                toasts.push(notice);
                email.set(String::new());
                error.set(None);
            }
        }
    };

    rsx! {
        section {
            class: "relative py-16 md:py-24 bg-green-600 text-white",
            div {
                class: "text-center max-w-2xl mx-auto px-4",
                h2 { class: "text-3xl md:text-4xl font-bold mb-6", "Ready to Transform Your Job Search?" }
                p {
                    class: "text-lg opacity-90 mb-8",
                    "Join thousands of job seekers who are already finding their dream jobs through WhatsApp."
                }
                form {
                    class: "flex flex-col sm:flex-row gap-3 max-w-md mx-auto",
                    onsubmit: handle_submit,
                    input {
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: "{email}",
                        oninput: move |e| {
                            email.set(e.value());
                            error.set(None);
                        },
                        class: "flex-1 px-4 h-12 rounded-md bg-white/10 border border-white/20 text-white placeholder-white/60"
                    }
                    button {
                        r#type: "submit",
                        class: "h-12 px-6 rounded-md bg-white text-green-700 font-medium hover:bg-green-50",
                        "Join Waitlist"
                    }
                }
                if let Some(err) = error() {
                    p { class: "mt-3 text-sm text-red-100", "{err}" }
                }
            }
        }
    }
}

// -- Footer -------------------------------------------------------------------

#[component]
fn Footer() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer {
            class: "py-12 bg-white",
            div {
                class: "max-w-7xl mx-auto px-4 flex flex-col md:flex-row justify-between items-center gap-4",
                p { class: "text-sm text-gray-500", "{copyright(year)}" }
                div {
                    class: "flex gap-6",
                    for link in FOOTER_LINKS {
                        a {
                            key: "{link.label}",
                            href: "{link.href}",
                            class: "text-sm text-gray-500 hover:text-gray-900 transition-colors",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
