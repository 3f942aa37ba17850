//! Stroke icons (24x24 outline set)

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowLeft,
    ArrowRight,
    BarChart,
    Briefcase,
    CheckCircle,
    Clock,
    Globe,
    Lock,
    Menu,
    MessageSquare,
    Search,
    Sparkles,
    Target,
    Timer,
    UserCheck,
    X,
    Zap,
}

impl Icon {
    /// SVG path data, drawn with a 2px stroke
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::ArrowLeft => &["M19 12H5", "M12 19l-7-7 7-7"],
            Icon::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Icon::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            Icon::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4L12 14.01l-3-3"],
            Icon::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
            Icon::Globe => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Icon::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Icon::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
            Icon::Sparkles => &["M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z"],
            Icon::Target => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
                "M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ],
            Icon::Timer => &["M10 2h4", "M12 14l3-3", "M12 22a8 8 0 1 0 0-16 8 8 0 0 0 0 16z"],
            Icon::UserCheck => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M16 11l2 2 4-4",
            ],
            Icon::X => &["M18 6L6 18", "M6 6l12 12"],
            Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

/// Render an [`Icon`] with the given Tailwind classes
#[component]
pub fn IconSvg(icon: Icon, #[props(into)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            view_box: "0 0 24 24",
            for d in icon.paths() {
                path { d: "{d}" }
            }
        }
    }
}
