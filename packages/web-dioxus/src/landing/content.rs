//! Static copy for the landing page

use crate::components::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// Card with a title and a short paragraph (solutions, features)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub icon: Icon,
    pub title: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const BRAND: &str = "WaHire";
pub const COMPANY: &str = "Prathibha Innovations";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "Problems", href: "#problems" },
    NavLink { label: "Solution", href: "#solution" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy Policy", href: "#" },
    NavLink { label: "Terms of Service", href: "#" },
    NavLink { label: "Contact", href: "#" },
];

pub const STATS: &[Stat] = &[
    Stat { value: "98%", label: "Message Open Rate", icon: Icon::MessageSquare },
    Stat { value: "24/7", label: "Real-time Alerts", icon: Icon::Clock },
    Stat { value: "100K+", label: "Active Users", icon: Icon::UserCheck },
    Stat { value: "1000+", label: "Companies", icon: Icon::Briefcase },
];

pub const PROBLEMS: &[Problem] = &[
    Problem {
        icon: Icon::Search,
        title: "Job Seekers Struggle",
        points: &[
            "Traditional job portals require active searching",
            "Notifications via email often go unnoticed",
            "WhatsApp groups are unstructured",
        ],
    },
    Problem {
        icon: Icon::Briefcase,
        title: "Employer Challenges",
        points: &[
            "Low visibility on large platforms",
            "Slow hiring process",
            "Scattered resumes across channels",
        ],
    },
    Problem {
        icon: Icon::Target,
        title: "Lack of Personalization",
        points: &[
            "Generic job alerts",
            "Irrelevant job postings",
            "Poor matching algorithms",
        ],
    },
];

pub const SOLUTIONS: &[Highlight] = &[
    Highlight {
        icon: Icon::MessageSquare,
        title: "Smart Alerts",
        description: "Receive personalized job notifications based on your preferences directly on WhatsApp",
    },
    Highlight {
        icon: Icon::Target,
        title: "AI Matching",
        description: "Advanced algorithms ensure perfect matches between candidates and opportunities",
    },
    Highlight {
        icon: Icon::Zap,
        title: "Easy Apply",
        description: "One-click application process directly through WhatsApp",
    },
    Highlight {
        icon: Icon::Clock,
        title: "Real-time Updates",
        description: "Stay informed about your application status with instant notifications",
    },
];

pub const FEATURES: &[Highlight] = &[
    Highlight {
        icon: Icon::Globe,
        title: "Global Reach",
        description: "Access job opportunities from companies worldwide through WhatsApp.",
    },
    Highlight {
        icon: Icon::Target,
        title: "Smart Matching",
        description: "AI-powered job matching ensures you only see relevant opportunities.",
    },
    Highlight {
        icon: Icon::BarChart,
        title: "Real-time Analytics",
        description: "Track your application status and get insights into your job search.",
    },
    Highlight {
        icon: Icon::Lock,
        title: "Secure & Private",
        description: "Your data is encrypted and protected with enterprise-grade security.",
    },
    Highlight {
        icon: Icon::CheckCircle,
        title: "Easy Apply",
        description: "One-click applications directly through WhatsApp messages.",
    },
    Highlight {
        icon: Icon::Sparkles,
        title: "Premium Features",
        description: "Access advanced features like resume review and interview preparation.",
    },
];

/// Footer copyright line for the given year
pub fn copyright(year: i32) -> String {
    format!("\u{00A9} {} {}. All rights reserved.", year, COMPANY)
}
