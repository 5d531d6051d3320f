//! Static page copy.
//!
//! DESIGN
//! ======
//! Every string the sections render lives here so the nav links and the
//! section anchors cannot drift apart.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Mohammad Jabakhnji";
pub const OWNER_INITIALS: &str = "MJ";
pub const TAGLINE: &str = "Student • Technology Enthusiast • Future Innovator";
pub const PAGE_TITLE: &str = "Mohammad Jabakhnji | Portfolio";

pub const ABOUT_SUMMARY: &str = "I am a motivated high school student at Queen Elizabeth School \
Edmonton, passionate about technology and innovation. Expected to graduate in June 2025, I am \
actively seeking opportunities to expand my knowledge and skills in the tech industry.";

/// Section anchor ids, in page order.
pub mod anchor {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const EXPERIENCE: &str = "experience";
    pub const SKILLS: &str = "skills";
    pub const CONTACT: &str = "contact";
}

/// In-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", anchor: anchor::HOME },
    NavLink { label: "About", anchor: anchor::ABOUT },
    NavLink { label: "Experience", anchor: anchor::EXPERIENCE },
    NavLink { label: "Skills", anchor: anchor::SKILLS },
    NavLink { label: "Contact", anchor: anchor::CONTACT },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutCard {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const ABOUT_CARDS: [AboutCard; 3] = [
    AboutCard { heading: "Education", body: "Queen Elizabeth School" },
    AboutCard { heading: "Languages", body: "English & Arabic" },
    AboutCard { heading: "Interests", body: "Cybersecurity & Tech" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: [ExperienceEntry; 2] = [
    ExperienceEntry {
        title: "PC Technician Assistant",
        highlights: &[
            "Hardware troubleshooting and repairs",
            "Software optimization and maintenance",
            "System diagnostics and upgrades",
        ],
    },
    ExperienceEntry {
        title: "Classroom Helper",
        highlights: &[
            "Mathematics and science tutoring",
            "Peer mentoring and support",
            "Study group coordination",
        ],
    },
];
