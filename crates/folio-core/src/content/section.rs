use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Portfolio sections in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Certifications,
    Leadership,
    Testimonials,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Leadership,
        Section::Testimonials,
        Section::Blog,
        Section::Contact,
    ];

    /// Sections rendered as a paged carousel
    pub const PAGED: [Section; 5] = [
        Section::Skills,
        Section::Projects,
        Section::Certifications,
        Section::Testimonials,
        Section::Blog,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Leadership => "Leadership",
            Section::Testimonials => "Testimonials",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }

    pub fn is_paged(&self) -> bool {
        Self::PAGED.contains(self)
    }

    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next section, wrapping around
    pub fn next(&self) -> Section {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around
    pub fn previous(&self) -> Section {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.title().to_lowercase() == wanted)
            .ok_or_else(|| Error::Content(format!("unknown section: {s}")))
    }
}
