use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use super::section::Section;

/// Everything the portfolio renders, in display order per section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub leadership: Vec<LeadershipRole>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub blog: Vec<BlogPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Biography paragraphs
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: Url,
}

/// A technical skills tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: Option<Url>,
    #[serde(default)]
    pub repository: Option<Url>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issued: NaiveDate,
    #[serde(default)]
    pub credential_url: Option<Url>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadershipRole {
    pub role: String,
    pub organization: String,
    /// Free-form period, e.g. "2021 - Present"
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    pub quote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub summary: String,
    pub published: NaiveDate,
    #[serde(default)]
    pub read_minutes: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<Url>,
}

impl Portfolio {
    /// Collection length behind a paged section, `None` for static sections
    pub fn item_count(&self, section: Section) -> Option<usize> {
        match section {
            Section::Skills => Some(self.skills.len()),
            Section::Projects => Some(self.projects.len()),
            Section::Certifications => Some(self.certifications.len()),
            Section::Testimonials => Some(self.testimonials.len()),
            Section::Blog => Some(self.blog.len()),
            Section::About | Section::Leadership | Section::Contact => None,
        }
    }

    /// Link to open for an item of a paged section, if it has one
    pub fn link_at(&self, section: Section, index: usize) -> Option<&Url> {
        match section {
            Section::Projects => self
                .projects
                .get(index)
                .and_then(|p| p.url.as_ref().or(p.repository.as_ref())),
            Section::Certifications => self
                .certifications
                .get(index)
                .and_then(|c| c.credential_url.as_ref()),
            Section::Blog => self.blog.get(index).and_then(|b| b.url.as_ref()),
            _ => None,
        }
    }

    /// Card title for an item of a paged section
    pub fn title_at(&self, section: Section, index: usize) -> Option<&str> {
        match section {
            Section::Skills => self.skills.get(index).map(|s| s.name.as_str()),
            Section::Projects => self.projects.get(index).map(|p| p.title.as_str()),
            Section::Certifications => self.certifications.get(index).map(|c| c.name.as_str()),
            Section::Testimonials => self.testimonials.get(index).map(|t| t.author.as_str()),
            Section::Blog => self.blog.get(index).map(|b| b.title.as_str()),
            _ => None,
        }
    }
}
