mod loader;
mod models;
mod section;

pub use models::{
    BlogPost, Certification, LeadershipRole, Link, Portfolio, Profile, Project, Skill,
    SkillCategory, Testimonial,
};
pub use section::Section;
