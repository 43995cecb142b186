use anyhow::Result;

use folio_core::content::{Portfolio, Section};

pub fn run(portfolio: &Portfolio, section: &str) -> Result<()> {
    let section: Section = section.parse()?;

    println!("{}\n", section.title());

    match section {
        Section::About => {
            let profile = &portfolio.profile;
            println!("{}", profile.name);
            println!("{}", profile.headline);
            if let Some(location) = &profile.location {
                println!("{}", location);
            }
            for paragraph in &profile.bio {
                println!("\n{}", paragraph);
            }
            if !profile.links.is_empty() {
                println!();
                for link in &profile.links {
                    println!("  {:<10} {}", link.label, link.url);
                }
            }
        }
        Section::Skills => {
            for category in &portfolio.skills {
                println!("{}", category.name);
                for skill in &category.skills {
                    println!("  {:<24} {:>3}%", skill.name, skill.level);
                }
                println!();
            }
        }
        Section::Projects => {
            for project in &portfolio.projects {
                println!("{} - {}", project.title, project.summary);
                if !project.tech.is_empty() {
                    println!("    Tech: {}", project.tech.join(", "));
                }
                if let Some(url) = project.url.as_ref().or(project.repository.as_ref()) {
                    println!("    URL: {}", url);
                }
                println!();
            }
        }
        Section::Certifications => {
            for cert in &portfolio.certifications {
                println!("{} ({}, {})", cert.name, cert.issuer, cert.issued.format("%b %Y"));
            }
        }
        Section::Leadership => {
            for role in &portfolio.leadership {
                println!("{} - {} [{}]", role.role, role.organization, role.period);
                for highlight in &role.highlights {
                    println!("    - {}", highlight);
                }
            }
        }
        Section::Testimonials => {
            for testimonial in &portfolio.testimonials {
                println!("\"{}\"", testimonial.quote);
                match &testimonial.company {
                    Some(company) => println!("    - {}, {} @ {}\n", testimonial.author, testimonial.role, company),
                    None => println!("    - {}, {}\n", testimonial.author, testimonial.role),
                }
            }
        }
        Section::Blog => {
            for post in &portfolio.blog {
                println!("{} ({})", post.title, post.published.format("%Y-%m-%d"));
                println!("    {}", post.summary);
                if let Some(url) = &post.url {
                    println!("    URL: {}", url);
                }
                println!();
            }
        }
        Section::Contact => {
            match &portfolio.profile.email {
                Some(email) => println!("Email: {}", email),
                None => println!("No email listed."),
            }
            println!("\nTo send a message, run:");
            println!("  folio contact --name <name> --email <email> --message <text>");
        }
    }

    Ok(())
}
