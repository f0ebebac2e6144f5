use anyhow::Result;
use folio_core::{AppConfig, Profile};

/// Print the profile to stdout, as readable text or JSON.
pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let profile = Profile::load_or_sample(&config.profile_path())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("{}", profile.identity.name);
    if let Some(location) = &profile.identity.location {
        println!("{}", location);
    }
    if !profile.identity.tagline.is_empty() {
        println!("{}", profile.identity.tagline);
    }

    if !profile.projects.is_empty() {
        println!("\nProjects");
        for project in &profile.projects {
            let year = project
                .year
                .map(|y| format!(" ({})", y))
                .unwrap_or_default();
            println!("  {}{}", project.title, year);
            if !project.summary.is_empty() {
                println!("    {}", project.summary);
            }
            if !project.tech.is_empty() {
                println!("    {}", project.tech.join(", "));
            }
        }
    }

    if !profile.publications.is_empty() {
        println!("\nPublications");
        for publication in &profile.publications {
            let year = publication
                .year
                .map(|y| format!("{}  ", y))
                .unwrap_or_default();
            println!("  {}{}", year, publication.title);
            if let Some(venue) = &publication.venue {
                println!("        {}", venue);
            }
        }
    }

    if !profile.education.is_empty() {
        println!("\nEducation");
        for entry in &profile.education {
            println!("  {}  {}", entry.institution, entry.period);
            if !entry.degree.is_empty() {
                println!("    {}", entry.degree);
            }
        }
    }

    if !profile.contact.email.is_empty() || !profile.links.is_empty() {
        println!("\nContact");
        if !profile.contact.email.is_empty() {
            println!("  {}", profile.contact.email);
        }
        for link in &profile.links {
            println!("  {}: {}", link.name, link.url);
        }
    }

    Ok(())
}
