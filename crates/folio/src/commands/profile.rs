use crate::cli::{OutputFormat, ProfileSection};
use crate::output::{output_list, output_result};
use anyhow::Result;
use colored::Colorize;
use folio_core::content::{profile, Profile};

pub fn handle_profile(section: Option<ProfileSection>, format: OutputFormat) -> Result<()> {
    let profile = profile();

    let Some(section) = section else {
        match format {
            OutputFormat::Json => output_result(&profile, format),
            OutputFormat::Text => {
                output_result(&profile, format);
                for section in [
                    ProfileSection::Education,
                    ProfileSection::Experience,
                    ProfileSection::Skills,
                    ProfileSection::Stack,
                    ProfileSection::Journey,
                    ProfileSection::Achievements,
                    ProfileSection::Blog,
                    ProfileSection::Links,
                ] {
                    println!();
                    println!("{}", heading(section).bold().underline());
                    print_section(&profile, section, format);
                }
            }
        }
        return Ok(());
    };

    print_section(&profile, section, format);
    Ok(())
}

fn heading(section: ProfileSection) -> &'static str {
    match section {
        ProfileSection::About => "About",
        ProfileSection::Education => "Pendidikan & Organisasi",
        ProfileSection::Experience => "Experience",
        ProfileSection::Skills => "Skills",
        ProfileSection::Stack => "Tech Stack",
        ProfileSection::Journey => "Learning Journey",
        ProfileSection::Achievements => "Achievements",
        ProfileSection::Blog => "Blog & Artikel",
        ProfileSection::Links => "Links",
    }
}

fn print_section(profile: &Profile, section: ProfileSection, format: OutputFormat) {
    match section {
        ProfileSection::About => output_result(profile, format),
        ProfileSection::Education => output_list(&profile.education, format),
        ProfileSection::Experience => output_list(&profile.experience, format),
        ProfileSection::Skills => output_list(&profile.skills, format),
        ProfileSection::Stack => output_list(&profile.tech_stack, format),
        ProfileSection::Journey => output_list(&profile.journey, format),
        ProfileSection::Achievements => output_list(&profile.achievements, format),
        ProfileSection::Blog => output_list(&profile.blog_posts, format),
        ProfileSection::Links => output_list(&profile.links, format),
    }
}
