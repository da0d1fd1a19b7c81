use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
mod config;
mod gaps;
mod handoff;
mod import;
mod internships;
mod models;
mod report;
mod scorer;
mod skills;
mod suggest;

use crate::config::Config;
use crate::handoff::{HandoffSlot, PROFILE_KEY, QUICK_SUGGESTION_KEY};
use crate::models::{Branch, QuickSuggestionForm, RoleCluster, StudentProfile};

#[derive(Parser)]
#[command(name = "career-compass")]
#[command(about = "Career role matching, skill gaps and roadmaps for engineering students", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ProfileArgs {
    #[arg(long, default_value = "Computer Science & Engineering")]
    branch: String,
    /// Repeat for each skill held
    #[arg(long = "skill")]
    skills: Vec<String>,
    /// Repeat for each interest
    #[arg(long = "interest")]
    interests: Vec<String>,
    #[arg(long, default_value = "")]
    goals: String,
    /// Technical, Creative, Leadership, Problem-Solving or Analytical
    #[arg(long, default_value = "Technical")]
    aptitude: String,
    #[arg(long, default_value_t = 7.5)]
    gpa: f64,
}

impl ProfileArgs {
    fn into_profile(self) -> StudentProfile {
        StudentProfile {
            branch: self.branch,
            current_skills: self.skills,
            interests: self.interests,
            career_goals: self.goals,
            aptitude: self.aptitude,
            gpa: self.gpa,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the single best role from branch and comma-separated interests
    Suggest {
        #[arg(long, default_value = "Computer Science & Engineering")]
        branch: String,
        #[arg(long, default_value = "")]
        skills: String,
        #[arg(long, default_value = "")]
        interests: String,
        /// Also keep the form for the next `guide --resume`
        #[arg(long)]
        stash: bool,
        #[arg(long)]
        json: bool,
    },
    /// Rank roles for a full profile with skill gaps
    Guide {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Load the profile left by `stash` (or a stashed quick form) instead
        #[arg(long)]
        resume: bool,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Keep a profile for the next `guide --resume`
    Stash {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// List roles authored for a branch
    Roles {
        #[arg(long, default_value = "Computer Science & Engineering")]
        branch: String,
    },
    /// Show one role in detail
    Role {
        name: String,
    },
    /// Browse internship listings
    Internships {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = internships::ALL_DOMAINS)]
        domain: String,
        #[arg(long)]
        id: Option<String>,
    },
    /// Score profiles from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a markdown report
    Report {
        #[command(flatten)]
        profile: ProfileArgs,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn rank(profile: &StudentProfile, seed: Option<u64>) -> Vec<RoleCluster> {
    match seed {
        Some(seed) => scorer::score_roles_with(profile, &mut StdRng::seed_from_u64(seed)),
        None => scorer::score_roles(profile),
    }
}

async fn simulate_processing(config: &Config) {
    if config.processing_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.processing_delay_ms)).await;
    }
}

fn resume_profile(slot: &HandoffSlot, fallback: StudentProfile) -> anyhow::Result<StudentProfile> {
    if let Some(profile) = slot.take::<StudentProfile>(PROFILE_KEY)? {
        return Ok(profile);
    }
    if let Some(form) = slot.take::<QuickSuggestionForm>(QUICK_SUGGESTION_KEY)? {
        return Ok(StudentProfile {
            branch: form.branch,
            current_skills: import::split_list(&form.skills.replace(',', ";")),
            interests: import::split_list(&form.interests.replace(',', ";")),
            ..fallback
        });
    }
    tracing::info!("nothing stashed, using the given profile");
    Ok(fallback)
}

fn print_clusters(clusters: &[RoleCluster]) {
    println!("Top roles by match score:");
    for cluster in clusters {
        let critical = cluster
            .required_skills
            .iter()
            .filter(|gap| gap.priority == models::Priority::Critical)
            .count();
        println!(
            "- {} ({} demand) score {} with {} of {} skills to learn",
            cluster.record.role,
            cluster.record.market_demand.label(),
            cluster.match_score,
            critical,
            cluster.required_skills.len()
        );
        println!("  {}", cluster.why_this_role);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("career_compass={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let slot = HandoffSlot::new(&config.session_dir);

    match cli.command {
        Commands::Suggest {
            branch,
            skills,
            interests,
            stash,
            json,
        } => {
            let suggestion = suggest::suggest_role(&branch, &skills, &interests);
            if stash {
                let form = QuickSuggestionForm {
                    branch,
                    skills,
                    interests,
                };
                slot.put(QUICK_SUGGESTION_KEY, &form)?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                println!(
                    "{} (base match {}): {}",
                    suggestion.role, suggestion.match_score, suggestion.description
                );
                println!("{}", suggestion.why_this_role);
                println!("Skills: {}", suggestion.required_skills.join(", "));
                println!("Salary: {}", suggestion.salary_range);
            }
        }
        Commands::Guide {
            profile,
            resume,
            seed,
            json,
        } => {
            let profile = if resume {
                resume_profile(&slot, profile.into_profile())?
            } else {
                profile.into_profile()
            };

            simulate_processing(&config).await;
            let clusters = rank(&profile, seed);

            if json {
                println!("{}", serde_json::to_string_pretty(&clusters)?);
            } else {
                print_clusters(&clusters);
            }
        }
        Commands::Stash { profile } => {
            let id = slot.put(PROFILE_KEY, &profile.into_profile())?;
            println!("Profile stashed ({id}); run `guide --resume` to use it.");
        }
        Commands::Roles { branch } => {
            let resolved = Branch::resolve(&branch);
            println!("Roles for {resolved}:");
            for record in catalog::roles_for(resolved) {
                println!("- {} ({} demand): {}", record.role, record.market_demand.label(), record.description);
            }
            println!("Quick suggestions:");
            for entry in suggest::suggestions_for(&branch) {
                println!("- {} via {} (base {})", entry.role, entry.interest_key, entry.match_score);
            }
        }
        Commands::Role { name } => {
            let (branch, record) =
                catalog::find_role(&name).with_context(|| format!("no role named '{name}'"))?;
            println!("{} ({branch}, {} demand)", record.role, record.market_demand.label());
            println!("{}", record.description);
            println!("Salary: {}", record.salary_range);
            println!("Companies: {}", record.top_companies.join(", "));
            println!("Growth: {}", record.growth_path.join(" -> "));
            println!("Roadmap:");
            for milestone in catalog::learning_timeline(record) {
                println!("- Month {}: {} ({})", milestone.month, milestone.title, milestone.skills.join(", "));
            }
            println!("Internships:");
            for internship in catalog::matching_internships(record) {
                println!(
                    "- {} at {} ({}, {}) needs {}",
                    internship.title,
                    internship.company,
                    internship.location,
                    internship.stipend,
                    internship.skills_needed.join(", ")
                );
            }
            println!("Interview tips:");
            for tip in record.interview_tips.iter() {
                println!("- {tip}");
            }
        }
        Commands::Internships { query, domain, id } => {
            if let Some(id) = id {
                let internship =
                    internships::find(&id).with_context(|| format!("no internship with id '{id}'"))?;
                println!("{} at {} ({})", internship.title, internship.company, internship.location);
                println!("{}", internship.description);
                println!("{} for {}, match {}", internship.stipend, internship.duration, internship.match_score);
                println!("Skills: {}", internship.skills.join(", "));
                println!("Missing: {}", internship.missing_skills.join(", "));
                return Ok(());
            }

            if !internships::DOMAINS.contains(&domain.as_str()) {
                tracing::warn!(domain = %domain, known = ?internships::DOMAINS, "unknown internship domain");
            }
            let matches = internships::filter(&query, &domain);
            if matches.is_empty() {
                println!("No internships match these filters.");
                return Ok(());
            }
            println!("Showing {} of {} internships:", matches.len(), internships::listings().len());
            for internship in matches {
                println!(
                    "- [{}] {} at {} ({}) match {}",
                    internship.id, internship.title, internship.company, internship.domain, internship.match_score
                );
            }
        }
        Commands::Import { csv, seed } => {
            let profiles = import::import_profiles(&csv)?;
            println!("Scored {} profiles from {}:", profiles.len(), csv.display());
            for profile in profiles.iter() {
                let clusters = rank(profile, seed);
                match clusters.first() {
                    Some(top) => println!(
                        "- {} / {} (GPA {:.1}): {} score {}",
                        profile.branch, profile.aptitude, profile.gpa, top.record.role, top.match_score
                    ),
                    None => println!("- {} / {}: no roles", profile.branch, profile.aptitude),
                }
            }
        }
        Commands::Report { profile, seed, out } => {
            let profile = profile.into_profile();
            simulate_processing(&config).await;
            let clusters = rank(&profile, seed);
            let report = report::build_report(&profile, &clusters, chrono::Local::now().date_naive());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
