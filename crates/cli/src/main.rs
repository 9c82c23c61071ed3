use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::Selection;
use portal::auth::{self, Session};
use portal::config;
use portal::profile::{self, StudentProfile};
use portal::{Dashboard, JsonFileStore, LogMailer, PortalConfig, PortalSession, ShortlistPolicy, UiEvent};
use roster::{Candidate, CategoricalField, catalog};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// HR Portal - candidate search and shortlisting
#[derive(Parser)]
#[command(name = "hr-portal")]
#[command(about = "Search, filter and shortlist candidates from the command line", long_about = None)]
struct Cli {
    /// Account email
    #[arg(long, global = true, env = "PORTAL_EMAIL")]
    email: Option<String>,

    /// Account password
    #[arg(long, global = true, env = "PORTAL_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// JSON roster file (defaults to PORTAL_ROSTER_PATH, then the demo roster)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Save the shortlist between runs
    #[arg(long, global = true)]
    persist: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and show the session
    Login,

    /// Search and filter candidates
    Search(SearchArgs),

    /// Show one candidate's full profile
    Show {
        #[arg(long)]
        id: String,
    },

    /// List the filter options
    Options,

    /// Manage the shortlist
    Shortlist {
        #[command(subcommand)]
        action: ShortlistAction,
    },

    /// View or edit the signed-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Email the shortlist or a single candidate
    Mail {
        /// Single candidate to email instead of the shortlist
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        body: Option<String>,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Case-insensitive match against name or email
    term: Option<String>,

    #[arg(long)]
    domain: Option<String>,

    #[arg(long)]
    experience: Option<String>,

    #[arg(long)]
    location_preference: Option<String>,

    #[arg(long)]
    assessment_type: Option<String>,

    #[arg(long)]
    education: Option<String>,

    #[arg(long)]
    availability: Option<String>,

    /// Required skill; repeat to accept any of several
    #[arg(long = "skill")]
    skills: Vec<String>,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the saved profile
    Show,
    /// Update profile fields; unset flags keep their saved values
    Set(ProfileArgs),
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    full_name: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    github_url: Option<String>,

    #[arg(long)]
    university: Option<String>,

    #[arg(long)]
    degree: Option<String>,

    #[arg(long)]
    graduation_year: Option<String>,

    #[arg(long)]
    bio: Option<String>,
}

impl ProfileArgs {
    fn apply(self, profile: &mut StudentProfile) {
        let updates = [
            (&mut profile.full_name, self.full_name),
            (&mut profile.location, self.location),
            (&mut profile.github_url, self.github_url),
            (&mut profile.university, self.university),
            (&mut profile.degree, self.degree),
            (&mut profile.graduation_year, self.graduation_year),
            (&mut profile.bio, self.bio),
        ];
        for (slot, value) in updates {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

impl SearchArgs {
    fn events(self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Some(term) = self.term {
            events.push(UiEvent::SearchTermChanged(term));
        }

        let selections = [
            (CategoricalField::Domain, self.domain),
            (CategoricalField::Experience, self.experience),
            (CategoricalField::LocationPreference, self.location_preference),
            (CategoricalField::AssessmentType, self.assessment_type),
            (CategoricalField::Education, self.education),
            (CategoricalField::Availability, self.availability),
        ];
        for (field, value) in selections {
            if let Some(value) = value {
                events.push(UiEvent::FilterChanged(field, Selection::from(value)));
            }
        }

        // Each skill event toggles, so a repeated flag would cancel itself out
        let mut seen = HashSet::new();
        events.extend(
            self.skills
                .into_iter()
                .filter(|skill| seen.insert(skill.clone()))
                .map(UiEvent::SkillToggled),
        );
        events
    }
}

#[derive(Subcommand)]
enum ShortlistAction {
    /// Add a candidate, or remove it if already shortlisted
    Toggle {
        #[arg(long)]
        id: String,
    },
    /// Remove a candidate
    Remove {
        #[arg(long)]
        id: String,
    },
    /// Show the shortlist
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing before reading config so its messages are kept
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_new(config::log_filter())
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut config = PortalConfig::load().context("Invalid portal configuration")?;

    if let Some(roster) = cli.roster {
        config.roster_path = Some(roster);
    }
    if cli.persist {
        config.shortlist_policy = ShortlistPolicy::Persistent;
    }
    info!(
        "Shortlist policy {} ({})",
        config.shortlist_policy,
        config.store_path.display()
    );

    let session = sign_in(cli.email.as_deref(), cli.password.as_deref())?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Login => {
            handle_login(&session);
            auth::logout(session);
        }
        Commands::Profile { action } => {
            handle_profile(&config, &session, action).await?;
            auth::logout(session);
        }
        Commands::Options => {
            let portal = open_portal(&config, session).await?;
            handle_options(portal.dashboard());
            portal.close();
        }
        Commands::Search(args) => {
            let mut portal = open_portal(&config, session).await?;
            handle_search(&mut portal, args).await?;
            portal.close();
        }
        Commands::Show { id } => {
            let portal = open_portal(&config, session).await?;
            handle_show(portal.dashboard(), &id)?;
            portal.close();
        }
        Commands::Shortlist { action } => {
            let mut portal = open_portal(&config, session).await?;
            handle_shortlist(&mut portal, action).await?;
            portal.close();
        }
        Commands::Mail { id, subject, body } => {
            let portal = open_portal(&config, session).await?;
            handle_mail(&portal, id, subject, body)?;
            portal.close();
        }
    }

    Ok(())
}

fn sign_in(email: Option<&str>, password: Option<&str>) -> Result<Session> {
    let (Some(email), Some(password)) = (email, password) else {
        return Err(anyhow!(
            "Credentials required: pass --email and --password or set PORTAL_EMAIL and PORTAL_PASSWORD"
        ));
    };
    auth::login(email, password).context("Sign-in failed")
}

async fn open_portal(config: &PortalConfig, session: Session) -> Result<PortalSession<JsonFileStore>> {
    let start = Instant::now();
    let store = JsonFileStore::new(&config.store_path);
    let portal = PortalSession::open(config, session, store, LogMailer)
        .await
        .context("Could not open the HR dashboard")?;
    println!(
        "{} Loaded {} candidates in {:?}",
        "✓".green(),
        portal.dashboard().store().len(),
        start.elapsed()
    );
    Ok(portal)
}

/// Handle the 'login' command
fn handle_login(session: &Session) {
    println!("{} Signed in as {}", "✓".green(), session.user.email.bold());
    println!("{}User type: {}", "• ".cyan(), session.user_type);
    println!("{}Uid: {}", "• ".cyan(), session.user.uid);
    if !session.is_hr() {
        println!("{}", "The HR dashboard requires an HR account".yellow());
    }
}

/// Handle the 'profile' command
async fn handle_profile(config: &PortalConfig, session: &Session, action: ProfileAction) -> Result<()> {
    let store = JsonFileStore::new(&config.store_path);
    let mut current = profile::load_profile(&store, session)
        .await
        .context("Could not read the saved profile")?;

    if let ProfileAction::Set(args) = action {
        args.apply(&mut current);
        profile::save_profile(&store, session, &current)
            .await
            .context("Could not save the profile")?;
        println!("{} Profile saved", "✓".green());
    }

    let name = if current.full_name.is_empty() { "Student" } else { current.full_name.as_str() };
    println!("\n{}", format!("{} <{}>", name, current.email).bold().blue());
    let fields = [
        ("Location", &current.location),
        ("GitHub", &current.github_url),
        ("University", &current.university),
        ("Degree", &current.degree),
        ("Graduation year", &current.graduation_year),
        ("Bio", &current.bio),
    ];
    for (label, value) in fields {
        let value = if value.is_empty() { "-" } else { value.as_str() };
        println!("{}{}: {}", "• ".green(), label, value);
    }
    if !current.is_complete() {
        println!(
            "{}",
            "Profile incomplete: set --full-name, --university and --degree".yellow()
        );
    }
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(portal: &mut PortalSession<JsonFileStore>, args: SearchArgs) -> Result<()> {
    for event in args.events() {
        portal.dispatch(event).await?;
    }

    let dashboard = portal.dashboard_mut();
    let total = dashboard.store().len();
    let shortlisted = dashboard.shortlist().ids();
    let visible = dashboard.visible();

    println!(
        "\n{}",
        format!("Showing {} of {} candidates", visible.len(), total).bold().blue()
    );
    for candidate in &visible {
        print_row(candidate, shortlisted.contains(&candidate.id));
    }
    if visible.is_empty() {
        println!("{}", "No candidates match the current filters".yellow());
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(dashboard: &Dashboard, id: &str) -> Result<()> {
    let candidate = dashboard
        .store()
        .get(id)
        .ok_or_else(|| anyhow!("Candidate {} not found", id))?;

    println!("\n{}", format!("{} <{}>", candidate.name, candidate.email).bold().blue());
    if dashboard.is_shortlisted(id) {
        println!("{}", "★ Shortlisted".yellow());
    }
    for field in CategoricalField::ALL {
        let value = candidate.categorical(field).unwrap_or("-");
        println!("{}{}: {}", "• ".green(), field.label(), value);
    }
    println!("{}Skills: {}", "• ".green(), candidate.skills.join(", "));
    if let Some(score) = candidate.score {
        println!("{}Score: {}", "• ".cyan(), score);
    }
    if let Some(status) = candidate.status {
        println!("{}Status: {}", "• ".cyan(), status);
    }
    if let Some(location) = &candidate.location {
        println!("{}Location: {}", "• ".cyan(), location);
    }
    if let Some(phone) = &candidate.phone {
        println!("{}Phone: {}", "• ".cyan(), phone);
    }
    if !candidate.badges.is_empty() {
        println!("{}Badges: {}", "• ".cyan(), candidate.badges.join(", "));
    }

    if !candidate.projects.is_empty() {
        println!("Projects:");
        for project in &candidate.projects {
            println!("  - {}: {}", project.title, project.description);
        }
    }
    if !candidate.assessments.is_empty() {
        println!("Assessments:");
        for assessment in &candidate.assessments {
            println!(
                "  - {} ({}): {}/{}",
                assessment.kind, assessment.date, assessment.score, assessment.max_score
            );
        }
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(dashboard: &Dashboard) {
    for field in CategoricalField::ALL {
        println!("{} ({})", field.label().bold(), format!("--{}", cli_flag(field)).dimmed());
        println!("  {}", catalog::options_for(field).join(", "));

        let present = dashboard.store().distinct_values(field);
        if !present.is_empty() {
            println!("  {} {}", "in roster:".dimmed(), present.join(", "));
        }
    }
    println!("{} ({})", "Skills".bold(), "--skill".dimmed());
    println!("  {}", catalog::SKILLS.join(", "));
}

/// Handle the 'shortlist' command
async fn handle_shortlist(portal: &mut PortalSession<JsonFileStore>, action: ShortlistAction) -> Result<()> {
    if portal.policy() == ShortlistPolicy::Session && !matches!(action, ShortlistAction::List) {
        println!(
            "{}",
            "Shortlist policy is 'session': changes last only for this run (use --persist)".yellow()
        );
    }

    match action {
        ShortlistAction::Toggle { id } => {
            portal.dispatch(UiEvent::ShortlistToggled(id.clone())).await?;
            if portal.dashboard().is_shortlisted(&id) {
                println!("{} Added {} to the shortlist", "✓".green(), id);
            } else {
                println!("{} Removed {} from the shortlist", "✓".green(), id);
            }
        }
        ShortlistAction::Remove { id } => {
            if portal.dispatch(UiEvent::ShortlistRemoved(id.clone())).await? {
                println!("{} Removed {} from the shortlist", "✓".green(), id);
            } else {
                println!("{} {} was not shortlisted", "•".yellow(), id);
            }
        }
        ShortlistAction::List => {}
    }

    let shortlist = portal.dashboard().shortlist();
    println!("\n{}", format!("Shortlist ({})", shortlist.len()).bold().blue());
    for candidate in shortlist {
        print_row(candidate, true);
    }
    Ok(())
}

/// Handle the 'mail' command
fn handle_mail(
    portal: &PortalSession<JsonFileStore>,
    id: Option<String>,
    subject: Option<String>,
    body: Option<String>,
) -> Result<()> {
    let dashboard = portal.dashboard();
    let mut draft = match &id {
        Some(id) => dashboard.compose_for(id)?,
        None => dashboard
            .compose_for_shortlist()
            .context("Nothing to send: the shortlist is empty")?,
    };
    if let Some(subject) = subject {
        draft = draft.with_subject(subject);
    }
    if let Some(body) = body {
        draft = draft.with_body(body);
    }

    portal.send_email(&draft)?;

    println!("{} Email sent", "✓".green());
    println!("{}To: {}", "• ".cyan(), draft.recipients.join(", "));
    println!("{}Subject: {}", "• ".cyan(), draft.subject);
    println!("\n{}", draft.body);
    Ok(())
}

fn print_row(candidate: &Candidate, shortlisted: bool) {
    let marker = if shortlisted { "★".yellow() } else { " ".normal() };
    let score = candidate
        .score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{} {:>4}  {:<20} {:<28} {:<22} {:<10} {:>3}",
        marker,
        candidate.id,
        candidate.name.bold(),
        candidate.email,
        candidate.domain,
        candidate.experience,
        score.green()
    );
}

fn cli_flag(field: CategoricalField) -> &'static str {
    match field {
        CategoricalField::Domain => "domain",
        CategoricalField::Experience => "experience",
        CategoricalField::LocationPreference => "location-preference",
        CategoricalField::AssessmentType => "assessment-type",
        CategoricalField::Education => "education",
        CategoricalField::Availability => "availability",
    }
}
