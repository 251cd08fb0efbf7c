//! Mentor Avatar CLI - Analyze behaviours and render avatars
//!
//! Works offline with the domain library, or against a running server.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use api::{AnalyzeRequest, AvatarClient};
use config::Config;
use mentor_avatar::{
    analyze_behaviours, is_safe_filename, parse_behaviour_lines, render_avatar_png, safe_filename,
    FontFace, Mood, Profile, Role, TraitRecord,
};

#[derive(Parser)]
#[command(name = "mentor-avatar")]
#[command(about = "Mentor Avatar CLI - behaviours in, avatars out", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where behaviours come from: a file (one per line) or arguments
#[derive(Args)]
struct BehaviourArgs {
    /// Role: mentor or trainee
    #[arg(short, long, default_value = "mentor")]
    role: String,
    /// Profile: ultimate, worst or mixed
    #[arg(short, long, default_value = "mixed")]
    profile: String,
    /// Read behaviours from file (one per line)
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Behaviours, one per argument
    behaviours: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive traits from behaviours
    Analyze {
        #[command(flatten)]
        input: BehaviourArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render an avatar PNG locally
    Render {
        /// Title drawn on the card, also used for the filename
        #[arg(short, long)]
        title: String,
        #[command(flatten)]
        input: BehaviourArgs,
        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Talk to a running server
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set default output directory
    SetOutputDir { dir: PathBuf },
    /// Set preferred TrueType font
    SetFont { path: PathBuf },
    /// Set server base URL
    SetUrl { url: String },
}

#[derive(Subcommand)]
enum RemoteAction {
    /// Check the server is up
    Health,
    /// Analyze on the server
    Analyze {
        #[command(flatten)]
        input: BehaviourArgs,
    },
    /// Download a generated avatar
    Fetch {
        /// Filename as shown on the result page, e.g. Test_Mentor.png
        filename: String,
        /// Output directory (overrides config)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input, json } => cmd_analyze(input, json),
        Commands::Render { title, input, out } => cmd_render(title, input, out),
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
        Commands::Remote { action } => cmd_remote(action).await,
    }
}

// ============================================
// Input helpers
// ============================================

impl BehaviourArgs {
    fn role(&self) -> Result<Role> {
        self.role.parse().map_err(anyhow::Error::msg)
    }

    fn profile(&self) -> Result<Profile> {
        self.profile.parse().map_err(anyhow::Error::msg)
    }

    fn lines(&self) -> Result<Vec<String>> {
        let mut lines = match &self.file {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read behaviours from {:?}", path))?;
                parse_behaviour_lines(&text)
            }
            None => Vec::new(),
        };
        lines.extend(self.behaviours.iter().flat_map(|b| parse_behaviour_lines(b)));
        Ok(lines)
    }
}

fn print_traits(traits: &TraitRecord) {
    let colored_mood = match traits.mood {
        Mood::Good => traits.mood.as_str().green(),
        Mood::Bad => traits.mood.as_str().red(),
        Mood::Neutral => traits.mood.as_str().yellow(),
    };

    println!("{}", "Traits:".bold());
    println!("  Role:        {}", traits.role.as_str().cyan());
    println!("  Profile:     {}", traits.profile.as_str().cyan());
    println!("  Mood:        {}", colored_mood);
    println!("  Energy:      {}", traits.energy);
    println!("  Reliability: {}", traits.reliability);
    println!("  Warmth:      {}", traits.warmth);
    println!("  Openness:    {}", traits.openness);

    let s = &traits.keyword_scores;
    println!(
        "  {}",
        format!(
            "keywords: +{} -{} energy {}/{} unreliable {} warm {}/{}",
            s.positive, s.negative, s.high_energy, s.low_energy, s.low_reliability, s.warm, s.cold
        )
        .dimmed()
    );
}

// ============================================
// Command Implementations
// ============================================

fn cmd_analyze(input: BehaviourArgs, json: bool) -> Result<()> {
    let traits = analyze_behaviours(&input.lines()?, input.role()?, input.profile()?);

    if json {
        println!("{}", serde_json::to_string_pretty(&traits)?);
    } else {
        print_traits(&traits);
    }

    Ok(())
}

fn cmd_render(title: String, input: BehaviourArgs, out: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let behaviours = input.lines()?;
    let traits = analyze_behaviours(&behaviours, input.role()?, input.profile()?);

    let font = FontFace::load(config.font_path.as_deref());
    if font.is_builtin() {
        eprintln!("{}", "No TrueType font found, using built-in bitmap font".yellow());
    }

    let png = render_avatar_png(&title, &behaviours, &traits, &font)?;

    let dir = out.unwrap_or(config.output_dir);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {:?}", dir))?;
    let path = dir.join(safe_filename(&title));
    fs::write(&path, png).with_context(|| format!("Failed to write {:?}", path))?;

    println!("{} Saved {}", "✓".green(), path.display());
    print_traits(&traits);

    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Output Dir: {}", config.output_dir.display());
            println!(
                "  Font: {}",
                match &config.font_path {
                    Some(path) => path.display().to_string().cyan(),
                    None => "System default".dimmed(),
                }
            );
            println!("  Base URL: {}", config.base_url);
            return Ok(());
        }
        ConfigAction::SetOutputDir { dir } => config.output_dir = dir,
        ConfigAction::SetFont { path } => {
            FontFace::from_path(&path).with_context(|| format!("Cannot use font {:?}", path))?;
            config.font_path = Some(path);
        }
        ConfigAction::SetUrl { url } => config.base_url = url,
    }

    config.save()?;
    println!("{} Configuration saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_remote(action: RemoteAction) -> Result<()> {
    let config = Config::load()?;
    let client = AvatarClient::new(&config.base_url);

    match action {
        RemoteAction::Health => {
            print!("Checking {}... ", config.base_url);
            match client.health().await {
                Ok(true) => println!("{}", "OK".green()),
                _ => {
                    println!("{}", "Failed".red());
                    bail!("Could not reach Mentor Avatar server at {}", config.base_url);
                }
            }
        }

        RemoteAction::Analyze { input } => {
            let request = AnalyzeRequest {
                role: input.role()?.to_string(),
                profile: input.profile()?.to_string(),
                behaviours: input.lines()?,
            };
            let resp = client.analyze(&request).await?;

            println!("{}", "Traits (remote):".bold());
            println!("  Role:        {}", resp.role.cyan());
            println!("  Profile:     {}", resp.profile.cyan());
            println!("  Mood:        {}", resp.mood);
            println!("  Energy:      {}", resp.energy);
            println!("  Reliability: {}", resp.reliability);
            println!("  Warmth:      {}", resp.warmth);
            println!("  Openness:    {}", resp.openness);
        }

        RemoteAction::Fetch { filename, out } => {
            if !is_safe_filename(&filename) {
                bail!("'{}' is not an avatar filename (expected e.g. Test_Mentor.png)", filename);
            }

            let png = client
                .fetch(&filename)
                .await?
                .with_context(|| format!("Server has no avatar named {}", filename))?;

            let dir = out.unwrap_or(config.output_dir);
            fs::create_dir_all(&dir).with_context(|| format!("Failed to create {:?}", dir))?;
            let path = dir.join(&filename);
            fs::write(&path, png).with_context(|| format!("Failed to write {:?}", path))?;

            println!("{} Saved {}", "✓".green(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_behaviours_from_file_and_args() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("behaviours.txt");
        fs::write(&path, "- Listens deeply\n\n- Asks open questions\n").unwrap();

        let input = BehaviourArgs {
            role: "trainee".to_string(),
            profile: "worst".to_string(),
            file: Some(path),
            behaviours: vec!["Always late".to_string()],
        };

        assert_eq!(
            input.lines().unwrap(),
            vec!["Listens deeply", "Asks open questions", "Always late"]
        );
        assert_eq!(input.role().unwrap(), Role::Trainee);
        assert_eq!(input.profile().unwrap(), Profile::Worst);
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        let input = BehaviourArgs {
            role: "boss".to_string(),
            profile: "mixed".to_string(),
            file: None,
            behaviours: Vec::new(),
        };
        assert!(input.role().is_err());
    }

    #[test]
    fn test_render_args_parse() {
        let cli = Cli::try_parse_from([
            "mentor-avatar",
            "render",
            "--title",
            "Test Mentor",
            "--profile",
            "ultimate",
            "Listens deeply",
            "Encourages reflection",
        ])
        .unwrap();

        match cli.command {
            Commands::Render { title, input, out } => {
                assert_eq!(title, "Test Mentor");
                assert_eq!(input.behaviours.len(), 2);
                assert!(out.is_none());
            }
            _ => panic!("expected render"),
        }
    }
}
