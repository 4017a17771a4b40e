use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playmoodify::{cli, config, error, mood::Mood, types::AudioFeatures, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

fn parse_mood(value: &str) -> Result<Mood, String> {
    Mood::parse(value).ok_or_else(|| {
        format!(
            "unknown mood '{}', expected 0-3, sad|happy|energetic|calm or triste|felice|energico|calmo",
            value
        )
    })
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Base URL of the analysis service (overrides PLAYMOODIFY_API_URL)
    #[clap(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides PLAYMOODIFY_TIMEOUT_SECS)
    #[clap(long, global = true)]
    timeout: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze the moods of a Spotify playlist
    Analyze(AnalyzeOptions),

    /// Interactive session (default when no command is given)
    Interactive(InteractiveOptions),

    /// Predict the mood of a single song
    Predict(PredictOptions),

    /// Check that the analysis service is reachable
    Status,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Spotify playlist link
    #[clap(required_unless_present = "paste")]
    pub playlist_url: Option<String>,

    /// Read the playlist link from the clipboard
    #[clap(long, conflicts_with = "playlist_url")]
    pub paste: bool,

    /// Print final gauge values without animation
    #[clap(long)]
    pub no_animation: bool,

    /// List the tracks of one mood (0-3 or mood name)
    #[clap(long, value_parser = parse_mood)]
    pub expand: Option<Mood>,
}

#[derive(Parser, Debug, Clone)]
pub struct InteractiveOptions {
    /// Print final gauge values without animation
    #[clap(long)]
    pub no_animation: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PredictOptions {
    #[command(subcommand)]
    pub command: PredictSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PredictSubcommand {
    /// Look a song up by name and predict its mood
    Song(PredictSongOpts),

    /// Predict a mood from explicit audio features
    Features(PredictFeaturesOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PredictSongOpts {
    /// Song title
    pub name: String,

    /// Artist name, narrows the lookup
    #[clap(long)]
    pub artist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PredictFeaturesOpts {
    #[clap(long)]
    pub acousticness: f64,
    #[clap(long)]
    pub danceability: f64,
    #[clap(long)]
    pub energy: f64,
    #[clap(long)]
    pub instrumentalness: f64,
    #[clap(long)]
    pub liveness: f64,
    #[clap(long)]
    pub speechiness: f64,
    /// Tempo in BPM
    #[clap(long)]
    pub tempo: f64,
    #[clap(long)]
    pub valence: f64,
}

impl From<PredictFeaturesOpts> for AudioFeatures {
    fn from(opts: PredictFeaturesOpts) -> Self {
        AudioFeatures {
            acousticness: opts.acousticness,
            danceability: opts.danceability,
            energy: opts.energy,
            instrumentalness: opts.instrumentalness,
            liveness: opts.liveness,
            speechiness: opts.speechiness,
            tempo: opts.tempo,
            valence: opts.valence,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let client = match cli::build_client(cli.api_url, cli.timeout) {
        Ok(client) => client,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Some(Command::Analyze(opt)) => {
            cli::analyze(
                &client,
                opt.playlist_url,
                opt.paste,
                !opt.no_animation,
                opt.expand,
            )
            .await
        }
        Some(Command::Interactive(opt)) => cli::interactive(&client, !opt.no_animation).await,
        None => cli::interactive(&client, true).await,
        Some(Command::Predict(opt)) => match opt.command {
            PredictSubcommand::Song(s) => cli::predict_song(&client, s.name, s.artist).await,
            PredictSubcommand::Features(f) => cli::predict_features(&client, f.into()).await,
        },
        Some(Command::Status) => cli::status(&client).await,
        Some(Command::Completions(_)) => {}
    }
}
