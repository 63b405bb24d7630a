use clap::Parser;
use mci_sound::application::SoundPlayer;
use mci_sound::config::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play a WAV file through the Windows MCI service
#[derive(Parser, Debug)]
#[command(name = "mci-play", version)]
struct Args {
    /// Path to the .WAV file (must not contain spaces)
    path: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start position in seconds
    #[arg(long)]
    seek: Option<f64>,

    /// Print the length and exit without playing
    #[arg(long)]
    info: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load(args.config.as_deref())?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded: {:?}", config);

    let player = SoundPlayer::system(config.playback.clone())?;
    let mut sound = player.open(&args.path)?;

    let length = sound.length()?;
    println!("{}: {:.3}s", args.path.display(), length.as_secs_f64());

    if args.info {
        sound.close()?;
        return Ok(());
    }

    if let Some(seconds) = args.seek {
        sound.set_position(Duration::try_from_secs_f64(seconds)?)?;
    }

    sound.play()?;
    info!(
        "Playing {}, polling every {:?}",
        sound.alias(),
        player.options().poll_interval()
    );

    let interrupted = tokio::select! {
        result = sound.wait_until_stopped() => {
            result?;
            false
        }
        _ = tokio::signal::ctrl_c() => true,
    };

    if interrupted {
        info!("Interrupted, stopping playback");
        sound.stop()?;
    }

    sound.close()?;
    info!("Done");

    Ok(())
}
