use clap::{Parser, Subcommand, ValueEnum};
use combat_logout_cli::{CliContext, commands, logging, readline};
use combat_logout_core::{TimeFormat, TimerConfig, TimerConfigExt};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();

    let ctx = CliContext::new(TimerConfig::load());
    commands::show_status(&ctx).await?;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{}", err.trim_end()).map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    ctx.shutdown().await.map_err(|e| e.to_string())
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        matches!(toggle, Toggle::On)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ClockAction {
    Start,
    Stop,
}

fn parse_time_format(s: &str) -> Result<TimeFormat, String> {
    TimeFormat::parse(s).ok_or_else(|| format!("unknown time format '{s}'"))
}

#[derive(Parser)]
#[command(version, about = "combat logout timer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Local player takes a hit
    Hit {
        #[arg(short, long, default_value_t = 0)]
        amount: i32,
    },
    /// Some other actor takes a hit
    HitOther {
        #[arg(short, long, default_value_t = 0)]
        amount: i32,
    },
    Tick {
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
    /// Enter or leave a dangerous area
    Area { state: Toggle },
    /// Hop to a dangerous or safe world
    World { state: Toggle },
    /// Only run in dangerous contexts
    Restrict { state: Toggle },
    Format {
        #[arg(value_parser = parse_time_format)]
        format: TimeFormat,
    },
    Grace { secs: u32 },
    Sound { state: Toggle },
    Show {
        #[arg(long)]
        overlay: Option<Toggle>,
        #[arg(long)]
        head_bar: Option<Toggle>,
    },
    Clock { action: ClockAction },
    Status,
    Config,
    Save,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "combat-logout".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Hit { amount }) => commands::hit(ctx, amount, true).await?,
        Some(Commands::HitOther { amount }) => commands::hit(ctx, amount, false).await?,
        Some(Commands::Tick { count }) => commands::tick(ctx, count).await?,
        Some(Commands::Area { state }) => commands::set_area(ctx, state.into()).await?,
        Some(Commands::World { state }) => commands::set_world(ctx, state.into()).await?,
        Some(Commands::Restrict { state }) => commands::set_restricted(ctx, state.into()).await?,
        Some(Commands::Format { format }) => commands::set_format(ctx, format).await?,
        Some(Commands::Grace { secs }) => commands::set_grace(ctx, secs).await?,
        Some(Commands::Sound { state }) => commands::set_sound(ctx, state.into()).await?,
        Some(Commands::Show { overlay, head_bar }) => {
            commands::set_visibility(ctx, overlay.map(Into::into), head_bar.map(Into::into))
                .await?
        }
        Some(Commands::Clock { action: ClockAction::Start }) => commands::start_clock(ctx).await?,
        Some(Commands::Clock { action: ClockAction::Stop }) => commands::stop_clock(ctx).await?,
        Some(Commands::Status) => commands::show_status(ctx).await?,
        Some(Commands::Config) => commands::show_config(ctx).await?,
        Some(Commands::Save) => commands::save_config(ctx).await?,
        Some(Commands::Exit) => {
            commands::exit()?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
