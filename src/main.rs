//! Terminal front-end: convert a time between zones and optionally count down to it.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{debug, info, warn};

use tzcountdown::countdown::{CompletionCue, SilentCue};
use tzcountdown::model::constants::TICK_INTERVAL_MS;
use tzcountdown::platform::SystemBeep;
use tzcountdown::storage::SettingsStore;
use tzcountdown::SettingsError;
use tzcountdown::{
    format_elapsed, format_offset, AppEvent, ConversionRequest, ConversionResult, Countdown, EngineConfig,
    EventBus, TimeConversionEngine, ZoneSelector,
};

#[derive(Parser, Debug)]
#[command(version, about = "Convert a time between time zones and count down to it")]
struct Args {
    /// Source zone: catalog index, IANA name, abbreviation, or UTC+k / UTC-k
    #[arg(short, long, required_unless_present = "list")]
    from: Option<String>,

    /// Destination zone (defaults to the system zone, else UTC)
    #[arg(short, long)]
    to: Option<String>,

    /// Time in the source zone, HH:MM (24-hour)
    #[arg(short = 'T', long, required_unless_present = "list")]
    time: Option<String>,

    /// Date in the current year, MM/DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    /// Keep running and count down to the target
    #[arg(short, long)]
    countdown: bool,

    /// Beep when the countdown reaches zero (also enabled by settings)
    #[arg(short, long)]
    sound: bool,

    /// Settings file (defaults to Moist/countdown_settings.json next to the executable)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// List the zone catalog and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Args::parse()) {
        eprintln!("tzcountdown error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let engine = TimeConversionEngine::new(EngineConfig::default());
    let catalog = engine.catalog();

    if args.list {
        for (i, desc) in catalog.iter().enumerate() {
            println!("{:>2}  {:<34} {}", i, desc.label(), desc.iana_name);
        }
        println!("    UTC+k / UTC-k (custom offset, |k| <= 18)");
        return Ok(());
    }

    // clap requires --from and --time unless --list was given.
    let source = catalog.parse_selector(args.from.as_deref().unwrap_or_default())?;
    let destination = match args.to.as_deref() {
        Some(text) => catalog.parse_selector(text)?,
        None => default_destination(&engine),
    };
    let time = args.time.unwrap_or_default();

    let mut request = ConversionRequest::new(source, destination, time);
    request.date = args.date;
    let result = engine.convert(&request)?;
    print_result(&result);

    if args.countdown {
        let mut store = match args.settings {
            Some(path) => SettingsStore::new(path),
            None => SettingsStore::at_default_location(),
        };
        let play_sound = args.sound || store.settings().play_sound;
        run_countdown(&result, &mut store, play_sound)?;
    }
    Ok(())
}

fn default_destination(engine: &TimeConversionEngine) -> ZoneSelector {
    let catalog = engine.catalog();
    let index = catalog
        .default_for_system()
        .or_else(|| catalog.position_of("UTC"))
        .unwrap_or(0);
    debug!("destination defaults to {}", catalog.selector_label(ZoneSelector::Catalog(index)));
    ZoneSelector::Catalog(index)
}

fn print_result(result: &ConversionResult) {
    println!("{} → {}", result.source_label(), result.destination_label());
    println!("Offset difference: {}", format_offset(result.offset_difference()));
    if result.daylight_saving {
        println!("Daylight Savings Time was taken into account.");
    } else {
        println!("Daylight Savings Time was NOT taken into account.");
    }
    match result.overdue_by() {
        Some(late) => println!("Too late: missed by {}", format_elapsed(late)),
        None => println!("Starts in {}", format_elapsed(result.remaining)),
    }
}

/// Ticks once per period on a helper thread and reads commands from stdin
/// on another; all work happens here.
fn run_countdown(
    result: &ConversionResult,
    store: &mut SettingsStore,
    mut play_sound: bool,
) -> Result<(), SettingsError> {
    let bus = EventBus::new();

    let ticker = bus.publisher();
    thread::spawn(move || {
        while ticker.publish(AppEvent::Tick) {
            thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
        }
    });

    let commands = bus.publisher();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if let Some(event) = AppEvent::from_command(&line) {
                if !commands.publish(event) {
                    break;
                }
            }
        }
    });

    println!("Type s + Enter to toggle the sound, q + Enter to quit.");
    let mut beep = SystemBeep;
    let mut silent = SilentCue;
    let mut countdown = Countdown::new(result.target());

    while let Some(event) = bus.recv() {
        debug!("event: {}", event.description());
        match event {
            AppEvent::Tick => {
                let cue: &mut dyn CompletionCue = if play_sound {
                    &mut beep
                } else {
                    &mut silent
                };
                let tick = countdown.tick_with(jiff::Timestamp::now(), Some(cue));
                match tick.overdue_by {
                    Some(late) if !tick.keep_ticking => {
                        println!("\r{}  Missed by {}", tick.display, format_elapsed(late));
                    }
                    _ if !tick.keep_ticking => println!("\r{}  Time reached!", tick.display),
                    _ => print!("\r{}", tick.display),
                }
                if let Err(e) = std::io::stdout().flush() {
                    warn!("stdout flush failed: {e}");
                }

                if !tick.keep_ticking {
                    info!("countdown finished in state {:?}", tick.state);
                    break;
                }
            }
            AppEvent::ToggleSound => {
                play_sound = !play_sound;
                store.update(|s| s.play_sound = play_sound);
                info!("completion sound {}", if play_sound { "on" } else { "off" });
            }
            AppEvent::RequestQuit => {
                info!("quit requested");
            }
        }
        if event.requires_settings_flush() {
            store.flush()?;
        }
        if event == AppEvent::RequestQuit {
            break;
        }
    }
    store.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_needs_no_zone_or_time() {
        let args = Args::try_parse_from(["tzcountdown", "--list"]).unwrap();
        assert!(args.list);
        assert!(args.from.is_none());
    }

    #[test]
    fn conversion_requires_from_and_time() {
        assert!(Args::try_parse_from(["tzcountdown"]).is_err());
        assert!(Args::try_parse_from(["tzcountdown", "--from", "0"]).is_err());
        assert!(Args::try_parse_from(["tzcountdown", "-T", "15:00"]).is_err());

        let args = Args::try_parse_from(["tzcountdown", "-f", "0", "-T", "15:00"]).unwrap();
        assert_eq!(args.from.as_deref(), Some("0"));
        assert_eq!(args.time.as_deref(), Some("15:00"));
    }
}
