//! Runs a chaotic waterwheel in the terminal.
//!
//! # Usage
//!
//! ```text
//! chaoswheel [BUCKETS] [STEPS] [--json]
//! ```
//!
//! - **BUCKETS** — number of buckets on the wheel (default 9, at least 5).
//! - **STEPS** — stop after this many ticks; without it the wheel runs until
//!   interrupted.
//! - **--json** — print each snapshot as a JSON object instead of a text line.
//!
//! While running, type `+` or `-` followed by Enter to add or remove a bucket.
//! Set `RUST_LOG=debug` to see bucket changes and startup details.

use std::{
    error::Error,
    io::{self, BufRead, Write},
    thread,
};

use chaoswheel_core::{ConfigurationError, DEFAULT_BUCKETS, WheelSimulation, WheelSnapshot};
use chaoswheel_driver::{Action, Command, CommandSender, Config, Driver, Event};

const USAGE: &str = "Usage: chaoswheel [BUCKETS] [STEPS] [--json]";

/// Fill glyphs from empty to full.
const LEVELS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Command-line options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Args {
    buckets: usize,
    steps: Option<usize>,
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args =
        parse_args(std::env::args().skip(1)).unwrap_or_else(|message| usage_error(&message));

    let mut driver = build_driver(args)?;
    spawn_input(driver.commands());

    let mut stdout = io::stdout().lock();
    let mut failure: Option<Box<dyn Error>> = None;

    driver.run_paced(args.steps, |event: &Event| {
        let line = if args.json {
            serde_json::to_string(&event.snapshot).map_err(Box::<dyn Error>::from)
        } else {
            Ok(render(&event.snapshot))
        };

        match line.and_then(|line| Ok(writeln!(stdout, "{line}")?)) {
            Ok(()) => None,
            Err(err) => {
                failure = Some(err);
                Some(Action::StopEarly)
            }
        }
    });

    match failure {
        Some(err) if is_broken_pipe(err.as_ref()) => Ok(()),
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Parses `[BUCKETS] [STEPS] [--json]`, returning a message on bad input.
fn parse_args<I>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = String>,
{
    let (flags, positional): (Vec<String>, Vec<String>) =
        args.into_iter().partition(|arg| arg.starts_with("--"));

    let json = match flags.as_slice() {
        [] => false,
        [flag] if flag == "--json" => true,
        _ => return Err(format!("Unknown flags: {}", flags.join(" "))),
    };
    if positional.len() > 2 {
        return Err("Too many arguments".to_owned());
    }

    Ok(Args {
        buckets: parse_count(positional.first(), "BUCKETS")?.unwrap_or(DEFAULT_BUCKETS),
        steps: parse_count(positional.get(1), "STEPS")?,
        json,
    })
}

fn parse_count(arg: Option<&String>, name: &str) -> Result<Option<usize>, String> {
    arg.map(|value| {
        value
            .parse()
            .map_err(|_| format!("Invalid {name} `{value}`, expected a whole number"))
    })
    .transpose()
}

fn build_driver(args: Args) -> Result<Driver, ConfigurationError> {
    let wheel = WheelSimulation::create(args.buckets, None)?;
    Ok(Driver::new(wheel, Config::default()))
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("{USAGE}");
    std::process::exit(1);
}

/// Reads `+` / `-` lines from stdin and forwards them as bucket commands.
fn spawn_input(commands: CommandSender) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            for c in line.chars() {
                let command = match c {
                    '+' => Command::AddBucket,
                    '-' => Command::RemoveBucket,
                    _ => continue,
                };
                if !commands.send(command) {
                    return;
                }
            }
        }
    });
}

fn render(snapshot: &WheelSnapshot) -> String {
    let bars: String = snapshot
        .fills
        .iter()
        .map(|fill| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let level = (fill * 8.0).round().clamp(0.0, 8.0) as usize;
            LEVELS[level]
        })
        .collect();

    format!(
        "θ = {:6.3}  θ' = {:+7.3}  [{bars}]",
        snapshot.theta, snapshot.theta_dot
    )
}

fn is_broken_pipe(err: &(dyn Error + 'static)) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|err| err.kind() == io::ErrorKind::BrokenPipe)
}
