mod replay;
mod trace;

use std::{path::PathBuf, process};

use anyhow::{bail, Result};
use clap::Parser;
use swipe_gesture::{parse_config_file, GestureConfig};

#[derive(Debug, Parser)]
#[command(name = "gesture_replay")]
#[command(about = "Replay a recorded touch trace through the swipe/fling classifier")]
struct Cli {
    /// CSV trace with `gesture_trace,ms,phase,x,y,width,height` lines
    trace: PathBuf,
    /// Expected event kinds, one per line
    #[arg(long)]
    expect: Option<PathBuf>,
    /// Classifier config (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pixels per device-independent unit
    #[arg(long, default_value_t = 1.0)]
    density: f32,
}

fn main() {
    env_logger::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => parse_config_file(path)?,
        None => GestureConfig::default(),
    };
    log::debug!("replay: {:?}", config);

    let samples = trace::parse_trace(&cli.trace, cli.density)?;
    log::info!(
        "replay: {} samples from {}",
        samples.len(),
        cli.trace.display()
    );
    let records = replay::replay(config, &samples);

    println!("event,ms,kind,delta,start_x,start_y,end_x,end_y");
    for record in &records {
        println!("{}", record.csv_line());
    }

    if let Some(expect_path) = &cli.expect {
        let expected = trace::parse_expected_kinds(expect_path)?;
        let actual: Vec<&'static str> = records.iter().map(|r| r.label()).collect();
        if actual != expected {
            eprintln!("expected kinds: {}", expected.join(","));
            eprintln!("actual kinds:   {}", actual.join(","));
            bail!("event sequence mismatch");
        }
    }

    Ok(())
}
