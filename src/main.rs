use std::path::Path;

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use tracing_subscriber::EnvFilter;

use streamplot::persistence::load_state_from_path;
use streamplot::{run_streamplot, SignalProfile, StreamPlotConfig};

fn cli() -> App<'static, 'static> {
    App::new("streamplot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Stream a noisy sine wave and its rolling average to a live plot")
        .arg(
            Arg::with_name("noise-only")
                .long("noise-only")
                .help("Generate only the noise component (no sine)"),
        )
        .arg(
            Arg::with_name("state")
                .long("state")
                .value_name("FILE")
                .takes_value(true)
                .help("Load parameters and line styles from a saved JSON state"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("N")
                .takes_value(true)
                .help("Seed the noise generator for a reproducible stream"),
        )
        .arg(
            Arg::with_name("capacity")
                .long("capacity")
                .value_name("SAMPLES")
                .takes_value(true)
                .help("Rolling window length in samples"),
        )
        .arg(
            Arg::with_name("delay-ms")
                .long("delay-ms")
                .value_name("MS")
                .takes_value(true)
                .help("Delay between two samples in milliseconds"),
        )
        .arg(
            Arg::with_name("paused")
                .long("paused")
                .help("Start with streaming paused"),
        )
}

fn parse_opt<T>(cl: &ArgMatches, name: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    cl.value_of(name)
        .map(|v| v.parse::<T>().with_context(|| format!("invalid --{name} value '{v}'")))
        .transpose()
}

fn config_from_cl(cl: &ArgMatches) -> anyhow::Result<StreamPlotConfig> {
    let mut cfg = StreamPlotConfig {
        title: "Streaming noisy sine".to_string(),
        ..Default::default()
    };
    if let Some(path) = cl.value_of("state") {
        let state = load_state_from_path(Path::new(path))
            .with_context(|| format!("cannot load state from '{path}'"))?;
        cfg.apply_state(state);
    }
    if cl.is_present("noise-only") {
        cfg.params.profile = SignalProfile::NoiseOnly;
    }
    if let Some(capacity) = parse_opt(cl, "capacity")? {
        cfg.params.capacity = capacity;
    }
    if let Some(delay) = parse_opt(cl, "delay-ms")? {
        cfg.params.update_delay_ms = delay;
    }
    cfg.rng_seed = parse_opt(cl, "seed")?;
    if cl.is_present("paused") {
        cfg.start_paused = true;
    }
    cfg.params.validate()?;
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cl = cli().get_matches();
    let cfg = config_from_cl(&cl)?;
    tracing::info!(params = ?cfg.params, "starting stream plot");
    run_streamplot(cfg).map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
