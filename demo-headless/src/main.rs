use chrono::{DateTime, Utc};
use clap::Parser;
use firefront_core::{
    Degrees, EchoPlume, FireSimulation, MetersPerSecond, PlumeModel, SimulationConfig,
    SyntheticWeather, Vec2, WindSample, WindTriangle,
};
use tracing_subscriber::EnvFilter;

/// Fire perimeter simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "firefront-demo")]
#[command(about = "Wildfire perimeter and smoke plume simulation demo", long_about = None)]
struct Args {
    /// Ignition longitude in degrees
    #[arg(long, default_value_t = -118.2)]
    lon: f64,

    /// Ignition latitude in degrees
    #[arg(long, default_value_t = 34.05)]
    lat: f64,

    /// Simulation start time, RFC 3339 (defaults to now)
    #[arg(long)]
    start_time: Option<DateTime<Utc>>,

    /// Simulation duration in hours
    #[arg(short, long, default_value_t = 24)]
    duration: u32,

    /// Time step in minutes
    #[arg(long, default_value_t = 30)]
    step_minutes: u32,

    /// Initial wind speed in m/s
    #[arg(short, long, default_value_t = 10.0)]
    wind_speed: f64,

    /// Initial wind direction in degrees (0=North, 90=East)
    #[arg(long, default_value_t = 90.0)]
    wind_direction: f64,

    /// Seed for the synthetic weather series
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Seed an initial square perimeter with this half-size in degrees
    /// (0 = point ignition)
    #[arg(long, default_value_t = 0.0)]
    square: f64,

    /// Echo the initial boundary as the smoke plume instead of the
    /// wind-extruded triangle
    #[arg(long)]
    echo_plume: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = SimulationConfig::new(
        Vec2::new(args.lon, args.lat),
        args.start_time.unwrap_or_else(Utc::now),
        WindSample::new(
            MetersPerSecond::new(args.wind_speed),
            Degrees::new(args.wind_direction),
        ),
    );
    config.duration_hours = args.duration;
    config.time_step_minutes = args.step_minutes;
    if args.square > 0.0 {
        let h = args.square;
        config.initial_polygon = vec![
            Vec2::new(args.lon - h, args.lat - h),
            Vec2::new(args.lon - h, args.lat + h),
            Vec2::new(args.lon + h, args.lat + h),
            Vec2::new(args.lon + h, args.lat - h),
        ];
    }

    let weather = SyntheticWeather::new(config.initial_wind, args.seed);
    let echo = EchoPlume;
    let triangle = WindTriangle::default();
    let plume: &dyn PlumeModel = if args.echo_plume { &echo } else { &triangle };

    let records = match FireSimulation::new(config, &weather, plume).run() {
        Ok(records) => records,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            std::process::exit(1);
        }
    };

    let json = serde_json::to_string_pretty(&records).expect("simulation records serialize");
    println!("{json}");
}
