use hadamard_walk::analytic::hadamard_walk_distribution;
use hadamard_walk::chart::BarChart;
use hadamard_walk::compare::Comparison;
use hadamard_walk::config::WalkConfig;
use hadamard_walk::core::WalkState;
use hadamard_walk::sampling::Sampler;
use hadamard_walk::{Distribution, Result, WalkError};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

/// Allowed total variation, in multiples of the expected shot noise.
const NOISE_MULTIPLE: f64 = 5.0;

fn main() {
    let config = WalkConfig::from_env();

    // A bad config still gets reported through the subscriber
    let level = config.as_ref().map_or(LevelFilter::INFO, |c| c.log_level);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    if let Err(e) = config.and_then(|c| run(&c)) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &WalkConfig) -> Result<()> {
    print_banner();
    info!(steps = config.steps, shots = config.shots, seed = ?config.seed, "starting analysis");

    let theory = closed_form(config)?;
    cross_check(config, &theory)?;
    plot(config, &theory);
    Ok(())
}

fn print_banner() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║        Hadamard Walk Probability Table       ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();
}

fn closed_form(config: &WalkConfig) -> Result<Distribution> {
    println!("━━━ Closed-form distribution ━━━━━━━━━━━━━━━━━━━━");
    let dist = hadamard_walk_distribution(config.steps);
    let total = dist.verify_normalized()?;

    print!("{dist}");
    println!();
    println!("Sum of P(n)   : {total}");
    println!("Mean position : {:.4}", dist.mean());
    println!("Std deviation : {:.4}", dist.variance().sqrt());
    println!();
    Ok(dist)
}

fn cross_check(config: &WalkConfig, theory: &Distribution) -> Result<()> {
    println!("━━━ Coined-walk cross-check ━━━━━━━━━━━━━━━━━━━━━");
    let mut walker = WalkState::new(config.steps);
    walker.run(config.steps)?;
    let evolved = walker.distribution();
    let max_diff = evolved
        .probabilities
        .iter()
        .zip(&theory.probabilities)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("Amplitude evolution vs closed form: max |Δ| = {max_diff:.3e}");

    let mut sampler = match config.seed {
        Some(seed) => Sampler::with_seed(seed),
        None => Sampler::new(),
    };
    let histogram = sampler.sample_counts(&evolved, config.shots)?;
    let comparison = Comparison::between(theory, &histogram)?;

    println!("Sampled measurement vs theory:");
    print!("{}", comparison.report());
    println!();

    let threshold = NOISE_MULTIPLE * comparison.sampling_noise();
    if !comparison.agrees_within(threshold) {
        return Err(WalkError::SimulationMismatch {
            total_variation: comparison.total_variation,
            threshold,
        });
    }
    info!(total_variation = comparison.total_variation, "simulation agrees with theory");
    Ok(())
}

fn plot(config: &WalkConfig, theory: &Distribution) {
    println!("━━━ Probability vs position ━━━━━━━━━━━━━━━━━━━━━");
    let chart = BarChart::new(format!("Hadamard walk, t={}", theory.steps))
        .with_width(config.chart_width);
    print!("{}", chart.render(theory));
}
