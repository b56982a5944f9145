//! Headless descent simulator CLI.
//!
//! Auto-plays full runs against the builtin content set: select an event,
//! take the first eligible choice, descend, repeat. Useful for balance
//! sweeps and for replaying a reported seed.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 10 runs to depth 20
//!   cargo run --bin simulate -- -n 100 -d 30     # 100 runs to depth 30
//!   cargo run --bin simulate -- --seed 42 -v     # Reproducible, narrated

use delve::build_info;
use delve::content::registry::ContentRegistry;
use delve::core::config::EngineConfig;
use delve::events::resolver::{best_choice, resolve_ability, resolve_choice};
use delve::events::selection::select_event;
use delve::party::class::HeroClass;
use delve::party::hero::Hero;
use delve::party::types::Party;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use tracing_subscriber::EnvFilter;

struct SimConfig {
    runs: u32,
    target_depth: u32,
    seed: Option<u64>,
    verbose: bool,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            target_depth: 20,
            seed: None,
            verbose: false,
            quiet: false,
        }
    }
}

struct RunReport {
    events_resolved: u32,
    wipes: u32,
    final_gold: u64,
    mean_level: f64,
    items_held: usize,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    let default_filter = if config.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                   DELVE DESCENT SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("{}", build_info::banner());
    println!();

    let registry = ContentRegistry::builtin().expect("builtin content must validate");
    let engine = EngineConfig::default();
    let base_seed = config.seed.unwrap_or_else(rand::random);

    println!("Configuration:");
    println!("  Runs:          {}", config.runs);
    println!("  Target depth:  {}", config.target_depth);
    println!("  Base seed:     {}", base_seed);
    println!();

    let mut reports = Vec::new();
    for run in 0..config.runs {
        let seed = base_seed.wrapping_add(u64::from(run));
        if config.verbose {
            println!("--- run {} (seed {}) ---", run + 1, seed);
        }
        reports.push(run_descent(
            &registry,
            &engine,
            seed,
            config.target_depth,
            config.verbose,
        ));
    }

    print_summary(&config, &reports);
}

/// A fresh four-hero party with every ability its classes can learn.
fn starting_party(registry: &ContentRegistry) -> Party {
    let roster = [
        ("Brand", HeroClass::Warrior),
        ("Lyra", HeroClass::Mage),
        ("Sera", HeroClass::Cleric),
        ("Pike", HeroClass::Rogue),
    ];
    let mut heroes = Vec::new();
    for (name, class) in roster {
        let mut hero = Hero::new(name, class);
        for ability in registry.abilities_for_class(class) {
            hero.learn_ability(ability.id.as_str());
        }
        heroes.push(hero);
    }
    Party::new(heroes)
}

/// When someone is badly hurt, let each hero fire one ready ability.
/// Failed casts (unmet requirements) are simply skipped.
fn cast_ready_abilities(
    party: &mut Party,
    registry: &ContentRegistry,
    engine: &EngineConfig,
    rng: &mut StdRng,
    verbose: bool,
) {
    let wounded = party
        .heroes
        .iter()
        .any(|hero| hero.alive && hero.hp_fraction() < 0.5);
    if !wounded {
        return;
    }
    for slot in 0..party.heroes.len() {
        if !party.heroes[slot].alive {
            continue;
        }
        for ability_index in 0..party.heroes[slot].abilities.len() {
            if party.heroes[slot].abilities[ability_index].cooldown_remaining > 0 {
                continue;
            }
            if let Ok(resolution) =
                resolve_ability(party, slot, ability_index, registry, engine, rng)
            {
                if verbose {
                    println!("    {}", resolution.outcome_text);
                    for line in &resolution.log {
                        println!("      {}", line);
                    }
                }
                break;
            }
        }
    }
}

fn run_descent(
    registry: &ContentRegistry,
    engine: &EngineConfig,
    seed: u64,
    target_depth: u32,
    verbose: bool,
) -> RunReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut party = starting_party(registry);
    let mut events_resolved = 0;
    let mut wipes = 0;

    while party.depth < target_depth {
        cast_ready_abilities(&mut party, registry, engine, &mut rng, verbose);

        match select_event(registry, &party, &mut rng) {
            Ok(event) => {
                if let Some(index) = best_choice(event, &party, engine) {
                    let resolution =
                        resolve_choice(event, index, &mut party, registry, engine, &mut rng)
                            .expect("an eligible choice must resolve");
                    events_resolved += 1;
                    if resolution.party_wiped {
                        wipes += 1;
                    }
                    if verbose {
                        println!(
                            "[depth {}] {}: {}",
                            party.depth, event.title, resolution.outcome_text
                        );
                        for line in &resolution.log {
                            println!("    {}", line);
                        }
                    }
                } else if verbose {
                    println!(
                        "[depth {}] {}: no choice was open to the party",
                        party.depth, event.title
                    );
                }
            }
            Err(err) => {
                eprintln!("stopping run: {err}");
                break;
            }
        }
        party.descend();
    }

    let mean_level = party
        .heroes
        .iter()
        .map(|hero| f64::from(hero.level))
        .sum::<f64>()
        / party.heroes.len() as f64;
    let items_held = party
        .heroes
        .iter()
        .map(|hero| hero.equipment.count())
        .sum::<usize>()
        + party.inventory.len();

    RunReport {
        events_resolved,
        wipes,
        final_gold: party.gold,
        mean_level,
        items_held,
    }
}

fn print_summary(config: &SimConfig, reports: &[RunReport]) {
    let runs = reports.len() as f64;
    let total_events: u32 = reports.iter().map(|r| r.events_resolved).sum();
    let total_wipes: u32 = reports.iter().map(|r| r.wipes).sum();
    let mean_gold = reports.iter().map(|r| r.final_gold as f64).sum::<f64>() / runs;
    let mean_level = reports.iter().map(|r| r.mean_level).sum::<f64>() / runs;
    let mean_items = reports.iter().map(|r| r.items_held as f64).sum::<f64>() / runs;

    println!();
    println!(
        "Results over {} runs to depth {}:",
        config.runs, config.target_depth
    );
    println!(
        "  Events resolved:  {} total ({:.1} per run)",
        total_events,
        f64::from(total_events) / runs
    );
    println!("  Party wipes:      {}", total_wipes);
    println!("  Mean hero level:  {:.1}", mean_level);
    println!("  Mean gold:        {:.0}", mean_gold);
    println!("  Mean items held:  {:.1}", mean_items);
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.runs = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-d" | "--depths" => {
                if i + 1 < args.len() {
                    config.target_depth = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbose = true;
            }
            "-q" | "--quiet" => {
                config.quiet = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Delve Descent Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of runs (default: 10)");
    println!("    -d, --depths <D>     Target depth per run (default: 20)");
    println!("    -s, --seed <S>       Base seed for reproducibility");
    println!("    -v, --verbose        Narrate every event and effect");
    println!("    -q, --quiet          Only warnings from the engine log");
    println!("    -h, --help           Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default sweep");
    println!("    cargo run --bin simulate -- -n 100 -d 30     # Longer sweep");
    println!("    cargo run --bin simulate -- --seed 42 -v     # Replay one run");
}
