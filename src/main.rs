use blackjack_ev::cards::{card_symbol, parse_card, CardValue};
use blackjack_ev::rules::{PlayerPolicy, RulesConfig};
use blackjack_ev::simulation::engine::{simulate_ev, EvEstimate, SimError};
use blackjack_ev::simulation::presets::load_presets;
use blackjack_ev::simulation::summary::{filter_by_dealer, PresetResult, ResultsFile};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "blackjack-ev")]
#[command(about = "Blackjack hand EV Monte Carlo simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// First player card
    #[arg(long, default_value = "A")]
    p1: String,

    /// Second player card
    #[arg(long, default_value = "T")]
    p2: String,

    /// Dealer upcard
    #[arg(long, default_value = "9")]
    dealer_up: String,

    #[command(flatten)]
    table: TableArgs,
}

#[derive(Args, Clone)]
struct TableArgs {
    /// Number of trials per hand
    #[arg(short = 'n', long, default_value = "20000")]
    trials: usize,

    /// Number of decks in the shoe
    #[arg(long, default_value = "6")]
    decks: u32,

    /// Dealer stands on soft 17 (hits by default)
    #[arg(long)]
    s17: bool,

    /// Blackjack payout: "3:2" or "6:5"
    #[arg(long, default_value = "3:2")]
    payout: String,

    /// Player strategy
    #[arg(long, default_value = "baseline")]
    policy: String,

    /// Seed for the random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate EV for a single fixed deal (default)
    Run {
        /// First player card
        #[arg(long, default_value = "A")]
        p1: String,

        /// Second player card
        #[arg(long, default_value = "T")]
        p2: String,

        /// Dealer upcard
        #[arg(long, default_value = "9")]
        dealer_up: String,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Run every deal in a preset CSV (columns p1,p2,dealer_up)
    Presets {
        /// Preset file to use
        file: String,

        /// Only report deals against this dealer upcard
        #[arg(long)]
        dealer_up: Option<String>,

        /// Write the full result table to a JSON file
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Estimate EV for one player hand against every dealer upcard
    Sweep {
        /// First player card
        #[arg(long, default_value = "A")]
        p1: String,

        /// Second player card
        #[arg(long, default_value = "T")]
        p2: String,

        #[command(flatten)]
        table: TableArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            p1,
            p2,
            dealer_up,
            table,
        }) => run_hand(&p1, &p2, &dealer_up, &table),
        Some(Commands::Presets {
            file,
            dealer_up,
            output,
            table,
        }) => run_presets(&file, dealer_up.as_deref(), output.as_deref(), &table),
        Some(Commands::Sweep { p1, p2, table }) => run_sweep(&p1, &p2, &table),
        None => run_hand(&cli.p1, &cli.p2, &cli.dealer_up, &cli.table),
    }
}

fn parse_card_or_exit(symbol: &str, what: &str) -> CardValue {
    match parse_card(symbol) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("✗ {}: {}", what, e);
            std::process::exit(1);
        }
    }
}

fn table_setup(table: &TableArgs) -> (RulesConfig, PlayerPolicy) {
    let payout = match table.payout.parse() {
        Ok(payout) => payout,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };
    let policy = match table.policy.parse() {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let rules = RulesConfig {
        n_decks: table.decks,
        dealer_hits_soft_17: !table.s17,
        blackjack_payout: payout,
    };
    if let Err(e) = rules.validate() {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }

    (rules, policy)
}

fn print_rules_line(rules: &RulesConfig) {
    println!(
        "Rules: {} deck(s), {}, blackjack pays {}",
        rules.n_decks,
        if rules.dealer_hits_soft_17 { "H17" } else { "S17" },
        rules.blackjack_payout
    );
}

fn print_estimate(estimate: &EvEstimate) {
    let stats = &estimate.stats;
    let ci_low = estimate.ev - 1.96 * estimate.standard_error;
    let ci_high = estimate.ev + 1.96 * estimate.standard_error;

    println!("EV (per 1 unit bet): {:+.4}", estimate.ev);
    println!("95% CI: [{:+.4}, {:+.4}]", ci_low, ci_high);
    println!();

    if stats.n == 0 {
        return;
    }
    for (label, count) in [
        ("Win", stats.wins),
        ("Push", stats.pushes),
        ("Loss", stats.losses),
    ] {
        let pct = count as f64 / stats.n as f64 * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:5} {:5.1}% {} ({})", label, pct, bar, count);
    }
}

fn run_hand(p1: &str, p2: &str, dealer_up: &str, table: &TableArgs) {
    let p1 = parse_card_or_exit(p1, "player card 1");
    let p2 = parse_card_or_exit(p2, "player card 2");
    let dealer_up = parse_card_or_exit(dealer_up, "dealer upcard");
    let (rules, policy) = table_setup(table);

    println!("\n=== Blackjack EV Monte Carlo ===\n");
    println!(
        "Hand: {} {} vs dealer {}",
        card_symbol(p1),
        card_symbol(p2),
        card_symbol(dealer_up)
    );
    println!("Trials: {}", table.trials);
    print_rules_line(&rules);
    if let Some(s) = table.seed {
        println!("Seed: {}", s);
    }
    println!();

    let start = std::time::Instant::now();
    let estimate = match simulate_ev(p1, p2, dealer_up, table.trials, &rules, policy, table.seed) {
        Ok(estimate) => estimate,
        Err(e) => {
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!("=== Results ===\n");
    print_estimate(&estimate);
    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} trials/sec)",
        elapsed,
        table.trials as f64 / elapsed.as_secs_f64()
    );
}

fn run_presets(file: &str, dealer_filter: Option<&str>, output: Option<&str>, table: &TableArgs) {
    let (rules, policy) = table_setup(table);
    let dealer_filter = dealer_filter.map(|symbol| parse_card_or_exit(symbol, "dealer upcard filter"));

    let presets = match load_presets(file) {
        Ok(presets) => presets,
        Err(e) => {
            eprintln!("✗ Failed to load presets '{}': {}", file, e);
            std::process::exit(1);
        }
    };

    println!("\n=== Blackjack EV Preset Batch ===\n");
    println!("Presets: {} ({} deals)", file, presets.len());
    println!("Trials per deal: {}", table.trials);
    print_rules_line(&rules);
    if let Some(s) = table.seed {
        println!("Seed: {}", s);
    }
    println!();

    let progress = ProgressBar::new(presets.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} deals")
            .expect("valid progress template"),
    );

    let start = std::time::Instant::now();
    // Parallel across deals; derived seeds keep seeded runs reproducible
    let results: Result<Vec<PresetResult>, SimError> = presets
        .par_iter()
        .enumerate()
        .map(|(i, preset)| {
            let seed = table.seed.map(|s| s + i as u64);
            let estimate = simulate_ev(
                preset.p1,
                preset.p2,
                preset.dealer_up,
                table.trials,
                &rules,
                policy,
                seed,
            )?;
            progress.inc(1);
            Ok(PresetResult::new(*preset, &estimate))
        })
        .collect();
    progress.finish_and_clear();
    let elapsed = start.elapsed();

    let results = match results {
        Ok(results) => results,
        Err(e) => {
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    let displayed = match dealer_filter {
        Some(up) => {
            println!("Showing deals against dealer {}\n", card_symbol(up));
            filter_by_dealer(&results, up)
        }
        None => results.clone(),
    };

    println!("=== Results ===\n");
    println!(
        "{:>4} {:>4} {:>7} {:>9} {:>8} {:>7} {:>7} {:>7}",
        "p1", "p2", "dealer", "ev", "se", "win%", "push%", "lose%"
    );
    println!("{:-<60}", "");
    for row in &displayed {
        println!(
            "{:>4} {:>4} {:>7} {:>+9.4} {:>8.4} {:>6.1}% {:>6.1}% {:>6.1}%",
            card_symbol(row.p1),
            card_symbol(row.p2),
            card_symbol(row.dealer_up),
            row.summary.ev,
            row.summary.se,
            row.summary.p_win * 100.0,
            row.summary.p_push * 100.0,
            row.summary.p_lose * 100.0
        );
    }
    if displayed.is_empty() {
        println!("(no deals matched)");
    }

    if let Some(path) = output {
        let file = ResultsFile {
            generated_at: chrono::Local::now().to_rfc3339(),
            trials_per_hand: table.trials,
            rules,
            results,
        };
        match serde_json::to_string_pretty(&file) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => println!("\nResults saved to: {}", path),
                Err(e) => {
                    eprintln!("✗ Failed to write '{}': {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("✗ Failed to serialize results: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!(
        "\nCompleted {} deals in {:.2?}",
        presets.len(),
        elapsed
    );
}

fn run_sweep(p1: &str, p2: &str, table: &TableArgs) {
    let p1 = parse_card_or_exit(p1, "player card 1");
    let p2 = parse_card_or_exit(p2, "player card 2");
    let (rules, policy) = table_setup(table);

    println!("\n=== Blackjack EV Dealer Sweep ===\n");
    println!("Hand: {} {}", card_symbol(p1), card_symbol(p2));
    println!("Trials per upcard: {}", table.trials);
    print_rules_line(&rules);
    if let Some(s) = table.seed {
        println!("Seed: {}", s);
    }
    println!();

    let upcards: Vec<CardValue> = vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

    let start = std::time::Instant::now();
    let estimates: Result<Vec<EvEstimate>, _> = upcards
        .par_iter()
        .enumerate()
        .map(|(i, &up)| {
            let seed = table.seed.map(|s| s + i as u64);
            simulate_ev(p1, p2, up, table.trials, &rules, policy, seed)
        })
        .collect();
    let elapsed = start.elapsed();

    let estimates = match estimates {
        Ok(estimates) => estimates,
        Err(e) => {
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("EV by dealer upcard:");
    for (up, estimate) in upcards.iter().zip(&estimates) {
        let bar = "█".repeat((estimate.ev.abs() * 30.0) as usize);
        println!(
            "  {:>2}: {:+.4} ± {:.4} {}",
            card_symbol(*up),
            estimate.ev,
            estimate.standard_error,
            bar
        );
    }

    println!(
        "\nCompleted {} upcards in {:.2?}",
        upcards.len(),
        elapsed
    );
}
