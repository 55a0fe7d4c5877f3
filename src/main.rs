mod generator;
mod logging;
mod luhn;
mod models;
mod prefix;
mod prompt;
mod render;
mod util;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use generator::{generate_records, validate_config, GeneratorConfig, DEFAULT_YEARS_AHEAD};
use models::CardRecord;
use prefix::Prefix;
use prompt::{collect_prefix, validate_max_attempts, DEFAULT_MAX_ATTEMPTS};
use rand::Rng;
use std::fs::create_dir_all;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ccgen-demo")]
#[command(about = "Synthetic Luhn-valid test card generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Check(CheckArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long)]
    bin: Option<String>,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_YEARS_AHEAD)]
    years_ahead: u32,
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct CheckArgs {
    number: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("ccgen-demo")?;
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Check(args) => run_check(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let config = GeneratorConfig {
        count: args.count,
        years_ahead: args.years_ahead,
        current_year: chrono::Local::now().year(),
    };
    // reject bad flags before prompting for a BIN
    validate_config(&config)?;
    validate_max_attempts(args.max_attempts)?;

    let prefix = resolve_prefix(args.bin.as_deref(), args.max_attempts)?;
    let seed = args.seed.unwrap_or_else(random_seed);

    log::info!(
        "Generating {} card(s) for BIN {} (seed {}, expiry +{}y)",
        config.count,
        prefix,
        seed,
        config.years_ahead
    );
    let gen_start = Instant::now();
    let records = generate_records(&config, &prefix, seed)?;
    let gen_elapsed = gen_start.elapsed();

    for record in &records {
        if !luhn::is_valid(&record.card_number) {
            log::error!("Generated card failed Luhn validation: {}", record.card_number);
            return Err("generated card failed Luhn validation".to_string());
        }
    }

    match args.output {
        Some(path) => {
            write_csv(&path, &records)?;
            emit_info_line(&format!(
                "Wrote {} card(s) to {}",
                records.len(),
                path.display()
            ));
        }
        None => {
            for record in &records {
                print!("{}", render::render_card(record)?);
            }
        }
    }

    log::info!("Successfully generated {} card(s)", records.len());
    emit_info_line(&format!(
        "Generation time: {} ms",
        gen_elapsed.as_millis()
    ));
    Ok(())
}

fn resolve_prefix(bin: Option<&str>, max_attempts: usize) -> Result<Prefix, String> {
    match bin {
        Some(raw) => Prefix::parse(raw.trim()).map_err(|err| format!("invalid BIN: {err}")),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            collect_prefix(&mut stdin.lock(), &mut stdout.lock(), max_attempts)
        }
    }
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let number = util::strip_spaces(&args.number);
    if luhn::is_valid(&number) {
        println!("{number}: valid");
        Ok(())
    } else {
        Err(format!("{number}: fails Luhn check"))
    }
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn write_csv(output: &Path, records: &[CardRecord]) -> Result<(), String> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|err| err.to_string())?;
        }
    }
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    for record in records {
        writer.serialize(record).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        eprintln!("{message}");
    }
}
