use crate::luhn;
use crate::models::{CardRecord, Expiration};
use crate::prefix::{Prefix, BIN_LENGTH};
use crate::util::{digit_char, random_digit, random_digits};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const CARD_LENGTH: usize = 16;
pub const FILLER_LENGTH: usize = CARD_LENGTH - BIN_LENGTH - 1;
pub const CVV_LENGTH: usize = 3;
pub const DEFAULT_YEARS_AHEAD: u32 = 3;
pub const MAX_YEARS_AHEAD: u32 = 10;
pub const MAX_COUNT: usize = 100_000;

pub struct GeneratorConfig {
    pub count: usize,
    pub years_ahead: u32,
    pub current_year: i32,
}

pub fn generate_records(
    config: &GeneratorConfig,
    prefix: &Prefix,
    seed: u64,
) -> Result<Vec<CardRecord>, String> {
    validate_config(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut records = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        records.push(generate_card(
            &mut rng,
            prefix,
            config.current_year,
            config.years_ahead,
        ));
    }
    log::debug!(
        "generated {} card(s) for BIN {} (seed {})",
        records.len(),
        prefix,
        seed
    );
    Ok(records)
}

pub fn validate_config(config: &GeneratorConfig) -> Result<(), String> {
    if !(1..=MAX_COUNT).contains(&config.count) {
        return Err(format!("count must be 1..{MAX_COUNT}"));
    }
    if !(1..=MAX_YEARS_AHEAD).contains(&config.years_ahead) {
        return Err(format!("years_ahead must be 1..{MAX_YEARS_AHEAD}"));
    }
    Ok(())
}

pub fn generate_card<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: &Prefix,
    current_year: i32,
    years_ahead: u32,
) -> CardRecord {
    let card_number = synthesize_card_number(rng, prefix);
    let cvv = generate_cvv(rng);
    let expiration = generate_expiration(rng, current_year, years_ahead);
    log::debug!("CVV {} expiration {}", cvv, expiration.display());

    CardRecord {
        bin: prefix.as_str().to_string(),
        card_number,
        cvv,
        month: expiration.month,
        year: expiration.year,
    }
}

pub fn synthesize_card_number<R: Rng + ?Sized>(rng: &mut R, prefix: &Prefix) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(CARD_LENGTH);
    digits.extend(prefix.digits());
    for _ in 0..FILLER_LENGTH {
        digits.push(random_digit(rng));
    }
    digits.push(luhn::check_digit(&digits));

    digits.into_iter().map(digit_char).collect()
}

pub fn generate_cvv<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_digits(rng, CVV_LENGTH)
}

// years_ahead >= 1, so every month lies in the future
pub fn generate_expiration<R: Rng + ?Sized>(
    rng: &mut R,
    current_year: i32,
    years_ahead: u32,
) -> Expiration {
    Expiration {
        month: rng.gen_range(1..=12),
        year: current_year + years_ahead as i32,
    }
}
