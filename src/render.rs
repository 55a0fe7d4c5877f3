use crate::generator::CARD_LENGTH;
use crate::models::CardRecord;
use std::fmt::Write;

pub const TEST_DATA_MARKER: &str = "TEST DATA - NOT A REAL CARD";
const RULE_WIDTH: usize = 50;

pub fn format_card_number(card_number: &str) -> Result<String, String> {
    if !card_number.chars().all(|ch| ch.is_ascii_digit()) {
        return Err("card number must contain only digits".to_string());
    }
    if card_number.len() != CARD_LENGTH {
        return Err(format!("card number must be exactly {CARD_LENGTH} digits"));
    }

    let groups: Vec<&str> = (0..CARD_LENGTH)
        .step_by(4)
        .map(|start| &card_number[start..start + 4])
        .collect();
    Ok(groups.join(" "))
}

pub fn render_card(record: &CardRecord) -> Result<String, String> {
    let rule = "=".repeat(RULE_WIDTH);
    let grouped = format_card_number(&record.card_number)?;

    let mut out = String::new();
    let lines = [
        rule.clone(),
        "GENERATED CARD DATA".to_string(),
        TEST_DATA_MARKER.to_string(),
        rule.clone(),
        field("BIN", &record.bin),
        field("Card Number", &grouped),
        field("Card Number", &record.card_number),
        field("CVV", &record.cvv),
        field("Expiration", &record.expiration().display()),
        rule,
    ];
    for line in lines {
        writeln!(out, "{line}").map_err(|err| err.to_string())?;
    }
    Ok(out)
}

fn field(label: &str, value: &str) -> String {
    format!("{:<18}{}", format!("{label}:"), value)
}
