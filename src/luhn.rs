pub fn digits(input: &str) -> Option<Vec<u8>> {
    input
        .chars()
        .map(|ch| ch.to_digit(10).map(|d| d as u8))
        .collect()
}

// the rightmost digit of `partial` sits next to the check digit, so it is doubled first
pub fn check_digit(partial: &[u8]) -> u8 {
    let sum = weighted_sum(partial.iter().rev(), true);
    ((10 - (sum % 10)) % 10) as u8
}

pub fn is_valid(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }
    match digits(number) {
        Some(values) => weighted_sum(values.iter().rev(), false) % 10 == 0,
        None => false,
    }
}

fn weighted_sum<'a, I>(from_right: I, double_first: bool) -> u32
where
    I: Iterator<Item = &'a u8>,
{
    let mut total = 0u32;
    let mut double = double_first;
    for &digit in from_right {
        let mut value = u32::from(digit);
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        total += value;
        double = !double;
    }
    total
}
