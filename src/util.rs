use rand::Rng;

pub fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(0..10)
}

pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(digit_char(random_digit(rng)));
    }
    out
}

pub fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit % 10)
}

pub fn strip_spaces(input: &str) -> String {
    input.chars().filter(|ch| !ch.is_whitespace()).collect()
}
