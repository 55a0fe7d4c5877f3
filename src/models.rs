use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiration {
    pub month: u32,
    pub year: i32,
}

impl Expiration {
    pub fn short_year(&self) -> i32 {
        self.year.rem_euclid(100)
    }

    pub fn display(&self) -> String {
        format!("{:02}/{:02}", self.month, self.short_year())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardRecord {
    pub bin: String,
    pub card_number: String,
    pub cvv: String,
    pub month: u32,
    pub year: i32,
}

impl CardRecord {
    pub fn expiration(&self) -> Expiration {
        Expiration {
            month: self.month,
            year: self.year,
        }
    }
}
