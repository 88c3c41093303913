/// Default dimension weights. Subject and level carry the most signal, so a
/// single full-weight dimension already clears the recommendation floor.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    subject: 30,
    level: 30,
    location: 20,
    rate: 20,
};

/// Points awarded per matched dimension. Each dimension is independently
/// capped by its weight; the total score is their plain sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub subject: u32,
    pub level: u32,
    pub location: u32,
    pub rate: u32,
}

impl Weights {
    pub fn sum(&self) -> u32 {
        self.subject + self.level + self.location + self.rate
    }
}
