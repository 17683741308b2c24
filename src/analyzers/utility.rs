use crate::record::{Gender, Medal};

/// First year of the bundled dataset, used when no year was observed.
pub const FIRST_YEAR: i32 = 1976;
/// Last year of the bundled dataset, used when no year was observed.
pub const LAST_YEAR: i32 = 2008;

/// Percentage of `part` in `total`. Returns 0.0 when `total` is zero.
pub fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Running gold/silver/bronze tally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MedalCounts {
    pub total: usize,
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
}

impl MedalCounts {
    pub fn add(&mut self, medal: Medal) {
        self.total += 1;
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }
}

/// Running male/female tally. Other gender values count towards neither.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}

impl GenderCounts {
    pub fn add(&mut self, gender: &Gender) {
        match gender {
            Gender::Men => self.male += 1,
            Gender::Women => self.female += 1,
            Gender::Other(_) => {}
        }
    }

    pub fn combined(&self) -> usize {
        self.male + self.female
    }

    pub fn male_pct(&self) -> f64 {
        pct(self.male, self.combined())
    }

    pub fn female_pct(&self) -> f64 {
        pct(self.female, self.combined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_with_zero_total() {
        assert_eq!(pct(10, 0), 0.0);
        assert_eq!(pct(0, 0), 0.0);
    }

    #[test]
    fn test_pct_normal_values() {
        assert_eq!(pct(50, 100), 50.0);
        assert_eq!(pct(1, 4), 25.0);
    }

    #[test]
    fn test_medal_counts_sum_to_total() {
        let mut counts = MedalCounts::default();
        for medal in [Medal::Gold, Medal::Gold, Medal::Silver, Medal::Bronze] {
            counts.add(medal);
        }
        assert_eq!(counts.total, 4);
        assert_eq!(counts.gold + counts.silver + counts.bronze, counts.total);
    }

    #[test]
    fn test_gender_counts_ignore_other_values() {
        let mut counts = GenderCounts::default();
        counts.add(&Gender::Men);
        counts.add(&Gender::Other("Mixed".to_string()));
        counts.add(&Gender::Other(String::new()));

        assert_eq!(counts.male, 1);
        assert_eq!(counts.female, 0);
        assert_eq!(counts.male_pct(), 100.0);
        assert_eq!(counts.female_pct(), 0.0);
    }

    #[test]
    fn test_gender_pct_empty_is_zero_not_nan() {
        let counts = GenderCounts::default();
        assert_eq!(counts.male_pct(), 0.0);
        assert!(!counts.female_pct().is_nan());
    }
}
