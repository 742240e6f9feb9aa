//! Customer last-name synthesis.

use crate::random::nurand;
use rand::Rng;

/// Syllables indexed by digit. A last name is three of them.
pub const SYLLABLES: [&str; 10] = [
    "BAR", "OUGHT", "ABLE", "PRI", "PRES", "ESE", "ANTI", "CALLY", "ATION", "EING",
];

/// `A` parameter of the NURand draw used for last names.
pub const LAST_NAME_NURAND_A: u32 = 255;

/// Highest last-name number; names are numbered `0..=999`.
pub const MAX_LAST_NAME_NUMBER: u32 = 999;

/// Build the last name for a number in `0..=999`.
///
/// The hundreds, tens and units digits each select one syllable, so `371`
/// becomes `PRICALLYOUGHT`.
pub fn last_name(number: u32) -> String {
    debug_assert!(number <= MAX_LAST_NAME_NUMBER);

    let mut name = String::with_capacity(15);
    for digit in [number / 100, (number / 10) % 10, number % 10] {
        name.push_str(SYLLABLES[digit as usize]);
    }
    name
}

/// Draw a skewed random last name.
///
/// `c` is the run-time NURand constant for last names.
pub fn random_last_name<R: Rng + ?Sized>(rng: &mut R, c: u32) -> String {
    last_name(nurand(rng, LAST_NAME_NURAND_A, c, 0, MAX_LAST_NAME_NUMBER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_last_name_digits() {
        assert_eq!(last_name(0), "BARBARBAR");
        assert_eq!(last_name(371), "PRICALLYOUGHT");
        assert_eq!(last_name(999), "EINGEINGEING");
        assert_eq!(last_name(40), "BARPRESBAR");
    }

    #[test]
    fn test_random_last_name_is_three_syllables() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1_000 {
            let name = random_last_name(&mut rng, 150);
            let mut rest = name.as_str();
            for _ in 0..3 {
                let syllable = SYLLABLES
                    .iter()
                    .find(|s| rest.starts_with(*s))
                    .unwrap_or_else(|| panic!("{name} does not start with a syllable"));
                rest = &rest[syllable.len()..];
            }
            assert!(rest.is_empty(), "{name} has trailing text");
        }
    }
}
