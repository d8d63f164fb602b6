use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Feed allowance for breeds without an entry in [`BREED_FACTORS`], kg per bird per day
pub const DEFAULT_FEED_PER_BIRD_KG: Decimal = dec!(0.11);

/// Production ratios used when a batch is first recorded.
pub struct BreedFactor {
    pub breed: &'static str,
    /// Share of birds laying on an average day
    pub lay_factor: Decimal,
    /// Feed per bird per day, in kg
    pub feed_per_bird_kg: Decimal,
}

pub const BREED_FACTORS: &[BreedFactor] = &[
    BreedFactor {
        breed: "layer",
        lay_factor: dec!(0.85),
        feed_per_bird_kg: dec!(0.12),
    },
    BreedFactor {
        breed: "broiler",
        lay_factor: dec!(0),
        feed_per_bird_kg: dec!(0.15),
    },
    BreedFactor {
        breed: "noiler",
        lay_factor: dec!(0.55),
        feed_per_bird_kg: dec!(0.11),
    },
    BreedFactor {
        breed: "kuroiler",
        lay_factor: dec!(0.60),
        feed_per_bird_kg: dec!(0.12),
    },
    BreedFactor {
        breed: "local",
        lay_factor: dec!(0.40),
        feed_per_bird_kg: dec!(0.09),
    },
];

/// Looks up the production ratios for a breed, ignoring case and surrounding whitespace.
pub fn breed_factor(breed: &str) -> Option<&'static BreedFactor> {
    let breed = breed.trim();
    BREED_FACTORS
        .iter()
        .find(|factor| factor.breed.eq_ignore_ascii_case(breed))
}
