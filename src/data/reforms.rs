use crate::simulation::currency::{CurrencyReformEvent, ReformRule};

/// Historical currency reforms in chronological order, none applied yet.
pub fn default_currency_reforms() -> Vec<CurrencyReformEvent> {
    vec![
        CurrencyReformEvent::new(
            1922,
            "Sovznak denomination",
            ReformRule::Denomination { rate: 10_000.0 },
        ),
        CurrencyReformEvent::new(
            1924,
            "Gold chervonets reform",
            ReformRule::Denomination { rate: 50_000.0 },
        ),
        CurrencyReformEvent::new(
            1947,
            "Post-war confiscatory reform",
            ReformRule::Denomination { rate: 10.0 },
        ),
        CurrencyReformEvent::new(
            1961,
            "Khrushchev redenomination",
            ReformRule::Denomination { rate: 10.0 },
        ),
        CurrencyReformEvent::new(
            1991,
            "Pavlov reform",
            ReformRule::ProtectedConfiscation {
                protected_floor: 1_000.0,
                confiscation_rate: 0.5,
            },
        ),
    ]
}
