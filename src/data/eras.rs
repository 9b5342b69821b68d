use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::doctrines::Doctrine;
use crate::simulation::resources::ResourceBundle;

/// Historical period of the game. Selects the fondy template and quota escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Revolution,
    Industrialization,
    GreatPatriotic,
    Reconstruction,
    Thaw,
    Freeze,
    Stagnation,
    Eternal,
}

impl Default for Era {
    fn default() -> Self {
        Era::Revolution
    }
}

/// Template for state deliveries during one era.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FondyAllocation {
    pub allocated: ResourceBundle,
    /// Probability that a scheduled delivery arrives at all.
    pub reliability: f64,
    pub interval_ticks: u64,
}

impl Era {
    pub const ALL: [Era; 8] = [
        Era::Revolution,
        Era::Industrialization,
        Era::GreatPatriotic,
        Era::Reconstruction,
        Era::Thaw,
        Era::Freeze,
        Era::Stagnation,
        Era::Eternal,
    ];

    pub fn start_year(self) -> i32 {
        match self {
            Era::Revolution => 1917,
            Era::Industrialization => 1928,
            Era::GreatPatriotic => 1941,
            Era::Reconstruction => 1945,
            Era::Thaw => 1956,
            Era::Freeze => 1964,
            Era::Stagnation => 1970,
            Era::Eternal => 1985,
        }
    }

    /// Latest era whose start year is at or before `year`. Years before 1917 map to the revolution.
    pub fn for_year(year: i32) -> Era {
        Era::ALL
            .into_iter()
            .rev()
            .find(|era| era.start_year() <= year)
            .unwrap_or(Era::Revolution)
    }

    pub fn doctrine(self) -> Doctrine {
        match self {
            Era::Revolution => Doctrine::Revolutionary,
            Era::Industrialization => Doctrine::Industrialization,
            Era::GreatPatriotic => Doctrine::Wartime,
            Era::Reconstruction => Doctrine::Reconstruction,
            Era::Thaw => Doctrine::Thaw,
            Era::Freeze => Doctrine::Freeze,
            Era::Stagnation => Doctrine::Stagnation,
            Era::Eternal => Doctrine::Eternal,
        }
    }

    pub fn escalation_factor(self) -> f64 {
        match self {
            Era::Revolution => 1.0,
            Era::Industrialization => 1.25,
            Era::GreatPatriotic => 1.3,
            Era::Reconstruction => 1.1,
            Era::Thaw => 1.0,
            Era::Freeze => 1.05,
            Era::Stagnation => 1.02,
            Era::Eternal => 1.0,
        }
    }

    pub fn fondy_allocation(self) -> FondyAllocation {
        let (food, vodka, money, steel, timber, reliability, interval_ticks) = match self {
            Era::Revolution => (20.0, 5.0, 50.0, 5.0, 10.0, 0.4, 90),
            Era::Industrialization => (40.0, 10.0, 120.0, 30.0, 30.0, 0.6, 60),
            Era::GreatPatriotic => (15.0, 10.0, 40.0, 20.0, 10.0, 0.3, 120),
            Era::Reconstruction => (35.0, 12.0, 100.0, 40.0, 40.0, 0.5, 90),
            Era::Thaw => (50.0, 20.0, 150.0, 30.0, 30.0, 0.7, 60),
            Era::Freeze => (45.0, 20.0, 130.0, 25.0, 25.0, 0.65, 60),
            Era::Stagnation => (45.0, 30.0, 130.0, 25.0, 25.0, 0.55, 60),
            Era::Eternal => (40.0, 20.0, 100.0, 20.0, 20.0, 0.5, 90),
        };
        FondyAllocation {
            allocated: ResourceBundle {
                food,
                vodka,
                money,
                steel,
                timber,
            },
            reliability,
            interval_ticks,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Era::Revolution => "Revolution",
            Era::Industrialization => "Industrialization",
            Era::GreatPatriotic => "Great Patriotic War",
            Era::Reconstruction => "Reconstruction",
            Era::Thaw => "Thaw",
            Era::Freeze => "Freeze",
            Era::Stagnation => "Stagnation",
            Era::Eternal => "Eternal",
        };
        write!(f, "{}", label)
    }
}
