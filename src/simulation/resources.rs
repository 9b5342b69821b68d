use std::fmt;

use serde::{Deserialize, Serialize};

/// Resources that move between the settlement and the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Food,
    Vodka,
    Money,
    Steel,
    Timber,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Food,
        ResourceKind::Vodka,
        ResourceKind::Money,
        ResourceKind::Steel,
        ResourceKind::Timber,
    ];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Food => "food",
            ResourceKind::Vodka => "vodka",
            ResourceKind::Money => "money",
            ResourceKind::Steel => "steel",
            ResourceKind::Timber => "timber",
        };
        write!(f, "{}", label)
    }
}

/// Fixed-key amounts of every transferable resource. The zero bundle is the accumulation identity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub food: f64,
    pub vodka: f64,
    pub money: f64,
    pub steel: f64,
    pub timber: f64,
}

impl ResourceBundle {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Vodka => self.vodka,
            ResourceKind::Money => self.money,
            ResourceKind::Steel => self.steel,
            ResourceKind::Timber => self.timber,
        }
    }

    pub fn set(&mut self, kind: ResourceKind, value: f64) {
        match kind {
            ResourceKind::Food => self.food = value,
            ResourceKind::Vodka => self.vodka = value,
            ResourceKind::Money => self.money = value,
            ResourceKind::Steel => self.steel = value,
            ResourceKind::Timber => self.timber = value,
        }
    }

    pub fn add(self, other: ResourceBundle) -> Self {
        Self {
            food: self.food + other.food,
            vodka: self.vodka + other.vodka,
            money: self.money + other.money,
            steel: self.steel + other.steel,
            timber: self.timber + other.timber,
        }
    }

    pub fn is_zero(&self) -> bool {
        ResourceKind::ALL.iter().all(|kind| self.get(*kind) == 0.0)
    }
}

/// Share of a surplus handed out to the collective; the rest is held in reserve.
pub const REMAINDER_DISTRIBUTION_SHARE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemainderAllocation {
    pub distributed: ResourceBundle,
    pub reserved: ResourceBundle,
}

/// Splits a surplus so that `distributed + reserved == surplus` for every key.
pub fn allocate_remainder(surplus: &ResourceBundle) -> RemainderAllocation {
    let mut distributed = ResourceBundle::zero();
    let mut reserved = ResourceBundle::zero();
    for kind in ResourceKind::ALL {
        let amount = surplus.get(kind);
        let handed_out = (amount * REMAINDER_DISTRIBUTION_SHARE).round();
        distributed.set(kind, handed_out);
        reserved.set(kind, amount - handed_out);
    }
    RemainderAllocation {
        distributed,
        reserved,
    }
}
