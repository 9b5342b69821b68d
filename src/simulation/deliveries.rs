use bevy_ecs::prelude::*;
use bevy_utils::tracing::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::doctrines::{DeliveryRates, Doctrine, CORRUPTION_RATE_MAX, CORRUPTION_RATE_MIN};

/// Amounts handed to the state over the lifetime of the current totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeliveryTotals {
    pub food: f64,
    pub vodka: f64,
    pub money: f64,
    pub corruption_loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeliveryResult {
    pub food_taken: f64,
    pub vodka_taken: f64,
    pub money_taken: f64,
    /// Food skimmed above the official rate.
    pub corruption_loss: f64,
    pub total_food_remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompulsoryDeliverySave {
    pub doctrine: Doctrine,
    pub totals: DeliveryTotals,
    pub corruption_rate: f64,
}

/// Compulsory extraction: the state's share of each tick's production.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CompulsoryDeliveries {
    doctrine: Doctrine,
    rates: DeliveryRates,
    corruption_rate: f64,
    totals: DeliveryTotals,
}

impl CompulsoryDeliveries {
    /// Entering stagnation draws the corruption rate, so construction takes the generator.
    pub fn new<R: Rng + ?Sized>(doctrine: Doctrine, rng: &mut R) -> Self {
        let mut deliveries = Self {
            doctrine,
            rates: doctrine.delivery_rates(),
            corruption_rate: 0.0,
            totals: DeliveryTotals::default(),
        };
        deliveries.corruption_rate = draw_corruption_rate(doctrine, rng);
        deliveries
    }

    pub fn doctrine(&self) -> Doctrine {
        self.doctrine
    }

    pub fn rates(&self) -> DeliveryRates {
        self.rates
    }

    pub fn corruption_rate(&self) -> f64 {
        self.corruption_rate
    }

    pub fn totals(&self) -> DeliveryTotals {
        self.totals
    }

    /// Corruption is drawn once per activation; re-selecting the active doctrine keeps it.
    pub fn set_doctrine<R: Rng + ?Sized>(&mut self, doctrine: Doctrine, rng: &mut R) {
        if doctrine == self.doctrine {
            return;
        }
        info!("compulsory deliveries: doctrine {} -> {}", self.doctrine, doctrine);
        self.doctrine = doctrine;
        self.rates = doctrine.delivery_rates();
        self.corruption_rate = draw_corruption_rate(doctrine, rng);
    }

    pub fn apply_deliveries(&mut self, food: f64, vodka: f64, money: f64) -> DeliveryResult {
        let food = food.max(0.0);
        let vodka = vodka.max(0.0);
        let money = money.max(0.0);

        let surcharge = if self.doctrine.has_corruption() {
            1.0 + self.corruption_rate
        } else {
            1.0
        };
        let base_food = food * self.rates.food;
        let food_taken = (base_food * surcharge).min(food);
        let vodka_taken = (vodka * self.rates.vodka * surcharge).min(vodka);
        let money_taken = (money * self.rates.money * surcharge).min(money);
        let corruption_loss = food_taken - base_food;

        self.totals.food += food_taken;
        self.totals.vodka += vodka_taken;
        self.totals.money += money_taken;
        self.totals.corruption_loss += corruption_loss;

        DeliveryResult {
            food_taken,
            vodka_taken,
            money_taken,
            corruption_loss,
            total_food_remaining: food - food_taken,
        }
    }

    pub fn reset_totals(&mut self) {
        self.totals = DeliveryTotals::default();
    }

    pub fn serialize(&self) -> CompulsoryDeliverySave {
        CompulsoryDeliverySave {
            doctrine: self.doctrine,
            totals: self.totals,
            corruption_rate: self.corruption_rate,
        }
    }

    /// Restores the exact corruption rate that was drawn; no generator is needed.
    pub fn deserialize(save: &CompulsoryDeliverySave) -> Self {
        Self {
            doctrine: save.doctrine,
            rates: save.doctrine.delivery_rates(),
            corruption_rate: save.corruption_rate,
            totals: save.totals,
        }
    }
}

fn draw_corruption_rate<R: Rng + ?Sized>(doctrine: Doctrine, rng: &mut R) -> f64 {
    if !doctrine.has_corruption() {
        return 0.0;
    }
    let spread: f64 = rng.random();
    CORRUPTION_RATE_MIN + spread * (CORRUPTION_RATE_MAX - CORRUPTION_RATE_MIN)
}
