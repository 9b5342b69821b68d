pub mod blat;
pub mod currency;
pub mod deliveries;
pub mod economy;
pub mod fondy;
pub mod heating;
pub mod mts;
pub mod quota;
pub mod rations;
pub mod resources;
pub mod settlement;
pub mod stakhanovite;
pub mod time;
pub mod trudodni;

pub use blat::{BlatPurpose, BlatSpendOutcome, BlatState};
pub use currency::{
    apply_currency_reform, find_pending_reform, CurrencyReformEvent, CurrencyReformResult,
    ReformRule,
};
pub use deliveries::{CompulsoryDeliveries, CompulsoryDeliverySave, DeliveryResult, DeliveryTotals};
pub use economy::{
    BuildingSnapshot, EconomySaveData, EconomySystem, EconomyTickResult, TickContext,
};
pub use fondy::{FondyOutcome, FondyState};
pub use heating::{determine_heating_tier, HeatingResult, HeatingState};
pub use mts::{MtsOutcome, MtsState};
pub use quota::{calculate_next_quota, falsification_risk};
pub use rations::{calculate_ration_demand, should_rations_be_active, RationConfig, RationDemand};
pub use resources::{allocate_remainder, RemainderAllocation, ResourceBundle, ResourceKind};
pub use stakhanovite::{check_stakhanovite, StakhanoviteEvent};
pub use settlement::Settlement;
pub use time::EconomyClock;
pub use trudodni::{calculate_building_trudodni, GridKey, TrudodniRecord};
