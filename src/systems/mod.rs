pub mod economy;

pub use economy::{
    compulsory_delivery_system, economy_tick_system, EconomyEventLog, LastDeliveryReport,
    LastEconomyTick,
};
