use planned_economy::core::serialization::{decode_save, encode_save, SaveError};
use planned_economy::data::{Difficulty, Doctrine, EconomyConfig, Era, HeatingTier};
use planned_economy::simulation::{
    BlatPurpose, BlatSpendOutcome, BuildingSnapshot, CompulsoryDeliveries, EconomySystem,
    GridKey, MtsOutcome, ResourceBundle, TickContext,
};
use planned_economy::EconomyHost;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn farm(x: i32, workers: u32) -> BuildingSnapshot {
    BuildingSnapshot {
        key: GridKey::new(x, 0),
        building_id: "collective_farm".to_string(),
        workers,
    }
}

fn config(seed: u64) -> EconomyConfig {
    EconomyConfig {
        seed,
        era: Era::Industrialization,
        difficulty: Difficulty::Comrade,
        start_year: 1930,
        ..EconomyConfig::default()
    }
}

#[test]
fn restored_economy_does_not_share_state_with_the_original() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let mut economy = EconomySystem::new(Era::Thaw, Difficulty::Worker);
    let context = TickContext::default();
    for tick in 1..=120 {
        economy.tick(tick, 1960, 40, &[farm(1, 6), farm(2, 3)], &context, &mut rng);
    }

    let saved = economy.serialize();
    let json = serde_json::to_string(&saved).unwrap();
    let restored_save = serde_json::from_str(&json).unwrap();
    let mut restored = EconomySystem::deserialize(&restored_save);
    assert_eq!(restored, economy);

    restored.record_trudodni(GridKey::new(9, 9), "factory", 10);
    restored.grant_blat(20.0);
    assert_ne!(restored, economy);
    assert_eq!(economy.get_trudodni().at(GridKey::new(9, 9)), 0.0);
    assert_eq!(economy.serialize(), saved);
}

#[test]
fn restored_deliveries_keep_totals_and_corruption() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let mut deliveries = CompulsoryDeliveries::new(Doctrine::Stagnation, &mut rng);
    deliveries.apply_deliveries(100.0, 40.0, 80.0);

    let json = serde_json::to_string(&deliveries.serialize()).unwrap();
    let mut restored = CompulsoryDeliveries::deserialize(&serde_json::from_str(&json).unwrap());
    assert_eq!(restored, deliveries);

    restored.reset_totals();
    assert_ne!(restored.totals(), deliveries.totals());
    assert_eq!(restored.corruption_rate(), deliveries.corruption_rate());
}

#[test]
fn host_ticks_book_into_the_settlement() {
    let mut host = EconomyHost::new(&config(17));
    host.spawn_building(0, 0, "collective_farm", 10);
    let factory = host.spawn_building(2, 1, "factory", 4);
    host.settlement_mut().population = 60;
    host.settlement_mut().production = ResourceBundle {
        food: 20.0,
        vodka: 5.0,
        money: 10.0,
        ..ResourceBundle::zero()
    };

    let report = host.tick();
    let economy = report.economy.expect("economy ran");
    assert_eq!(economy.trudodni_earned, 10.0 * 1.0 + 4.0 * 1.5);
    assert!(report.deliveries.is_some());
    assert_eq!(host.clock().total_ticks, 1);

    host.set_workers(factory, 0);
    let report = host.tick();
    assert_eq!(report.economy.expect("economy ran").trudodni_earned, 10.0);
    assert!(host.settlement().stores.food > 0.0);
}

#[test]
fn district_heating_burns_timber_from_the_stores() {
    let mut host = EconomyHost::new(&config(29));
    host.settlement_mut().population = 150;
    host.settlement_mut().stores.timber = 100.0;

    let mut heated_ticks = 0;
    for _ in 0..10 {
        // Keep breakdowns from masking consumption.
        host.repair_heating();
        let report = host.tick();
        let heating = report.economy.expect("economy ran").heating;
        assert_eq!(heating.tier, HeatingTier::District);
        if heating.operational {
            assert_eq!(heating.consumption.amount, 5.0);
            heated_ticks += 1;
        }
    }
    assert!(heated_ticks > 0);
    assert_eq!(host.settlement().stores.timber, 100.0 - 5.0 * heated_ticks as f64);
}

#[test]
fn heating_stops_when_the_timber_runs_out() {
    let mut host = EconomyHost::new(&config(31));
    host.settlement_mut().population = 150;
    host.settlement_mut().stores.timber = 12.0;

    let mut heated_ticks = 0;
    for _ in 0..6 {
        host.repair_heating();
        if host.tick().economy.expect("economy ran").heating.operational {
            heated_ticks += 1;
        }
    }
    assert!(heated_ticks <= 2);
    assert_eq!(host.settlement().stores.timber, 12.0 - 5.0 * heated_ticks as f64);
    assert!(host.settlement().stores.timber >= 0.0);
}

#[test]
fn rental_is_not_booked_against_a_reformed_treasury() {
    let mut host = EconomyHost::new(&config(37));
    host.settlement_mut().stores.money = 100.0;

    let economy = host.tick().economy.expect("economy ran");
    let reform = economy.currency_reform.expect("1922 reform catches up");
    assert_eq!((reform.money_before, reform.money_after), (100.0, 1.0));
    assert_eq!(economy.mts, MtsOutcome::InsufficientFunds { cost_required: 50.0 });
    assert_eq!(host.settlement().stores.money, 1.0);
    assert_eq!(host.settlement().grain_multiplier, 1.0);
    assert_eq!(host.economy().get_mts().total_rental_spent, 0.0);
}

#[test]
fn new_era_announces_that_it_replaces_a_configured_doctrine() {
    let mut host = EconomyHost::new(&EconomyConfig {
        doctrine: Some(Doctrine::Thaw),
        start_year: 1940,
        ticks_per_month: 1,
        ..config(41)
    });
    assert_eq!(host.deliveries().doctrine(), Doctrine::Thaw);

    let mut events = Vec::new();
    for _ in 0..13 {
        events.extend(host.tick().events);
    }
    assert_eq!(host.economy().era(), Era::GreatPatriotic);
    assert_eq!(host.deliveries().doctrine(), Doctrine::Wartime);
    assert!(events
        .iter()
        .any(|event| event == "The thaw doctrine gives way to the Great Patriotic War era"));
}

#[test]
fn host_save_round_trip_resumes_the_same_stream() {
    let mut host = EconomyHost::new(&config(23));
    host.spawn_building(0, 0, "collective_farm", 10);
    host.settlement_mut().population = 150;
    host.settlement_mut().stores.money = 1_000.0;
    host.settlement_mut().stores.timber = 500.0;
    for _ in 0..90 {
        host.tick();
    }

    let json = host.save_to_json().unwrap();
    let mut copy = EconomyHost::new(&config(0));
    copy.spawn_building(0, 0, "collective_farm", 10);
    copy.load_from_json(&json).unwrap();

    assert_eq!(copy.economy(), host.economy());
    assert_eq!(copy.deliveries(), host.deliveries());
    assert_eq!(copy.settlement(), host.settlement());
    assert_eq!(copy.clock(), host.clock());

    for _ in 0..200 {
        let original = host.tick();
        let resumed = copy.tick();
        assert_eq!(original.economy, resumed.economy);
        assert_eq!(original.deliveries, resumed.deliveries);
    }
    assert_eq!(copy.save_state(), host.save_state());
}

#[test]
fn host_blat_spending_improves_fondy_reliability() {
    let mut host = EconomyHost::new(&config(3));
    host.tick();
    let before = host.economy().get_fondy().reliability;
    let starting = host.economy().get_blat().connections;

    match host.spend_blat(2.0, BlatPurpose::ImproveDelivery) {
        BlatSpendOutcome::Spent {
            amount,
            kgb_detected,
            delivery_reliability,
        } => {
            assert_eq!(amount, 2.0);
            assert!(!kgb_detected);
            assert_eq!(delivery_reliability, Some(before + 0.05));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(host.economy().get_blat().connections, starting - 2.0);
    assert!(matches!(
        host.spend_blat(1_000.0, BlatPurpose::Personal),
        BlatSpendOutcome::Insufficient { .. }
    ));
}

#[test]
fn corrupted_save_is_rejected() {
    let host = EconomyHost::new(&config(1));
    let mut state = host.save_state();
    state.economy.fondy.reliability = 0.0;
    let json = encode_save(&state).unwrap();
    assert!(matches!(decode_save(&json), Err(SaveError::Invalid(_))));

    let mut other = EconomyHost::new(&config(1));
    assert!(other.load_from_json("[]").is_err());
}
