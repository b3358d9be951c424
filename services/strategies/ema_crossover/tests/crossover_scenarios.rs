//! Crossover scenarios against the paper account, plus replay determinism

use ema_crossover::{EmaCrossoverParams, EmaCrossoverStrategy};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strategy_shared::testing::{candles_from_closes, MockStrategyManager};
use strategy_shared::Strategy as _;
use strategy_shared::{OrderSide, PaperConfig, PaperStrategyManager, Pair};

fn params(short_window: usize, long_window: usize, signal_window: usize) -> EmaCrossoverParams {
    EmaCrossoverParams {
        short_window,
        long_window,
        signal_window,
        pair: Pair::new("BTC", "USD"),
    }
}

#[test]
fn round_trip_through_paper_account() {
    let mut strategy = EmaCrossoverStrategy::new(params(2, 4, 3));
    let mut manager = PaperStrategyManager::new(PaperConfig {
        quote_balance: dec!(1100),
        ..PaperConfig::default()
    });

    let mut closes = vec![dec!(10); 8];
    closes.extend(
        [11, 12, 13, 14, 15, 16, 17, 18, 17, 15, 12, 9, 6]
            .into_iter()
            .map(Decimal::from),
    );
    for candle in candles_from_closes(&closes) {
        strategy.on_candle(&mut manager, &candle).unwrap();
    }

    let sides: Vec<OrderSide> = manager.fills().iter().map(|f| f.side).collect();
    assert_eq!(sides, vec![OrderSide::Buy, OrderSide::Sell]);
    // 1100 / 11 buys exactly 100, sold again at 17
    assert_eq!(manager.fills()[0].size, dec!(100));
    assert_eq!(manager.quote_balance(), dec!(1700));
    assert_eq!(manager.base_balance(), Decimal::ZERO);
}

#[test]
fn initialize_from_toml_params() {
    let raw: strategy_shared::RawParams = toml::from_str(
        r#"
short_window = 12
long_window = 26
signal_window = 9
pair = "BTC/USD"
"#,
    )
    .unwrap();

    let strategy = EmaCrossoverStrategy::initialize(&raw).unwrap();
    assert_eq!(strategy.name(), "ema_crossover");
    assert_eq!(strategy.params(), &params(12, 26, 9));
}

fn closes_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..1000, 1..120)
        .prop_map(|raw| raw.into_iter().map(Decimal::from).collect())
}

proptest! {
    #[test]
    fn identical_feeds_produce_identical_orders(
        closes in closes_strategy(),
        short in 1usize..6,
        long in 2usize..12,
        signal in 1usize..6,
    ) {
        let run = || {
            let mut strategy = EmaCrossoverStrategy::new(params(short, long, signal));
            let mut manager = MockStrategyManager::new();
            for candle in candles_from_closes(&closes) {
                strategy.on_candle(&mut manager, &candle).unwrap();
            }
            manager.orders
        };

        prop_assert_eq!(run(), run());
    }

    #[test]
    fn orders_alternate_with_fill_tracking(closes in closes_strategy()) {
        let mut strategy = EmaCrossoverStrategy::new(params(3, 6, 4));
        let mut manager = MockStrategyManager::new();

        for candle in candles_from_closes(&closes) {
            strategy.on_candle(&mut manager, &candle).unwrap();
        }

        let sides = manager.sides();
        for window in sides.windows(2) {
            prop_assert_ne!(window[0], window[1]);
        }
        if let Some(first) = sides.first() {
            prop_assert_eq!(*first, OrderSide::Buy);
        }
    }
}

#[test]
fn sample_config_initializes() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../configs/ema_crossover.toml");
    let config: strategy_shared::ServiceConfig = strategy_shared::load_config(path).unwrap();

    assert_eq!(config.strategy.name, EmaCrossoverStrategy::NAME);
    let strategy = EmaCrossoverStrategy::initialize(&config.strategy.params).unwrap();
    assert_eq!(strategy.params(), &params(12, 26, 9));
}
