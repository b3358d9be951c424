//! End-to-end breakout scenarios against the paper account and the feed runner

use bollinger_breakout::{BollingerBreakoutParams, BollingerBreakoutStrategy};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strategy_shared::testing::{candles_from_closes, MockStrategyManager};
use strategy_shared::Strategy as _;
use strategy_shared::{run_reader, OrderSide, PaperConfig, PaperStrategyManager, Pair};
use tokio::io::BufReader;

fn strategy(window_size: usize, stddev: Decimal) -> BollingerBreakoutStrategy {
    BollingerBreakoutStrategy::new(BollingerBreakoutParams {
        window_size,
        stddev,
        pair: Pair::new("BTC", "USD"),
    })
}

fn paper(quote: Decimal) -> PaperStrategyManager {
    PaperStrategyManager::new(PaperConfig {
        quote_balance: quote,
        ..PaperConfig::default()
    })
}

#[test]
fn rising_prices_buy_once() {
    let mut strategy = strategy(3, dec!(1));
    let mut manager = paper(dec!(1000));

    let closes: Vec<Decimal> = (10..30).map(Decimal::from).collect();
    for candle in candles_from_closes(&closes) {
        strategy.on_candle(&mut manager, &candle).unwrap();
    }

    assert_eq!(manager.fills().len(), 1);
    let fill = &manager.fills()[0];
    assert_eq!(fill.side, OrderSide::Buy);
    assert_eq!(fill.price, dec!(12));
    assert_eq!(fill.size, dec!(83.33333333));
    // every later candle is also an upper breakout, but the position is already held
    assert_eq!(strategy.metrics().signals_generated, 18);
    assert_eq!(strategy.metrics().orders_submitted, 1);
}

#[test]
fn breakout_then_collapse_round_trips() {
    let mut strategy = strategy(3, dec!(1));
    let mut manager = paper(dec!(1000));

    let closes = [dec!(10), dec!(11), dec!(12), dec!(13), dec!(14), dec!(5), dec!(4)];
    for candle in candles_from_closes(&closes) {
        strategy.on_candle(&mut manager, &candle).unwrap();
    }

    let sides: Vec<OrderSide> = manager.fills().iter().map(|f| f.side).collect();
    assert_eq!(sides, vec![OrderSide::Buy, OrderSide::Sell]);
    assert_eq!(manager.fills()[1].size, manager.fills()[0].size);
    assert_eq!(manager.fills()[1].price, dec!(5));
    assert_eq!(manager.base_balance(), Decimal::ZERO);
    assert!(manager.quote_balance() < dec!(1000));
}

#[tokio::test]
async fn replays_recorded_feed() {
    let feed = r#"{"type":"candle","close":"10","timestamp_ns":1}
{"type":"candle","close":"11","timestamp_ns":2}
{"type":"trade","pair":"BTC/USD","side":"sell","price":"11.5","size":"0.1","timestamp_ns":3}
{"type":"candle","close":"12","timestamp_ns":4}
{"type":"candle","close":"13","timestamp_ns":5}
"#;
    let mut strategy = strategy(3, dec!(1));
    let mut manager = paper(dec!(1200));

    let summary = run_reader(
        &mut strategy,
        &mut manager,
        BufReader::new(feed.as_bytes()),
        std::future::pending(),
    )
    .await
    .unwrap();

    assert_eq!(summary.candles, 4);
    assert_eq!(summary.trades, 1);
    assert_eq!(summary.failed_events, 0);
    assert_eq!(summary.metrics.orders_submitted, 1);
    assert_eq!(manager.fills()[0].timestamp_ns, 4);
    assert_eq!(manager.base_balance(), dec!(100));
}

fn closes_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..500, 1..80)
        .prop_map(|raw| raw.into_iter().map(Decimal::from).collect())
}

proptest! {
    #[test]
    fn identical_feeds_produce_identical_orders(
        closes in closes_strategy(),
        window in 1usize..8,
    ) {
        let run = || {
            let mut strategy = strategy(window, dec!(1.5));
            let mut manager = MockStrategyManager::new();
            for candle in candles_from_closes(&closes) {
                strategy.on_candle(&mut manager, &candle).unwrap();
            }
            manager.orders
        };

        let first = run();
        let second = run();
        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= closes.len().saturating_sub(window - 1));
    }

    #[test]
    fn no_orders_before_window_is_full(closes in closes_strategy(), window in 2usize..10) {
        let mut strategy = strategy(window, dec!(0.5));
        let mut manager = MockStrategyManager::new();

        for candle in candles_from_closes(&closes).iter().take(window - 1) {
            strategy.on_candle(&mut manager, candle).unwrap();
        }

        prop_assert!(manager.orders.is_empty());
        prop_assert_eq!(manager.position_queries(), 0);
    }
}

#[test]
fn sample_config_initializes() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../configs/bollinger_breakout.toml");
    let config: strategy_shared::ServiceConfig = strategy_shared::load_config(path).unwrap();

    assert_eq!(config.strategy.name, BollingerBreakoutStrategy::NAME);
    let strategy = BollingerBreakoutStrategy::initialize(&config.strategy.params).unwrap();
    assert_eq!(strategy.params().window_size, 20);
    assert_eq!(strategy.params().stddev, dec!(2));
}
