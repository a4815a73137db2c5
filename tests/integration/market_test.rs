//! Integration tests for the synthetic market simulator

use intrinsic_sim::market::{MarketSimulator, PriceRange};
use proptest::prelude::*;
use std::thread;

#[test]
fn test_current_price_repeatable() {
    let market = MarketSimulator::new();
    let first = market.current_price("AAPL");
    for _ in 0..10 {
        assert_eq!(market.current_price("AAPL"), first);
    }
}

#[test]
fn test_series_anchored_for_every_range() {
    let market = MarketSimulator::new();
    let price = market.current_price("AAPL");
    for range in PriceRange::ALL {
        let series = market.price_series("AAPL", range);
        assert_eq!(series.last(), Some(price), "range {range}");
    }
}

#[test]
fn test_call_order_does_not_matter() {
    let a = MarketSimulator::new();
    let b = MarketSimulator::new();

    let series_first = a.price_series("NVDA", PriceRange::OneYear);
    let quote_after = a.quote("NVDA");

    let quote_first = b.quote("NVDA");
    let series_after = b.price_series("NVDA", PriceRange::OneYear);

    assert_eq!(series_first, series_after);
    assert_eq!(quote_first, quote_after);
}

#[test]
fn test_ranges_produce_different_paths() {
    let market = MarketSimulator::new();
    let month = market.price_series("AAPL", PriceRange::OneMonth);
    let year = market.price_series("AAPL", PriceRange::OneYear);
    assert_ne!(&month.prices[..10], &year.prices[..10]);
}

#[test]
fn test_concurrent_calls_agree() {
    let expected = MarketSimulator::new().price_series("MSFT", PriceRange::FiveYears);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| MarketSimulator::new().price_series("MSFT", PriceRange::FiveYears))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn series_always_positive_and_anchored(symbol in "[A-Z]{1,5}") {
        let market = MarketSimulator::new();
        let price = market.current_price(&symbol);
        for range in PriceRange::ALL {
            let series = market.price_series(&symbol, range);
            prop_assert_eq!(series.len(), range.point_count());
            prop_assert_eq!(series.last(), Some(price));
            prop_assert!(series.prices.iter().all(|p| p.is_sign_positive() && !p.is_zero()));
        }
    }
}
