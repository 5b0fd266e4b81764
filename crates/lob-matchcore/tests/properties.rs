//! Integration test: book invariants under randomized order flow
//!
//! A seeded stream of market, limit and stop orders is replayed through one
//! book. After every `add_order` call the resting state and the returned
//! reports are checked against the matching invariants.

use std::collections::HashMap;

use lob_matchcore::{OrderBook, compute_report_root};
use lob_types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const ORDERS_PER_RUN: u128 = 2_000;

fn sym() -> Symbol {
    Symbol::new("TEST")
}

fn random_order(rng: &mut StdRng, n: u128) -> Order {
    let id = OrderId::from_u128(n);
    let side = if rng.gen_bool(0.5) {
        OrderSide::Buy
    } else {
        OrderSide::Sell
    };
    let qty = Decimal::new(rng.gen_range(1..=20), 0);
    let price = Decimal::new(rng.gen_range(95..=105), 0);
    match rng.gen_range(0..10) {
        0 | 1 => Order::market(id, sym(), side, qty),
        2 => Order::stop(id, sym(), side, price, qty),
        _ => Order::limit(id, sym(), side, price, qty),
    }
}

fn random_stream(seed: u64) -> Vec<Order> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..ORDERS_PER_RUN).map(|n| random_order(&mut rng, n)).collect()
}

fn resting_remaining(book: &OrderBook) -> HashMap<OrderId, Decimal> {
    [OrderSide::Buy, OrderSide::Sell]
        .into_iter()
        .flat_map(|side| book.resting_orders(side))
        .map(|o| (o.id, o.remaining_qty))
        .collect()
}

fn assert_priority(book: &OrderBook, side: OrderSide) {
    let orders: Vec<&Order> = book.resting_orders(side).collect();
    for pair in orders.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (pa, pb) = (a.price.unwrap(), b.price.unwrap());
        let strictly_better = match side {
            OrderSide::Buy => pa > pb,
            OrderSide::Sell => pa < pb,
        };
        assert!(
            strictly_better || (pa == pb && a.sequence < b.sequence),
            "priority violated on {side}: {pa}#{} before {pb}#{}",
            a.sequence,
            b.sequence
        );
    }
    assert!(book.resting_orders(side).all(|o| o.remaining_qty > Decimal::ZERO));
}

#[test]
fn invariants_hold_after_every_order() {
    let mut book = OrderBook::new(sym());

    for order in random_stream(7) {
        let before = resting_remaining(&book);
        let (id, side, kind, requested) =
            (order.id, order.side, order.order_type, order.remaining_qty);
        let mut opposite_left = book.resting_orders(side.opposite()).count();

        let reports = book.add_order(order).unwrap();
        assert_eq!(reports.len() % 2, 0, "reports come in taker/maker pairs");

        // Quantity conservation per fill event.
        let mut taker_left = requested;
        let mut makers = before.clone();
        for pair in reports.chunks(2) {
            let (taker, maker) = (&pair[0], &pair[1]);
            assert_eq!(taker.order_id, id);
            assert_eq!(taker.filled_qty, maker.filled_qty);
            assert_eq!(taker.price, maker.price);

            let sole_maker = opposite_left == 1;
            let maker_left = makers.get_mut(&maker.order_id).expect("maker was resting");
            assert_eq!(taker.filled_qty, taker_left.min(*maker_left));
            taker_left -= taker.filled_qty;
            *maker_left -= maker.filled_qty;

            assert_eq!(maker.status, ExecStatus::from_remaining(*maker_left));

            // A market taker also reports Filled when it exhausts the last
            // resting order on the opposite side.
            let expected = if kind == OrderType::Market && maker_left.is_zero() && sole_maker {
                ExecStatus::Filled
            } else {
                ExecStatus::from_remaining(taker_left)
            };
            assert_eq!(taker.status, expected, "taker status for {kind} order");

            if maker_left.is_zero() {
                opposite_left -= 1;
            }
        }

        // Resting state matches the bookkeeping above.
        let after = resting_remaining(&book);
        for (maker_id, left) in &makers {
            if left.is_zero() {
                assert!(!after.contains_key(maker_id));
            } else {
                assert_eq!(after.get(maker_id), Some(left));
            }
        }

        match kind {
            OrderType::Market => assert!(!book.contains_order(&id), "market order rested"),
            OrderType::Limit | OrderType::Stop => {
                if taker_left.is_zero() {
                    assert!(!book.contains_order(&id));
                } else {
                    assert_eq!(book.order(&id).unwrap().remaining_qty, taker_left);
                }
            }
        }

        // No crossed book.
        if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
            assert!(bid < ask, "crossed book: bid {bid} >= ask {ask}");
        }

        assert_priority(&book, OrderSide::Buy);
        assert_priority(&book, OrderSide::Sell);
    }
}

#[test]
fn equal_price_orders_match_first_in_first_out() {
    let mut book = OrderBook::new(sym());
    let price = Decimal::new(50, 0);
    for n in 0..5u128 {
        book.add_order(Order::limit(OrderId::from_u128(n), sym(), OrderSide::Buy, price, Decimal::ONE))
            .unwrap();
    }

    let reports = book
        .add_order(Order::market(OrderId::from_u128(99), sym(), OrderSide::Sell, Decimal::new(5, 0)))
        .unwrap();

    let maker_ids: Vec<OrderId> = reports.iter().skip(1).step_by(2).map(|r| r.order_id).collect();
    let expected: Vec<OrderId> = (0..5u128).map(OrderId::from_u128).collect();
    assert_eq!(maker_ids, expected);
}

#[test]
fn replays_produce_identical_report_roots() {
    let run = || {
        let mut book = OrderBook::new(sym());
        let mut all = Vec::new();
        for order in random_stream(42) {
            all.extend(book.add_order(order).unwrap());
        }
        (compute_report_root(&all), book.top_of_book())
    };

    let (root_a, depth_a) = run();
    let (root_b, depth_b) = run();
    assert_eq!(root_a, root_b);
    assert_eq!(depth_a, depth_b);
}

#[test]
fn different_streams_produce_different_roots() {
    let replay = |seed| {
        let mut book = OrderBook::new(sym());
        let reports: Vec<ExecutionReport> = random_stream(seed)
            .into_iter()
            .flat_map(|o| book.add_order(o).unwrap())
            .collect();
        compute_report_root(&reports)
    };
    assert_ne!(replay(1), replay(2));
}
