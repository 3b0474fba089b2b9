//! Concurrent-access integrity tests.
//!
//! Two simultaneous transfers from one account must never both read a
//! stale balance and overdraw it; the write lock serializes them.

use std::sync::{Arc, Barrier};
use std::thread;

use finassist_core::ledger::{AccountKind, LedgerError};
use finassist_shared::types::{Currency, UserId};
use finassist_store::LedgerStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn concurrent_transfers_conserve_total_balance() {
    let store = Arc::new(LedgerStore::new());
    let user = UserId::new();
    store
        .open_account(user, "SRC", AccountKind::Checking, dec!(10000), Currency::Usd)
        .unwrap();
    store
        .open_account(user, "DST", AccountKind::Savings, dec!(0), Currency::Usd)
        .unwrap();

    let threads = 8;
    let transfers_per_thread = 25;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..transfers_per_thread {
                    store.transfer(user, "SRC", "DST", dec!(10)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // 8 threads x 25 transfers x 10 = 2000 moved.
    assert_eq!(store.balance_of(user, "SRC").unwrap().amount, dec!(8000));
    assert_eq!(store.balance_of(user, "DST").unwrap().amount, dec!(2000));
    assert_eq!(store.total_balance(user), dec!(10000));
}

#[test]
fn concurrent_transfers_never_overdraw() {
    let store = Arc::new(LedgerStore::new());
    let user = UserId::new();
    store
        .open_account(user, "SRC", AccountKind::Checking, dec!(100), Currency::Usd)
        .unwrap();
    store
        .open_account(user, "DST", AccountKind::Savings, dec!(0), Currency::Usd)
        .unwrap();

    // 20 threads each try to move 30 out of a 100 balance; only 3 can
    // succeed.
    let threads = 20;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.transfer(user, "SRC", "DST", dec!(30)).is_ok()
            })
        })
        .collect();
    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 3);
    assert_eq!(store.balance_of(user, "SRC").unwrap().amount, dec!(10));
    assert_eq!(store.balance_of(user, "DST").unwrap().amount, dec!(90));
    assert!(store.balance_of(user, "SRC").unwrap().amount >= Decimal::ZERO);
}

#[test]
fn failed_transfer_is_invisible_to_concurrent_readers() {
    let store = Arc::new(LedgerStore::new());
    let user = UserId::new();
    store
        .open_account(user, "SRC", AccountKind::Checking, dec!(50), Currency::Usd)
        .unwrap();
    store
        .open_account(user, "DST", AccountKind::Savings, dec!(0), Currency::Usd)
        .unwrap();

    let err = store.transfer(user, "SRC", "DST", dec!(500)).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            (
                store.balance_of(user, "SRC").unwrap().amount,
                store.history(user, "SRC").unwrap().len(),
            )
        })
    };
    let (balance, entries) = reader.join().unwrap();
    assert_eq!(balance, dec!(50));
    assert_eq!(entries, 1);
}
