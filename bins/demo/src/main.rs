//! Development smoke binary.
//!
//! Seeds the demo dataset, runs every ledger operation and calculator
//! once, and prints the resulting reports.
//!
//! Usage: cargo run --bin demo

use std::str::FromStr;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use finassist_core::budget::BudgetPeriod;
use finassist_core::calculator::{Compounding, InterestRequest, LoanRequest};
use finassist_core::currency::{self, RateTable};
use finassist_core::ledger::{AccountKind, Frequency, TransactionKind};
use finassist_core::payoff::{Debt, PayoffCache, PayoffRequest, Strategy};
use finassist_shared::config::AppConfig;
use finassist_shared::types::{Currency, Money, UserId};
use finassist_store::LedgerStore;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().unwrap_or_default();
    let base_currency = Currency::from_str(&config.currency.base).unwrap_or(Currency::Usd);
    info!(%base_currency, "configuration loaded");

    let store = LedgerStore::new();
    let user = seed_demo_data(&store, base_currency);

    run_ledger_operations(&store, user);
    print_reports(&store, user, &config);
    run_calculators(&config);
}

/// Seeds the demo user: two accounts, some history, pending bills, a
/// recurring subscription and category budgets.
fn seed_demo_data(store: &LedgerStore, currency: Currency) -> UserId {
    let user = UserId::new();
    let today = Utc::now().date_naive();

    store
        .open_account(user, "SAV001", AccountKind::Savings, dec!(5000), currency)
        .expect("seed savings account");
    store
        .open_account(user, "CHK001", AccountKind::Checking, dec!(2000), currency)
        .expect("seed checking account");

    store
        .deposit(user, "CHK001", dec!(3000), "Salary deposit", "Income")
        .expect("seed salary");
    store
        .withdraw(user, "CHK001", dec!(120), "Grocery store", "Groceries")
        .expect("seed groceries");
    store
        .withdraw(user, "CHK001", dec!(50), "Coffee shop", "Food & Dining")
        .expect("seed coffee");

    for (bill_type, amount, days_out) in [
        ("Electricity", dec!(150), 7),
        ("Internet", dec!(75), 12),
        ("Credit Card", dec!(500), 20),
    ] {
        store
            .add_bill(
                user,
                bill_type,
                "Utilities",
                amount,
                today + ChronoDuration::days(days_out),
                true,
            )
            .expect("seed bill");
    }

    store
        .add_recurring(
            user,
            "CHK001",
            TransactionKind::Payment,
            dec!(15.99),
            "Streaming subscription",
            "Entertainment",
            Frequency::Monthly,
            today,
        )
        .expect("seed recurring");

    store
        .add_budget(user, "Groceries", dec!(500), BudgetPeriod::Monthly)
        .expect("seed groceries budget");
    store
        .add_budget(user, "Entertainment", dec!(200), BudgetPeriod::Monthly)
        .expect("seed entertainment budget");

    user
}

fn run_ledger_operations(store: &LedgerStore, user: UserId) {
    let receipt = store
        .transfer(user, "SAV001", "CHK001", dec!(500))
        .expect("transfer");
    println!(
        "Transferred 500: SAV001 -> {} | CHK001 -> {}",
        receipt.outgoing.balance_after, receipt.incoming.balance_after
    );

    let payment = store.pay_bill(user, "Electricity").expect("pay bill");
    println!(
        "Paid {} bill: {} (new balance {})",
        payment.bill.bill_type, payment.transaction.amount, payment.transaction.balance_after
    );

    let recurring = store.active_recurring(user);
    let posted = store
        .post_recurring(user, recurring[0].id)
        .expect("post recurring");
    println!(
        "Posted recurring '{}': {} (balance {})",
        posted.description, posted.amount, posted.balance_after
    );
}

fn print_reports(store: &LedgerStore, user: UserId, config: &AppConfig) {
    let now = Utc::now();
    let today = now.date_naive();

    println!("\n-- Accounts --");
    for account in store.accounts(user) {
        println!(
            "{} ({}): {}",
            account.number,
            account.kind,
            Money::new(account.balance, account.currency)
        );
    }
    println!("Total balance: {}", store.total_balance(user));

    let window_start = now - ChronoDuration::days(i64::from(config.reporting.statement_window_days));
    println!("\n-- Spending by category --");
    let breakdown = store.spending_by_category(user, window_start, now);
    for entry in &breakdown.categories {
        println!("{}: {}", entry.category, entry.total);
    }
    println!("Total spent: {}", breakdown.total);

    let statement = store
        .statement(user, "CHK001", window_start, now)
        .expect("statement");
    println!(
        "\n-- CHK001 statement --\nopening {} / closing {} / in {} / out {} / {} transactions",
        statement.opening_balance,
        statement.closing_balance,
        statement.total_deposits,
        statement.total_withdrawals,
        statement.transaction_count
    );

    println!("\n-- Monthly trend --");
    for point in store.monthly_trend(user, config.reporting.trend_months, today) {
        println!("{}: {}", point.month.format("%Y-%m"), point.total);
    }

    println!("\n-- Budgets --");
    for status in store.budget_status(user, today) {
        println!(
            "{}: spent {} of {} ({}%, {:?})",
            status.category, status.spent, status.amount, status.utilization_percent, status.standing
        );
    }

    println!("\n-- Pending bills --");
    for bill in store.pending_bills(user) {
        println!("{}: {} due {}", bill.bill_type, bill.amount, bill.due_date);
    }
}

fn run_calculators(config: &AppConfig) {
    let schedule = LoanRequest {
        principal: dec!(200000),
        annual_rate_percent: dec!(6),
        term_years: 30,
    }
    .amortize()
    .expect("loan");
    println!(
        "\n-- Loan 200000 @ 6% / 30y --\nmonthly {} / total {} / interest {}",
        schedule.monthly_payment, schedule.total_payment, schedule.total_interest
    );

    let projection = InterestRequest {
        principal: dec!(10000),
        annual_rate_percent: dec!(5),
        years: 10,
        compounding: Compounding::Monthly,
        monthly_contribution: dec!(200),
    }
    .project()
    .expect("interest");
    println!(
        "\n-- 10000 @ 5% / 10y + 200/mo --\nfuture value {} / contributed {} / gain {}",
        projection.future_value, projection.total_contributed, projection.gain
    );

    let cache = PayoffCache::new(
        config.simulation.cache_capacity,
        Duration::from_secs(config.simulation.cache_ttl_secs),
    );
    let request = PayoffRequest {
        debts: vec![
            Debt {
                name: "Credit Card".into(),
                balance: dec!(500),
                annual_rate_percent: dec!(20),
                minimum_payment: dec!(25),
            },
            Debt {
                name: "Car Loan".into(),
                balance: dec!(2000),
                annual_rate_percent: dec!(5),
                minimum_payment: dec!(100),
            },
        ],
        monthly_payment: dec!(300),
        strategy: Strategy::Snowball,
    };
    let first = cache.run(&request).expect("payoff");
    let second = cache.run(&request).expect("payoff rerun");
    println!(
        "\n-- Debt payoff ({}) --\ntotal {} months ({} years), interest {} [cached: {} then {}]",
        first.plan.strategy,
        first.plan.total_months,
        first.plan.total_years,
        first.plan.total_interest,
        first.cached,
        second.cached
    );
    for debt in &first.plan.debts {
        println!(
            "{}: {} months, paid {} ({} interest){}",
            debt.name,
            debt.months,
            debt.total_paid,
            debt.interest_paid,
            if debt.capped { " [capped]" } else { "" }
        );
    }

    let rates = RateTable::default();
    let conversion = currency::convert(&rates, Money::new(dec!(100), Currency::Usd), Currency::Eur)
        .expect("conversion");
    println!(
        "\n-- Currency --\n{} = {} (rate {})",
        conversion.from, conversion.to, conversion.rate
    );
}
