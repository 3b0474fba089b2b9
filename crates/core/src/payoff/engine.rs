//! Debt payoff simulation engine.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::PayoffError;
use super::types::{DebtPayoff, PayoffPlan, PayoffRequest, Strategy};

/// Balances at or below this are considered paid off.
const PAYOFF_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Hard cap on simulated months per debt. Guards against
/// non-convergent inputs such as a payment below the monthly interest
/// accrual; hitting it is a defined termination, not an error.
const MONTH_CAP: u32 = 600;

/// Runs the payoff simulation.
///
/// Debts are processed one at a time in strategy order, consuming a
/// shared payment pool. When a debt is paid off, its final payment net
/// of the residual is rolled forward as the pool for the next debt.
/// Once the pool is exhausted, remaining debts are not simulated.
///
/// # Errors
///
/// Returns `PayoffError` when the debt list is empty or the monthly
/// payment is not positive.
pub fn simulate(request: &PayoffRequest) -> Result<PayoffPlan, PayoffError> {
    if request.debts.is_empty() {
        return Err(PayoffError::NoDebts);
    }
    if request.monthly_payment <= Decimal::ZERO {
        return Err(PayoffError::NonPositivePayment);
    }

    let mut ordered: Vec<&super::types::Debt> = request.debts.iter().collect();
    match request.strategy {
        // Stable sorts keep input order on ties.
        Strategy::Snowball => ordered.sort_by_key(|d| d.balance),
        Strategy::Avalanche => {
            ordered.sort_by_key(|d| std::cmp::Reverse(d.annual_rate_percent));
        }
    }

    let monthly_divisor = Decimal::ONE_HUNDRED * Decimal::from(12u32);
    let mut pool = request.monthly_payment;
    let mut plan = Vec::new();
    let mut total_months = 0u32;
    let mut total_interest = Decimal::ZERO;

    for debt in ordered {
        let monthly_rate = debt.annual_rate_percent / monthly_divisor;
        let mut balance = debt.balance;
        let mut interest_paid = Decimal::ZERO;
        let mut months = 0u32;

        while balance > PAYOFF_THRESHOLD && months < MONTH_CAP {
            let accrued = balance * monthly_rate;
            interest_paid += accrued;
            balance += accrued;

            let payment = if pool > Decimal::ZERO {
                pool.min(balance)
            } else {
                debt.minimum_payment
            };
            balance -= payment;
            months += 1;

            if balance <= PAYOFF_THRESHOLD {
                // Roll the freed-up payment onto the next debt.
                pool = payment - balance;
                balance = Decimal::ZERO;
            }
        }

        let capped = balance > PAYOFF_THRESHOLD;
        plan.push(DebtPayoff {
            name: debt.name.clone(),
            months,
            total_paid: round_currency(debt.balance + interest_paid),
            interest_paid: round_currency(interest_paid),
            capped,
        });
        total_months += months;
        total_interest += interest_paid;

        if pool <= Decimal::ZERO {
            break;
        }
    }

    Ok(PayoffPlan {
        strategy: request.strategy,
        debts: plan,
        total_months,
        total_years: (Decimal::from(total_months) / Decimal::from(12u32))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven),
        total_interest: round_currency(total_interest),
    })
}

fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::types::Debt;
    use rust_decimal_macros::dec;

    fn debt(name: &str, balance: Decimal, rate: Decimal, min_payment: Decimal) -> Debt {
        Debt {
            name: name.into(),
            balance,
            annual_rate_percent: rate,
            minimum_payment: min_payment,
        }
    }

    fn two_debts() -> Vec<Debt> {
        vec![
            debt("Credit Card", dec!(500), dec!(20), dec!(25)),
            debt("Car Loan", dec!(2000), dec!(5), dec!(100)),
        ]
    }

    #[test]
    fn test_snowball_orders_by_balance() {
        let plan = simulate(&PayoffRequest {
            debts: two_debts(),
            monthly_payment: dec!(300),
            strategy: Strategy::Snowball,
        })
        .unwrap();

        // Smaller balance first despite its higher rate.
        assert_eq!(plan.debts[0].name, "Credit Card");
        assert_eq!(plan.debts[1].name, "Car Loan");
        assert!(!plan.debts[0].capped);
        assert!(!plan.debts[1].capped);
    }

    #[test]
    fn test_avalanche_orders_by_rate() {
        let mut debts = two_debts();
        debts.reverse(); // input order must not matter
        let plan = simulate(&PayoffRequest {
            debts,
            monthly_payment: dec!(300),
            strategy: Strategy::Avalanche,
        })
        .unwrap();

        // Highest rate first despite its smaller balance.
        assert_eq!(plan.debts[0].name, "Credit Card");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let plan = simulate(&PayoffRequest {
            debts: vec![
                debt("First", dec!(1000), dec!(10), dec!(50)),
                debt("Second", dec!(1000), dec!(10), dec!(50)),
            ],
            monthly_payment: dec!(500),
            strategy: Strategy::Snowball,
        })
        .unwrap();

        assert_eq!(plan.debts[0].name, "First");
        assert_eq!(plan.debts[1].name, "Second");
    }

    #[test]
    fn test_small_debt_cleared_before_rollover() {
        let plan = simulate(&PayoffRequest {
            debts: two_debts(),
            monthly_payment: dec!(300),
            strategy: Strategy::Snowball,
        })
        .unwrap();

        let first = &plan.debts[0];
        // 500 at 20% with a 300 budget clears in 2 months.
        assert_eq!(first.months, 2);
        assert!(first.interest_paid > Decimal::ZERO);
        assert_eq!(first.total_paid, dec!(500) + first.interest_paid);

        // Aggregates cover both debts.
        assert_eq!(
            plan.total_months,
            plan.debts.iter().map(|d| d.months).sum::<u32>()
        );
        assert!(plan.total_interest > Decimal::ZERO);
    }

    #[test]
    fn test_total_years_is_months_over_twelve() {
        let plan = simulate(&PayoffRequest {
            debts: vec![debt("Loan", dec!(1200), dec!(0), dec!(100))],
            monthly_payment: dec!(100),
            strategy: Strategy::Snowball,
        })
        .unwrap();

        assert_eq!(plan.total_months, 12);
        assert_eq!(plan.total_years, dec!(1.0));
    }

    #[test]
    fn test_payment_below_interest_hits_cap() {
        // 10 per month against 500/month interest accrual never converges.
        let plan = simulate(&PayoffRequest {
            debts: vec![debt("Underwater", dec!(10000), dec!(60), dec!(10))],
            monthly_payment: dec!(10),
            strategy: Strategy::Avalanche,
        })
        .unwrap();

        let result = &plan.debts[0];
        assert_eq!(result.months, 600);
        assert!(result.capped);
        assert_eq!(plan.total_months, 600);
    }

    #[test]
    fn test_rejects_empty_debts() {
        let err = simulate(&PayoffRequest {
            debts: vec![],
            monthly_payment: dec!(100),
            strategy: Strategy::Snowball,
        })
        .unwrap_err();
        assert_eq!(err, PayoffError::NoDebts);
    }

    #[test]
    fn test_rejects_non_positive_payment() {
        let err = simulate(&PayoffRequest {
            debts: two_debts(),
            monthly_payment: dec!(0),
            strategy: Strategy::Snowball,
        })
        .unwrap_err();
        assert_eq!(err, PayoffError::NonPositivePayment);
    }

    #[test]
    fn test_zero_rate_debt_pays_principal_only() {
        let plan = simulate(&PayoffRequest {
            debts: vec![debt("Interest Free", dec!(900), dec!(0), dec!(50))],
            monthly_payment: dec!(300),
            strategy: Strategy::Snowball,
        })
        .unwrap();

        let result = &plan.debts[0];
        assert_eq!(result.months, 3);
        assert_eq!(result.interest_paid, dec!(0));
        assert_eq!(result.total_paid, dec!(900));
    }
}
