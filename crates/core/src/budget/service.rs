//! Budget vs. actual computation.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{Budget, BudgetStanding, BudgetStatus};

/// Computes a budget's standing given the period's actual spend.
///
/// A zero-amount budget reports 0% utilization and goes straight to
/// `Over` on any spend at all.
#[must_use]
pub fn status(budget: &Budget, spent: Decimal) -> BudgetStatus {
    let remaining = budget.amount - spent;

    let utilization_percent = if budget.amount.is_zero() {
        Decimal::ZERO
    } else {
        (spent / budget.amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
    };

    let standing = if spent > budget.amount {
        BudgetStanding::Over
    } else if spent == budget.amount {
        BudgetStanding::OnBudget
    } else {
        BudgetStanding::Under
    };

    BudgetStatus {
        category: budget.category.clone(),
        amount: budget.amount,
        spent,
        remaining,
        utilization_percent,
        standing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finassist_shared::types::{BudgetId, UserId};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn budget(amount: Decimal) -> Budget {
        Budget {
            id: BudgetId::new(),
            user_id: UserId::new(),
            category: "Groceries".into(),
            amount,
            period: super::super::types::BudgetPeriod::Monthly,
        }
    }

    #[rstest]
    #[case(dec!(500), dec!(200), dec!(300), dec!(40), BudgetStanding::Under)]
    #[case(dec!(500), dec!(500), dec!(0), dec!(100), BudgetStanding::OnBudget)]
    #[case(dec!(500), dec!(650), dec!(-150), dec!(130), BudgetStanding::Over)]
    fn test_standings(
        #[case] amount: Decimal,
        #[case] spent: Decimal,
        #[case] remaining: Decimal,
        #[case] utilization: Decimal,
        #[case] standing: BudgetStanding,
    ) {
        let status = status(&budget(amount), spent);
        assert_eq!(status.remaining, remaining);
        assert_eq!(status.utilization_percent, utilization);
        assert_eq!(status.standing, standing);
    }

    #[test]
    fn test_utilization_rounds_to_two_places() {
        let status = status(&budget(dec!(300)), dec!(100));
        assert_eq!(status.utilization_percent, dec!(33.33));
    }

    #[test]
    fn test_zero_budget() {
        let untouched = status(&budget(dec!(0)), dec!(0));
        assert_eq!(untouched.utilization_percent, dec!(0));
        assert_eq!(untouched.standing, BudgetStanding::OnBudget);

        let spent = status(&budget(dec!(0)), dec!(10));
        assert_eq!(spent.utilization_percent, dec!(0));
        assert_eq!(spent.standing, BudgetStanding::Over);
    }
}
