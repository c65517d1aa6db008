//! Financial checkup
//!
//! A rough tax estimate for a profile. Taxable income is the current
//! account balance; the deduction is the sum of the expected-return figures
//! of tax-saving instruments, read as a currency amount.

use crate::auth::UserProfile;
use crate::models::notification::codes;
use crate::models::{Money, Notification};
use crate::notify::NotificationSink;

/// Flat rate applied to income after deductions, as numerator/denominator
const TAX_RATE: (i64, i64) = (30, 100);

/// Result of a checkup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkup {
    pub taxable_income: Money,
    pub deductions: Money,
    pub estimated_tax: Money,
}

impl Checkup {
    /// Compute the estimate without raising a notification
    pub fn evaluate<K>(profile: &UserProfile<K>) -> Self {
        let taxable_income = profile.account().balance();
        let deductions: Money = profile
            .investments()
            .iter()
            .filter(|inv| inv.is_tax_saving())
            .map(|inv| Money::from_f64(inv.expected_return))
            .sum();

        let after_deductions = taxable_income - deductions;
        let estimated_tax = if after_deductions.is_positive() {
            after_deductions.scale(TAX_RATE.0, TAX_RATE.1)
        } else {
            Money::zero()
        };

        Self {
            taxable_income,
            deductions,
            estimated_tax,
        }
    }
}

/// Run the checkup and announce the claimable deduction
pub fn financial_checkup<K, S: NotificationSink + ?Sized>(
    profile: &UserProfile<K>,
    sink: &mut S,
) -> Checkup {
    let checkup = Checkup::evaluate(profile);
    sink.deliver(&Notification::new(
        codes::TAX_TIP,
        format!(
            "Tax Saving Tip: You can claim {} in deductions",
            checkup.deductions
        ),
    ));
    checkup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credential;
    use crate::models::{Account, AccountId, RiskLevel};
    use crate::notify::NullSink;

    fn profile() -> UserProfile<u32> {
        UserProfile::new(
            1,
            "Checkup",
            "checkup@example.com",
            Credential::from_password("pw").unwrap(),
            Account::new(AccountId::new(1)),
        )
    }

    #[test]
    fn test_no_investments_taxes_full_balance() {
        let mut p = profile();
        p.account_mut()
            .add_income(Money::from_units(1000), "Salary", &mut NullSink);

        let mut events: Vec<Notification> = Vec::new();
        let checkup = financial_checkup(&p, &mut events);

        assert_eq!(checkup.taxable_income, Money::from_units(1000));
        assert_eq!(checkup.deductions, Money::zero());
        assert_eq!(checkup.estimated_tax, Money::from_units(300));
        assert_eq!(events[0].id, 400);
        assert_eq!(events[0].message, "Tax Saving Tip: You can claim 0.00 in deductions");
    }

    #[test]
    fn test_only_tax_saving_kinds_are_deducted() {
        let mut p = profile();
        p.account_mut()
            .add_income(Money::from_units(100), "Salary", &mut NullSink);
        p.add_investment("PPF", Money::from_units(5000), 7.5, RiskLevel::Low, &mut NullSink);
        p.add_investment("ELSS", Money::from_units(5000), 12.5, RiskLevel::High, &mut NullSink);
        p.add_investment("FD", Money::from_units(5000), 6.0, RiskLevel::Low, &mut NullSink);

        let checkup = Checkup::evaluate(&p);

        assert_eq!(checkup.deductions, Money::from_units(20));
        // (100 - 20) * 0.3
        assert_eq!(checkup.estimated_tax, Money::from_units(24));
    }

    #[test]
    fn test_tax_is_never_negative() {
        let mut p = profile();
        p.account_mut()
            .add_expense(Money::from_units(50), "Rent", &mut NullSink);

        let checkup = Checkup::evaluate(&p);
        assert_eq!(checkup.taxable_income, Money::from_units(-50));
        assert_eq!(checkup.estimated_tax, Money::zero());
    }
}
