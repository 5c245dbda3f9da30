//! Turns one month of raw figures plus the current roster into a [`FinancialResult`].

use crate::domain::{
    Employee, ExpenseBreakdown, FinancialResult, MonthlyInput, Partner, PartnerProfit,
};

/// Stateless monthly profit calculation.
pub struct FinancialCalculator;

impl FinancialCalculator {
    /// Computes expenses, net profit, and each partner's split.
    ///
    /// No rounding is applied. The employee and partner slices are copied into
    /// the result so later roster edits never reach stored history.
    pub fn compute(
        input: &MonthlyInput,
        employees: &[Employee],
        partners: &[Partner],
    ) -> FinancialResult {
        let total_employee_salaries: f64 = employees.iter().map(Employee::salary).sum();
        let expenses = ExpenseBreakdown {
            water_bill: input.water_bill,
            electricity_bill: input.electricity_bill,
            wifi_bill: input.wifi_bill,
            other_expenses: input.other_expenses,
            other_expenses_description: input.other_expenses_description.clone(),
        };
        let total_expenses = expenses.total() + total_employee_salaries;
        let net_profit = input.monthly_revenue - total_expenses;

        let partner_profits = partners
            .iter()
            .map(|partner| Self::partner_profit(partner, net_profit))
            .collect();

        FinancialResult {
            monthly_revenue: input.monthly_revenue,
            expenses,
            total_employee_salaries,
            total_expenses,
            net_profit,
            partner_profits,
            employees: employees.to_vec(),
            partners: partners.to_vec(),
        }
    }

    fn partner_profit(partner: &Partner, net_profit: f64) -> PartnerProfit {
        let gross_profit = net_profit * partner.share / 100.0;
        PartnerProfit {
            partner_id: partner.id,
            name: partner.name.clone(),
            share: partner.share,
            personal_expenses: partner.personal_expenses,
            personal_gains: partner.personal_gains,
            gross_profit,
            net_profit: gross_profit - partner.personal_expenses + partner.personal_gains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Month;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_input() -> MonthlyInput {
        let mut input = MonthlyInput::new(Month::new(2024, 1).unwrap());
        input.monthly_revenue = 10_000.0;
        input.water_bill = 200.0;
        input.electricity_bill = 300.0;
        input.wifi_bill = 100.0;
        input.other_expenses = 50.0;
        input.other_expenses_description = "Cleaning supplies".into();
        input
    }

    fn employee(salary: f64) -> Employee {
        Employee::hire(
            "Youssef",
            "Baker",
            salary,
            NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            Utc.with_ymd_and_hms(2023, 9, 1, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn computes_reference_example() {
        let employees = vec![employee(2000.0)];
        let partners = vec![Partner::new("Karim", 50.0).with_adjustments(100.0, 0.0)];

        let result = FinancialCalculator::compute(&sample_input(), &employees, &partners);

        assert_eq!(result.total_employee_salaries, 2000.0);
        assert_eq!(result.total_expenses, 2650.0);
        assert_eq!(result.net_profit, 7350.0);
        assert_eq!(result.partner_profits.len(), 1);
        assert_eq!(result.partner_profits[0].gross_profit, 3675.0);
        assert_eq!(result.partner_profits[0].net_profit, 3575.0);
        assert_eq!(result.expenses.other_expenses_description, "Cleaning supplies");
    }

    #[test]
    fn zero_revenue_yields_loss() {
        let input = MonthlyInput::new(Month::new(2024, 2).unwrap());
        let result = FinancialCalculator::compute(&input, &[employee(1500.0)], &[]);
        assert_eq!(result.net_profit, -1500.0);
        assert!(result.is_loss());
        assert!(result.partner_profits.is_empty());
    }

    #[test]
    fn personal_gains_are_added() {
        let partners = vec![Partner::new("Sara", 25.0).with_adjustments(40.0, 90.0)];
        let result = FinancialCalculator::compute(&sample_input(), &[], &partners);
        let profit = &result.partner_profits[0];
        assert_eq!(profit.gross_profit, 9350.0 * 25.0 / 100.0);
        assert_eq!(profit.net_profit, profit.gross_profit - 40.0 + 90.0);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let employees = vec![employee(1234.56), employee(789.01)];
        let partners = vec![
            Partner::new("A", 33.3).with_adjustments(12.5, 3.1),
            Partner::new("B", 66.7),
        ];
        let first = FinancialCalculator::compute(&sample_input(), &employees, &partners);
        let second = FinancialCalculator::compute(&sample_input(), &employees, &partners);
        assert_eq!(first, second);
        assert_eq!(first.net_profit.to_bits(), second.net_profit.to_bits());
    }

    #[test]
    fn snapshots_do_not_follow_roster_edits() {
        let mut employees = vec![employee(2000.0)];
        let result = FinancialCalculator::compute(&sample_input(), &employees, &[]);

        employees[0].name = "Renamed".into();
        let later = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        employees[0].change_salary(5000.0, None, later);

        assert_eq!(result.employees[0].name, "Youssef");
        assert_eq!(result.employees[0].salary(), 2000.0);
        assert_eq!(result.total_employee_salaries, 2000.0);
    }
}
