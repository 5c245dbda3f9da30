use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::{finite_amount, Month},
    employee::Employee,
    partner::Partner,
};
use crate::errors::BookError;

/// Raw figures entered for one month. Missing numbers deserialize as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyInput {
    pub month: Month,
    #[serde(default)]
    pub monthly_revenue: f64,
    #[serde(default)]
    pub water_bill: f64,
    #[serde(default)]
    pub electricity_bill: f64,
    #[serde(default)]
    pub wifi_bill: f64,
    #[serde(default)]
    pub other_expenses: f64,
    #[serde(default)]
    pub other_expenses_description: String,
}

impl MonthlyInput {
    /// Input for `month` with every amount at zero.
    pub fn new(month: Month) -> Self {
        Self {
            month,
            monthly_revenue: 0.0,
            water_bill: 0.0,
            electricity_bill: 0.0,
            wifi_bill: 0.0,
            other_expenses: 0.0,
            other_expenses_description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), BookError> {
        finite_amount("monthly revenue", self.monthly_revenue)?;
        finite_amount("water bill", self.water_bill)?;
        finite_amount("electricity bill", self.electricity_bill)?;
        finite_amount("wifi bill", self.wifi_bill)?;
        finite_amount("other expenses", self.other_expenses)?;
        Ok(())
    }
}

/// Non-salary expenses as entered for the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdown {
    pub water_bill: f64,
    pub electricity_bill: f64,
    pub wifi_bill: f64,
    pub other_expenses: f64,
    #[serde(default)]
    pub other_expenses_description: String,
}

impl ExpenseBreakdown {
    pub fn total(&self) -> f64 {
        self.water_bill + self.electricity_bill + self.wifi_bill + self.other_expenses
    }
}

/// A partner's cut of the month's net profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerProfit {
    #[serde(rename = "id")]
    pub partner_id: Uuid,
    pub name: String,
    pub share: f64,
    pub personal_expenses: f64,
    pub personal_gains: f64,
    /// `net_profit * share / 100`, before personal adjustments.
    pub gross_profit: f64,
    /// `gross_profit - personal_expenses + personal_gains`.
    pub net_profit: f64,
}

/// Outcome of a monthly calculation, including the roster as it stood at the time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialResult {
    pub monthly_revenue: f64,
    pub expenses: ExpenseBreakdown,
    pub total_employee_salaries: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub partner_profits: Vec<PartnerProfit>,
    pub employees: Vec<Employee>,
    pub partners: Vec<Partner>,
}

impl FinancialResult {
    pub fn is_loss(&self) -> bool {
        self.net_profit < 0.0
    }

    pub fn margin(&self) -> Margin {
        Margin::of(self.net_profit, self.monthly_revenue)
    }
}

/// Net profit as a percentage of revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Margin {
    Percent(f64),
    /// Revenue was zero, so no meaningful percentage exists.
    NotApplicable,
}

impl Margin {
    pub fn of(net_profit: f64, revenue: f64) -> Self {
        if revenue == 0.0 {
            return Margin::NotApplicable;
        }
        let percent = net_profit / revenue * 100.0;
        if percent.is_finite() {
            Margin::Percent(percent)
        } else {
            Margin::NotApplicable
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            Margin::Percent(value) => Some(*value),
            Margin::NotApplicable => None,
        }
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Margin::Percent(value) => write!(f, "{value:.1}%"),
            Margin::NotApplicable => f.write_str("N/A"),
        }
    }
}
