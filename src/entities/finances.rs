//! Personal savings singleton - three named balances and three paid counters.
//!
//! All six fields are directly user-entered; the only derived value is the
//! savings total, which is computed on demand and never stored.

use serde::{Deserialize, Serialize};

/// The couple's savings balances and running paid counters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Finances {
    /// Michaela's individual savings balance
    pub michaela_savings: f64,
    /// Arrington's individual savings balance
    pub arrington_savings: f64,
    /// Joint account balance
    pub joint_savings: f64,
    /// Running total Michaela has paid out
    pub michaela_paid: f64,
    /// Running total Arrington has paid out
    pub arrington_paid: f64,
    /// Running total paid from the joint account
    pub joint_paid: f64,
}

impl Finances {
    /// Sum of the three savings balances.
    pub fn total_savings(&self) -> f64 {
        self.michaela_savings + self.arrington_savings + self.joint_savings
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_total_savings() {
        let finances = Finances {
            michaela_savings: 1200.0,
            arrington_savings: 800.0,
            joint_savings: 2500.0,
            ..Finances::default()
        };
        assert_eq!(finances.total_savings(), 4500.0);
    }

    #[test]
    fn test_total_savings_ignores_paid_counters() {
        let finances = Finances {
            michaela_paid: 999.0,
            joint_paid: 999.0,
            ..Finances::default()
        };
        assert_eq!(finances.total_savings(), 0.0);
    }

    #[test]
    fn test_camel_case_shape() {
        let json = serde_json::to_value(Finances::default()).unwrap();
        assert!(json.get("michaelaSavings").is_some());
        assert!(json.get("michaela_savings").is_none());
    }
}
