use rust_decimal::Decimal;

use crate::domain::Error;
use crate::registry::SharedRegistry;

/// Privileged view of the registry.
#[derive(Debug, Clone)]
pub struct Admin {
    registry: SharedRegistry,
}

impl Admin {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub fn create_account(&self, id: &str, initial_balance: Decimal) -> Result<(), Error> {
        self.registry.lock().create(id, initial_balance)
    }

    pub fn check_total_balance(&self) -> Decimal {
        self.registry.lock().total_balance()
    }

    pub fn check_total_loan_amount(&self) -> Decimal {
        self.registry.lock().total_loan_amount()
    }

    pub fn enable_loan_feature(&self) -> bool {
        self.registry.lock().set_loan_enabled(true)
    }

    pub fn disable_loan_feature(&self) -> bool {
        self.registry.lock().set_loan_enabled(false)
    }
}
