mod deduction_constants;
mod salary_breakdown;
mod tax_bracket;

pub use deduction_constants::{DeductionConfigError, DeductionConstants};
pub use salary_breakdown::SalaryBreakdown;
pub use tax_bracket::TaxBracket;
