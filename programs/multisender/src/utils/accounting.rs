//! Declared-vs-computed total reconciliation.

use anchor_lang::prelude::*;

use crate::error::MultiSenderError;
use crate::state::{DistributionRequest, Recipient};

/// Aggregate owed by a request, derived from its own shape:
/// Σ amount, amount × count, or Σ rate × |group|.
pub fn computed_total(request: &DistributionRequest) -> Result<u64> {
    match request {
        DistributionRequest::PerRecipient(recipients) => sum_amounts(recipients),
        DistributionRequest::Uniform { addresses, amount } => {
            let count = u64::try_from(addresses.len()).map_err(|_| MultiSenderError::MathOverflow)?;
            Ok(amount
                .checked_mul(count)
                .ok_or(MultiSenderError::MathOverflow)?)
        }
        DistributionRequest::Grouped { groups, rates } => {
            let mut total: u64 = 0;
            for (group, rate) in groups.iter().zip(rates) {
                let count = u64::try_from(group.len()).map_err(|_| MultiSenderError::MathOverflow)?;
                let subtotal = rate
                    .checked_mul(count)
                    .ok_or(MultiSenderError::MathOverflow)?;
                total = total
                    .checked_add(subtotal)
                    .ok_or(MultiSenderError::MathOverflow)?;
            }
            Ok(total)
        }
    }
}

pub fn sum_amounts(payouts: &[Recipient]) -> Result<u64> {
    let mut total: u64 = 0;
    for payout in payouts {
        total = total
            .checked_add(payout.amount)
            .ok_or(MultiSenderError::MathOverflow)?;
    }
    Ok(total)
}

/// Fails with `TotalMismatch` carrying (declared, computed) as its compared
/// values.
pub fn require_total_matches(declared: u64, computed: u64) -> Result<()> {
    if declared != computed {
        msg!("total mismatch: declared {} computed {}", declared, computed);
    }
    require_eq!(declared, computed, MultiSenderError::TotalMismatch);
    Ok(())
}
