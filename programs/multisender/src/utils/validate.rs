//! Shape checks applied before any value moves.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::error::MultiSenderError;
use crate::state::DistributionRequest;

/// The null address never names an asset.
pub fn is_asset_address(key: &Pubkey) -> bool {
    *key != Pubkey::default()
}

/// Rejects empty lists (including empty groups) and groups/rates of
/// different lengths.
pub fn validate_request(request: &DistributionRequest) -> Result<()> {
    match request {
        DistributionRequest::PerRecipient(recipients) => {
            require!(!recipients.is_empty(), MultiSenderError::ArrayZeroLength);
        }
        DistributionRequest::Uniform { addresses, .. } => {
            require!(!addresses.is_empty(), MultiSenderError::ArrayZeroLength);
        }
        DistributionRequest::Grouped { groups, rates } => {
            require!(
                !groups.is_empty() && !rates.is_empty(),
                MultiSenderError::ArrayZeroLength
            );
            require_eq!(
                groups.len(),
                rates.len(),
                MultiSenderError::ArrayLengthMismatch
            );
            require!(
                groups.iter().all(|group| !group.is_empty()),
                MultiSenderError::ArrayZeroLength
            );
        }
    }
    Ok(())
}

/// Associated token accounts of `wallets` for `mint`, in order.
pub fn recipient_token_accounts(wallets: &[Pubkey], mint: &Pubkey) -> Vec<Pubkey> {
    wallets
        .iter()
        .map(|wallet| get_associated_token_address(wallet, mint))
        .collect()
}

/// Remaining accounts must name exactly the expected recipients, in order.
pub fn require_recipient_keys(expected: &[Pubkey], supplied: &[Pubkey]) -> Result<()> {
    require_eq!(
        supplied.len(),
        expected.len(),
        MultiSenderError::RecipientAccountMismatch
    );
    for (index, (want, got)) in expected.iter().zip(supplied).enumerate() {
        if want != got {
            msg!("recipient account #{} is {}, expected {}", index, got, want);
        }
        require_keys_eq!(*got, *want, MultiSenderError::RecipientAccountMismatch);
    }
    Ok(())
}
