use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::MultiSenderError;
use crate::state::SenderConfig;

impl TransferOwnership<'_> {
    pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        // Owner must be able to sign.
        require!(
            new_owner != ctx.accounts.config.key(),
            MultiSenderError::InvalidPubkey
        );
        require!(new_owner != crate::ID, MultiSenderError::InvalidPubkey);

        let caller = ctx.accounts.owner.key();
        let previous_owner = ctx.accounts.config.transfer_ownership(&caller, new_owner)?;

        emit!(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, SenderConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
