use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::MultiSenderError;
use crate::state::SenderConfig;

impl SetGovernor<'_> {
    /// `Pubkey::default()` removes the governor.
    pub fn handler(ctx: Context<SetGovernor>, new_governor: Pubkey) -> Result<()> {
        let config_key = ctx.accounts.config.key();
        require!(new_governor != config_key, MultiSenderError::InvalidPubkey);
        require!(new_governor != crate::ID, MultiSenderError::InvalidPubkey);

        let owner = ctx.accounts.owner.key();
        let old_governor = ctx.accounts.config.set_governor(&owner, new_governor)?;

        emit!(GovernorSet {
            owner,
            old_governor,
            new_governor,
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct SetGovernor<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, SenderConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct GovernorSet {
    pub owner: Pubkey,
    pub old_governor: Pubkey,
    pub new_governor: Pubkey,
}
