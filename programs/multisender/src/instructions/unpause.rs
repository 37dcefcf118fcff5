use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::SenderConfig;

impl Unpause<'_> {
    pub fn handler(ctx: Context<Unpause>) -> Result<()> {
        let caller = ctx.accounts.authority.key();
        ctx.accounts.config.unpause(&caller)?;
        emit!(SenderUnpaused { authority: caller });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, SenderConfig>,
    pub authority: Signer<'info>,
}

#[event]
pub struct SenderUnpaused {
    pub authority: Pubkey,
}
