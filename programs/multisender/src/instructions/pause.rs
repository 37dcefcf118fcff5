use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::SenderConfig;

impl Pause<'_> {
    pub fn handler(ctx: Context<Pause>) -> Result<()> {
        let caller = ctx.accounts.authority.key();
        ctx.accounts.config.pause(&caller)?;
        emit!(SenderPaused { authority: caller });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, SenderConfig>,
    pub authority: Signer<'info>,
}

#[event]
pub struct SenderPaused {
    pub authority: Pubkey,
}
