use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::SenderConfig;

impl EmitSenderStatus<'_> {
    /// Read-only: publishes the gate state as an event.
    pub fn handler(ctx: Context<EmitSenderStatus>) -> Result<()> {
        let cfg = &ctx.accounts.config;
        emit!(SenderStatus {
            owner: cfg.owner,
            governor: cfg.governor,
            paused: cfg.paused,
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct EmitSenderStatus<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, SenderConfig>,
}

#[event]
pub struct SenderStatus {
    pub owner: Pubkey,
    pub governor: Pubkey,
    pub paused: bool,
}
