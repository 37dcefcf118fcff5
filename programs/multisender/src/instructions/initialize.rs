use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::MultiSenderError;
use crate::state::SenderConfig;

impl Initialize<'_> {
    pub fn handler(ctx: Context<Initialize>, governor: Pubkey) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        require!(
            governor != ctx.accounts.config.key(),
            MultiSenderError::InvalidPubkey
        );

        let cfg = &mut ctx.accounts.config;
        cfg.owner = owner;
        cfg.governor = governor;
        cfg.paused = false;
        cfg.bump = ctx.bumps.config;

        emit!(SenderInitialized { owner, governor });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + SenderConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, SenderConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct SenderInitialized {
    pub owner: Pubkey,
    pub governor: Pubkey,
}
