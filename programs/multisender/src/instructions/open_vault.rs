use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::MultiSenderError;
use crate::state::SenderConfig;
use crate::utils::validate::is_asset_address;

impl OpenVault<'_> {
    /// Creates the per-mint vault used by indirect custody. Anyone may pay for it.
    pub fn handler(ctx: Context<OpenVault>) -> Result<()> {
        emit!(VaultOpened {
            mint: ctx.accounts.mint.key(),
            vault: ctx.accounts.vault.key(),
            payer: ctx.accounts.payer.key(),
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct OpenVault<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, SenderConfig>,

    /// CHECK: null key rejected here; the token program validates the mint
    /// when initializing the vault.
    #[account(
        constraint = is_asset_address(&mint.key()) @ MultiSenderError::InvalidAssetAddress,
    )]
    pub mint: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = config,
        seeds = [VAULT_SEED, mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VaultOpened {
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub payer: Pubkey,
}
