use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::error::MultiSenderError;
use crate::state::{DistributionRequest, Recipient, SenderConfig};
use crate::utils::custody::{AssetCustody, CustodyLedger};
use crate::utils::payout::PayoutPlan;
use crate::utils::validate::{is_asset_address, recipient_token_accounts, require_recipient_keys};

impl<'info> SendAsset<'info> {
    /// Pays SPL tokens of `mint` to every recipient's associated token
    /// account. The ATAs are passed as writable remaining accounts, in payout
    /// order.
    pub fn handler(
        ctx: Context<'_, '_, 'info, 'info, SendAsset<'info>>,
        custody: AssetCustody,
        request: DistributionRequest,
    ) -> Result<()> {
        let mint = ctx.accounts.mint.key();
        let sender = ctx.accounts.sender.key();
        let plan = PayoutPlan::for_asset(&ctx.accounts.config, &custody, &request)?;

        let expected = recipient_token_accounts(&plan.wallets(), &mint);
        let supplied: Vec<Pubkey> = ctx.remaining_accounts.iter().map(|a| a.key()).collect();
        require_recipient_keys(&expected, &supplied)?;

        let bump = [ctx.accounts.config.bump];
        let config_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &bump]];
        let mut ledger = SplLedger {
            token_program: ctx.accounts.token_program.to_account_info(),
            sender: ctx.accounts.sender.to_account_info(),
            sender_token: ctx.accounts.sender_token.to_account_info(),
            config: ctx.accounts.config.to_account_info(),
            config_seeds,
            vault: ctx.accounts.vault.as_mut(),
            recipients: ctx.remaining_accounts,
        };
        custody.settle(&plan, &mut ledger)?;

        emit!(AssetDistributed {
            sender,
            mint,
            indirect: custody.is_indirect(),
            recipient_count: u32::try_from(request.recipient_count())
                .map_err(|_| MultiSenderError::MathOverflow)?,
            total: plan.total,
            batch_digest: plan.digest(),
        });
        Ok(())
    }
}

struct SplLedger<'a, 'info> {
    token_program: AccountInfo<'info>,
    sender: AccountInfo<'info>,
    sender_token: AccountInfo<'info>,
    config: AccountInfo<'info>,
    config_seeds: &'a [&'a [&'a [u8]]],
    /// Absent for direct custody.
    vault: Option<&'a mut Account<'info, TokenAccount>>,
    recipients: &'a [AccountInfo<'info>],
}

impl<'info> SplLedger<'_, 'info> {
    fn vault(&mut self) -> Result<&mut Account<'info, TokenAccount>> {
        self.vault
            .as_deref_mut()
            .ok_or_else(|| error!(MultiSenderError::VaultRequired))
    }

    fn recipient(&self, index: usize) -> Result<AccountInfo<'info>> {
        self.recipients
            .get(index)
            .cloned()
            .ok_or_else(|| error!(MultiSenderError::RecipientAccountMismatch))
    }

    fn transfer(
        &self,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        signer_seeds: &[&[&[u8]]],
        amount: u64,
    ) -> Result<()> {
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from,
                    to,
                    authority,
                },
                signer_seeds,
            ),
            amount,
        )
    }
}

impl CustodyLedger for SplLedger<'_, '_> {
    fn pay_from_sender(&mut self, index: usize, payout: &Recipient) -> Result<()> {
        let to = self.recipient(index)?;
        self.transfer(
            self.sender_token.clone(),
            to,
            self.sender.clone(),
            &[],
            payout.amount,
        )
        .map_err(|e| {
            msg!("asset transfer #{} to {} failed: {}", index, payout.wallet, e);
            error!(MultiSenderError::AssetTransferFail)
        })
    }

    fn pull_into_vault(&mut self, amount: u64) -> Result<()> {
        let vault = self.vault()?.to_account_info();
        self.transfer(self.sender_token.clone(), vault, self.sender.clone(), &[], amount)
            .map_err(|e| {
                msg!("pull of {} into vault failed: {}", amount, e);
                error!(MultiSenderError::AssetTransferFail)
            })
    }

    fn pay_from_vault(&mut self, index: usize, payout: &Recipient) -> Result<()> {
        let vault = self.vault()?.to_account_info();
        let to = self.recipient(index)?;
        self.transfer(
            vault,
            to,
            self.config.clone(),
            self.config_seeds,
            payout.amount,
        )
        .map_err(|e| {
            msg!("asset transfer #{} to {} failed: {}", index, payout.wallet, e);
            error!(MultiSenderError::AssetTransferFail)
        })
    }

    fn vault_balance(&mut self) -> Result<u64> {
        let vault = self.vault()?;
        vault.reload()?;
        Ok(vault.amount)
    }
}

#[derive(Accounts)]
pub struct SendAsset<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, SenderConfig>,

    /// CHECK: only the key is used; the token program enforces that source,
    /// vault and recipient accounts all belong to this mint.
    #[account(
        constraint = is_asset_address(&mint.key()) @ MultiSenderError::InvalidAssetAddress,
    )]
    pub mint: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = sender_token.mint == mint.key() @ MultiSenderError::InvalidTokenMint,
        constraint = sender_token.owner == sender.key() @ MultiSenderError::InvalidTokenAccount,
    )]
    pub sender_token: Account<'info, TokenAccount>,

    /// Required for indirect custody only.
    #[account(
        mut,
        seeds = [VAULT_SEED, mint.key().as_ref()],
        bump,
        constraint = vault.mint == mint.key() @ MultiSenderError::InvalidTokenMint,
    )]
    pub vault: Option<Account<'info, TokenAccount>>,

    pub sender: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AssetDistributed {
    pub sender: Pubkey,
    pub mint: Pubkey,
    pub indirect: bool,
    pub recipient_count: u32,
    pub total: u64,
    pub batch_digest: [u8; 32],
}
