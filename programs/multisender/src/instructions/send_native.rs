use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::CONFIG_SEED;
use crate::error::MultiSenderError;
use crate::state::{DistributionRequest, Recipient, SenderConfig};
use crate::utils::payout::{PayoutPlan, PayoutSink};
use crate::utils::validate::require_recipient_keys;

impl<'info> SendNative<'info> {
    /// Pays lamports from the sender to every recipient. Recipient wallets
    /// are passed as writable remaining accounts, in payout order.
    pub fn handler(
        ctx: Context<'_, '_, 'info, 'info, SendNative<'info>>,
        attached: u64,
        request: DistributionRequest,
    ) -> Result<()> {
        let plan = PayoutPlan::for_native(&ctx.accounts.config, attached, &request)?;

        let supplied: Vec<Pubkey> = ctx.remaining_accounts.iter().map(|a| a.key()).collect();
        require_recipient_keys(&plan.wallets(), &supplied)?;

        let mut sink = LamportSink {
            system_program: ctx.accounts.system_program.to_account_info(),
            sender: ctx.accounts.sender.to_account_info(),
            recipients: ctx.remaining_accounts,
        };
        plan.distribute(&mut sink)?;

        emit!(NativeDistributed {
            sender: ctx.accounts.sender.key(),
            recipient_count: u32::try_from(request.recipient_count())
                .map_err(|_| MultiSenderError::MathOverflow)?,
            total: plan.total,
            batch_digest: plan.digest(),
        });
        Ok(())
    }
}

struct LamportSink<'a, 'info> {
    system_program: AccountInfo<'info>,
    sender: AccountInfo<'info>,
    recipients: &'a [AccountInfo<'info>],
}

impl PayoutSink for LamportSink<'_, '_> {
    fn pay(&mut self, index: usize, payout: &Recipient) -> Result<()> {
        let recipient = self
            .recipients
            .get(index)
            .ok_or(MultiSenderError::RecipientAccountMismatch)?;
        if !recipient.is_writable {
            msg!("recipient #{} ({}) is not writable", index, payout.wallet);
            return err!(MultiSenderError::NativeTransferFail);
        }

        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                Transfer {
                    from: self.sender.clone(),
                    to: recipient.clone(),
                },
            ),
            payout.amount,
        )
        .map_err(|e| {
            msg!("native transfer #{} to {} failed: {}", index, payout.wallet, e);
            error!(MultiSenderError::NativeTransferFail)
        })
    }
}

#[derive(Accounts)]
pub struct SendNative<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, SenderConfig>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct NativeDistributed {
    pub sender: Pubkey,
    pub recipient_count: u32,
    pub total: u64,
    pub batch_digest: [u8; 32],
}
