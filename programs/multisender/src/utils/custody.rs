use anchor_lang::prelude::*;

use crate::error::MultiSenderError;
use crate::state::Recipient;
use crate::utils::accounting::require_total_matches;
use crate::utils::payout::{PayoutPlan, PayoutSink};

/// How asset funds travel from the sender to recipients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetCustody {
    /// One sender-signed transfer per recipient; the program never holds funds.
    Direct,
    /// One pull of `declared_total` into the mint vault, then a push per
    /// recipient signed by the config PDA.
    Indirect { declared_total: u64 },
}

/// Token movements a custody strategy is built from.
pub trait CustodyLedger {
    /// Sender -> recipient, authorized by the sender.
    fn pay_from_sender(&mut self, index: usize, payout: &Recipient) -> Result<()>;
    /// Sender -> vault.
    fn pull_into_vault(&mut self, amount: u64) -> Result<()>;
    /// Vault -> recipient, authorized by the config PDA.
    fn pay_from_vault(&mut self, index: usize, payout: &Recipient) -> Result<()>;
    /// Vault balance as of the last transfer.
    fn vault_balance(&mut self) -> Result<u64>;
}

struct FromSender<'l, L: ?Sized>(&'l mut L);

impl<L: CustodyLedger + ?Sized> PayoutSink for FromSender<'_, L> {
    fn pay(&mut self, index: usize, payout: &Recipient) -> Result<()> {
        self.0.pay_from_sender(index, payout)
    }
}

struct FromVault<'l, L: ?Sized>(&'l mut L);

impl<L: CustodyLedger + ?Sized> PayoutSink for FromVault<'_, L> {
    fn pay(&mut self, index: usize, payout: &Recipient) -> Result<()> {
        self.0.pay_from_vault(index, payout)
    }
}

impl AssetCustody {
    pub fn is_indirect(&self) -> bool {
        matches!(self, Self::Indirect { .. })
    }

    /// Direct transfers are individually sized, so only the indirect
    /// declaration is reconciled. Runs before the pull.
    pub fn reconcile(&self, computed: u64) -> Result<()> {
        match self {
            Self::Direct => Ok(()),
            Self::Indirect { declared_total } => require_total_matches(*declared_total, computed),
        }
    }

    /// Moves a reconciled plan. Indirect custody must leave the vault at its
    /// pre-pull balance, so funds already held are never paid out.
    pub fn settle<L: CustodyLedger + ?Sized>(
        &self,
        plan: &PayoutPlan,
        ledger: &mut L,
    ) -> Result<()> {
        match self {
            Self::Direct => plan.distribute(&mut FromSender(ledger)),
            Self::Indirect { declared_total } => {
                let held_before = ledger.vault_balance()?;
                ledger.pull_into_vault(*declared_total)?;
                plan.distribute(&mut FromVault(&mut *ledger))?;
                let held_after = ledger.vault_balance()?;
                require_eq!(held_after, held_before, MultiSenderError::CustodyImbalance);
                Ok(())
            }
        }
    }
}
