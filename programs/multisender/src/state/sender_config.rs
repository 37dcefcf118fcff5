use anchor_lang::prelude::*;

use crate::error::MultiSenderError;

/// Singleton config PDA: the access gate for every mutating entry point.
#[account]
#[derive(InitSpace)]
pub struct SenderConfig {
    /// Primary authority. Sole holder of governor/ownership changes.
    pub owner: Pubkey,
    /// Secondary authority for pause/unpause. `Pubkey::default()` when unset.
    pub governor: Pubkey,
    /// Distributions are refused while set.
    pub paused: bool,
    pub bump: u8,
}

impl SenderConfig {
    pub fn has_governor(&self) -> bool {
        self.governor != Pubkey::default()
    }

    /// Owner, or the governor when one is configured.
    pub fn is_authority(&self, caller: &Pubkey) -> bool {
        *caller == self.owner || (self.has_governor() && *caller == self.governor)
    }

    pub fn require_authority(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_authority(caller), MultiSenderError::Unauthorized);
        Ok(())
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, MultiSenderError::Unauthorized);
        Ok(())
    }

    pub fn require_active(&self) -> Result<()> {
        require!(!self.paused, MultiSenderError::OperationPaused);
        Ok(())
    }

    /// Active -> Paused.
    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.require_authority(caller)?;
        require!(!self.paused, MultiSenderError::AlreadyPaused);
        self.paused = true;
        Ok(())
    }

    /// Paused -> Active.
    pub fn unpause(&mut self, caller: &Pubkey) -> Result<()> {
        self.require_authority(caller)?;
        require!(self.paused, MultiSenderError::NotPaused);
        self.paused = false;
        Ok(())
    }

    /// Replaces the governor, returning the previous one. Default clears it.
    pub fn set_governor(&mut self, caller: &Pubkey, new_governor: Pubkey) -> Result<Pubkey> {
        self.require_owner(caller)?;
        Ok(std::mem::replace(&mut self.governor, new_governor))
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.require_owner(caller)?;
        require!(new_owner != Pubkey::default(), MultiSenderError::InvalidPubkey);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}
