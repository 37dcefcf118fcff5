use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;
pub use utils::custody::AssetCustody;

declare_id!("2jdoWTNz9911L9q3H8TAQ5VsXLEYSHwcBzbzyhAZwH81");

#[program]
pub mod multisender {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, governor: Pubkey) -> Result<()> {
        Initialize::handler(ctx, governor)
    }

    pub fn set_governor(ctx: Context<SetGovernor>, new_governor: Pubkey) -> Result<()> {
        SetGovernor::handler(ctx, new_governor)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        TransferOwnership::handler(ctx, new_owner)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        Pause::handler(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        Unpause::handler(ctx)
    }

    pub fn emit_sender_status(ctx: Context<EmitSenderStatus>) -> Result<()> {
        EmitSenderStatus::handler(ctx)
    }

    pub fn open_vault(ctx: Context<OpenVault>) -> Result<()> {
        OpenVault::handler(ctx)
    }

    pub fn send_native<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendNative<'info>>,
        attached: u64,
        recipients: Vec<Recipient>,
    ) -> Result<()> {
        SendNative::handler(ctx, attached, DistributionRequest::PerRecipient(recipients))
    }

    pub fn send_native_uniform<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendNative<'info>>,
        attached: u64,
        addresses: Vec<Pubkey>,
        amount: u64,
    ) -> Result<()> {
        SendNative::handler(
            ctx,
            attached,
            DistributionRequest::Uniform { addresses, amount },
        )
    }

    pub fn send_native_grouped<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendNative<'info>>,
        attached: u64,
        groups: Vec<Vec<Pubkey>>,
        rates: Vec<u64>,
    ) -> Result<()> {
        SendNative::handler(ctx, attached, DistributionRequest::Grouped { groups, rates })
    }

    pub fn send_asset_direct<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendAsset<'info>>,
        recipients: Vec<Recipient>,
    ) -> Result<()> {
        SendAsset::handler(
            ctx,
            AssetCustody::Direct,
            DistributionRequest::PerRecipient(recipients),
        )
    }

    pub fn send_asset_direct_uniform<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendAsset<'info>>,
        addresses: Vec<Pubkey>,
        amount: u64,
    ) -> Result<()> {
        SendAsset::handler(
            ctx,
            AssetCustody::Direct,
            DistributionRequest::Uniform { addresses, amount },
        )
    }

    pub fn send_asset_direct_grouped<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendAsset<'info>>,
        groups: Vec<Vec<Pubkey>>,
        rates: Vec<u64>,
    ) -> Result<()> {
        SendAsset::handler(
            ctx,
            AssetCustody::Direct,
            DistributionRequest::Grouped { groups, rates },
        )
    }

    pub fn send_asset_indirect<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendAsset<'info>>,
        total: u64,
        recipients: Vec<Recipient>,
    ) -> Result<()> {
        SendAsset::handler(
            ctx,
            AssetCustody::Indirect {
                declared_total: total,
            },
            DistributionRequest::PerRecipient(recipients),
        )
    }

    pub fn send_asset_indirect_uniform<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendAsset<'info>>,
        total: u64,
        addresses: Vec<Pubkey>,
        amount: u64,
    ) -> Result<()> {
        SendAsset::handler(
            ctx,
            AssetCustody::Indirect {
                declared_total: total,
            },
            DistributionRequest::Uniform { addresses, amount },
        )
    }

    pub fn send_asset_indirect_grouped<'info>(
        ctx: Context<'_, '_, 'info, 'info, SendAsset<'info>>,
        total: u64,
        groups: Vec<Vec<Pubkey>>,
        rates: Vec<u64>,
    ) -> Result<()> {
        SendAsset::handler(
            ctx,
            AssetCustody::Indirect {
                declared_total: total,
            },
            DistributionRequest::Grouped { groups, rates },
        )
    }
}
