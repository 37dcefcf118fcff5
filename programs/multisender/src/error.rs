use anchor_lang::prelude::*;

/// Custom error codes for the multisender program.
#[error_code]
pub enum MultiSenderError {
    #[msg("Unauthorized: owner or governor signature required")]
    Unauthorized,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Operation is paused")]
    OperationPaused,

    #[msg("Already paused")]
    AlreadyPaused,

    #[msg("Not paused")]
    NotPaused,

    #[msg("Array must not be empty")]
    ArrayZeroLength,

    #[msg("Parallel arrays differ in length")]
    ArrayLengthMismatch,

    #[msg("Invalid asset address")]
    InvalidAssetAddress,

    #[msg("Declared total does not match computed total")]
    TotalMismatch,

    #[msg("Recipient accounts do not match the requested payouts")]
    RecipientAccountMismatch,

    #[msg("Native transfer to recipient failed")]
    NativeTransferFail,

    #[msg("Asset transfer to recipient failed")]
    AssetTransferFail,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Vault account required for indirect custody")]
    VaultRequired,

    #[msg("Vault balance changed across an indirect distribution")]
    CustodyImbalance,

    #[msg("Math overflow")]
    MathOverflow,
}
