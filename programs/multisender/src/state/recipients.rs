use anchor_lang::prelude::*;

/// Instruction input (wallet + owed amount). Also the unit of one payout.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recipient {
    pub wallet: Pubkey,
    pub amount: u64,
}

/// The three call shapes, built per invocation and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DistributionRequest {
    /// Amount varies per recipient.
    PerRecipient(Vec<Recipient>),
    /// Every address receives `amount`.
    Uniform { addresses: Vec<Pubkey>, amount: u64 },
    /// `groups[i]` all receive `rates[i]`.
    Grouped {
        groups: Vec<Vec<Pubkey>>,
        rates: Vec<u64>,
    },
}

impl DistributionRequest {
    /// Number of payouts the request expands to.
    pub fn recipient_count(&self) -> usize {
        match self {
            Self::PerRecipient(recipients) => recipients.len(),
            Self::Uniform { addresses, .. } => addresses.len(),
            Self::Grouped { groups, .. } => groups.iter().map(Vec::len).sum(),
        }
    }

    /// Flattens the request into payouts, in caller order.
    ///
    /// Groups are expanded in order, each group's addresses in order. A
    /// grouped request with mismatched lengths pairs only the common prefix,
    /// so validate the request before relying on the result.
    pub fn payouts(&self) -> Vec<Recipient> {
        match self {
            Self::PerRecipient(recipients) => recipients.clone(),
            Self::Uniform { addresses, amount } => addresses
                .iter()
                .map(|wallet| Recipient {
                    wallet: *wallet,
                    amount: *amount,
                })
                .collect(),
            Self::Grouped { groups, rates } => groups
                .iter()
                .zip(rates)
                .flat_map(|(group, rate)| {
                    group.iter().map(move |wallet| Recipient {
                        wallet: *wallet,
                        amount: *rate,
                    })
                })
                .collect(),
        }
    }
}
