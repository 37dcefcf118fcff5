//! Payout planning and the ordered transfer loop shared by every
//! distribution entry point.

use anchor_lang::prelude::*;

use crate::error::MultiSenderError;
use crate::state::{DistributionRequest, Recipient, SenderConfig};
use crate::utils::accounting::{computed_total, require_total_matches};
use crate::utils::custody::AssetCustody;
use crate::utils::validate::validate_request;

/// Moves one payout. Implemented per value kind by the instruction handlers.
pub trait PayoutSink {
    fn pay(&mut self, index: usize, payout: &Recipient) -> Result<()>;
}

/// A validated, reconciled batch. Nothing has moved yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoutPlan {
    pub payouts: Vec<Recipient>,
    pub total: u64,
}

impl PayoutPlan {
    /// Input shape, then the pause gate, then `attached == computed`.
    pub fn for_native(
        config: &SenderConfig,
        attached: u64,
        request: &DistributionRequest,
    ) -> Result<Self> {
        validate_request(request)?;
        config.require_active()?;
        let total = computed_total(request)?;
        require_total_matches(attached, total)?;
        Ok(Self {
            payouts: request.payouts(),
            total,
        })
    }

    /// Input shape, then the pause gate, then the custody reconciliation.
    pub fn for_asset(
        config: &SenderConfig,
        custody: &AssetCustody,
        request: &DistributionRequest,
    ) -> Result<Self> {
        validate_request(request)?;
        config.require_active()?;
        let total = computed_total(request)?;
        custody.reconcile(total)?;
        Ok(Self {
            payouts: request.payouts(),
            total,
        })
    }

    pub fn wallets(&self) -> Vec<Pubkey> {
        self.payouts.iter().map(|p| p.wallet).collect()
    }

    /// BLAKE3 over the ordered (wallet, amount) pairs.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        for payout in &self.payouts {
            hasher.update(payout.wallet.as_ref());
            hasher.update(&payout.amount.to_le_bytes());
        }
        hasher.finalize().into()
    }

    /// Pays every recipient in order. The first failure aborts the batch;
    /// the runtime discards the transfers already made.
    pub fn distribute<S: PayoutSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let mut moved: u64 = 0;
        for (index, payout) in self.payouts.iter().enumerate() {
            sink.pay(index, payout)?;
            moved = moved
                .checked_add(payout.amount)
                .ok_or(MultiSenderError::MathOverflow)?;
        }
        require_total_matches(self.total, moved)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use anchor_lang::error::Error;

    use super::*;
    use crate::utils::accounting::tests::mismatch_values;
    use crate::utils::custody::CustodyLedger;

    /// Which value a ledger moves; a refused transfer fails with its error.
    #[derive(Clone, Copy)]
    enum Value {
        Native,
        Asset,
    }

    impl Value {
        fn refused(self) -> Error {
            match self {
                Value::Native => error!(MultiSenderError::NativeTransferFail),
                Value::Asset => error!(MultiSenderError::AssetTransferFail),
            }
        }
    }

    /// Balance book with all-or-nothing invocations, standing in for the
    /// runtime's transaction rollback.
    #[derive(Default)]
    struct Ledger {
        balances: BTreeMap<Pubkey, u64>,
        rejecting: BTreeSet<Pubkey>,
    }

    struct Staged<'a> {
        value: Value,
        balances: BTreeMap<Pubkey, u64>,
        rejecting: &'a BTreeSet<Pubkey>,
    }

    impl Ledger {
        fn balance(&self, key: &Pubkey) -> u64 {
            self.balances.get(key).copied().unwrap_or(0)
        }

        fn credit(&mut self, key: Pubkey, amount: u64) {
            *self.balances.entry(key).or_default() += amount;
        }

        fn invoke<F>(&mut self, value: Value, f: F) -> Result<()>
        where
            F: FnOnce(&mut Staged<'_>) -> Result<()>,
        {
            let mut staged = Staged {
                value,
                balances: self.balances.clone(),
                rejecting: &self.rejecting,
            };
            f(&mut staged)?;
            self.balances = staged.balances;
            Ok(())
        }
    }

    impl Staged<'_> {
        fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<()> {
            let value = self.value;
            if self.rejecting.contains(&to) {
                return Err(value.refused());
            }
            let src = self.balances.entry(from).or_default();
            *src = src.checked_sub(amount).ok_or_else(|| value.refused())?;
            *self.balances.entry(to).or_default() += amount;
            Ok(())
        }

        fn balance(&self, key: &Pubkey) -> u64 {
            self.balances.get(key).copied().unwrap_or(0)
        }
    }

    struct FromSource<'s, 'a> {
        ledger: &'s mut Staged<'a>,
        source: Pubkey,
        paid: Vec<usize>,
    }

    impl PayoutSink for FromSource<'_, '_> {
        fn pay(&mut self, index: usize, payout: &Recipient) -> Result<()> {
            self.ledger.transfer(self.source, payout.wallet, payout.amount)?;
            self.paid.push(index);
            Ok(())
        }
    }

    /// Sender token account plus the mint vault.
    struct TokenBook<'s, 'a> {
        ledger: &'s mut Staged<'a>,
        sender: Pubkey,
        vault: Pubkey,
    }

    impl CustodyLedger for TokenBook<'_, '_> {
        fn pay_from_sender(&mut self, _index: usize, payout: &Recipient) -> Result<()> {
            self.ledger.transfer(self.sender, payout.wallet, payout.amount)
        }

        fn pull_into_vault(&mut self, amount: u64) -> Result<()> {
            self.ledger.transfer(self.sender, self.vault, amount)
        }

        fn pay_from_vault(&mut self, _index: usize, payout: &Recipient) -> Result<()> {
            self.ledger.transfer(self.vault, payout.wallet, payout.amount)
        }

        fn vault_balance(&mut self) -> Result<u64> {
            Ok(self.ledger.balance(&self.vault))
        }
    }

    fn send_native(
        ledger: &mut Ledger,
        config: &SenderConfig,
        sender: Pubkey,
        attached: u64,
        request: &DistributionRequest,
    ) -> Result<()> {
        ledger.invoke(Value::Native, |staged| {
            let plan = PayoutPlan::for_native(config, attached, request)?;
            let mut sink = FromSource {
                ledger: staged,
                source: sender,
                paid: vec![],
            };
            plan.distribute(&mut sink)?;
            assert_eq!(sink.paid, (0..plan.payouts.len()).collect::<Vec<_>>());
            Ok(())
        })
    }

    fn send_asset(
        ledger: &mut Ledger,
        config: &SenderConfig,
        sender: Pubkey,
        vault: Pubkey,
        custody: AssetCustody,
        request: &DistributionRequest,
    ) -> Result<()> {
        ledger.invoke(Value::Asset, |staged| {
            let plan = PayoutPlan::for_asset(config, &custody, request)?;
            custody.settle(
                &plan,
                &mut TokenBook {
                    ledger: staged,
                    sender,
                    vault,
                },
            )
        })
    }

    fn active(owner: Pubkey) -> SenderConfig {
        SenderConfig {
            owner,
            governor: Pubkey::default(),
            paused: false,
            bump: 254,
        }
    }

    fn setup(recipients: usize, funds: u64) -> (Ledger, Pubkey, Vec<Pubkey>) {
        let mut ledger = Ledger::default();
        let sender = Pubkey::new_unique();
        ledger.credit(sender, funds);
        let wallets: Vec<Pubkey> = (0..recipients).map(|_| Pubkey::new_unique()).collect();
        for (i, wallet) in wallets.iter().enumerate() {
            ledger.credit(*wallet, i as u64);
        }
        (ledger, sender, wallets)
    }

    fn snapshot(ledger: &Ledger, keys: &[Pubkey]) -> Vec<u64> {
        keys.iter().map(|k| ledger.balance(k)).collect()
    }

    #[test]
    fn exact_attachment_pays_everyone() {
        let (mut ledger, sender, wallets) = setup(10, 50_000);
        let before = snapshot(&ledger, &wallets);
        let request = DistributionRequest::Uniform {
            addresses: wallets.clone(),
            amount: 1_000,
        };

        send_native(&mut ledger, &active(sender), sender, 10_000, &request).unwrap();

        for (wallet, prior) in wallets.iter().zip(before) {
            assert_eq!(ledger.balance(wallet), prior + 1_000);
        }
        assert_eq!(ledger.balance(&sender), 40_000);
    }

    #[test]
    fn over_attachment_moves_nothing() {
        let (mut ledger, sender, wallets) = setup(10, 50_000);
        let before = snapshot(&ledger, &wallets);
        let request = DistributionRequest::Uniform {
            addresses: wallets.clone(),
            amount: 1_000,
        };

        let err = send_native(&mut ledger, &active(sender), sender, 10_001, &request).unwrap_err();

        assert_eq!(
            mismatch_values(err),
            ("10001".to_string(), "10000".to_string())
        );
        assert_eq!(snapshot(&ledger, &wallets), before);
        assert_eq!(ledger.balance(&sender), 50_000);
    }

    #[test]
    fn rejecting_recipient_rolls_back_earlier_payouts() {
        let (mut ledger, sender, wallets) = setup(5, 10_000);
        ledger.rejecting.insert(wallets[3]);
        let before = snapshot(&ledger, &wallets);
        let request = DistributionRequest::Uniform {
            addresses: wallets.clone(),
            amount: 100,
        };

        let err = send_native(&mut ledger, &active(sender), sender, 500, &request).unwrap_err();

        assert_eq!(err, MultiSenderError::NativeTransferFail.into());
        assert_eq!(snapshot(&ledger, &wallets), before);
        assert_eq!(ledger.balance(&sender), 10_000);

        let vault = Pubkey::new_unique();
        let err = send_asset(
            &mut ledger,
            &active(sender),
            sender,
            vault,
            AssetCustody::Direct,
            &request,
        )
        .unwrap_err();

        assert_eq!(err, MultiSenderError::AssetTransferFail.into());
        assert_eq!(snapshot(&ledger, &wallets), before);
        assert_eq!(ledger.balance(&sender), 10_000);
    }

    #[test]
    fn paused_sender_refuses_every_shape() {
        let (mut ledger, sender, wallets) = setup(3, 10_000);
        let mut config = active(sender);
        config.pause(&sender).unwrap();
        let vault = Pubkey::new_unique();
        let before = snapshot(&ledger, &wallets);

        let requests = [
            DistributionRequest::PerRecipient(
                wallets
                    .iter()
                    .map(|w| Recipient { wallet: *w, amount: 1 })
                    .collect(),
            ),
            DistributionRequest::Uniform {
                addresses: wallets.clone(),
                amount: 1,
            },
            DistributionRequest::Grouped {
                groups: vec![wallets.clone()],
                rates: vec![1],
            },
        ];
        for request in &requests {
            let paused: Error = MultiSenderError::OperationPaused.into();
            assert_eq!(
                send_native(&mut ledger, &config, sender, 3, request).unwrap_err(),
                paused
            );
            assert_eq!(
                send_asset(&mut ledger, &config, sender, vault, AssetCustody::Direct, request)
                    .unwrap_err(),
                paused
            );
            assert_eq!(
                send_asset(
                    &mut ledger,
                    &config,
                    sender,
                    vault,
                    AssetCustody::Indirect { declared_total: 3 },
                    request
                )
                .unwrap_err(),
                paused
            );
        }
        assert_eq!(snapshot(&ledger, &wallets), before);

        config.unpause(&sender).unwrap();
        send_native(&mut ledger, &config, sender, 3, &requests[0]).unwrap();
        assert_eq!(config.owner, sender);
        for (wallet, prior) in wallets.iter().zip(before) {
            assert_eq!(ledger.balance(wallet), prior + 1);
        }
    }

    #[test]
    fn empty_list_wins_over_pause() {
        let (mut ledger, sender, _) = setup(0, 10);
        let mut config = active(sender);
        config.pause(&sender).unwrap();

        let err = send_native(
            &mut ledger,
            &config,
            sender,
            0,
            &DistributionRequest::PerRecipient(vec![]),
        )
        .unwrap_err();
        assert_eq!(err, MultiSenderError::ArrayZeroLength.into());
    }

    #[test]
    fn direct_and_indirect_end_in_the_same_place() {
        let (mut direct, sender, wallets) = setup(6, 100_000);
        let mut indirect = Ledger {
            balances: direct.balances.clone(),
            rejecting: BTreeSet::new(),
        };
        let vault = Pubkey::new_unique();
        let config = active(sender);
        let request = DistributionRequest::Grouped {
            groups: vec![wallets[..2].to_vec(), wallets[2..].to_vec()],
            rates: vec![700, 1_250],
        };

        send_asset(&mut direct, &config, sender, vault, AssetCustody::Direct, &request).unwrap();
        send_asset(
            &mut indirect,
            &config,
            sender,
            vault,
            AssetCustody::Indirect {
                declared_total: 6_400,
            },
            &request,
        )
        .unwrap();

        assert_eq!(snapshot(&direct, &wallets), snapshot(&indirect, &wallets));
        assert_eq!(direct.balance(&sender), 93_600);
        assert_eq!(indirect.balance(&sender), 93_600);
        assert_eq!(indirect.balance(&vault), 0);
    }

    #[test]
    fn indirect_ignores_pre_existing_vault_balance() {
        let (mut ledger, sender, wallets) = setup(4, 10_000);
        let vault = Pubkey::new_unique();
        ledger.credit(vault, 1);
        let config = active(sender);
        let request = DistributionRequest::PerRecipient(
            wallets
                .iter()
                .zip([10u64, 20, 30, 40])
                .map(|(w, amount)| Recipient { wallet: *w, amount })
                .collect(),
        );
        let before = snapshot(&ledger, &wallets);

        for (declared, expected) in [(101u64, ("101", "100")), (99, ("99", "100"))] {
            let err = send_asset(
                &mut ledger,
                &config,
                sender,
                vault,
                AssetCustody::Indirect {
                    declared_total: declared,
                },
                &request,
            )
            .unwrap_err();
            assert_eq!(
                mismatch_values(err),
                (expected.0.to_string(), expected.1.to_string())
            );
            assert_eq!(snapshot(&ledger, &wallets), before);
            assert_eq!(ledger.balance(&vault), 1);
        }

        send_asset(
            &mut ledger,
            &config,
            sender,
            vault,
            AssetCustody::Indirect {
                declared_total: 100,
            },
            &request,
        )
        .unwrap();
        assert_eq!(ledger.balance(&vault), 1);
        assert_eq!(ledger.balance(&sender), 9_900);
        assert_eq!(ledger.balance(&wallets[3]), before[3] + 40);
    }

    #[test]
    fn indirect_failure_leaves_no_custody() {
        let (mut ledger, sender, wallets) = setup(3, 1_000);
        ledger.rejecting.insert(wallets[2]);
        let vault = Pubkey::new_unique();

        let err = send_asset(
            &mut ledger,
            &active(sender),
            sender,
            vault,
            AssetCustody::Indirect {
                declared_total: 30,
            },
            &DistributionRequest::Uniform {
                addresses: wallets.clone(),
                amount: 10,
            },
        )
        .unwrap_err();

        assert_eq!(err, MultiSenderError::AssetTransferFail.into());
        assert_eq!(ledger.balance(&vault), 0);
        assert_eq!(ledger.balance(&sender), 1_000);
    }

    #[test]
    fn digest_tracks_order_and_amounts() {
        let a = Recipient {
            wallet: Pubkey::new_unique(),
            amount: 1,
        };
        let b = Recipient {
            wallet: Pubkey::new_unique(),
            amount: 2,
        };
        let plan = |payouts: Vec<Recipient>| PayoutPlan { payouts, total: 3 };

        assert_eq!(plan(vec![a, b]).digest(), plan(vec![a, b]).digest());
        assert_ne!(plan(vec![a, b]).digest(), plan(vec![b, a]).digest());
        let bumped = Recipient { amount: 3, ..b };
        assert_ne!(plan(vec![a, b]).digest(), plan(vec![a, bumped]).digest());
    }
}
