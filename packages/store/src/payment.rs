//! # Payment dialog state machine
//!
//! ```text
//!  Selecting { choice } ──proceed──▶ Confirming(Efectivo | Bancard) ──submit──▶ Submitting ──▶ Done
//!        ▲                 │                    │
//!        │                 └──proceed──▶ Transfer { accounts } ──submit──▶ Submitting
//!        └─────────back───────────────────────┘
//! ```
//!
//! - The method can only change in `Selecting`. Once `Transfer` is entered
//!   the user must go `back` before picking something else.
//! - The proof of payment is optional and only accepted in `Transfer`; going
//!   back releases it (and its preview URL).
//! - A failed submit returns to the step it came from, keeping the proof.

use thiserror::Error;

use crate::models::{BankAccount, PaymentMethod};
use crate::proof::{HeldProof, ObjectUrls, ProofCandidate, ProofError, ProofSlot};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Elegí un método de pago")]
    NoMethodSelected,
    #[error("Volvé a la selección para cambiar el método de pago")]
    MethodLocked,
    #[error("Acción no disponible en este paso")]
    InvalidStep,
    #[error(transparent)]
    Proof(#[from] ProofError),
}

/// Organizer bank accounts shown during a transfer.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountsState {
    Loading,
    Loaded(Vec<BankAccount>),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaymentStep {
    Selecting { choice: Option<PaymentMethod> },
    /// Cash or card: confirm directly.
    Confirming { method: PaymentMethod },
    Transfer { accounts: AccountsState },
    Submitting { method: PaymentMethod },
    Done { method: PaymentMethod },
}

/// Side effect the caller must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentEffect {
    None,
    FetchAccounts,
}

pub struct PaymentFlow<U: ObjectUrls> {
    step: PaymentStep,
    /// Step to return to when a submit fails.
    before_submit: Option<PaymentStep>,
    proof: ProofSlot<U>,
}

impl<U: ObjectUrls> PaymentFlow<U> {
    /// Start in `Selecting`, preselecting the method chosen at enrollment.
    pub fn new(preselected: Option<PaymentMethod>, urls: U, max_proof_bytes: u64) -> Self {
        Self {
            step: PaymentStep::Selecting {
                choice: preselected,
            },
            before_submit: None,
            proof: ProofSlot::new(urls, max_proof_bytes),
        }
    }

    pub fn step(&self) -> &PaymentStep {
        &self.step
    }

    pub fn choose(&mut self, method: PaymentMethod) -> Result<(), PaymentError> {
        match &mut self.step {
            PaymentStep::Selecting { choice } => {
                *choice = Some(method);
                Ok(())
            }
            PaymentStep::Confirming { .. } | PaymentStep::Transfer { .. } => {
                Err(PaymentError::MethodLocked)
            }
            _ => Err(PaymentError::InvalidStep),
        }
    }

    /// Leave `Selecting` for the follow-up step of the chosen method.
    pub fn proceed(&mut self) -> Result<PaymentEffect, PaymentError> {
        let PaymentStep::Selecting { choice } = &self.step else {
            return Err(PaymentError::InvalidStep);
        };
        match choice.ok_or(PaymentError::NoMethodSelected)? {
            PaymentMethod::Transferencia => {
                self.step = PaymentStep::Transfer {
                    accounts: AccountsState::Loading,
                };
                Ok(PaymentEffect::FetchAccounts)
            }
            method => {
                self.step = PaymentStep::Confirming { method };
                Ok(PaymentEffect::None)
            }
        }
    }

    /// Record the account fetch outcome. Ignored unless still waiting in
    /// `Transfer`, so a late response after `back` changes nothing.
    pub fn accounts_loaded(&mut self, result: Result<Vec<BankAccount>, String>) {
        if let PaymentStep::Transfer { accounts } = &mut self.step {
            if *accounts == AccountsState::Loading {
                *accounts = match result {
                    Ok(list) => AccountsState::Loaded(list),
                    Err(msg) => AccountsState::Failed(msg),
                };
            }
        }
    }

    pub fn back(&mut self) -> Result<(), PaymentError> {
        let method = match &self.step {
            PaymentStep::Confirming { method } => *method,
            PaymentStep::Transfer { .. } => PaymentMethod::Transferencia,
            _ => return Err(PaymentError::InvalidStep),
        };
        self.proof.release();
        self.step = PaymentStep::Selecting {
            choice: Some(method),
        };
        Ok(())
    }

    /// Accept a proof image. Only allowed while in `Transfer`.
    pub fn select_proof(
        &mut self,
        source: U::Source,
        meta: ProofCandidate,
    ) -> Result<&HeldProof<U::Source>, PaymentError> {
        if !matches!(self.step, PaymentStep::Transfer { .. }) {
            return Err(PaymentError::InvalidStep);
        }
        Ok(self.proof.select(source, meta)?)
    }

    pub fn remove_proof(&mut self) {
        self.proof.release();
    }

    pub fn proof(&self) -> Option<&HeldProof<U::Source>> {
        self.proof.held()
    }

    /// Begin submitting. Returns the method to send.
    pub fn submit(&mut self) -> Result<PaymentMethod, PaymentError> {
        let method = match &self.step {
            PaymentStep::Confirming { method } => *method,
            PaymentStep::Transfer { .. } => PaymentMethod::Transferencia,
            _ => return Err(PaymentError::InvalidStep),
        };
        let previous = std::mem::replace(&mut self.step, PaymentStep::Submitting { method });
        self.before_submit = Some(previous);
        Ok(method)
    }

    pub fn submit_failed(&mut self) {
        if matches!(self.step, PaymentStep::Submitting { .. }) {
            if let Some(previous) = self.before_submit.take() {
                self.step = previous;
            }
        }
    }

    /// Finish the flow. The proof has been uploaded, so its preview is released.
    pub fn submit_succeeded(&mut self) {
        if let PaymentStep::Submitting { method } = self.step {
            self.before_submit = None;
            self.proof.release();
            self.step = PaymentStep::Done { method };
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.step, PaymentStep::Submitting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::MAX_PROOF_BYTES;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingUrls {
        live: Rc<RefCell<u32>>,
    }

    impl ObjectUrls for CountingUrls {
        type Source = ();

        fn create(&self, _: &()) -> Option<String> {
            *self.live.borrow_mut() += 1;
            Some(format!("blob:test/{}", self.live.borrow()))
        }

        fn revoke(&self, _: &str) {
            *self.live.borrow_mut() -= 1;
        }
    }

    fn flow() -> (PaymentFlow<CountingUrls>, CountingUrls) {
        let urls = CountingUrls::default();
        (PaymentFlow::new(None, urls.clone(), MAX_PROOF_BYTES), urls)
    }

    fn jpeg() -> ProofCandidate {
        ProofCandidate {
            name: "comprobante.jpg".into(),
            mime: "image/jpeg".into(),
            size: 80_000,
        }
    }

    fn account() -> BankAccount {
        BankAccount {
            banco: "Banco Itaú".into(),
            titular: "Club Padel Luque".into(),
            numero_cuenta: "123-456".into(),
            documento_titular: "80012345-6".into(),
            alias: None,
        }
    }

    #[test]
    fn proceed_requires_a_choice() {
        let (mut f, _) = flow();
        assert_eq!(f.proceed(), Err(PaymentError::NoMethodSelected));
    }

    #[test]
    fn cash_and_card_confirm_directly() {
        for method in [PaymentMethod::Efectivo, PaymentMethod::Bancard] {
            let (mut f, _) = flow();
            f.choose(method).unwrap();
            assert_eq!(f.proceed(), Ok(PaymentEffect::None));
            assert_eq!(f.step(), &PaymentStep::Confirming { method });
            assert_eq!(f.submit(), Ok(method));
            f.submit_succeeded();
            assert_eq!(f.step(), &PaymentStep::Done { method });
        }
    }

    #[test]
    fn transfer_fetches_accounts_and_locks_method() {
        let (mut f, _) = flow();
        f.choose(PaymentMethod::Transferencia).unwrap();
        assert_eq!(f.proceed(), Ok(PaymentEffect::FetchAccounts));
        assert_eq!(
            f.step(),
            &PaymentStep::Transfer { accounts: AccountsState::Loading }
        );

        f.accounts_loaded(Ok(vec![account()]));
        assert_eq!(
            f.step(),
            &PaymentStep::Transfer { accounts: AccountsState::Loaded(vec![account()]) }
        );

        assert_eq!(f.choose(PaymentMethod::Efectivo), Err(PaymentError::MethodLocked));
        assert_eq!(f.proceed(), Err(PaymentError::InvalidStep));
    }

    #[test]
    fn transfer_can_submit_without_proof() {
        let (mut f, _) = flow();
        f.choose(PaymentMethod::Transferencia).unwrap();
        f.proceed().unwrap();
        assert!(f.proof().is_none());
        assert_eq!(f.submit(), Ok(PaymentMethod::Transferencia));
    }

    #[test]
    fn back_releases_proof_and_reopens_selection() {
        let (mut f, urls) = flow();
        f.choose(PaymentMethod::Transferencia).unwrap();
        f.proceed().unwrap();
        f.select_proof((), jpeg()).unwrap();
        assert_eq!(*urls.live.borrow(), 1);

        f.back().unwrap();
        assert_eq!(*urls.live.borrow(), 0);
        assert_eq!(
            f.step(),
            &PaymentStep::Selecting { choice: Some(PaymentMethod::Transferencia) }
        );
        f.choose(PaymentMethod::Efectivo).unwrap();
    }

    #[test]
    fn late_accounts_after_back_are_ignored() {
        let (mut f, _) = flow();
        f.choose(PaymentMethod::Transferencia).unwrap();
        f.proceed().unwrap();
        f.back().unwrap();
        f.accounts_loaded(Ok(vec![account()]));
        assert!(matches!(f.step(), PaymentStep::Selecting { .. }));
    }

    #[test]
    fn proof_only_accepted_in_transfer() {
        let (mut f, _) = flow();
        f.choose(PaymentMethod::Efectivo).unwrap();
        f.proceed().unwrap();
        assert_eq!(f.select_proof((), jpeg()).err(), Some(PaymentError::InvalidStep));
    }

    #[test]
    fn failed_submit_returns_to_transfer_keeping_proof() {
        let (mut f, urls) = flow();
        f.choose(PaymentMethod::Transferencia).unwrap();
        f.proceed().unwrap();
        f.accounts_loaded(Err("sin cuentas".into()));
        f.select_proof((), jpeg()).unwrap();
        f.submit().unwrap();
        assert!(f.is_submitting());

        f.submit_failed();
        assert_eq!(
            f.step(),
            &PaymentStep::Transfer { accounts: AccountsState::Failed("sin cuentas".into()) }
        );
        assert!(f.proof().is_some());
        assert_eq!(*urls.live.borrow(), 1);

        f.submit().unwrap();
        f.submit_succeeded();
        assert_eq!(*urls.live.borrow(), 0);
    }

    #[test]
    fn invalid_proof_surfaces_proof_error() {
        let (mut f, _) = flow();
        f.choose(PaymentMethod::Transferencia).unwrap();
        f.proceed().unwrap();
        let pdf = ProofCandidate {
            name: "x.pdf".into(),
            mime: "application/pdf".into(),
            size: 10,
        };
        assert_eq!(
            f.select_proof((), pdf).err(),
            Some(PaymentError::Proof(ProofError::NotAnImage))
        );
    }
}
