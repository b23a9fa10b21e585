//! Payment-proof selection and its preview URL lifecycle.
//!
//! A selected proof image is previewed through an object URL. Object URLs
//! pin the file in memory until revoked, so [`ProofSlot`] owns the URL as a
//! scoped resource: selecting another file revokes the previous URL,
//! [`ProofSlot::release`] revokes it explicitly, and dropping the slot
//! revokes whatever is still held. At most one URL is alive per slot.
//!
//! URL creation is abstracted behind [`ObjectUrls`] so the lifecycle is
//! testable without a browser.

use thiserror::Error;

/// Maximum accepted proof size (5 MB).
pub const MAX_PROOF_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    #[error("El comprobante debe ser una imagen")]
    NotAnImage,
    #[error("La imagen supera el tamaño máximo de {max_mb} MB")]
    TooLarge { max_mb: u64 },
    #[error("No se pudo previsualizar la imagen")]
    PreviewFailed,
}

/// Metadata of a file picked by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofCandidate {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl ProofCandidate {
    pub fn check(&self, max_bytes: u64) -> Result<(), ProofError> {
        if !self.mime.starts_with("image/") {
            return Err(ProofError::NotAnImage);
        }
        if self.size > max_bytes {
            return Err(ProofError::TooLarge {
                max_mb: max_bytes / (1024 * 1024),
            });
        }
        Ok(())
    }
}

/// Creates and revokes object URLs for a file handle.
pub trait ObjectUrls {
    type Source;

    fn create(&self, source: &Self::Source) -> Option<String>;
    fn revoke(&self, url: &str);
}

/// An accepted proof together with its live preview URL.
#[derive(Debug)]
pub struct HeldProof<S> {
    pub source: S,
    pub meta: ProofCandidate,
    pub preview_url: String,
}

/// Owner of the dialog's (at most one) proof and preview URL.
pub struct ProofSlot<U: ObjectUrls> {
    urls: U,
    max_bytes: u64,
    held: Option<HeldProof<U::Source>>,
}

impl<U: ObjectUrls> ProofSlot<U> {
    pub fn new(urls: U, max_bytes: u64) -> Self {
        Self {
            urls,
            max_bytes,
            held: None,
        }
    }

    /// Validate and hold a new file. Any previous proof is released first,
    /// so a rejected file leaves the slot empty.
    pub fn select(
        &mut self,
        source: U::Source,
        meta: ProofCandidate,
    ) -> Result<&HeldProof<U::Source>, ProofError> {
        self.release();
        meta.check(self.max_bytes)?;
        let preview_url = self
            .urls
            .create(&source)
            .ok_or(ProofError::PreviewFailed)?;
        Ok(&*self.held.insert(HeldProof {
            source,
            meta,
            preview_url,
        }))
    }

    /// Revoke the preview URL and forget the file.
    pub fn release(&mut self) {
        if let Some(held) = self.held.take() {
            self.urls.revoke(&held.preview_url);
        }
    }

    pub fn held(&self) -> Option<&HeldProof<U::Source>> {
        self.held.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.held.as_ref().map(|h| h.preview_url.as_str())
    }
}

impl<U: ObjectUrls> Drop for ProofSlot<U> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Records live URLs so tests can assert nothing leaks.
    #[derive(Clone, Default)]
    struct FakeUrls {
        live: Rc<RefCell<HashSet<String>>>,
        counter: Rc<RefCell<u32>>,
    }

    impl ObjectUrls for FakeUrls {
        type Source = String;

        fn create(&self, source: &String) -> Option<String> {
            *self.counter.borrow_mut() += 1;
            let url = format!("blob:fake/{}-{}", source, self.counter.borrow());
            self.live.borrow_mut().insert(url.clone());
            Some(url)
        }

        fn revoke(&self, url: &str) {
            self.live.borrow_mut().remove(url);
        }
    }

    fn image(name: &str, size: u64) -> ProofCandidate {
        ProofCandidate {
            name: name.into(),
            mime: "image/jpeg".into(),
            size,
        }
    }

    #[test]
    fn non_image_is_rejected_and_nothing_is_held() {
        let urls = FakeUrls::default();
        let mut slot = ProofSlot::new(urls.clone(), MAX_PROOF_BYTES);
        let pdf = ProofCandidate {
            name: "recibo.pdf".into(),
            mime: "application/pdf".into(),
            size: 1_000,
        };
        assert_eq!(
            slot.select("recibo.pdf".into(), pdf).err(),
            Some(ProofError::NotAnImage)
        );
        assert!(slot.held().is_none());
        assert!(urls.live.borrow().is_empty());
    }

    #[test]
    fn oversized_image_is_rejected_and_nothing_is_held() {
        let urls = FakeUrls::default();
        let mut slot = ProofSlot::new(urls.clone(), MAX_PROOF_BYTES);
        let err = slot
            .select("big.png".into(), image("big.png", MAX_PROOF_BYTES + 1))
            .err();
        assert_eq!(err, Some(ProofError::TooLarge { max_mb: 5 }));
        assert!(slot.held().is_none());
        assert!(urls.live.borrow().is_empty());
    }

    #[test]
    fn exactly_max_size_is_accepted() {
        let mut slot = ProofSlot::new(FakeUrls::default(), MAX_PROOF_BYTES);
        assert!(slot
            .select("ok.png".into(), image("ok.png", MAX_PROOF_BYTES))
            .is_ok());
    }

    #[test]
    fn valid_image_gets_distinct_preview_url() {
        let urls = FakeUrls::default();
        let mut slot = ProofSlot::new(urls.clone(), MAX_PROOF_BYTES);
        let held = slot.select("foto.jpg".into(), image("foto.jpg", 2048)).unwrap();
        assert_ne!(held.preview_url, held.source);
        assert!(held.preview_url.starts_with("blob:"));
        assert_eq!(urls.live.borrow().len(), 1);
    }

    #[test]
    fn replacing_revokes_previous_url() {
        let urls = FakeUrls::default();
        let mut slot = ProofSlot::new(urls.clone(), MAX_PROOF_BYTES);
        let first = slot
            .select("a.jpg".into(), image("a.jpg", 10))
            .unwrap()
            .preview_url
            .clone();
        let second = slot
            .select("b.jpg".into(), image("b.jpg", 10))
            .unwrap()
            .preview_url
            .clone();
        assert_ne!(first, second);
        let live = urls.live.borrow();
        assert_eq!(live.len(), 1);
        assert!(live.contains(&second));
    }

    #[test]
    fn rejected_replacement_releases_previous_proof() {
        let urls = FakeUrls::default();
        let mut slot = ProofSlot::new(urls.clone(), MAX_PROOF_BYTES);
        slot.select("a.jpg".into(), image("a.jpg", 10)).unwrap();
        let txt = ProofCandidate {
            name: "n.txt".into(),
            mime: "text/plain".into(),
            size: 3,
        };
        assert!(slot.select("n.txt".into(), txt).is_err());
        assert!(slot.held().is_none());
        assert!(urls.live.borrow().is_empty());
    }

    #[test]
    fn drop_revokes_live_url() {
        let urls = FakeUrls::default();
        {
            let mut slot = ProofSlot::new(urls.clone(), MAX_PROOF_BYTES);
            slot.select("a.jpg".into(), image("a.jpg", 10)).unwrap();
            assert_eq!(urls.live.borrow().len(), 1);
        }
        assert!(urls.live.borrow().is_empty());
    }
}
