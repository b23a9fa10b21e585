//! Enrollment form state and its validation.
//!
//! The dialog binds its controls to an [`InscriptionForm`]; only a form that
//! passes [`InscriptionForm::validate`] becomes a request, so an incomplete
//! form never reaches the network.

use thiserror::Error;

use crate::models::{NewInscripcion, PaymentMethod, Tournament};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InscriptionError {
    #[error("Seleccioná una categoría")]
    MissingCategory,
    #[error("La categoría no pertenece a este torneo")]
    CategoryNotOffered,
    #[error("Ingresá el documento de tu compañero")]
    MissingPartnerDocument,
    #[error("No podés inscribirte con tu propio documento")]
    PartnerIsSelf,
    #[error("Las inscripciones de este torneo están cerradas")]
    Closed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InscriptionForm {
    pub categoria_id: Option<i64>,
    pub documento_companero: String,
    pub metodo_pago: PaymentMethod,
}

impl Default for InscriptionForm {
    fn default() -> Self {
        Self {
            categoria_id: None,
            documento_companero: String::new(),
            metodo_pago: PaymentMethod::Transferencia,
        }
    }
}

impl InscriptionForm {
    /// Check the form against `tournament` and the applicant's own document.
    pub fn validate(
        &self,
        tournament: &Tournament,
        own_documento: Option<&str>,
    ) -> Result<NewInscripcion, InscriptionError> {
        if !tournament.is_open() {
            return Err(InscriptionError::Closed);
        }
        let categoria_id = self.categoria_id.ok_or(InscriptionError::MissingCategory)?;
        if !tournament.accepts_category(categoria_id) {
            return Err(InscriptionError::CategoryNotOffered);
        }
        let documento = self.documento_companero.trim();
        if documento.is_empty() {
            return Err(InscriptionError::MissingPartnerDocument);
        }
        if own_documento.is_some_and(|own| own.trim() == documento) {
            return Err(InscriptionError::PartnerIsSelf);
        }
        Ok(NewInscripcion {
            tournament_id: tournament.id,
            categoria_id,
            documento_companero: documento.to_string(),
            metodo_pago: self.metodo_pago,
        })
    }

    /// Parse a `<select>` value into a category id; empty means none.
    pub fn set_category_from_str(&mut self, value: &str) {
        self.categoria_id = value.parse().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TournamentStatus};

    fn tournament() -> Tournament {
        Tournament {
            id: 42,
            nombre: "Open Asunción".into(),
            descripcion: String::new(),
            ciudad: "Asunción".into(),
            fecha_inicio: "2026-11-01".into(),
            fecha_fin: "2026-11-03".into(),
            estado: TournamentStatus::InscripcionesAbiertas,
            flyer_url: None,
            categorias: vec![
                Category { id: 1, nombre: "Primera".into(), tipo: "masculino".into() },
                Category { id: 4, nombre: "Cuarta".into(), tipo: "mixto".into() },
            ],
            costo_inscripcion: 150_000,
            organizador_id: 5,
        }
    }

    #[test]
    fn missing_category_is_rejected() {
        let form = InscriptionForm {
            documento_companero: "1234567".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(&tournament(), None),
            Err(InscriptionError::MissingCategory)
        );
    }

    #[test]
    fn blank_partner_document_is_rejected() {
        let form = InscriptionForm {
            categoria_id: Some(1),
            documento_companero: "   ".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(&tournament(), None),
            Err(InscriptionError::MissingPartnerDocument)
        );
    }

    #[test]
    fn category_must_belong_to_tournament() {
        let form = InscriptionForm {
            categoria_id: Some(2),
            documento_companero: "1234567".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(&tournament(), None),
            Err(InscriptionError::CategoryNotOffered)
        );
    }

    #[test]
    fn closed_tournament_is_rejected() {
        let mut t = tournament();
        t.estado = TournamentStatus::EnCurso;
        let form = InscriptionForm {
            categoria_id: Some(1),
            documento_companero: "1234567".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(&t, None), Err(InscriptionError::Closed));
    }

    #[test]
    fn valid_form_produces_trimmed_request() {
        let mut form = InscriptionForm {
            documento_companero: " 1234567 ".into(),
            metodo_pago: PaymentMethod::Efectivo,
            ..Default::default()
        };
        form.set_category_from_str("4");
        let req = form.validate(&tournament(), Some("7654321")).unwrap();
        assert_eq!(req.tournament_id, 42);
        assert_eq!(req.categoria_id, 4);
        assert_eq!(req.documento_companero, "1234567");
        assert_eq!(req.metodo_pago, PaymentMethod::Efectivo);
    }

    #[test]
    fn own_document_cannot_be_partner() {
        let form = InscriptionForm {
            categoria_id: Some(1),
            documento_companero: "7654321".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(&tournament(), Some("7654321")),
            Err(InscriptionError::PartnerIsSelf)
        );
    }

    #[test]
    fn empty_select_value_clears_category() {
        let mut form = InscriptionForm {
            categoria_id: Some(1),
            ..Default::default()
        };
        form.set_category_from_str("");
        assert!(form.categoria_id.is_none());
    }
}
