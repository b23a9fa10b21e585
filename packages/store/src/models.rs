//! # Domain models mirrored from the FairPadel API
//!
//! Every type here is a snapshot of a server-owned record. The client never
//! owns their lifecycle: a page fetches them, may update its local copy
//! optimistically, and drops them on navigation. Field names are camelCase
//! on the wire, hence the `rename_all` on every struct.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] / [`Role`] | The authenticated account, its roles and premium flag. |
//! | [`Tournament`] / [`Category`] | A tournament and the categories it accepts inscriptions for. |
//! | [`Inscripcion`] / [`Pareja`] | A pair's enrollment into one category. |
//! | [`Match`] / [`SetScore`] | A bracket match and its set-by-set result. |
//! | [`RankingEntry`], [`Circuito`], [`CircuitoStanding`] | Rankings and circuit standings. |
//! | [`Banner`] / [`BannerZone`] | Advertising creatives and the named placements that show them. |
//! | [`Notificacion`] / [`NotificationPreference`] | In-app notifications and per-type delivery preferences. |
//! | [`BankAccount`] / [`PaymentMethod`] | Organizer accounts shown for transfers, and the accepted methods. |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role granted to a user. `Admin` is treated as a superset of every other role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Organizer,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Player => "Jugador",
            Role::Organizer => "Organizador",
            Role::Admin => "Admin",
        }
    }
}

/// The authenticated account as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub documento: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub es_premium: bool,
    pub foto_url: Option<String>,
    pub ciudad: Option<String>,
    pub telefono: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Admins hold every role implicitly.
    pub fn has_role(&self, role: Role) -> bool {
        self.is_admin() || self.roles.contains(&role)
    }
}

/// Lightweight player reference embedded in pairs, rankings and messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub foto_url: Option<String>,
}

impl PlayerSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub nombre: String,
    /// "masculino", "femenino" or "mixto".
    pub tipo: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    Borrador,
    InscripcionesAbiertas,
    InscripcionesCerradas,
    EnCurso,
    Finalizado,
}

impl TournamentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TournamentStatus::Borrador => "Borrador",
            TournamentStatus::InscripcionesAbiertas => "Inscripciones abiertas",
            TournamentStatus::InscripcionesCerradas => "Inscripciones cerradas",
            TournamentStatus::EnCurso => "En curso",
            TournamentStatus::Finalizado => "Finalizado",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub ciudad: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub estado: TournamentStatus,
    pub flyer_url: Option<String>,
    #[serde(default)]
    pub categorias: Vec<Category>,
    /// Fee per pair in guaraníes.
    #[serde(default)]
    pub costo_inscripcion: u64,
    pub organizador_id: i64,
}

impl Tournament {
    pub fn accepts_category(&self, categoria_id: i64) -> bool {
        self.categorias.iter().any(|c| c.id == categoria_id)
    }

    pub fn is_open(&self) -> bool {
        self.estado == TournamentStatus::InscripcionesAbiertas
    }
}

/// Payload for creating a tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTournament {
    pub nombre: String,
    pub descripcion: String,
    pub ciudad: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub categoria_ids: Vec<i64>,
    pub costo_inscripcion: u64,
}

/// Accepted payment methods. Bancard is the card gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Bancard,
    Transferencia,
    Efectivo,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Bancard,
        PaymentMethod::Transferencia,
        PaymentMethod::Efectivo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Bancard => "Tarjeta (Bancard)",
            PaymentMethod::Transferencia => "Transferencia bancaria",
            PaymentMethod::Efectivo => "Efectivo",
        }
    }

    /// Stable identifier used in form controls.
    pub fn key(&self) -> &'static str {
        match self {
            PaymentMethod::Bancard => "bancard",
            PaymentMethod::Transferencia => "transferencia",
            PaymentMethod::Efectivo => "efectivo",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pareja {
    pub id: i64,
    pub jugador1: PlayerSummary,
    pub jugador2: PlayerSummary,
}

impl Pareja {
    pub fn label(&self) -> String {
        format!("{} / {}", self.jugador1.full_name(), self.jugador2.full_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InscripcionStatus {
    PendientePago,
    PendienteConfirmacion,
    Confirmada,
    Cancelada,
}

impl InscripcionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InscripcionStatus::PendientePago => "Pendiente de pago",
            InscripcionStatus::PendienteConfirmacion => "Pago en revisión",
            InscripcionStatus::Confirmada => "Confirmada",
            InscripcionStatus::Cancelada => "Cancelada",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inscripcion {
    pub id: i64,
    pub tournament_id: i64,
    pub categoria_id: i64,
    pub pareja: Pareja,
    pub estado: InscripcionStatus,
    pub metodo_pago: Option<PaymentMethod>,
    pub comprobante_url: Option<String>,
}

/// Validated enrollment request, produced by
/// [`InscriptionForm::validate`](crate::inscription::InscriptionForm::validate).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInscripcion {
    pub tournament_id: i64,
    pub categoria_id: i64,
    pub documento_companero: String,
    pub metodo_pago: PaymentMethod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScore {
    pub pareja1: u8,
    pub pareja2: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Pendiente,
    EnJuego,
    Finalizado,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub categoria_id: i64,
    /// Round label, e.g. "Cuartos de final".
    pub ronda: String,
    pub pareja1: Option<Pareja>,
    pub pareja2: Option<Pareja>,
    #[serde(default)]
    pub sets: Vec<SetScore>,
    pub estado: MatchStatus,
    pub ganador_id: Option<i64>,
}

/// Result payload for `PATCH /matches/{id}/resultado`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub sets: Vec<SetScore>,
}

impl MatchResult {
    /// Winner side (1 or 2) by sets won, `None` on a tie or empty result.
    pub fn winner_side(&self) -> Option<u8> {
        let won1 = self.sets.iter().filter(|s| s.pareja1 > s.pareja2).count();
        let won2 = self.sets.iter().filter(|s| s.pareja2 > s.pareja1).count();
        match won1.cmp(&won2) {
            std::cmp::Ordering::Greater => Some(1),
            std::cmp::Ordering::Less => Some(2),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub posicion: u32,
    pub jugador: PlayerSummary,
    pub puntos: u32,
    pub torneos_jugados: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuito {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub torneos: Vec<Tournament>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitoStanding {
    pub posicion: u32,
    pub pareja: Pareja,
    pub puntos: u32,
}

/// Named placements where banners are delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BannerZone {
    HomeTop,
    TournamentDetail,
    Sidebar,
    Rankings,
}

impl BannerZone {
    pub fn as_query(&self) -> &'static str {
        match self {
            BannerZone::HomeTop => "HOME_TOP",
            BannerZone::TournamentDetail => "TOURNAMENT_DETAIL",
            BannerZone::Sidebar => "SIDEBAR",
            BannerZone::Rankings => "RANKINGS",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: i64,
    pub titulo: String,
    pub imagen_url: String,
    pub link_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logro {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub icono_url: Option<String>,
    pub obtenido_en: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notificacion {
    pub id: i64,
    pub tipo: String,
    pub mensaje: String,
    pub leida: bool,
    pub creada_en: String,
}

/// Delivery preferences for one notification type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreference {
    pub tipo: String,
    #[serde(default)]
    pub descripcion: String,
    pub email: bool,
    pub sms: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub banco: String,
    pub titular: String,
    pub numero_cuenta: String,
    pub documento_titular: String,
    pub alias: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: i64,
    pub nombre: String,
    pub precio_mensual: u64,
    #[serde(default)]
    pub beneficios: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    pub activa: bool,
    pub plan: Option<SubscriptionPlan>,
    pub vence_en: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: i64,
    pub con: PlayerSummary,
    pub ultimo_mensaje: Option<String>,
    #[serde(default)]
    pub no_leidos: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub autor_id: i64,
    pub contenido: String,
    pub enviado_en: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoDecision {
    Aprobada,
    Rechazada,
}

/// A photo waiting for moderation in the admin back-office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoReview {
    pub id: i64,
    pub url: String,
    pub autor: PlayerSummary,
    pub subida_en: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: Vec<Role>) -> User {
        User {
            id: 1,
            nombre: "Ana".into(),
            apellido: "Benítez".into(),
            email: "ana@example.com".into(),
            documento: "4567890".into(),
            roles,
            es_premium: false,
            foto_url: None,
            ciudad: None,
            telefono: None,
        }
    }

    #[test]
    fn admin_holds_every_role() {
        let admin = user(vec![Role::Admin]);
        assert!(admin.has_role(Role::Organizer));
        assert!(admin.has_role(Role::Player));

        let player = user(vec![Role::Player]);
        assert!(player.has_role(Role::Player));
        assert!(!player.has_role(Role::Organizer));
    }

    #[test]
    fn user_decodes_camel_case_wire_format() {
        let json = r#"{
            "id": 7, "nombre": "Luis", "apellido": "Gómez", "email": "l@x.py",
            "documento": "123", "roles": ["player", "organizer"], "esPremium": true,
            "fotoUrl": null, "ciudad": "Luque", "telefono": null
        }"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert!(u.es_premium);
        assert_eq!(u.roles, vec![Role::Player, Role::Organizer]);
        assert_eq!(u.full_name(), "Luis Gómez");
    }

    #[test]
    fn payment_method_keys_are_distinct_and_serialize_upper_case() {
        let keys: std::collections::HashSet<_> = PaymentMethod::ALL.iter().map(|m| m.key()).collect();
        assert_eq!(keys.len(), PaymentMethod::ALL.len());
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Transferencia).unwrap(),
            "\"TRANSFERENCIA\""
        );
    }

    #[test]
    fn match_result_winner_by_sets() {
        let result = MatchResult {
            sets: vec![
                SetScore { pareja1: 6, pareja2: 4 },
                SetScore { pareja1: 3, pareja2: 6 },
                SetScore { pareja1: 7, pareja2: 5 },
            ],
        };
        assert_eq!(result.winner_side(), Some(1));
        assert_eq!(MatchResult { sets: vec![] }.winner_side(), None);
    }
}
