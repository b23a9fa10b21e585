//! Route access decisions for protected pages.

use crate::models::Role;
use crate::session::SessionState;

/// What a protected route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still in flight: render a loading state.
    Pending,
    Allow,
    /// Not logged in: go to login, then come back to `next`.
    RedirectLogin { next: String },
    /// Logged in but lacking the role.
    RedirectHome,
}

/// Decide access to `path` for `state`. `required` of `None` means any
/// authenticated user may enter.
pub fn authorize(state: &SessionState, required: Option<Role>, path: &str) -> GuardDecision {
    match state {
        SessionState::Restoring => GuardDecision::Pending,
        SessionState::Anonymous => GuardDecision::RedirectLogin {
            next: path.to_string(),
        },
        SessionState::Authenticated(session) => match required {
            Some(role) if !session.user.has_role(role) => GuardDecision::RedirectHome,
            _ => GuardDecision::Allow,
        },
    }
}

/// Login URL carrying the return path.
pub fn login_url(next: &str) -> String {
    if next.is_empty() || next == "/" {
        "/login".to_string()
    } else {
        format!("/login?next={}", encode_query(next))
    }
}

/// Post-login destination. Only internal absolute paths are honoured so a
/// crafted `next` cannot send the user off-site.
pub fn safe_return_path(next: &str) -> String {
    let decoded = decode_query(next);
    if decoded.starts_with('/') && !decoded.starts_with("//") {
        decoded
    } else {
        "/".to_string()
    }
}

fn encode_query(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn decode_query(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(v) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(v);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::Session;

    fn authenticated(roles: Vec<Role>) -> SessionState {
        SessionState::Authenticated(Session::new(
            "t".into(),
            User {
                id: 1,
                nombre: "Juan".into(),
                apellido: "Pérez".into(),
                email: "juan@example.com".into(),
                documento: "1".into(),
                roles,
                es_premium: false,
                foto_url: None,
                ciudad: None,
                telefono: None,
            },
        ))
    }

    #[test]
    fn restoring_is_pending() {
        assert_eq!(
            authorize(&SessionState::Restoring, Some(Role::Admin), "/admin"),
            GuardDecision::Pending
        );
    }

    #[test]
    fn anonymous_goes_to_login_with_original_path() {
        let decision = authorize(&SessionState::Anonymous, None, "/torneos/12/gestionar");
        assert_eq!(
            decision,
            GuardDecision::RedirectLogin {
                next: "/torneos/12/gestionar".to_string()
            }
        );
        assert_eq!(
            login_url("/torneos/12/gestionar"),
            "/login?next=/torneos/12/gestionar"
        );
    }

    #[test]
    fn missing_role_goes_home_not_login() {
        let state = authenticated(vec![Role::Player]);
        assert_eq!(
            authorize(&state, Some(Role::Organizer), "/torneos/nuevo"),
            GuardDecision::RedirectHome
        );
    }

    #[test]
    fn admin_passes_any_role_check() {
        let state = authenticated(vec![Role::Admin]);
        assert_eq!(authorize(&state, Some(Role::Organizer), "/x"), GuardDecision::Allow);
        assert_eq!(authorize(&state, None, "/x"), GuardDecision::Allow);
    }

    #[test]
    fn return_path_round_trips_and_rejects_external() {
        let url = login_url("/perfil?tab=fotos");
        let next = url.trim_start_matches("/login?next=");
        assert_eq!(safe_return_path(next), "/perfil?tab=fotos");
        assert_eq!(safe_return_path("https://evil.example"), "/");
        assert_eq!(safe_return_path("//evil.example"), "/");
        assert_eq!(safe_return_path(""), "/");
    }
}
