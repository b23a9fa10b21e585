//! City autocomplete over a fixed list of Paraguayan localities.
//!
//! Matching is a substring search that ignores case and diacritics, so
//! "asunci", "ASUNCION" and "Asunción" all find "Asunción". [`Autocomplete`]
//! holds the keyboard state of the dropdown.

pub const MAX_SUGGESTIONS: usize = 8;

pub const CITIES: &[&str] = &[
    "Asunción",
    "Ciudad del Este",
    "San Lorenzo",
    "Luque",
    "Capiatá",
    "Lambaré",
    "Fernando de la Mora",
    "Limpio",
    "Ñemby",
    "Encarnación",
    "Mariano Roque Alonso",
    "Pedro Juan Caballero",
    "Itauguá",
    "Villa Elisa",
    "Hernandarias",
    "Presidente Franco",
    "Concepción",
    "Coronel Oviedo",
    "Caaguazú",
    "Villarrica",
    "San Antonio",
    "Minga Guazú",
    "Areguá",
    "Itá",
    "Caacupé",
    "Villa Hayes",
    "Pilar",
    "San Juan Bautista",
    "Paraguarí",
    "Ypacaraí",
    "San Bernardino",
    "Guarambaré",
    "Villeta",
    "J. Augusto Saldívar",
    "Ypané",
    "Salto del Guairá",
    "Santa Rita",
    "Hohenau",
    "Obligado",
    "Bella Vista",
    "Caazapá",
    "San Pedro del Ycuamandiyú",
    "Filadelfia",
    "Loma Plata",
    "Fuerte Olimpo",
    "Ayolas",
    "San Estanislao",
    "Curuguaty",
    "Horqueta",
    "Carapeguá",
    "Eusebio Ayala",
    "Tobatí",
    "Atyrá",
    "Piribebuy",
    "Emboscada",
    "Nueva Italia",
    "Juan León Mallorquín",
    "Yby Yaú",
];

/// Lowercase and strip Spanish diacritics.
pub fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}

/// Up to `limit` entries of `cities` containing `query`, in list order.
pub fn suggest<'a>(cities: &[&'a str], query: &str, limit: usize) -> Vec<&'a str> {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return Vec::new();
    }
    cities
        .iter()
        .copied()
        .filter(|city| fold(city).contains(&needle))
        .take(limit)
        .collect()
}

/// Keys the dropdown reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// Outcome of a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Moved,
    Selected(String),
    Dismissed,
    Ignored,
}

/// Dropdown state: current query, visible suggestions and highlight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Autocomplete {
    pub query: String,
    pub suggestions: Vec<String>,
    pub highlighted: Option<usize>,
    pub open: bool,
}

impl Autocomplete {
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.suggestions = suggest(CITIES, query, MAX_SUGGESTIONS)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.highlighted = None;
        self.open = !self.suggestions.is_empty();
    }

    pub fn key(&mut self, key: NavKey) -> NavOutcome {
        if !self.open {
            return NavOutcome::Ignored;
        }
        let len = self.suggestions.len();
        match key {
            NavKey::Down if len > 0 => {
                self.highlighted = Some(match self.highlighted {
                    Some(i) => (i + 1) % len,
                    None => 0,
                });
                NavOutcome::Moved
            }
            NavKey::Up if len > 0 => {
                self.highlighted = Some(match self.highlighted {
                    Some(0) | None => len - 1,
                    Some(i) => i - 1,
                });
                NavOutcome::Moved
            }
            NavKey::Enter => match self.highlighted {
                Some(i) => self.select(i).map_or(NavOutcome::Ignored, NavOutcome::Selected),
                None => NavOutcome::Ignored,
            },
            NavKey::Escape => {
                self.dismiss();
                NavOutcome::Dismissed
            }
            _ => NavOutcome::Ignored,
        }
    }

    /// Pick suggestion `index` (click or Enter).
    pub fn select(&mut self, index: usize) -> Option<String> {
        let chosen = self.suggestions.get(index)?.clone();
        self.query = chosen.clone();
        self.dismiss();
        Some(chosen)
    }

    /// Close the list (Escape or click outside), keeping the typed text.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_and_case_insensitive() {
        for q in ["asunci", "ASUNCI", "Asunció", "asunción"] {
            assert_eq!(suggest(CITIES, q, MAX_SUGGESTIONS), vec!["Asunción"], "query {q}");
        }
        assert_eq!(suggest(CITIES, "nemby", MAX_SUGGESTIONS), vec!["Ñemby"]);
    }

    #[test]
    fn empty_query_returns_nothing() {
        assert!(suggest(CITIES, "", MAX_SUGGESTIONS).is_empty());
        assert!(suggest(CITIES, "   ", MAX_SUGGESTIONS).is_empty());
    }

    #[test]
    fn never_more_than_limit() {
        let hits = suggest(CITIES, "a", MAX_SUGGESTIONS);
        assert_eq!(hits.len(), MAX_SUGGESTIONS);
        assert!(CITIES.iter().filter(|c| fold(c).contains('a')).count() > MAX_SUGGESTIONS);
    }

    #[test]
    fn arrows_wrap_and_enter_selects() {
        let mut ac = Autocomplete::default();
        ac.set_query("san");
        let n = ac.suggestions.len();
        assert!(n >= 2);

        assert_eq!(ac.key(NavKey::Up), NavOutcome::Moved);
        assert_eq!(ac.highlighted, Some(n - 1));
        assert_eq!(ac.key(NavKey::Down), NavOutcome::Moved);
        assert_eq!(ac.highlighted, Some(0));

        let expected = ac.suggestions[0].clone();
        assert_eq!(ac.key(NavKey::Enter), NavOutcome::Selected(expected.clone()));
        assert_eq!(ac.query, expected);
        assert!(!ac.open);
    }

    #[test]
    fn escape_dismisses_and_keys_are_then_ignored() {
        let mut ac = Autocomplete::default();
        ac.set_query("luq");
        assert!(ac.open);
        assert_eq!(ac.key(NavKey::Escape), NavOutcome::Dismissed);
        assert!(!ac.open);
        assert_eq!(ac.key(NavKey::Down), NavOutcome::Ignored);
        assert_eq!(ac.query, "luq");
    }

    #[test]
    fn enter_without_highlight_is_ignored() {
        let mut ac = Autocomplete::default();
        ac.set_query("villa");
        assert_eq!(ac.key(NavKey::Enter), NavOutcome::Ignored);
        assert!(ac.open);
    }
}
