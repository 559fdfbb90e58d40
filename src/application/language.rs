#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserLanguage {
    Ko,
    En,
}

impl UserLanguage {
    /// Parses an `Accept-Language` style value; anything that isn't English falls back to Korean.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let candidate = raw
            .unwrap_or("ko")
            .split(',')
            .next()
            .unwrap_or("ko")
            .split([';', '-', '_'])
            .next()
            .unwrap_or("ko")
            .trim()
            .to_lowercase();
        match candidate.as_str() {
            "en" => UserLanguage::En,
            _ => UserLanguage::Ko,
        }
    }
}
