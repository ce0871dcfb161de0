#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserLanguage {
    Vi,
    En,
}

impl UserLanguage {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let candidate = raw
            .unwrap_or("vi")
            .split(',')
            .next()
            .unwrap_or("vi")
            .split(['-', '_'])
            .next()
            .unwrap_or("vi")
            .to_lowercase();
        match candidate.as_str() {
            "en" => UserLanguage::En,
            _ => UserLanguage::Vi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserLanguage::Vi => "vi",
            UserLanguage::En => "en",
        }
    }
}
