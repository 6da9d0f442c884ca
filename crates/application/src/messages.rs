//! Localized UI strings
//!
//! The provider is queried with a matching `lang`, so condition descriptions
//! and these strings share a language.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Brazilian Portuguese
    #[default]
    PtBr,
    /// English
    En,
}

/// Every user-visible string of the weather UI
#[derive(Debug, Serialize)]
pub struct Messages {
    pub page_title: &'static str,
    pub input_placeholder: &'static str,
    pub submit_label: &'static str,
    pub loading_label: &'static str,
    pub humidity_label: &'static str,
    pub wind_label: &'static str,
    pub forecast_heading: &'static str,
    pub validation_title: &'static str,
    pub validation_body: &'static str,
    pub error_title: &'static str,
    pub not_found_body: &'static str,
    pub transient_body: &'static str,
    /// Abbreviated weekday names, starting on Sunday
    pub weekdays: [&'static str; 7],
}

static PT_BR: Messages = Messages {
    page_title: "Previsão do Tempo",
    input_placeholder: "Digite a cidade...",
    submit_label: "Buscar",
    loading_label: "Buscando...",
    humidity_label: "Umidade",
    wind_label: "Vento",
    forecast_heading: "Próximos dias",
    validation_title: "Digite uma cidade",
    validation_body: "Por favor, insira o nome de uma cidade para buscar o clima.",
    error_title: "Erro",
    not_found_body: "Cidade não encontrada. Verifique o nome e tente novamente.",
    transient_body: "Erro ao buscar dados do clima. Tente novamente mais tarde.",
    weekdays: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
};

static EN: Messages = Messages {
    page_title: "Weather Forecast",
    input_placeholder: "Enter a city...",
    submit_label: "Search",
    loading_label: "Searching...",
    humidity_label: "Humidity",
    wind_label: "Wind",
    forecast_heading: "Next days",
    validation_title: "Enter a city",
    validation_body: "Please enter a city name to look up the weather.",
    error_title: "Error",
    not_found_body: "City not found. Check the name and try again.",
    transient_body: "Could not fetch weather data. Please try again later.",
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
};

impl Locale {
    /// String table for this locale
    #[must_use]
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::PtBr => &PT_BR,
            Self::En => &EN,
        }
    }

    /// BCP 47 tag for the HTML `lang` attribute
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::En => "en",
        }
    }

    /// Provider `lang` parameter matching this locale
    #[must_use]
    pub const fn provider_lang(self) -> &'static str {
        match self {
            Self::PtBr => "pt_br",
            Self::En => "en",
        }
    }

    /// Abbreviated weekday name for a date
    #[must_use]
    pub fn weekday(self, date: NaiveDate) -> &'static str {
        let index = date.weekday().num_days_from_sunday() as usize;
        self.messages().weekdays[index]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.provider_lang())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pt_br" | "pt" => Ok(Self::PtBr),
            "en" | "en_us" | "en_gb" => Ok(Self::En),
            _ => Err(format!("Unsupported locale: {s}. Use 'pt_br' or 'en'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locale_variants() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn weekday_names() {
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(Locale::PtBr.weekday(sunday), "Dom");
        assert_eq!(Locale::En.weekday(sunday), "Sun");
        assert_eq!(Locale::PtBr.weekday(sunday.succ_opt().unwrap()), "Seg");
    }

    #[test]
    fn provider_lang_matches_display() {
        assert_eq!(Locale::PtBr.to_string(), "pt_br");
        assert_eq!(Locale::En.provider_lang(), "en");
    }

    #[test]
    fn deserializes_snake_case() {
        let locale: Locale = serde_json::from_str("\"pt_br\"").unwrap();
        assert_eq!(locale, Locale::PtBr);
    }
}
