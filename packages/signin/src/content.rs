//! Display strings for the sign-in form, one bundle per [`Language`].
//!
//! Bundles are compiled in, so [`content`] is total over [`Language`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the form ships strings for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Da,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Da];

    /// ISO 639-1 code, also the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Da => "da",
        }
    }

    /// Name of the language in that language.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Da => "Dansk",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Content {
    pub phone: PhoneContent,
    pub code: CodeContent,
    pub btn: SubmitContent,
    pub privacy: PrivacyContent,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PhoneContent {
    pub label: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub btn: SendCodeContent,
    pub error: PhoneErrorContent,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SendCodeContent {
    pub send: &'static str,
    /// Second half of the button label, hidden on narrow screens.
    pub code: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PhoneErrorContent {
    pub incomplete: &'static str,
    pub missing_country_code: &'static str,
    pub invalid: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CodeContent {
    pub label: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub reset: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SubmitContent {
    pub label: &'static str,
    pub error: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PrivacyContent {
    pub prefix: &'static str,
    pub label: &'static str,
}

/// The bundle for `language`.
pub fn content(language: Language) -> &'static Content {
    match language {
        Language::En => &EN,
        Language::Da => &DA,
    }
}

static EN: Content = Content {
    phone: PhoneContent {
        label: "Phone number",
        description: "Include your country code, e.g. +45.",
        placeholder: "+45 60 55 07 09",
        btn: SendCodeContent {
            send: "Send",
            code: "code",
        },
        error: PhoneErrorContent {
            incomplete: "Enter your full phone number before requesting a code.",
            missing_country_code: "The number is missing a country code, e.g. +45.",
            invalid: "This is not a valid phone number.",
        },
    },
    code: CodeContent {
        label: "Code",
        description: "Enter the 6 digit code we sent you by text message.",
        placeholder: "0",
        reset: "Reset",
    },
    btn: SubmitContent {
        label: "Sign in",
        error: "We could not verify the code. Check it and try again.",
    },
    privacy: PrivacyContent {
        prefix: "By signing in you accept our",
        label: "privacy policy",
    },
};

static DA: Content = Content {
    phone: PhoneContent {
        label: "Telefonnummer",
        description: "Husk landekoden, f.eks. +45.",
        placeholder: "+45 60 55 07 09",
        btn: SendCodeContent {
            send: "Send",
            code: "kode",
        },
        error: PhoneErrorContent {
            incomplete: "Indtast hele dit telefonnummer, før du beder om en kode.",
            missing_country_code: "Nummeret mangler en landekode, f.eks. +45.",
            invalid: "Det er ikke et gyldigt telefonnummer.",
        },
    },
    code: CodeContent {
        label: "Kode",
        description: "Indtast den 6-cifrede kode, vi har sendt dig på sms.",
        placeholder: "0",
        reset: "Nulstil",
    },
    btn: SubmitContent {
        label: "Log ind",
        error: "Vi kunne ikke bekræfte koden. Tjek den og prøv igen.",
    },
    privacy: PrivacyContent {
        prefix: "Ved at logge ind accepterer du vores",
        label: "privatlivspolitik",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_complete_bundle() {
        for language in Language::ALL {
            let c = content(language);
            let strings = [
                c.phone.label,
                c.phone.description,
                c.phone.placeholder,
                c.phone.btn.send,
                c.phone.btn.code,
                c.phone.error.incomplete,
                c.phone.error.missing_country_code,
                c.phone.error.invalid,
                c.code.label,
                c.code.description,
                c.code.placeholder,
                c.code.reset,
                c.btn.label,
                c.btn.error,
                c.privacy.prefix,
                c.privacy.label,
            ];
            assert!(
                strings.iter().all(|s| !s.trim().is_empty()),
                "{language} bundle has an empty string"
            );
        }
    }

    #[test]
    fn test_language_codes_roundtrip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
        assert_eq!(" DA ".parse::<Language>().unwrap(), Language::Da);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_bundles_differ() {
        assert_ne!(content(Language::En), content(Language::Da));
    }
}
