// SPDX-License-Identifier: MPL-2.0
//! Vehicle and manager rosters offered by the booking and leave forms.
//!
//! Static sample data standing in for a real fleet directory, bilingual so
//! either display language has proper labels.

/// The locale whose field pair and labels are active on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldLocale {
    #[default]
    English,
    Arabic,
}

impl FieldLocale {
    /// Maps a language identifier to the form field locale. Exactly the
    /// `ar` primary language selects Arabic, everything else English.
    pub fn from_language(locale: &unic_langid::LanguageIdentifier) -> Self {
        if locale.language.as_str() == "ar" {
            FieldLocale::Arabic
        } else {
            FieldLocale::English
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: u32,
    pub name: String,
    pub name_ar: String,
    pub plate: String,
}

impl Vehicle {
    pub fn localized_name(&self, locale: FieldLocale) -> &str {
        match locale {
            FieldLocale::English => &self.name,
            FieldLocale::Arabic => &self.name_ar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    pub name: String,
    pub name_ar: String,
}

impl Manager {
    pub fn localized_name(&self, locale: FieldLocale) -> &str {
        match locale {
            FieldLocale::English => &self.name,
            FieldLocale::Arabic => &self.name_ar,
        }
    }
}

/// Sample car pool used until a real data source is wired in.
pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 1,
            name: "Toyota Camry".to_string(),
            name_ar: "تويوتا كامري".to_string(),
            plate: "A-1042".to_string(),
        },
        Vehicle {
            id: 2,
            name: "Nissan Patrol".to_string(),
            name_ar: "نيسان باترول".to_string(),
            plate: "A-2177".to_string(),
        },
        Vehicle {
            id: 3,
            name: "Hyundai H-1 Van".to_string(),
            name_ar: "هيونداي إتش-١ فان".to_string(),
            plate: "B-0518".to_string(),
        },
    ]
}

/// Sample approving managers.
pub fn sample_managers() -> Vec<Manager> {
    vec![
        Manager {
            name: "Omar Haddad".to_string(),
            name_ar: "عمر حداد".to_string(),
        },
        Manager {
            name: "Lina Mansour".to_string(),
            name_ar: "لينا منصور".to_string(),
        },
        Manager {
            name: "Samir Qasim".to_string(),
            name_ar: "سمير قاسم".to_string(),
        },
    ]
}
