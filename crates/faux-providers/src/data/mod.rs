//! Bundled datasets.
//!
//! Locale-specific data lives in JSON files compiled into the crate and
//! decoded once per provider instance. Locale-independent tables are
//! plain constants in [`shared`].

pub mod shared;

use crate::error::ProviderError;
use faux_core::{Gender, Locale};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Data that is either split by gender or shared by both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Gendered<T> {
    /// Separate values per gender
    Split { female: T, male: T },
    /// One value for every gender
    Shared(T),
}

impl<T> Gendered<T> {
    /// Value for a gender.
    pub fn get(&self, gender: Gender) -> &T {
        match (self, gender) {
            (Self::Split { female, .. }, Gender::Female) => female,
            (Self::Split { male, .. }, Gender::Male) => male,
            (Self::Shared(value), _) => value,
        }
    }
}

/// `person` dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonData {
    pub names: Gendered<Vec<String>>,
    pub surnames: Gendered<Vec<String>>,
    pub nationality: Gendered<Vec<String>>,
    pub title: Gendered<TitleData>,
    pub occupation: Vec<String>,
    pub university: Vec<String>,
    pub academic_degree: Vec<String>,
    pub language: Vec<String>,
    pub gender: Vec<String>,
    pub telephone_fmt: Vec<String>,
}

/// Honorific titles by kind.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleData {
    pub typical: Vec<String>,
    pub academic: Vec<String>,
}

/// `address` dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressData {
    pub country: CountryData,
    pub city: Vec<String>,
    pub street: StreetData,
    pub postal_code_fmt: String,
    /// Template with `{st_num}`, `{st_name}` and `{st_sfx}` placeholders
    pub address_fmt: String,
}

/// Country names.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryData {
    pub current_locale: String,
    pub name: Vec<String>,
}

/// Street name parts.
#[derive(Debug, Clone, Deserialize)]
pub struct StreetData {
    pub name: Vec<String>,
    pub suffix: Vec<String>,
}

/// `finance` dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceData {
    pub company: CompanyData,
    pub currency_code: String,
    pub currency_symbol: String,
    pub banks: Vec<String>,
}

/// Company names and legal forms.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyData {
    pub name: Vec<String>,
    #[serde(rename = "type")]
    pub kind: CompanyTypeData,
}

/// Legal forms, spelled out and abbreviated.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyTypeData {
    pub title: Vec<String>,
    pub abbr: Vec<String>,
}

fn raw(locale: Locale, dataset: &str) -> &'static str {
    match (locale, dataset) {
        (Locale::En, "person") => include_str!("../../data/en/person.json"),
        (Locale::En, "address") => include_str!("../../data/en/address.json"),
        (Locale::En, _) => include_str!("../../data/en/finance.json"),
        (Locale::Ru, "person") => include_str!("../../data/ru/person.json"),
        (Locale::Ru, "address") => include_str!("../../data/ru/address.json"),
        (Locale::Ru, _) => include_str!("../../data/ru/finance.json"),
        (Locale::Nl, "person") => include_str!("../../data/nl/person.json"),
        (Locale::Nl, "address") => include_str!("../../data/nl/address.json"),
        (Locale::Nl, _) => include_str!("../../data/nl/finance.json"),
    }
}

fn load<T: DeserializeOwned>(locale: Locale, dataset: &'static str) -> Result<T, ProviderError> {
    serde_json::from_str(raw(locale, dataset)).map_err(|source| ProviderError::Dataset {
        locale,
        dataset,
        source,
    })
}

/// Load the `person` dataset of a locale.
pub fn person(locale: Locale) -> Result<PersonData, ProviderError> {
    load(locale, "person")
}

/// Load the `address` dataset of a locale.
pub fn address(locale: Locale) -> Result<AddressData, ProviderError> {
    load(locale, "address")
}

/// Load the `finance` dataset of a locale.
pub fn finance(locale: Locale) -> Result<FinanceData, ProviderError> {
    load(locale, "finance")
}
