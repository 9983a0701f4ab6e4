//! Russian identifiers and phrases.

use crate::error::ProviderError;
use crate::provider::{bind, operation_names, Operation, OperationSpec, Provider};
use faux_core::{Args, Gender, Locale, Value};
use faux_random::Random;
use serde::Deserialize;
use std::sync::Arc;

const INN_WEIGHTS_N2: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];
const INN_WEIGHTS_N1: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

#[derive(Debug, Deserialize)]
struct RussianData {
    sentence: SentenceParts,
    patronymic: PatronymicData,
}

#[derive(Debug, Deserialize)]
struct SentenceParts {
    head: Vec<String>,
    p1: Vec<String>,
    p2: Vec<String>,
    tail: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PatronymicData {
    female: Vec<String>,
    male: Vec<String>,
}

/// Provider named `russia_provider`.
#[derive(Debug, Clone)]
pub struct RussiaProvider {
    data: Arc<RussianData>,
}

impl RussiaProvider {
    pub fn new() -> Result<Self, ProviderError> {
        let data = serde_json::from_str(include_str!("../../data/builtin/ru.json")).map_err(|source| {
            ProviderError::Dataset {
                locale: Locale::Ru,
                dataset: "builtin",
                source,
            }
        })?;
        Ok(Self {
            data: Arc::new(data),
        })
    }

    /// Sentence assembled from four stock fragments.
    pub fn generate_sentence(&self, random: &mut Random) -> Result<String, ProviderError> {
        let parts = &self.data.sentence;
        let words = [
            random.choice(&parts.head)?,
            random.choice(&parts.p1)?,
            random.choice(&parts.p2)?,
            random.choice(&parts.tail)?,
        ];
        Ok(words.map(String::as_str).join(" "))
    }

    pub fn patronymic(&self, random: &mut Random, gender: Option<Gender>) -> Result<String, ProviderError> {
        let pool = match gender.unwrap_or_else(|| random.choose_enum()) {
            Gender::Female => &self.data.patronymic.female,
            Gender::Male => &self.data.patronymic.male,
        };
        Ok(random.choice(pool)?.clone())
    }

    /// Passport series: two-digit region and year of issue.
    pub fn passport_series(&self, random: &mut Random, year: Option<i64>) -> Result<String, ProviderError> {
        let year = match year {
            Some(year) => year,
            None => random.randint(10, 18)?,
        };
        let region = random.randint(1, 99)?;
        Ok(format!("{region:02} {year}"))
    }

    pub fn passport_number(&self, random: &mut Random) -> Result<i64, ProviderError> {
        Ok(random.randint(100_000, 999_999)?)
    }

    pub fn series_and_number(&self, random: &mut Random) -> Result<String, ProviderError> {
        let series = self.passport_series(random, None)?;
        let number = self.passport_number(random)?;
        Ok(format!("{series} {number}"))
    }

    /// SNILS shaped number (`###-###-###-##`); the checksum is not computed.
    pub fn snils(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.custom_code("###-###-###-##", '@', '#')?)
    }

    /// Twelve-digit INN with valid control digits.
    pub fn inn(&self, random: &mut Random) -> Result<String, ProviderError> {
        let mut numbers = random_digits(random, 10)?;
        let n2 = control_sum(&numbers, &INN_WEIGHTS_N2);
        numbers.push(n2);
        let n1 = control_sum(&numbers, &INN_WEIGHTS_N1);
        numbers.push(n1);
        Ok(join_digits(&numbers))
    }

    /// Thirteen-digit OGRN; the last digit is the check digit.
    pub fn ogrn(&self, random: &mut Random) -> Result<String, ProviderError> {
        let numbers = random_digits(random, 12)?;
        let check = numbers.iter().fold(0u64, |acc, d| acc * 10 + u64::from(*d)) % 11 % 10;
        Ok(format!("{}{check}", join_digits(&numbers)))
    }

    /// Bank identification code.
    pub fn bic(&self, random: &mut Random) -> Result<String, ProviderError> {
        let region = random.randint(1, 10)?;
        let bank = random.randint(0, 99)?;
        let office = random.randint(50, 999)?;
        Ok(format!("04{region:02}{bank:02}{office:03}"))
    }

    fn op_generate_sentence(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.generate_sentence(random)?.into())
    }

    fn op_patronymic(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.patronymic(random, args.enumeration("gender")?)?.into())
    }

    fn op_passport_series(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.passport_series(random, args.i64("year")?)?.into())
    }

    fn op_passport_number(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.passport_number(random)?.into())
    }

    fn op_series_and_number(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.series_and_number(random)?.into())
    }

    fn op_snils(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.snils(random)?.into())
    }

    fn op_inn(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.inn(random)?.into())
    }

    fn op_ogrn(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.ogrn(random)?.into())
    }

    fn op_bic(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.bic(random)?.into())
    }
}

static RUSSIA_OPERATIONS: &[OperationSpec<RussiaProvider>] = &[
    OperationSpec {
        name: "generate_sentence",
        params: &[],
        method: RussiaProvider::op_generate_sentence,
    },
    OperationSpec { name: "patronymic", params: &["gender"], method: RussiaProvider::op_patronymic },
    OperationSpec { name: "passport_series", params: &["year"], method: RussiaProvider::op_passport_series },
    OperationSpec { name: "passport_number", params: &[], method: RussiaProvider::op_passport_number },
    OperationSpec {
        name: "series_and_number",
        params: &[],
        method: RussiaProvider::op_series_and_number,
    },
    OperationSpec { name: "snils", params: &[], method: RussiaProvider::op_snils },
    OperationSpec { name: "inn", params: &[], method: RussiaProvider::op_inn },
    OperationSpec { name: "ogrn", params: &[], method: RussiaProvider::op_ogrn },
    OperationSpec { name: "bic", params: &[], method: RussiaProvider::op_bic },
];

impl Provider for RussiaProvider {
    fn name(&self) -> &str {
        "russia_provider"
    }

    fn operations(&self) -> Vec<&'static str> {
        operation_names(RUSSIA_OPERATIONS)
    }

    fn operation(&self, name: &str) -> Option<Operation> {
        bind(self, RUSSIA_OPERATIONS, name)
    }
}

/// `count` digits, the first one non-zero.
fn random_digits(random: &mut Random, count: usize) -> Result<Vec<u32>, ProviderError> {
    (0..count)
        .map(|i| {
            let low = if i == 0 { 1 } else { 0 };
            Ok(random.randint(low, 9)? as u32)
        })
        .collect()
}

fn control_sum(numbers: &[u32], weights: &[u32]) -> u32 {
    let total: u32 = numbers.iter().zip(weights).map(|(n, w)| n * w).sum();
    total % 11 % 10
}

fn join_digits(numbers: &[u32]) -> String {
    numbers.iter().map(|d| d.to_string()).collect()
}
