//! Personal data: names, contacts, physical traits.

use crate::data::{self, shared, PersonData};
use crate::error::ProviderError;
use crate::provider::{bind, operation_names, Operation, OperationSpec, Provider};
use faux_core::{Args, Gender, Locale, TitleType, Value};
use faux_random::Random;
use sha2::{Digest, Sha256};
use std::sync::Arc;

const USERNAME_MASKS: &[&str] = &["C.d", "C_d", "C-d", "Cd", "U.d", "U_d", "l.d", "l_d", "l-d", "ld"];
const USERNAME_DRANGE: (i64, i64) = (1800, 2100);
const PASSWORD_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const ISO5218_CODES: &[i64] = &[0, 1, 2, 9];

/// Provider of personal data.
#[derive(Debug, Clone)]
pub struct Person {
    data: Arc<PersonData>,
}

impl Person {
    pub fn new(locale: Locale) -> Result<Self, ProviderError> {
        Ok(Self {
            data: Arc::new(data::person(locale)?),
        })
    }

    /// First name; a random gender is used when none is given.
    pub fn name(&self, random: &mut Random, gender: Option<Gender>) -> Result<String, ProviderError> {
        let gender = gender.unwrap_or_else(|| random.choose_enum());
        Ok(random.choice(self.data.names.get(gender))?.clone())
    }

    /// Surname, gendered in locales that inflect surnames.
    pub fn surname(&self, random: &mut Random, gender: Option<Gender>) -> Result<String, ProviderError> {
        let gender = gender.unwrap_or_else(|| random.choose_enum());
        Ok(random.choice(self.data.surnames.get(gender))?.clone())
    }

    /// First name and surname of the same gender.
    pub fn full_name(
        &self,
        random: &mut Random,
        gender: Option<Gender>,
        reverse: bool,
    ) -> Result<String, ProviderError> {
        let gender = gender.unwrap_or_else(|| random.choose_enum());
        let name = self.name(random, Some(gender))?;
        let surname = self.surname(random, Some(gender))?;
        Ok(if reverse {
            format!("{surname} {name}")
        } else {
            format!("{name} {surname}")
        })
    }

    pub fn age(&self, random: &mut Random, minimum: i64, maximum: i64) -> Result<i64, ProviderError> {
        Ok(random.randint(minimum, maximum)?)
    }

    /// Years worked by someone who started at `working_start_age`.
    pub fn work_experience(&self, random: &mut Random, working_start_age: i64) -> Result<i64, ProviderError> {
        let age = self.age(random, 16, 66)?;
        Ok((age - working_start_age).max(0))
    }

    /// Username built from a mask.
    ///
    /// `C` is a capitalized word, `U` an uppercase word, `l` a lowercase
    /// word and `d` a number from `drange`; `.`, `-` and `_` are copied.
    pub fn username(
        &self,
        random: &mut Random,
        mask: Option<&str>,
        drange: (i64, i64),
    ) -> Result<String, ProviderError> {
        let mask = match mask {
            Some(mask) => mask.to_string(),
            None => random.choice(USERNAME_MASKS)?.to_string(),
        };
        if mask.is_empty() || !mask.chars().all(|c| "CUld.-_".contains(c)) {
            return Err(ProviderError::invalid(
                "mask",
                format!("unsupported username mask '{mask}'"),
            ));
        }

        let mut username = String::new();
        for tag in mask.chars() {
            match tag {
                'C' => username.push_str(&capitalize(random.choice(shared::USERNAMES)?)),
                'U' => username.push_str(&random.choice(shared::USERNAMES)?.to_uppercase()),
                'l' => username.push_str(random.choice(shared::USERNAMES)?),
                'd' => username.push_str(&random.randint(drange.0, drange.1)?.to_string()),
                separator => username.push(separator),
            }
        }
        Ok(username)
    }

    /// Password of `length` printable characters.
    ///
    /// With `hashed` the result is the lowercase hex SHA-256 digest of that
    /// password: always 64 characters, whatever `length` is. MD5 digests
    /// (32 characters) are not produced.
    pub fn password(&self, random: &mut Random, length: usize, hashed: bool) -> Result<String, ProviderError> {
        let password = random.generate_string(PASSWORD_ALPHABET, length)?;
        if hashed {
            return Ok(hex::encode(Sha256::digest(password.as_bytes())));
        }
        Ok(password)
    }

    /// Email address on one of `domains`.
    ///
    /// Unique addresses use random local parts tracked by the source; they
    /// are refused on a seeded source, whose output is meant to repeat.
    pub fn email(
        &self,
        random: &mut Random,
        domains: Option<&[String]>,
        unique: bool,
    ) -> Result<String, ProviderError> {
        if unique && random.is_seeded() {
            return Err(ProviderError::invalid(
                "unique",
                "unique emails cannot be generated from a seeded source",
            ));
        }

        let domain = match domains {
            Some(domains) => random.choice(domains)?.clone(),
            None => random.choice(shared::EMAIL_DOMAINS)?.to_string(),
        };
        let domain = if domain.starts_with('@') {
            domain
        } else {
            format!("@{domain}")
        };

        let local = if unique {
            random.randstr(None, true)?
        } else {
            self.username(random, Some("ld"), USERNAME_DRANGE)?
        };
        Ok(format!("{local}{domain}"))
    }

    /// Phone number from a mask; `placeholder` marks digit positions.
    pub fn telephone(
        &self,
        random: &mut Random,
        mask: Option<&str>,
        placeholder: char,
    ) -> Result<String, ProviderError> {
        let mask = match mask {
            Some(mask) => mask.to_string(),
            None => random.choice(&self.data.telephone_fmt)?.clone(),
        };
        Ok(random.custom_code(&mask, '@', placeholder)?)
    }

    /// Identifier from a mask (`#` digit, `@` letter).
    pub fn identifier(&self, random: &mut Random, mask: &str) -> Result<String, ProviderError> {
        Ok(random.custom_code(mask, '@', '#')?)
    }

    /// Gender as a localized title, an ISO 5218 code or a symbol.
    pub fn gender(&self, random: &mut Random, iso5218: bool, symbol: bool) -> Result<Value, ProviderError> {
        if iso5218 {
            return Ok(Value::Int(*random.choice(ISO5218_CODES)?));
        }
        if symbol {
            return Ok(Value::from(*random.choice(shared::GENDER_SYMBOLS)?));
        }
        Ok(Value::from(random.choice(&self.data.gender)?.clone()))
    }

    /// Height in meters, formatted with two decimals.
    pub fn height(&self, random: &mut Random, minimum: f64, maximum: f64) -> Result<String, ProviderError> {
        if minimum > maximum {
            return Err(ProviderError::invalid("minimum", "must not exceed maximum"));
        }
        Ok(format!("{:.2}", random.uniform(minimum, maximum, 2)))
    }

    /// Weight in kilograms.
    pub fn weight(&self, random: &mut Random, minimum: i64, maximum: i64) -> Result<i64, ProviderError> {
        Ok(random.randint(minimum, maximum)?)
    }

    pub fn blood_type(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::BLOOD_GROUPS)?.to_string())
    }

    pub fn occupation(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.occupation)?.clone())
    }

    pub fn university(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.university)?.clone())
    }

    pub fn academic_degree(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.academic_degree)?.clone())
    }

    pub fn language(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.language)?.clone())
    }

    pub fn nationality(&self, random: &mut Random, gender: Option<Gender>) -> Result<String, ProviderError> {
        let gender = gender.unwrap_or_else(|| random.choose_enum());
        Ok(random.choice(self.data.nationality.get(gender))?.clone())
    }

    /// Honorific such as `Mr.` or `Prof.`.
    pub fn title(
        &self,
        random: &mut Random,
        gender: Option<Gender>,
        title_type: Option<TitleType>,
    ) -> Result<String, ProviderError> {
        let gender = gender.unwrap_or_else(|| random.choose_enum());
        let title_type = title_type.unwrap_or_else(|| random.choose_enum());
        let titles = self.data.title.get(gender);
        let pool = match title_type {
            TitleType::Typical => &titles.typical,
            TitleType::Academic => &titles.academic,
        };
        Ok(random.choice(pool)?.clone())
    }

    fn op_name(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.name(random, args.enumeration("gender")?)?.into())
    }

    fn op_surname(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.surname(random, args.enumeration("gender")?)?.into())
    }

    fn op_full_name(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let reverse = args.bool("reverse")?.unwrap_or(false);
        Ok(self.full_name(random, args.enumeration("gender")?, reverse)?.into())
    }

    fn op_age(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let minimum = args.i64("minimum")?.unwrap_or(16);
        let maximum = args.i64("maximum")?.unwrap_or(66);
        Ok(self.age(random, minimum, maximum)?.into())
    }

    fn op_work_experience(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let start = args.i64("working_start_age")?.unwrap_or(22);
        Ok(self.work_experience(random, start)?.into())
    }

    fn op_username(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let drange = match args.i64_list("drange")? {
            None => USERNAME_DRANGE,
            Some(bounds) => match bounds.as_slice() {
                [low, high] => (*low, *high),
                _ => {
                    return Err(ProviderError::invalid(
                        "drange",
                        format!("expected two bounds, got {}", bounds.len()),
                    ))
                }
            },
        };
        Ok(self.username(random, args.str("mask")?, drange)?.into())
    }

    fn op_password(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let length = args.usize("length")?.unwrap_or(8);
        let hashed = args.bool("hashed")?.unwrap_or(false);
        Ok(self.password(random, length, hashed)?.into())
    }

    fn op_email(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let domains = args.str_list("domains")?;
        let unique = args.bool("unique")?.unwrap_or(false);
        Ok(self.email(random, domains.as_deref(), unique)?.into())
    }

    fn op_telephone(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let placeholder = match args.str("placeholder")? {
            None => '#',
            Some(text) => single_char("placeholder", text)?,
        };
        Ok(self.telephone(random, args.str("mask")?, placeholder)?.into())
    }

    fn op_identifier(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let mask = args.str("mask")?.unwrap_or("##-##/##");
        Ok(self.identifier(random, mask)?.into())
    }

    fn op_gender(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let iso5218 = args.bool("iso5218")?.unwrap_or(false);
        let symbol = args.bool("symbol")?.unwrap_or(false);
        self.gender(random, iso5218, symbol)
    }

    fn op_height(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let minimum = args.f64("minimum")?.unwrap_or(1.5);
        let maximum = args.f64("maximum")?.unwrap_or(2.0);
        Ok(self.height(random, minimum, maximum)?.into())
    }

    fn op_weight(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let minimum = args.i64("minimum")?.unwrap_or(38);
        let maximum = args.i64("maximum")?.unwrap_or(90);
        Ok(self.weight(random, minimum, maximum)?.into())
    }

    fn op_blood_type(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.blood_type(random)?.into())
    }

    fn op_occupation(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.occupation(random)?.into())
    }

    fn op_university(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.university(random)?.into())
    }

    fn op_academic_degree(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.academic_degree(random)?.into())
    }

    fn op_language(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.language(random)?.into())
    }

    fn op_nationality(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.nationality(random, args.enumeration("gender")?)?.into())
    }

    fn op_title(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let gender = args.enumeration("gender")?;
        let title_type = args.enumeration("title_type")?;
        Ok(self.title(random, gender, title_type)?.into())
    }
}

static PERSON_OPERATIONS: &[OperationSpec<Person>] = &[
    OperationSpec { name: "name", params: &["gender"], method: Person::op_name },
    OperationSpec { name: "first_name", params: &["gender"], method: Person::op_name },
    OperationSpec { name: "surname", params: &["gender"], method: Person::op_surname },
    OperationSpec { name: "last_name", params: &["gender"], method: Person::op_surname },
    OperationSpec { name: "full_name", params: &["gender", "reverse"], method: Person::op_full_name },
    OperationSpec { name: "age", params: &["minimum", "maximum"], method: Person::op_age },
    OperationSpec {
        name: "work_experience",
        params: &["working_start_age"],
        method: Person::op_work_experience,
    },
    OperationSpec { name: "username", params: &["mask", "drange"], method: Person::op_username },
    OperationSpec { name: "password", params: &["length", "hashed"], method: Person::op_password },
    OperationSpec { name: "email", params: &["domains", "unique"], method: Person::op_email },
    OperationSpec { name: "telephone", params: &["mask", "placeholder"], method: Person::op_telephone },
    OperationSpec { name: "identifier", params: &["mask"], method: Person::op_identifier },
    OperationSpec { name: "gender", params: &["iso5218", "symbol"], method: Person::op_gender },
    OperationSpec { name: "sex", params: &["iso5218", "symbol"], method: Person::op_gender },
    OperationSpec { name: "height", params: &["minimum", "maximum"], method: Person::op_height },
    OperationSpec { name: "weight", params: &["minimum", "maximum"], method: Person::op_weight },
    OperationSpec { name: "blood_type", params: &[], method: Person::op_blood_type },
    OperationSpec { name: "occupation", params: &[], method: Person::op_occupation },
    OperationSpec { name: "university", params: &[], method: Person::op_university },
    OperationSpec { name: "academic_degree", params: &[], method: Person::op_academic_degree },
    OperationSpec { name: "language", params: &[], method: Person::op_language },
    OperationSpec { name: "nationality", params: &["gender"], method: Person::op_nationality },
    OperationSpec { name: "title", params: &["gender", "title_type"], method: Person::op_title },
];

impl Provider for Person {
    fn name(&self) -> &str {
        "person"
    }

    fn operations(&self) -> Vec<&'static str> {
        operation_names(PERSON_OPERATIONS)
    }

    fn operation(&self, name: &str) -> Option<Operation> {
        bind(self, PERSON_OPERATIONS, name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn single_char(name: &'static str, text: &str) -> Result<char, ProviderError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ProviderError::invalid(name, format!("expected one character, got '{text}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faux_core::ArgError;
    use faux_random::RandomError;

    fn person() -> Person {
        Person::new(Locale::En).unwrap()
    }

    fn matches_username(mask: &str, username: &str) -> bool {
        let words: Vec<&str> = username
            .split(|c| c == '.' || c == '-' || c == '_')
            .collect();
        let separators = mask.chars().filter(|c| ".-_".contains(*c)).count();
        words.len() == separators + 1 && username.chars().last().is_some_and(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_name_respects_gender() {
        let person = person();
        let mut random = Random::new(7u64);
        for _ in 0..20 {
            let name = person.name(&mut random, Some(Gender::Female)).unwrap();
            assert!(person.data.names.get(Gender::Female).contains(&name));
        }
    }

    #[test]
    fn test_russian_full_name_agrees_in_gender() {
        let person = Person::new(Locale::Ru).unwrap();
        let mut random = Random::new(3u64);
        let full = person.full_name(&mut random, Some(Gender::Female), true).unwrap();
        let (surname, name) = full.split_once(' ').unwrap();
        assert!(person.data.surnames.get(Gender::Female).iter().any(|s| s == surname));
        assert!(person.data.names.get(Gender::Female).iter().any(|n| n == name));
    }

    #[test]
    fn test_age_bounds() {
        let person = person();
        let mut random = Random::new(1u64);
        for _ in 0..100 {
            let age = person.age(&mut random, 18, 21).unwrap();
            assert!((18..=21).contains(&age));
        }
        assert!(person.age(&mut random, 30, 20).is_err());
    }

    #[test]
    fn test_work_experience_never_negative() {
        let person = person();
        let mut random = Random::new(1u64);
        assert_eq!(person.work_experience(&mut random, 100).unwrap(), 0);
    }

    #[test]
    fn test_username_masks() {
        let person = person();
        let mut random = Random::new(11u64);
        for mask in ["C-d", "C.d", "C_d", "CC-d", "Cd", "l-d", "l.d", "l_d", "ld", "U.d"] {
            let username = person.username(&mut random, Some(mask), USERNAME_DRANGE).unwrap();
            assert!(matches_username(mask, &username), "{mask} -> {username}");
        }

        let cased = person.username(&mut random, Some("Cd"), USERNAME_DRANGE).unwrap();
        assert!(cased.chars().next().unwrap().is_ascii_uppercase());
    }

    #[test]
    fn test_username_drange() {
        let person = person();
        let mut random = Random::new(11u64);
        let username = person.username(&mut random, Some("U.d"), (1000, 2000)).unwrap();
        let (_, digits) = username.split_once('.').unwrap();
        let number: i64 = digits.parse().unwrap();
        assert!((1000..=2000).contains(&number));

        let op = person.operation("username").unwrap();
        let args = Args::new().with("drange", vec![1000, 2000, 3000]);
        assert!(matches!(
            op(&mut random, &args),
            Err(ProviderError::InvalidArgument { name: "drange", .. })
        ));
    }

    #[test]
    fn test_username_unsupported_mask() {
        let person = person();
        let mut random = Random::new(11u64);
        assert!(matches!(
            person.username(&mut random, Some("cda"), USERNAME_DRANGE),
            Err(ProviderError::InvalidArgument { name: "mask", .. })
        ));
    }

    #[test]
    fn test_password() {
        let person = person();
        let mut random = Random::new(5u64);
        assert_eq!(person.password(&mut random, 15, false).unwrap().chars().count(), 15);
        let hashed = person.password(&mut random, 8, true).unwrap();
        assert_eq!(hashed.len(), 64);
        assert!(hashed.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hashed_password_is_sha256_of_plain() {
        let person = person();
        let plain = person.password(&mut Random::new(6u64), 12, false).unwrap();
        let hashed = person.password(&mut Random::new(6u64), 12, true).unwrap();
        assert_eq!(hashed, hex::encode(Sha256::digest(plain.as_bytes())));
        assert_eq!(hashed, hashed.to_lowercase());

        let short = person.password(&mut Random::new(6u64), 1, true).unwrap();
        assert_eq!(short.len(), 64);
    }

    #[test]
    fn test_email_domains() {
        let person = person();
        let mut random = Random::new(5u64);
        let domains = vec!["example.com".to_string()];
        let email = person.email(&mut random, Some(&domains), false).unwrap();
        assert_eq!(email.split('@').nth(1), Some("example.com"));
    }

    #[test]
    fn test_unique_email() {
        let person = person();
        let mut random = Random::default();
        let mut generated = std::collections::HashSet::new();
        for _ in 0..1000 {
            let email = person.email(&mut random, None, true).unwrap();
            generated.insert(email.split('@').next().unwrap().to_string());
        }
        assert_eq!(generated.len(), 1000);

        let mut seeded = Random::new(1u64);
        assert!(person.email(&mut seeded, None, true).is_err());
    }

    #[test]
    fn test_telephone_mask() {
        let person = person();
        let mut random = Random::new(9u64);
        let phone = person.telephone(&mut random, Some("+5 (###)-###-##-##"), '#').unwrap();
        assert!(phone.starts_with("+5 ("));
        assert!(!phone.contains('#'));

        let err = person.telephone(&mut random, Some("@@"), '@').unwrap_err();
        assert!(matches!(err, ProviderError::Random(RandomError::InvalidMask('@'))));
    }

    #[test]
    fn test_identifier() {
        let person = person();
        let mut random = Random::new(9u64);
        let id = person.identifier(&mut random, "##-##/## @@").unwrap();
        assert_eq!(id.len(), "##-##/## @@".len());
        assert!(id[id.len() - 2..].chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_gender_forms() {
        let person = person();
        let mut random = Random::new(2u64);
        let code = person.gender(&mut random, true, false).unwrap();
        assert!(ISO5218_CODES.contains(&code.as_i64().unwrap()));
        let symbol = person.gender(&mut random, false, true).unwrap();
        assert!(shared::GENDER_SYMBOLS.contains(&symbol.as_str().unwrap()));
        let title = person.gender(&mut random, false, false).unwrap();
        assert!(person.data.gender.iter().any(|g| Some(g.as_str()) == title.as_str()));
    }

    #[test]
    fn test_height_is_formatted() {
        let person = person();
        let mut random = Random::new(2u64);
        let height = person.height(&mut random, 1.6, 1.9).unwrap();
        assert!(height.starts_with('1'));
        assert_eq!(height.len(), 4);
    }

    #[test]
    fn test_title_kinds() {
        let person = person();
        let mut random = Random::new(2u64);
        let title = person
            .title(&mut random, Some(Gender::Male), Some(TitleType::Academic))
            .unwrap();
        assert!(person.data.title.get(Gender::Male).academic.contains(&title));
    }

    #[test]
    fn test_operation_rejects_bad_gender() {
        let person = person();
        let op = person.operation("full_name").unwrap();
        let err = op(&mut Random::new(1u64), &Args::new().with("gender", "nil")).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Argument(ArgError::NonEnumerable { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_output() {
        let person = person();
        let mut a = Random::new(42u64);
        let mut b = Random::new(42u64);
        for op in ["full_name", "username", "email", "telephone", "password", "height"] {
            let op = person.operation(op).unwrap();
            assert_eq!(op(&mut a, &Args::new()).unwrap(), op(&mut b, &Args::new()).unwrap());
        }
    }
}
