//! File-system paths for a target platform.

use crate::data::shared;
use crate::error::ProviderError;
use crate::person::Person;
use crate::provider::{bind, operation_names, Operation, OperationSpec, Provider};
use faux_core::{Args, Gender, Locale, Platform, Value};
use faux_random::Random;

const DEV_FOLDERS: &[&str] = &["Development", "Dev"];

/// Provider of file-system paths.
///
/// User names always come from the English dataset, whatever the
/// registry locale.
#[derive(Debug, Clone)]
pub struct Path {
    platform: Platform,
    person: Person,
}

impl Path {
    pub fn new(platform: Platform) -> Result<Self, ProviderError> {
        Ok(Self {
            platform,
            person: Person::new(Locale::En)?,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    fn separator(&self) -> char {
        match self.platform {
            Platform::Windows => '\\',
            Platform::Linux | Platform::Darwin => '/',
        }
    }

    pub fn root(&self) -> String {
        match self.platform {
            Platform::Windows => "C:\\".to_string(),
            Platform::Linux | Platform::Darwin => "/".to_string(),
        }
    }

    pub fn home(&self) -> String {
        let home = match self.platform {
            Platform::Linux => "home",
            Platform::Darwin | Platform::Windows => "Users",
        };
        format!("{}{home}{}", self.root(), self.separator())
    }

    /// Home directory of a random user.
    pub fn user(&self, random: &mut Random, gender: Option<Gender>) -> Result<String, ProviderError> {
        let name = self.person.name(random, gender)?;
        let name = match self.platform {
            Platform::Windows => name,
            Platform::Linux | Platform::Darwin => name.to_lowercase(),
        };
        Ok(format!("{}{name}", self.home()))
    }

    pub fn users_folder(&self, random: &mut Random, gender: Option<Gender>) -> Result<String, ProviderError> {
        let user = self.user(random, gender)?;
        let folder = random.choice(shared::FOLDERS)?;
        Ok(format!("{user}{}{folder}", self.separator()))
    }

    pub fn dev_dir(&self, random: &mut Random, gender: Option<Gender>) -> Result<String, ProviderError> {
        let user = self.user(random, gender)?;
        let folder = random.choice(DEV_FOLDERS)?;
        let stack = random.choice(shared::PROGRAMMING_LANGS)?;
        let sep = self.separator();
        Ok(format!("{user}{sep}{folder}{sep}{stack}"))
    }

    pub fn project_dir(&self, random: &mut Random, gender: Option<Gender>) -> Result<String, ProviderError> {
        let dev_dir = self.dev_dir(random, gender)?;
        let project = random.choice(shared::PROJECT_NAMES)?;
        Ok(format!("{dev_dir}{}{project}", self.separator()))
    }

    fn op_root(&self, _random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.root().into())
    }

    fn op_home(&self, _random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.home().into())
    }

    fn op_user(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.user(random, args.enumeration("gender")?)?.into())
    }

    fn op_users_folder(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.users_folder(random, args.enumeration("gender")?)?.into())
    }

    fn op_dev_dir(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.dev_dir(random, args.enumeration("gender")?)?.into())
    }

    fn op_project_dir(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.project_dir(random, args.enumeration("gender")?)?.into())
    }
}

static PATH_OPERATIONS: &[OperationSpec<Path>] = &[
    OperationSpec { name: "root", params: &[], method: Path::op_root },
    OperationSpec { name: "home", params: &[], method: Path::op_home },
    OperationSpec { name: "user", params: &["gender"], method: Path::op_user },
    OperationSpec { name: "users_folder", params: &["gender"], method: Path::op_users_folder },
    OperationSpec { name: "dev_dir", params: &["gender"], method: Path::op_dev_dir },
    OperationSpec { name: "project_dir", params: &["gender"], method: Path::op_project_dir },
];

impl Provider for Path {
    fn name(&self) -> &str {
        "path"
    }

    fn operations(&self) -> Vec<&'static str> {
        operation_names(PATH_OPERATIONS)
    }

    fn operation(&self, name: &str) -> Option<Operation> {
        bind(self, PATH_OPERATIONS, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_and_homes() {
        let linux = Path::new(Platform::Linux).unwrap();
        assert_eq!(linux.root(), "/");
        assert_eq!(linux.home(), "/home/");

        let darwin = Path::new(Platform::Darwin).unwrap();
        assert_eq!(darwin.home(), "/Users/");

        let windows = Path::new(Platform::Windows).unwrap();
        assert_eq!(windows.root(), "C:\\");
        assert_eq!(windows.home(), "C:\\Users\\");
    }

    #[test]
    fn test_user_casing() {
        let mut random = Random::new(6u64);
        let linux = Path::new(Platform::Linux).unwrap();
        let user = linux.user(&mut random, Some(Gender::Female)).unwrap();
        let name = user.trim_start_matches("/home/");
        assert!(name.chars().all(|c| !c.is_uppercase()));

        let windows = Path::new(Platform::Windows).unwrap();
        let user = windows.user(&mut random, None).unwrap();
        let name = user.trim_start_matches("C:\\Users\\");
        assert!(name.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn test_project_dir_layout() {
        let mut random = Random::new(6u64);
        let path = Path::new(Platform::Linux).unwrap();
        let project = path.project_dir(&mut random, None).unwrap();
        let parts: Vec<&str> = project.trim_start_matches('/').split('/').collect();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0], "home");
        assert!(DEV_FOLDERS.contains(&parts[2]));
        assert!(shared::PROGRAMMING_LANGS.contains(&parts[3]));
        assert!(shared::PROJECT_NAMES.contains(&parts[4]));
    }

    #[test]
    fn test_windows_separators() {
        let mut random = Random::new(6u64);
        let path = Path::new(Platform::Windows).unwrap();
        let folder = path.users_folder(&mut random, None).unwrap();
        assert!(folder.starts_with("C:\\Users\\"));
        assert!(!folder.contains('/'));
    }
}
