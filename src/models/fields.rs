//! Validated value fields of an employee record.
//!
//! Each field type can only be constructed through its [`FromStr`]
//! implementation (or the matching `TryFrom<String>` used by serde), so an
//! [`Employee`](super::Employee) never holds a value that breaks its format
//! rule. Commands rely on this and do not re-validate field syntax.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Implements the string plumbing shared by text-backed fields.
macro_rules! text_field {
    ($ty:ident, $field:literal) => {
        impl $ty {
            /// Returns the field value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = EngineError;

            fn try_from(value: String) -> EngineResult<Self> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl $ty {
            /// Field name used in validation errors.
            pub const FIELD: &'static str = $field;
        }
    };
}

/// An employee's full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

/// Constraint message for [`Name`].
pub const NAME_CONSTRAINTS: &str =
    "names should only contain alphanumeric characters and spaces, and should not be blank";

impl FromStr for Name {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let trimmed = s.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_alphanumeric() || c == ' ');
        if !valid {
            return Err(EngineError::invalid_field(Self::FIELD, NAME_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Name {
    /// Returns the whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

text_field!(Name, "name");

/// A phone number made of digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

/// Constraint message for [`Phone`].
pub const PHONE_CONSTRAINTS: &str =
    "phone numbers should only contain digits, and should be at least 3 digits long";

impl FromStr for Phone {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let trimmed = s.trim();
        if trimmed.len() < 3 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(EngineError::invalid_field(Self::FIELD, PHONE_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_field!(Phone, "phone");

/// An email address of the form `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

/// Constraint message for [`Email`].
pub const EMAIL_CONSTRAINTS: &str = "emails should be of the format local-part@domain, where the \
     local-part holds alphanumerics and +_.- (not at either end) and the domain is made of \
     labels separated by periods, ending in a label at least 2 characters long";

const EMAIL_SPECIAL_CHARACTERS: &[char] = &['+', '_', '.', '-'];

fn is_valid_local_part(local: &str) -> bool {
    let starts_or_ends_special = local.starts_with(EMAIL_SPECIAL_CHARACTERS)
        || local.ends_with(EMAIL_SPECIAL_CHARACTERS);
    !local.is_empty()
        && !starts_or_ends_special
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || EMAIL_SPECIAL_CHARACTERS.contains(&c))
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let last_label_long_enough = labels.last().is_some_and(|label| label.len() >= 2);
    last_label_long_enough && labels.iter().all(|label| is_valid_domain_label(label))
}

impl FromStr for Email {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let trimmed = s.trim();
        let valid = match trimmed.split_once('@') {
            Some((local, domain)) => {
                !domain.contains('@') && is_valid_local_part(local) && is_valid_domain(domain)
            }
            None => false,
        };
        if !valid {
            return Err(EngineError::invalid_field(Self::FIELD, EMAIL_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_field!(Email, "email");

/// A postal address; any non-blank text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

/// Constraint message for [`Address`].
pub const ADDRESS_CONSTRAINTS: &str = "addresses can take any values, and should not be blank";

impl FromStr for Address {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EngineError::invalid_field(Self::FIELD, ADDRESS_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_field!(Address, "address");

/// A bank account number made of digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BankAccount(String);

/// Constraint message for [`BankAccount`].
pub const BANK_ACCOUNT_CONSTRAINTS: &str =
    "bank account numbers should only contain digits, and should not be blank";

impl FromStr for BankAccount {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(EngineError::invalid_field(
                Self::FIELD,
                BANK_ACCOUNT_CONSTRAINTS,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }
}

text_field!(BankAccount, "bank account");

/// A monthly salary, non-negative with two decimal places.
///
/// # Example
///
/// ```
/// use roster_engine::models::Salary;
///
/// let salary: Salary = "4000".parse().unwrap();
/// assert_eq!(salary.to_string(), "4000.00");
/// assert!("-1".parse::<Salary>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Salary(Decimal);

/// Constraint message for [`Salary`].
pub const SALARY_CONSTRAINTS: &str =
    "salaries should be non-negative numbers with at most 2 decimal places";

impl Salary {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "salary";

    /// Returns the salary amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Salary {
    type Error = EngineError;

    fn try_from(value: Decimal) -> EngineResult<Self> {
        if value.is_sign_negative() || value.normalize().scale() > 2 {
            return Err(EngineError::invalid_field(Self::FIELD, SALARY_CONSTRAINTS));
        }
        let mut amount = value;
        amount.rescale(2);
        Ok(Self(amount))
    }
}

impl From<Salary> for Decimal {
    fn from(value: Salary) -> Self {
        value.0
    }
}

impl FromStr for Salary {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|_| EngineError::invalid_field(Self::FIELD, SALARY_CONSTRAINTS))?;
        Self::try_from(amount)
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
