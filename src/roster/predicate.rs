//! Display predicates used to filter the visible roster.

use crate::models::Employee;

/// Predicate selecting which employees appear in the filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmployeePredicate {
    /// Every employee is visible.
    #[default]
    ShowAll,
    /// Employees whose name contains any of the keywords as a whole word,
    /// ignoring case.
    NameContainsKeywords(Vec<String>),
}

impl EmployeePredicate {
    /// Creates a keyword predicate from whitespace-separated keywords.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::roster::EmployeePredicate;
    ///
    /// let predicate = EmployeePredicate::name_keywords("amy  bob");
    /// assert_eq!(
    ///     predicate,
    ///     EmployeePredicate::NameContainsKeywords(vec!["amy".to_string(), "bob".to_string()])
    /// );
    /// ```
    pub fn name_keywords(keywords: &str) -> Self {
        Self::NameContainsKeywords(keywords.split_whitespace().map(str::to_string).collect())
    }

    /// Returns true if `employee` should be visible.
    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContainsKeywords(keywords) => {
                let words: Vec<String> = employee.name.words().map(str::to_lowercase).collect();
                keywords
                    .iter()
                    .any(|keyword| words.contains(&keyword.to_lowercase()))
            }
        }
    }
}
