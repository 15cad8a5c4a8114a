use std::fmt;

pub type HolderId = u32;

/// A natural person. Consumer accounts belong to one, and commercial accounts
/// list them as authorized users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    id_number: HolderId,
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(
        id_number: HolderId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id_number,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn id_number(&self) -> HolderId {
        self.id_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Same identifier and the same first and last name.
    pub fn same_identity(&self, other: &Person) -> bool {
        self.id_number == other.id_number
            && self.first_name == other.first_name
            && self.last_name == other.last_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Company {
    id_number: HolderId,
    name: String,
}

impl Company {
    pub fn new(id_number: HolderId, name: impl Into<String>) -> Self {
        Self {
            id_number,
            name: name.into(),
        }
    }

    pub fn id_number(&self) -> HolderId {
        self.id_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Owner of an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountHolder {
    Person(Person),
    Company(Company),
}

impl AccountHolder {
    pub fn id_number(&self) -> HolderId {
        match self {
            AccountHolder::Person(p) => p.id_number(),
            AccountHolder::Company(c) => c.id_number(),
        }
    }
}

impl From<Person> for AccountHolder {
    fn from(person: Person) -> Self {
        AccountHolder::Person(person)
    }
}

impl From<Company> for AccountHolder {
    fn from(company: Company) -> Self {
        AccountHolder::Company(company)
    }
}

impl fmt::Display for AccountHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountHolder::Person(p) => write!(f, "{} {}", p.first_name, p.last_name),
            AccountHolder::Company(c) => f.write_str(&c.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holder_id_is_taken_from_the_variant() {
        let person: AccountHolder = Person::new(7, "Ada", "Lovelace").into();
        let company: AccountHolder = Company::new(42, "Acme").into();

        assert_eq!(person.id_number(), 7);
        assert_eq!(company.id_number(), 42);
        assert_eq!(person.to_string(), "Ada Lovelace");
        assert_eq!(company.to_string(), "Acme");
    }

    #[test]
    fn same_identity_requires_id_and_both_names() {
        let a = Person::new(7, "A", "B");
        assert!(a.same_identity(&Person::new(7, "A", "B")));
        assert!(!a.same_identity(&Person::new(7, "X", "Y")));
        assert!(!a.same_identity(&Person::new(7, "A", "Y")));
        assert!(!a.same_identity(&Person::new(8, "A", "B")));
    }
}
