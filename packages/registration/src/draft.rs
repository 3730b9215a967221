//! The in-progress registration form.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownOccupation;

/// Occupation choices offered by the form.
///
/// The wire value of [`Occupation::CharteredAccountant`] is spelled
/// `Charted Accountant`. Consumers of the registration API match on that
/// exact string, so it is sent as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupation {
    CharteredAccountant,
    FreelancerAccountant,
    EmployedAccountant,
    BusinessOwner,
    Other,
}

impl Occupation {
    /// Value transmitted to the registration service.
    pub fn value(&self) -> &'static str {
        match self {
            Occupation::CharteredAccountant => "Charted Accountant",
            Occupation::FreelancerAccountant => "Freelancer Accountant",
            Occupation::EmployedAccountant => "Employed Accountant",
            Occupation::BusinessOwner => "Business Owner",
            Occupation::Other => "Other",
        }
    }

    /// Text shown in the select control.
    pub fn label(&self) -> &'static str {
        match self {
            Occupation::CharteredAccountant => "Chartered Accountant",
            other => other.value(),
        }
    }

    pub fn variants() -> &'static [Occupation] {
        &[
            Occupation::CharteredAccountant,
            Occupation::FreelancerAccountant,
            Occupation::EmployedAccountant,
            Occupation::BusinessOwner,
            Occupation::Other,
        ]
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Occupation {
    type Err = UnknownOccupation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occupation::variants()
            .iter()
            .copied()
            .find(|o| o.value() == s)
            .ok_or_else(|| UnknownOccupation(s.to_string()))
    }
}

/// Form fields the page shell can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Occupation,
    OtherOccupation,
    Organization,
}

/// Values typed into the pre-registration form.
///
/// Lives for one form-fill session. Fields change only through
/// [`RegistrationDraft::set`], so `other_occupation` is empty whenever
/// `occupation` is not [`Occupation::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    name: String,
    email: String,
    phone: String,
    occupation: Option<Occupation>,
    other_occupation: String,
    organization: String,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one edit from the page shell.
    ///
    /// An occupation value outside the option set (including the empty
    /// placeholder) leaves the occupation unselected. Edits to the other
    /// occupation are dropped unless "Other" is selected.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Organization => self.organization = value,
            Field::OtherOccupation => {
                if self.wants_other_occupation() {
                    self.other_occupation = value;
                } else {
                    tracing::debug!("Ignoring other occupation while \"Other\" is not selected");
                }
            }
            Field::Occupation => {
                let occupation = if value.is_empty() {
                    None
                } else {
                    match value.parse::<Occupation>() {
                        Ok(o) => Some(o),
                        Err(e) => {
                            tracing::warn!(error = %e, "Ignoring occupation outside the option set");
                            None
                        }
                    }
                };
                self.set_occupation(occupation);
            }
        }
    }

    /// Select an occupation and run the dependent-field effect.
    pub fn set_occupation(&mut self, occupation: Option<Occupation>) {
        self.occupation = occupation;
        self.on_occupation_changed();
    }

    // Keyed on `occupation`: the free-text override only survives while
    // "Other" stays selected.
    fn on_occupation_changed(&mut self) {
        if self.occupation != Some(Occupation::Other) {
            self.other_occupation.clear();
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn occupation(&self) -> Option<Occupation> {
        self.occupation
    }

    pub fn other_occupation(&self) -> &str {
        &self.other_occupation
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Whether the "Other Occupation" input should be shown.
    pub fn wants_other_occupation(&self) -> bool {
        self.occupation == Some(Occupation::Other)
    }

    /// Occupation as it will be transmitted.
    pub fn effective_occupation(&self) -> String {
        match self.occupation {
            Some(Occupation::Other) => self.other_occupation.trim().to_string(),
            Some(o) => o.value().to_string(),
            None => String::new(),
        }
    }

    /// Return every field to empty/unselected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current value of a field, as the page shell would render it.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Occupation => self.occupation.map(|o| o.value()).unwrap_or(""),
            Field::OtherOccupation => &self.other_occupation,
            Field::Organization => &self.organization,
        }
    }
}
