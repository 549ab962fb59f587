//! Customer contact details collected at checkout.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use spaza_core::OrderProfile;

/// How the customer wants to be reached about the order.
///
/// WhatsApp and phone both require a phone number; email requires an
/// email address. Exactly one of the two fields is required, selected by
/// the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    /// Reply on WhatsApp (the default, matching the order channel).
    #[default]
    WhatsApp,
    /// Call back on the phone.
    Phone,
    /// Reply by email.
    Email,
}

impl ContactMethod {
    /// Whether this method needs the phone field.
    #[must_use]
    pub const fn requires_phone(self) -> bool {
        matches!(self, Self::WhatsApp | Self::Phone)
    }
}

impl core::fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WhatsApp => write!(f, "whatsapp"),
            Self::Phone => write!(f, "phone"),
            Self::Email => write!(f, "email"),
        }
    }
}

/// The storefront-specific half of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fulfilment {
    /// Retail: goods are delivered to an address.
    Delivery {
        /// Free-form delivery address.
        address: String,
    },
    /// Booking: the customer comes in at a preferred date and time.
    Appointment {
        /// Preferred appointment date.
        date: Option<NaiveDate>,
        /// Preferred appointment time.
        time: Option<NaiveTime>,
    },
}

impl Fulfilment {
    /// The empty fulfilment block for a profile.
    #[must_use]
    pub const fn empty(profile: OrderProfile) -> Self {
        match profile {
            OrderProfile::Retail => Self::Delivery {
                address: String::new(),
            },
            OrderProfile::Booking => Self::Appointment {
                date: None,
                time: None,
            },
        }
    }
}

/// A required contact field that was left blank, in notice wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Customer name.
    Name,
    /// Phone number (whatsapp and phone methods).
    Phone,
    /// Email address (email method).
    Email,
    /// Delivery address (retail).
    Address,
    /// Preferred date (booking).
    Date,
    /// Preferred time (booking).
    Time,
}

impl core::fmt::Display for ContactField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone number"),
            Self::Email => write!(f, "email address"),
            Self::Address => write!(f, "delivery address"),
            Self::Date => write!(f, "preferred date"),
            Self::Time => write!(f, "preferred time"),
        }
    }
}

/// Transient checkout form data.
///
/// Lives only for the duration of a checkout; reset to empty defaults as
/// soon as an order message is produced, whether or not the external
/// handoff went anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    /// Customer name.
    pub name: String,
    /// Preferred contact method.
    pub method: ContactMethod,
    /// Phone number, required for whatsapp/phone methods.
    pub phone: String,
    /// Email address, required for the email method.
    pub email: String,
    /// Delivery or appointment details, per storefront profile.
    pub fulfilment: Fulfilment,
    /// Free-form notes; only rendered when non-blank.
    pub notes: String,
}

impl ContactForm {
    /// The empty form for a storefront profile.
    #[must_use]
    pub const fn empty(profile: OrderProfile) -> Self {
        Self {
            name: String::new(),
            method: ContactMethod::WhatsApp,
            phone: String::new(),
            email: String::new(),
            fulfilment: Fulfilment::empty(profile),
            notes: String::new(),
        }
    }

    /// Required fields that are still blank, in fixed priority order:
    /// name, then the method's phone/email, then address (retail) or
    /// date and time (booking). Whitespace-only input counts as blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push(ContactField::Name);
        }

        if self.method.requires_phone() {
            if self.phone.trim().is_empty() {
                missing.push(ContactField::Phone);
            }
        } else if self.email.trim().is_empty() {
            missing.push(ContactField::Email);
        }

        match &self.fulfilment {
            Fulfilment::Delivery { address } => {
                if address.trim().is_empty() {
                    missing.push(ContactField::Address);
                }
            }
            Fulfilment::Appointment { date, time } => {
                if date.is_none() {
                    missing.push(ContactField::Date);
                }
                if time.is_none() {
                    missing.push(ContactField::Time);
                }
            }
        }

        missing
    }

    /// Reset every field to the empty default, keeping the profile shape.
    pub fn reset(&mut self) {
        let profile = match self.fulfilment {
            Fulfilment::Delivery { .. } => OrderProfile::Retail,
            Fulfilment::Appointment { .. } => OrderProfile::Booking,
        };
        *self = Self::empty(profile);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_booking() -> ContactForm {
        ContactForm {
            name: "Naledi M".to_owned(),
            method: ContactMethod::WhatsApp,
            phone: "0795554321".to_owned(),
            email: String::new(),
            fulfilment: Fulfilment::Appointment {
                date: NaiveDate::from_ymd_opt(2026, 8, 15),
                time: NaiveTime::from_hms_opt(9, 30, 0),
            },
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_booking_form_missing_everything_in_priority_order() {
        let form = ContactForm::empty(OrderProfile::Booking);
        assert_eq!(
            form.missing_fields(),
            vec![
                ContactField::Name,
                ContactField::Phone,
                ContactField::Date,
                ContactField::Time,
            ]
        );
    }

    #[test]
    fn test_empty_retail_form_missing_address() {
        let form = ContactForm::empty(OrderProfile::Retail);
        assert_eq!(
            form.missing_fields(),
            vec![ContactField::Name, ContactField::Phone, ContactField::Address]
        );
    }

    #[test]
    fn test_email_method_requires_email_not_phone() {
        let mut form = filled_booking();
        form.method = ContactMethod::Email;
        form.phone = String::new();
        assert_eq!(form.missing_fields(), vec![ContactField::Email]);

        form.email = "naledi@example.com".to_owned();
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let mut form = filled_booking();
        form.name = "   ".to_owned();
        assert_eq!(form.missing_fields(), vec![ContactField::Name]);
    }

    #[test]
    fn test_complete_form_has_no_missing_fields() {
        assert!(filled_booking().missing_fields().is_empty());
    }

    #[test]
    fn test_reset_keeps_profile_shape() {
        let mut form = filled_booking();
        form.reset();
        assert_eq!(form, ContactForm::empty(OrderProfile::Booking));
    }

    #[test]
    fn test_contact_method_serde_strings() {
        assert_eq!(
            serde_json::to_string(&ContactMethod::WhatsApp).unwrap(),
            "\"whatsapp\""
        );
        let parsed: ContactMethod = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(parsed, ContactMethod::Email);
    }
}
