//! Order preview from a draft file.
//!
//! A draft is a YAML description of cart lines and contact details:
//!
//! ```yaml
//! lines:
//!   - product: 1
//!     primary: Small
//!     secondary: Medium
//!     add_on: true
//!     quantity: 2
//! contact:
//!   name: Naledi M
//!   method: whatsapp
//!   phone: "0795554321"
//!   date: 2026-08-15
//!   time: "09:30"
//!   notes: Gate code 4321
//! ```
//!
//! The draft runs through the same checkout session a UI would drive, so
//! every validation notice (missing variant selection, empty cart, blank
//! contact fields) surfaces exactly as it would in the storefront.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use spaza_core::{AxisChoice, OrderProfile, ProductId, VariantSelection};
use spaza_storefront::{CheckoutSession, ContactMethod, Fulfilment, StorefrontConfig};

#[derive(Debug, Deserialize)]
struct OrderDraft {
    lines: Vec<DraftLine>,
    contact: DraftContact,
}

#[derive(Debug, Deserialize)]
struct DraftLine {
    product: i32,
    #[serde(default)]
    primary: Option<String>,
    #[serde(default)]
    secondary: Option<String>,
    #[serde(default)]
    add_on: bool,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct DraftContact {
    name: String,
    #[serde(default)]
    method: ContactMethod,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: String,
    /// Delivery address (retail storefronts).
    #[serde(default)]
    address: String,
    /// Preferred date (booking storefronts).
    #[serde(default)]
    date: Option<NaiveDate>,
    /// Preferred time, `HH:MM` (booking storefronts).
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    notes: String,
}

/// Run a draft through the full checkout and print the order message and
/// its `wa.me` link.
///
/// # Errors
///
/// Returns an error if the catalog or draft cannot be loaded, or if any
/// checkout validation fails; the notice text becomes the error message.
pub fn preview(config: &StorefrontConfig, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;
    let raw = std::fs::read_to_string(path)?;
    let draft: OrderDraft = serde_yaml::from_str(&raw)?;

    let mut session = CheckoutSession::new(catalog);
    for line in &draft.lines {
        let selection = VariantSelection {
            primary: to_choice(line.primary.as_deref()),
            secondary: to_choice(line.secondary.as_deref()),
        };
        session.add_line(ProductId::new(line.product), &selection, line.add_on)?;
        if line.quantity != 1 {
            session.set_quantity(session.cart().len() - 1, line.quantity)?;
        }
    }

    session.begin_checkout()?;
    apply_contact(&mut session, draft.contact)?;
    let handoff = session.submit()?;

    println!("{}", handoff.message);
    println!();
    println!("Open: {}", handoff.link);
    Ok(())
}

fn to_choice(label: Option<&str>) -> AxisChoice {
    label.map_or(AxisChoice::Unset, AxisChoice::picked)
}

fn apply_contact(
    session: &mut CheckoutSession,
    draft: DraftContact,
) -> Result<(), chrono::ParseError> {
    let fulfilment = match session.catalog().profile {
        OrderProfile::Retail => Fulfilment::Delivery {
            address: draft.address,
        },
        OrderProfile::Booking => Fulfilment::Appointment {
            date: draft.date,
            time: parse_time(draft.time.as_deref())?,
        },
    };

    let contact = session.contact_mut();
    contact.name = draft.name;
    contact.method = draft.method;
    contact.phone = draft.phone;
    contact.email = draft.email;
    contact.fulfilment = fulfilment;
    contact.notes = draft.notes;
    Ok(())
}

fn parse_time(time: Option<&str>) -> Result<Option<NaiveTime>, chrono::ParseError> {
    time.map(|t| {
        NaiveTime::parse_from_str(t, "%H:%M").or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
    })
    .transpose()
}
