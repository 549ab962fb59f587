//! Order message rendering.
//!
//! The order message is the deliverable of the whole system: a single
//! structured text block handed to WhatsApp. Rendering is a pure
//! projection of the cart and contact form; it never mutates either, and
//! it is deterministic - the same inputs always produce the same text.

use spaza_core::{Catalog, OrderProfile};

use crate::cart::Cart;
use crate::contact::{ContactForm, Fulfilment};

/// Render the order message for a cart and contact form.
///
/// Shape, in order: a header line, a customer-information block (with
/// only the contact-method-relevant field), the delivery or appointment
/// block, the order lines (1-based index, name, the axis labels present
/// on the line, the add-on marker when selected, quantity, line total),
/// and a trailing total line. The total is summed as an exact decimal and
/// formatted exactly once.
#[must_use]
pub fn compose_message(catalog: &Catalog, cart: &Cart, contact: &ContactForm) -> String {
    let mut message = match catalog.profile {
        OrderProfile::Retail => format!("*New Order from {}*\n\n", catalog.store_name),
        OrderProfile::Booking => "*New Booking Request*\n\n".to_owned(),
    };

    message.push_str("*Customer Information:*\n");
    message.push_str(&format!("Name: {}\n", contact.name));
    message.push_str(&format!("Contact Method: {}\n", contact.method));
    if contact.method.requires_phone() {
        message.push_str(&format!("Phone: {}\n", contact.phone));
    } else {
        message.push_str(&format!("Email: {}\n", contact.email));
    }

    match &contact.fulfilment {
        Fulfilment::Delivery { address } => {
            message.push_str(&format!("Delivery Address: {address}\n\n"));
        }
        Fulfilment::Appointment { date, time } => {
            let date = date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
            let time = time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default();
            message.push_str(&format!("Preferred date: {date}\n"));
            message.push_str(&format!("Preferred time: {time}\n"));
            if !contact.notes.trim().is_empty() {
                message.push_str(&format!("Notes: {}\n", contact.notes));
            }
            message.push('\n');
        }
    }

    message.push_str("*Order Details:*\n");
    for (index, line) in cart.lines().iter().enumerate() {
        message.push_str(&format!("{}. {}\n", index + 1, line.name));
        if let Some(primary) = &line.primary {
            message.push_str(&format!("   {}: {primary}\n", catalog.profile.primary_label()));
        }
        if let Some(secondary) = &line.secondary {
            message.push_str(&format!(
                "   {}: {secondary}\n",
                catalog.profile.secondary_label()
            ));
        }
        if line.add_on {
            if let Some(policy) = &catalog.add_on {
                message.push_str(&format!(
                    "   Includes {}: Yes (+{})\n",
                    policy.label, policy.surcharge
                ));
            }
        }
        message.push_str(&format!("   Quantity: {}\n", line.quantity()));
        message.push_str(&format!("   Price: {}\n\n", line.line_total()));
    }

    message.push_str(&format!("*Total: {}*", cart.total()));
    message
}
