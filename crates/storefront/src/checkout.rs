//! The checkout session: one customer's cart, contact form, and stage.
//!
//! The session is an explicitly owned aggregate - no ambient state - so a
//! UI layer can hold exactly one and drive the whole flow through it,
//! and tests can drive it the same way.

use core::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use spaza_core::{Catalog, ProductId, RecipientHandle, VariantSelection};

use crate::cart::Cart;
use crate::contact::ContactForm;
use crate::error::CheckoutError;
use crate::order::compose_message;
use crate::whatsapp::order_link;

/// Opaque checkout session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a session is in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Browsing; the cart is mutable and no contact form is shown.
    Shopping,
    /// Collecting contact details; the cart is frozen until the customer
    /// navigates back.
    CollectingContact,
    /// An order message was produced and handed off; cart and contact
    /// are cleared.
    Submitted,
}

/// The product of a successful submission.
///
/// The caller opens `link` (or sends `message` to `recipient` some other
/// way); no response is awaited and delivery is not this system's
/// concern.
#[derive(Debug, Clone)]
pub struct OrderHandoff {
    /// The storefront's `wa.me` handle.
    pub recipient: RecipientHandle,
    /// The full order message text.
    pub message: String,
    /// `https://wa.me/<recipient>?text=<message>`.
    pub link: Url,
}

/// One customer's checkout state against one catalog.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    id: SessionId,
    catalog: Catalog,
    cart: Cart,
    contact: ContactForm,
    stage: Stage,
}

impl CheckoutSession {
    /// Start a session in the [`Stage::Shopping`] stage with an empty
    /// cart and an empty contact form matching the catalog's profile.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let id = SessionId::generate();
        let contact = ContactForm::empty(catalog.profile);
        tracing::debug!(session = %id, store = %catalog.store_name, "checkout session created");
        Self {
            id,
            catalog,
            cart: Cart::new(),
            contact,
            stage: Stage::Shopping,
        }
    }

    /// The session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// The catalog this session sells from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// The cart (read-only; mutate through the session methods).
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The contact form.
    #[must_use]
    pub const fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Mutable access to the contact form fields.
    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Add a line for a catalog product.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::CartFrozen`] outside the shopping stage,
    /// [`CheckoutError::UnknownProduct`] for an id not in the catalog,
    /// or any error from [`Cart::add_line`].
    pub fn add_line(
        &mut self,
        product_id: ProductId,
        selection: &VariantSelection,
        add_on: bool,
    ) -> Result<(), CheckoutError> {
        self.ensure_shopping()?;
        let product = self
            .catalog
            .find(product_id)
            .ok_or(CheckoutError::UnknownProduct(product_id))?;
        self.cart
            .add_line(product, selection, add_on, self.catalog.add_on.as_ref())?;
        tracing::debug!(session = %self.id, product = %product_id, lines = self.cart.len(), "line added");
        Ok(())
    }

    /// Remove the line at `index`.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::CartFrozen`] outside the shopping stage, or
    /// [`CheckoutError::LineOutOfRange`].
    pub fn remove_line(&mut self, index: usize) -> Result<(), CheckoutError> {
        self.ensure_shopping()?;
        self.cart.remove_line(index)?;
        Ok(())
    }

    /// Set the quantity of the line at `index`.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::CartFrozen`] outside the shopping stage, or any
    /// error from [`Cart::set_quantity`].
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), CheckoutError> {
        self.ensure_shopping()?;
        self.cart.set_quantity(index, quantity)
    }

    /// Move from shopping to collecting contact details.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::EmptyCartSubmission`] when the cart has no lines;
    /// no transition occurs.
    pub fn begin_checkout(&mut self) -> Result<(), CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCartSubmission);
        }
        self.stage = Stage::CollectingContact;
        Ok(())
    }

    /// Return to the shopping stage, unfreezing the cart. Also the way
    /// to start over after a submission.
    pub fn back_to_shopping(&mut self) {
        self.stage = Stage::Shopping;
    }

    /// Validate the contact form, produce the order message and its
    /// `wa.me` link, and clear the session.
    ///
    /// On success the cart and contact form are cleared and the stage is
    /// [`Stage::Submitted`], regardless of whether the caller ever opens
    /// the link.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::NotInCheckout`] outside the collecting-contact
    /// stage, or [`CheckoutError::IncompleteContact`] listing the blank
    /// required fields; the stage is unchanged and no message is
    /// produced.
    pub fn submit(&mut self) -> Result<OrderHandoff, CheckoutError> {
        if self.stage != Stage::CollectingContact {
            return Err(CheckoutError::NotInCheckout);
        }
        let missing = self.contact.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::IncompleteContact(missing));
        }

        let message = compose_message(&self.catalog, &self.cart, &self.contact);
        let link = order_link(&self.catalog.recipient, &message);
        tracing::info!(
            session = %self.id,
            lines = self.cart.len(),
            total = %self.cart.total(),
            "order handed off"
        );

        self.cart.clear();
        self.contact.reset();
        self.stage = Stage::Submitted;

        Ok(OrderHandoff {
            recipient: self.catalog.recipient.clone(),
            message,
            link,
        })
    }

    fn ensure_shopping(&self) -> Result<(), CheckoutError> {
        if self.stage == Stage::Shopping {
            Ok(())
        } else {
            Err(CheckoutError::CartFrozen)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use spaza_core::AxisChoice;

    use crate::catalog::samples;
    use crate::contact::{ContactField, Fulfilment};

    fn session_with_line() -> CheckoutSession {
        let mut session = CheckoutSession::new(samples::moonl_braids());
        session
            .add_line(
                ProductId::new(1),
                &VariantSelection {
                    primary: AxisChoice::picked("Small"),
                    secondary: AxisChoice::picked("Medium"),
                },
                false,
            )
            .unwrap();
        session
    }

    fn fill_contact(session: &mut CheckoutSession) {
        let contact = session.contact_mut();
        contact.name = "Naledi M".to_owned();
        contact.phone = "0795554321".to_owned();
        contact.fulfilment = Fulfilment::Appointment {
            date: NaiveDate::from_ymd_opt(2026, 8, 15),
            time: NaiveTime::from_hms_opt(9, 30, 0),
        };
    }

    #[test]
    fn test_new_session_is_shopping_and_empty() {
        let session = CheckoutSession::new(samples::moonl_braids());
        assert_eq!(session.stage(), Stage::Shopping);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_begin_checkout_requires_non_empty_cart() {
        let mut session = CheckoutSession::new(samples::moonl_braids());
        assert_eq!(
            session.begin_checkout(),
            Err(CheckoutError::EmptyCartSubmission)
        );
        assert_eq!(session.stage(), Stage::Shopping);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut session = CheckoutSession::new(samples::moonl_braids());
        assert_eq!(
            session.add_line(ProductId::new(99), &VariantSelection::none(), false),
            Err(CheckoutError::UnknownProduct(ProductId::new(99)))
        );
    }

    #[test]
    fn test_cart_frozen_while_collecting_contact() {
        let mut session = session_with_line();
        session.begin_checkout().unwrap();

        assert_eq!(session.set_quantity(0, 2), Err(CheckoutError::CartFrozen));
        assert_eq!(session.remove_line(0), Err(CheckoutError::CartFrozen));

        session.back_to_shopping();
        session.set_quantity(0, 2).unwrap();
        assert_eq!(session.cart().lines()[0].quantity(), 2);
    }

    #[test]
    fn test_submit_before_checkout_is_rejected() {
        let mut session = session_with_line();
        assert_eq!(session.submit().unwrap_err(), CheckoutError::NotInCheckout);
    }

    #[test]
    fn test_submit_with_incomplete_contact_keeps_state() {
        let mut session = session_with_line();
        session.begin_checkout().unwrap();
        fill_contact(&mut session);
        session.contact_mut().method = crate::contact::ContactMethod::Email;

        let err = session.submit().unwrap_err();
        assert_eq!(
            err,
            CheckoutError::IncompleteContact(vec![ContactField::Email])
        );
        assert_eq!(session.stage(), Stage::CollectingContact);
        assert_eq!(session.cart().len(), 1);
    }

    #[test]
    fn test_successful_submit_clears_session() {
        let mut session = session_with_line();
        session.begin_checkout().unwrap();
        fill_contact(&mut session);

        let handoff = session.submit().unwrap();
        assert_eq!(handoff.recipient.as_str(), "27795430029");
        assert!(
            handoff
                .link
                .as_str()
                .starts_with("https://wa.me/27795430029?text=")
        );
        assert!(handoff.message.starts_with("*New Booking Request*"));

        assert_eq!(session.stage(), Stage::Submitted);
        assert!(session.cart().is_empty());
        assert!(session.contact().name.is_empty());
    }

    #[test]
    fn test_back_to_shopping_after_submit_starts_fresh() {
        let mut session = session_with_line();
        session.begin_checkout().unwrap();
        fill_contact(&mut session);
        session.submit().unwrap();

        session.back_to_shopping();
        assert_eq!(session.stage(), Stage::Shopping);
        session
            .add_line(ProductId::new(7), &VariantSelection::none(), false)
            .unwrap();
        assert_eq!(session.cart().len(), 1);
    }
}
