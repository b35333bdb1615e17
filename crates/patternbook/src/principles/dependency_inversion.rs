//! Dependency Inversion: high-level code and low-level details both depend on
//! abstractions, never on each other.

use std::fmt;
use std::io::{self, Write};

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::Result;

/// An email sent the tightly coupled way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainEmail {
    /// Recipient.
    pub to_address: String,
    /// Subject line.
    pub subject: String,
    /// Body.
    pub content: String,
}

impl PlainEmail {
    /// Send it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn send_email(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Send email")
    }
}

/// A text message sent the tightly coupled way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainSms {
    /// Recipient.
    pub phone_number: String,
    /// Body.
    pub message: String,
}

impl PlainSms {
    /// Send it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn send_sms(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Send sms")
    }
}

/// Before: builds its own email and SMS, so it can't send anything else.
#[derive(Debug, Clone, Default)]
pub struct TightNotification {
    email: PlainEmail,
    sms: PlainSms,
}

impl TightNotification {
    /// Create the notification and both of its concrete channels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            email: PlainEmail::default(),
            sms: PlainSms::default(),
        }
    }

    /// Send on both channels.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn send(&self, out: &mut dyn Write) -> io::Result<()> {
        self.email.send_email(out)?;
        self.sms.send_sms(out)
    }
}

/// Anything that can be sent.
pub trait Message: fmt::Debug {
    /// Send it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn send_message(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// An email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    /// Recipient.
    pub to_address: String,
    /// Subject line.
    pub subject: String,
    /// Body.
    pub content: String,
}

impl Message for Email {
    fn send_message(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Send email")
    }
}

/// A text message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sms {
    /// Recipient.
    pub phone_number: String,
    /// Body.
    pub message: String,
}

impl Message for Sms {
    fn send_message(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Send sms")
    }
}

/// After: sends whatever messages it is given.
#[derive(Debug, Default)]
pub struct Notification {
    messages: Vec<Box<dyn Message>>,
}

impl Notification {
    /// Create a notification over `messages`.
    #[must_use]
    pub fn new(messages: Vec<Box<dyn Message>>) -> Self {
        Self { messages }
    }

    /// Send every message, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn send(&self, out: &mut dyn Write) -> io::Result<()> {
        for message in &self.messages {
            message.send_message(out)?;
        }
        Ok(())
    }
}

/// Looks up customers.
pub trait CustomerDataAccess: fmt::Debug {
    /// The customer's name.
    fn customer_name(&self, id: u32) -> String;
}

/// Stand-in for a database.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyCustomerDataAccess;

impl CustomerDataAccess for DummyCustomerDataAccess {
    fn customer_name(&self, _id: u32) -> String {
        "Dummy Customer Name".to_string()
    }
}

/// Hands out the data access implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataAccessFactory;

impl DataAccessFactory {
    /// The data access to use.
    #[must_use]
    pub fn customer_data_access() -> Box<dyn CustomerDataAccess> {
        Box::new(DummyCustomerDataAccess)
    }
}

/// High-level customer logic; only ever sees the [`CustomerDataAccess`]
/// trait.
#[derive(Debug)]
pub struct CustomerBusinessLogic {
    data_access: Box<dyn CustomerDataAccess>,
}

impl CustomerBusinessLogic {
    /// Create the logic with whatever the factory provides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_access: DataAccessFactory::customer_data_access(),
        }
    }

    /// The customer's name.
    #[must_use]
    pub fn customer_name(&self, id: u32) -> String {
        self.data_access.customer_name(id)
    }
}

impl Default for CustomerBusinessLogic {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends notifications both ways and looks up a customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyInversionDemo;

impl Demo for DependencyInversionDemo {
    fn name(&self) -> &'static str {
        "dependency-inversion"
    }

    fn title(&self) -> &'static str {
        "Dependency Inversion Principle"
    }

    fn category(&self) -> Category {
        Category::Principle
    }

    fn summary(&self) -> &'static str {
        "Make notifications and customer logic depend on traits, not concrete types"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let out = ctx.out();

        writeln!(out, "Before:")?;
        TightNotification::new().send(out)?;

        writeln!(out, "After:")?;
        let notification = Notification::new(vec![
            Box::new(Email {
                to_address: "ada@example.com".to_string(),
                subject: "Hello".to_string(),
                content: "Order shipped".to_string(),
            }),
            Box::new(Sms {
                phone_number: "555-0100".to_string(),
                message: "Order shipped".to_string(),
            }),
        ]);
        notification.send(out)?;

        writeln!(out, "Customer 1: {}", CustomerBusinessLogic::new().customer_name(1))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_to_string(notification: &Notification) -> String {
        let mut buf = Vec::new();
        notification.send(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_tight_notification_sends_both() {
        let mut buf = Vec::new();
        TightNotification::new().send(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Send email\nSend sms\n");
    }

    #[test]
    fn test_notification_sends_in_order() {
        let notification = Notification::new(vec![
            Box::new(Sms::default()),
            Box::new(Email::default()),
            Box::new(Sms::default()),
        ]);
        assert_eq!(send_to_string(&notification), "Send sms\nSend email\nSend sms\n");
    }

    #[test]
    fn test_notification_accepts_new_message_kinds() {
        #[derive(Debug)]
        struct Push;
        impl Message for Push {
            fn send_message(&self, out: &mut dyn Write) -> io::Result<()> {
                writeln!(out, "Send push")
            }
        }

        let notification = Notification::new(vec![Box::new(Push)]);
        assert_eq!(send_to_string(&notification), "Send push\n");
    }

    #[test]
    fn test_empty_notification_sends_nothing() {
        assert_eq!(send_to_string(&Notification::default()), "");
    }

    #[test]
    fn test_customer_business_logic() {
        let logic = CustomerBusinessLogic::new();
        assert_eq!(logic.customer_name(1), "Dummy Customer Name");
        assert_eq!(logic.customer_name(99), "Dummy Customer Name");
    }
}
