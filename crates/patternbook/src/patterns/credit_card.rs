//! Factory Method with parameterised creators: each card factory carries the
//! terms it issues cards with, and callers only see [`CreditCard`].

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::{Error, Result};

/// A credit card product.
pub trait CreditCard: fmt::Debug {
    /// Product name of the card.
    fn card_type(&self) -> &'static str;

    /// Current credit limit.
    fn credit_limit(&self) -> u32;

    /// Change the credit limit.
    fn set_credit_limit(&mut self, limit: u32);

    /// Current yearly fee.
    fn annual_charge(&self) -> u32;

    /// Change the yearly fee.
    fn set_annual_charge(&mut self, charge: u32);
}

macro_rules! credit_card {
    ($(#[$meta:meta])* $card:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $card {
            credit_limit: u32,
            annual_charge: u32,
        }

        impl $card {
            /// Issue a card with the given terms.
            #[must_use]
            pub fn new(credit_limit: u32, annual_charge: u32) -> Self {
                Self {
                    credit_limit,
                    annual_charge,
                }
            }
        }

        impl CreditCard for $card {
            fn card_type(&self) -> &'static str {
                $label
            }

            fn credit_limit(&self) -> u32 {
                self.credit_limit
            }

            fn set_credit_limit(&mut self, limit: u32) {
                self.credit_limit = limit;
            }

            fn annual_charge(&self) -> u32 {
                self.annual_charge
            }

            fn set_annual_charge(&mut self, charge: u32) {
                self.annual_charge = charge;
            }
        }
    };
}

credit_card!(
    /// Entry-level cash-back card.
    MoneyBackCreditCard,
    "MoneyBack"
);
credit_card!(
    /// Mid-tier card.
    TitaniumCreditCard,
    "Titanium"
);
credit_card!(
    /// Top-tier card.
    PlatinumCreditCard,
    "Platinum"
);

/// Issues one kind of card on fixed terms.
pub trait CardFactory: fmt::Debug {
    /// Issue a new card.
    fn issue(&self) -> Box<dyn CreditCard>;
}

/// Terms a factory issues its cards with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTerms {
    /// Credit limit of each issued card.
    pub credit_limit: u32,
    /// Yearly fee of each issued card.
    pub annual_charge: u32,
}

/// Issues [`MoneyBackCreditCard`]s.
#[derive(Debug, Clone, Copy)]
pub struct MoneyBackFactory(pub CardTerms);

/// Issues [`TitaniumCreditCard`]s.
#[derive(Debug, Clone, Copy)]
pub struct TitaniumFactory(pub CardTerms);

/// Issues [`PlatinumCreditCard`]s.
#[derive(Debug, Clone, Copy)]
pub struct PlatinumFactory(pub CardTerms);

impl CardFactory for MoneyBackFactory {
    fn issue(&self) -> Box<dyn CreditCard> {
        Box::new(MoneyBackCreditCard::new(
            self.0.credit_limit,
            self.0.annual_charge,
        ))
    }
}

impl CardFactory for TitaniumFactory {
    fn issue(&self) -> Box<dyn CreditCard> {
        Box::new(TitaniumCreditCard::new(
            self.0.credit_limit,
            self.0.annual_charge,
        ))
    }
}

impl CardFactory for PlatinumFactory {
    fn issue(&self) -> Box<dyn CreditCard> {
        Box::new(PlatinumCreditCard::new(
            self.0.credit_limit,
            self.0.annual_charge,
        ))
    }
}

/// The kinds of card on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// `moneyback`
    MoneyBack,
    /// `titanium`
    Titanium,
    /// `platinum`
    Platinum,
}

impl CardKind {
    /// Standard terms for this kind of card.
    #[must_use]
    pub fn default_terms(self) -> CardTerms {
        let (credit_limit, annual_charge) = match self {
            Self::MoneyBack => (50_000, 0),
            Self::Titanium => (100_000, 500),
            Self::Platinum => (500_000, 1000),
        };
        CardTerms {
            credit_limit,
            annual_charge,
        }
    }

    /// A factory issuing this kind of card on its standard terms.
    #[must_use]
    pub fn factory(self) -> Box<dyn CardFactory> {
        let terms = self.default_terms();
        match self {
            Self::MoneyBack => Box::new(MoneyBackFactory(terms)),
            Self::Titanium => Box::new(TitaniumFactory(terms)),
            Self::Platinum => Box::new(PlatinumFactory(terms)),
        }
    }
}

impl FromStr for CardKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moneyback" => Ok(Self::MoneyBack),
            "titanium" => Ok(Self::Titanium),
            "platinum" => Ok(Self::Platinum),
            _ => Err(Error::unsupported("card kind", s)),
        }
    }
}

/// Print a card's terms.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn describe(out: &mut dyn Write, card: &dyn CreditCard) -> std::io::Result<()> {
    writeln!(out, "Card Type: {}", card.card_type())?;
    writeln!(out, "Credit Limit: {}", card.credit_limit())?;
    writeln!(out, "Annual Charge: {}", card.annual_charge())
}

/// Issues the configured kind of card.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardDemo;

impl Demo for CreditCardDemo {
    fn name(&self) -> &'static str {
        "credit-card"
    }

    fn title(&self) -> &'static str {
        "Factory Method (credit cards)"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Issue a credit card from a factory chosen by name"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let kind = ctx.config().credit_card_kind()?;
        let factory = kind.factory();
        debug!(?kind, ?factory, "Issuing credit card");

        let card = factory.issue();
        describe(ctx.out(), card.as_ref())?;
        Ok(())
    }
}
