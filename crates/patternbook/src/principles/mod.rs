//! SOLID and related design principles, each shown as a before/after pair.
//!
//! - [`single_responsibility`]: one reason to change per type
//! - [`open_closed`]: extend behavior without editing existing code
//! - [`liskov_substitution`]: implementors must honor the contract they claim
//! - [`interface_segregation`]: small traits, implemented only where they fit
//! - [`dependency_inversion`]: high-level code depends on abstractions
//! - [`dry`]: one authoritative place for each piece of knowledge

pub mod dependency_inversion;
pub mod dry;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;

pub use dependency_inversion::DependencyInversionDemo;
pub use dry::DryDemo;
pub use interface_segregation::InterfaceSegregationDemo;
pub use liskov_substitution::LiskovSubstitutionDemo;
pub use open_closed::OpenClosedDemo;
pub use single_responsibility::SingleResponsibilityDemo;
