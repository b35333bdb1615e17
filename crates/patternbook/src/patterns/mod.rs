//! Gang-of-four style design patterns.
//!
//! Creational patterns build objects without the caller naming concrete
//! types; the decorator adds behavior to one instance without touching its
//! type; the template method fixes the order of steps and leaves the steps
//! themselves to implementors.

pub mod abstract_factory;
pub mod air_conditioner;
pub mod credit_card;
pub mod decorator;
pub mod factory_method;
pub mod singleton;
pub mod template_method;

pub use abstract_factory::AbstractFactoryDemo;
pub use air_conditioner::AirConditionerDemo;
pub use credit_card::CreditCardDemo;
pub use decorator::DecoratorDemo;
pub use factory_method::FactoryMethodDemo;
pub use singleton::SingletonDemo;
pub use template_method::TemplateMethodDemo;
