//! Dependency injection styles.
//!
//! The user-registration flavour starts from [`HardwiredUserLogic`], which
//! builds its own Google services, and then hands the [`EmailService`] in
//! three ways: through the constructor ([`ConstructorUserLogic`]), through a
//! setter after construction ([`SetterUserLogic`]), or with every call
//! ([`MethodUserLogic`]).
//!
//! The customer flavour does the same for a
//! [`CustomerDataAccess`](crate::principles::dependency_inversion::CustomerDataAccess):
//! see [`constructor`], [`property`] and [`method`].

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::{Error, Result};

/// What registering with the OAuth provider hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthResult {
    /// Message to forward to the new user.
    pub confirmation_message: String,
}

/// Registers users with Google.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleOAuthService;

impl GoogleOAuthService {
    /// Register a new user.
    #[must_use]
    pub fn register_user(&self, email_address: &str, _password: &str) -> OAuthResult {
        debug!(email = email_address, "Registering user");
        OAuthResult {
            confirmation_message: format!("Welcome, {email_address}! Please confirm your account."),
        }
    }
}

/// Sends mail through some provider.
pub trait EmailService: fmt::Debug {
    /// Provider name.
    fn provider(&self) -> &'static str;

    /// Send `message` to `email_address`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn send_mail(&self, out: &mut dyn Write, email_address: &str, message: &str) -> io::Result<()> {
        writeln!(
            out,
            "Sending mail to {email_address} using {}: {message}",
            self.provider()
        )
    }
}

/// Mail through Google.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleEmailService;

impl EmailService for GoogleEmailService {
    fn provider(&self) -> &'static str {
        "google"
    }
}

/// Mail through Outlook.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlookEmailService;

impl EmailService for OutlookEmailService {
    fn provider(&self) -> &'static str {
        "outlook"
    }
}

fn register_with(
    out: &mut dyn Write,
    auth: GoogleOAuthService,
    email_service: &dyn EmailService,
    email_address: &str,
    password: &str,
) -> Result<()> {
    let result = auth.register_user(email_address, password);
    email_service.send_mail(out, email_address, &result.confirmation_message)?;
    Ok(())
}

/// No injection: both services are created inside and can't be swapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardwiredUserLogic {
    auth: GoogleOAuthService,
    email_service: GoogleEmailService,
}

impl HardwiredUserLogic {
    /// Create the logic and its services.
    #[must_use]
    pub fn new() -> Self {
        Self {
            auth: GoogleOAuthService,
            email_service: GoogleEmailService,
        }
    }

    /// Register a user and mail the confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn register(&self, out: &mut dyn Write, email_address: &str, password: &str) -> Result<()> {
        register_with(out, self.auth, &self.email_service, email_address, password)
    }
}

/// Constructor injection: the mail service is required up front.
#[derive(Debug)]
pub struct ConstructorUserLogic {
    auth: GoogleOAuthService,
    email_service: Box<dyn EmailService>,
}

impl ConstructorUserLogic {
    /// Create the logic around `email_service`.
    #[must_use]
    pub fn new(email_service: Box<dyn EmailService>) -> Self {
        Self {
            auth: GoogleOAuthService,
            email_service,
        }
    }

    /// Register a user and mail the confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn register(&self, out: &mut dyn Write, email_address: &str, password: &str) -> Result<()> {
        register_with(out, self.auth, self.email_service.as_ref(), email_address, password)
    }
}

/// Setter injection: the mail service is assigned after construction.
#[derive(Debug, Default)]
pub struct SetterUserLogic {
    auth: GoogleOAuthService,
    email_service: Option<Box<dyn EmailService>>,
}

impl SetterUserLogic {
    /// Create the logic with no mail service yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign (or replace) the mail service.
    pub fn set_email_service(&mut self, email_service: Box<dyn EmailService>) {
        self.email_service = Some(email_service);
    }

    /// The current mail service, if one was set.
    #[must_use]
    pub fn email_service(&self) -> Option<&dyn EmailService> {
        self.email_service.as_deref()
    }

    /// Register a user and mail the confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDependency`] if no mail service was set.
    pub fn register(&self, out: &mut dyn Write, email_address: &str, password: &str) -> Result<()> {
        let email_service = self.email_service().ok_or(Error::MissingDependency {
            dependency: "email service",
        })?;
        register_with(out, self.auth, email_service, email_address, password)
    }
}

/// Method injection: the mail service comes with each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodUserLogic {
    auth: GoogleOAuthService,
}

impl MethodUserLogic {
    /// Create the logic.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and mail the confirmation through `email_service`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn register(
        &self,
        out: &mut dyn Write,
        email_address: &str,
        password: &str,
        email_service: &dyn EmailService,
    ) -> Result<()> {
        register_with(out, self.auth, email_service, email_address, password)
    }
}

/// Customer lookup with the data access passed to the constructor.
pub mod constructor {
    use crate::principles::dependency_inversion::{CustomerDataAccess, DummyCustomerDataAccess};

    /// Customer logic that must be given its data access.
    #[derive(Debug)]
    pub struct CustomerBusinessLogic {
        data_access: Box<dyn CustomerDataAccess>,
    }

    impl CustomerBusinessLogic {
        /// Create the logic around `data_access`.
        #[must_use]
        pub fn new(data_access: Box<dyn CustomerDataAccess>) -> Self {
            Self { data_access }
        }

        /// The customer's name.
        #[must_use]
        pub fn customer_name(&self, id: u32) -> String {
            self.data_access.customer_name(id)
        }
    }

    /// Wires the logic to the dummy data access.
    #[derive(Debug)]
    pub struct CustomerService {
        logic: CustomerBusinessLogic,
    }

    impl CustomerService {
        /// Build the service and inject its dependency.
        #[must_use]
        pub fn new() -> Self {
            Self {
                logic: CustomerBusinessLogic::new(Box::new(DummyCustomerDataAccess)),
            }
        }

        /// The customer's name.
        #[must_use]
        pub fn customer_name(&self, id: u32) -> String {
            self.logic.customer_name(id)
        }
    }

    impl Default for CustomerService {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Customer lookup with the data access assigned to a public field.
pub mod property {
    use crate::error::{Error, Result};
    use crate::principles::dependency_inversion::{CustomerDataAccess, DummyCustomerDataAccess};

    /// Customer logic whose data access is a public field.
    #[derive(Debug, Default)]
    pub struct CustomerBusinessLogic {
        /// Set this before looking anything up.
        pub data_access: Option<Box<dyn CustomerDataAccess>>,
    }

    impl CustomerBusinessLogic {
        /// The customer's name.
        ///
        /// # Errors
        ///
        /// Returns [`Error::MissingDependency`] if `data_access` is unset.
        pub fn customer_name(&self, id: u32) -> Result<String> {
            let data_access = self.data_access.as_ref().ok_or(Error::MissingDependency {
                dependency: "customer data access",
            })?;
            Ok(data_access.customer_name(id))
        }
    }

    /// Wires the logic to the dummy data access.
    #[derive(Debug)]
    pub struct CustomerService {
        logic: CustomerBusinessLogic,
    }

    impl CustomerService {
        /// Build the service and assign its dependency.
        #[must_use]
        pub fn new() -> Self {
            let logic = CustomerBusinessLogic {
                data_access: Some(Box::new(DummyCustomerDataAccess)),
            };
            Self { logic }
        }

        /// The customer's name.
        ///
        /// # Errors
        ///
        /// Returns [`Error::MissingDependency`] if the dependency is unset.
        pub fn customer_name(&self, id: u32) -> Result<String> {
            self.logic.customer_name(id)
        }
    }

    impl Default for CustomerService {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Customer lookup with the data access supplied through a trait method.
pub mod method {
    use crate::error::{Error, Result};
    use crate::principles::dependency_inversion::{CustomerDataAccess, DummyCustomerDataAccess};

    /// Accepts a data access after construction.
    pub trait DataAccessDependency {
        /// Supply the data access.
        fn set_dependency(&mut self, data_access: Box<dyn CustomerDataAccess>);
    }

    /// Customer logic that receives its data access through
    /// [`DataAccessDependency`].
    #[derive(Debug, Default)]
    pub struct CustomerBusinessLogic {
        data_access: Option<Box<dyn CustomerDataAccess>>,
    }

    impl CustomerBusinessLogic {
        /// The customer's name.
        ///
        /// # Errors
        ///
        /// Returns [`Error::MissingDependency`] before `set_dependency`.
        pub fn customer_name(&self, id: u32) -> Result<String> {
            let data_access = self.data_access.as_ref().ok_or(Error::MissingDependency {
                dependency: "customer data access",
            })?;
            Ok(data_access.customer_name(id))
        }
    }

    impl DataAccessDependency for CustomerBusinessLogic {
        fn set_dependency(&mut self, data_access: Box<dyn CustomerDataAccess>) {
            self.data_access = Some(data_access);
        }
    }

    /// Wires the logic to the dummy data access.
    #[derive(Debug)]
    pub struct CustomerService {
        logic: CustomerBusinessLogic,
    }

    impl CustomerService {
        /// Build the service and supply its dependency.
        #[must_use]
        pub fn new() -> Self {
            let mut logic = CustomerBusinessLogic::default();
            logic.set_dependency(Box::new(DummyCustomerDataAccess));
            Self { logic }
        }

        /// The customer's name.
        ///
        /// # Errors
        ///
        /// Returns [`Error::MissingDependency`] if the dependency is unset.
        pub fn customer_name(&self, id: u32) -> Result<String> {
            self.logic.customer_name(id)
        }
    }

    impl Default for CustomerService {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Registers users with each injection style, then looks up a customer with
/// each.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyInjectionDemo;

impl Demo for DependencyInjectionDemo {
    fn name(&self) -> &'static str {
        "dependency-injection"
    }

    fn title(&self) -> &'static str {
        "Dependency Injection"
    }

    fn category(&self) -> Category {
        Category::Injection
    }

    fn summary(&self) -> &'static str {
        "Hand collaborators in through the constructor, a setter, or each call"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let out = ctx.out();
        let (email, password) = ("ada@example.com", "hunter2");

        writeln!(out, "Hardwired:")?;
        HardwiredUserLogic::new().register(out, email, password)?;

        writeln!(out, "Constructor injection:")?;
        ConstructorUserLogic::new(Box::new(GoogleEmailService)).register(out, email, password)?;

        writeln!(out, "Setter injection:")?;
        let mut setter = SetterUserLogic::new();
        if let Err(e) = setter.register(out, email, password) {
            writeln!(out, "Before the setter: {e}")?;
        }
        setter.set_email_service(Box::new(OutlookEmailService));
        setter.register(out, email, password)?;

        writeln!(out, "Method injection:")?;
        let per_call = MethodUserLogic::new();
        per_call.register(out, email, password, &OutlookEmailService)?;
        per_call.register(out, email, password, &GoogleEmailService)?;

        writeln!(out)?;
        writeln!(
            out,
            "Constructor: {}",
            constructor::CustomerService::new().customer_name(1)
        )?;
        writeln!(out, "Property: {}", property::CustomerService::new().customer_name(1)?)?;
        writeln!(out, "Method: {}", method::CustomerService::new().customer_name(1)?)?;
        Ok(())
    }
}
