//! Single Responsibility: a type should have one, and only one, reason to
//! change.
//!
//! [`ValidateSendInvitationService`] validates names, validates addresses and
//! sends mail, so it changes whenever any of those rules change. The split
//! version gives each job its own type: [`UserNameService`],
//! [`EmailService`], and a [`Mailer`] behind [`InvitationService`].
//!
//! The same idea applied to storage: [`legacy::Journal`] writes itself to
//! disk, so a change of storage means editing the journal. The split
//! [`Journal`] keeps entries in memory, and [`PersistenceManager`] is the
//! only thing that knows about files.

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::catalog::{Category, Demo, DemoContext};
use crate::error::{Error, Result};

/// Subject line of every invitation.
pub const INVITATION_SUBJECT: &str = "Please join me at my party!";

fn validate_names(first: &str, last: &str) -> Result<()> {
    if first.trim().is_empty() || last.trim().is_empty() {
        return Err(Error::InvalidName {
            first: first.to_string(),
            last: last.to_string(),
        });
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    if !email.contains('@') || !email.contains('.') {
        return Err(Error::InvalidEmail {
            email: email.to_string(),
        });
    }
    Ok(())
}

/// An invitation ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
}

impl Invitation {
    fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            subject: INVITATION_SUBJECT.to_string(),
        }
    }
}

impl fmt::Display for Invitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' from {} to {}", self.subject, self.from, self.to)
    }
}

/// Before: validation and delivery tangled together.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateSendInvitationService;

impl ValidateSendInvitationService {
    /// Validate everything, then build and "send" the invitation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] or [`Error::InvalidEmail`].
    pub fn send_invite(&self, email: &str, first: &str, last: &str) -> Result<Invitation> {
        if first.trim().is_empty() || last.trim().is_empty() {
            return Err(Error::InvalidName {
                first: first.to_string(),
                last: last.to_string(),
            });
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(Error::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(Invitation::new("mysite@nowhere.com", email))
    }
}

/// Knows what a valid name is.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserNameService;

impl UserNameService {
    /// Reject blank first or last names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if either name is empty or whitespace.
    pub fn validate(&self, first: &str, last: &str) -> Result<()> {
        validate_names(first, last)
    }
}

/// Knows what a valid email address is.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailService;

impl EmailService {
    /// Reject addresses without both an `@` and a `.`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEmail`] if the address is malformed.
    pub fn validate(&self, email: &str) -> Result<()> {
        validate_email(email)
    }
}

/// Delivers invitations.
pub trait Mailer {
    /// Deliver one invitation.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails.
    fn send(&mut self, invitation: Invitation) -> Result<()>;
}

/// A mailer that queues invitations in memory instead of talking to a server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outbox {
    sent: Vec<Invitation>,
}

impl Outbox {
    /// Everything sent so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> &[Invitation] {
        &self.sent
    }
}

impl Mailer for Outbox {
    fn send(&mut self, invitation: Invitation) -> Result<()> {
        debug!(to = %invitation.to, "Queued invitation");
        self.sent.push(invitation);
        Ok(())
    }
}

/// After: composes the validators and a mailer; owns none of their rules.
#[derive(Debug)]
pub struct InvitationService<M> {
    names: UserNameService,
    emails: EmailService,
    mailer: M,
}

impl<M: Mailer> InvitationService<M> {
    /// Sender address of invitations.
    pub const FROM: &'static str = "sitename@invites2you.com";

    /// Create the service from its collaborators.
    pub fn new(names: UserNameService, emails: EmailService, mailer: M) -> Self {
        Self {
            names,
            emails,
            mailer,
        }
    }

    /// Validate and send one invitation.
    ///
    /// # Errors
    ///
    /// Returns a validation error before anything is sent, or the mailer's
    /// error.
    pub fn send_invite(&mut self, email: &str, first: &str, last: &str) -> Result<()> {
        self.names.validate(first, last)?;
        self.emails.validate(email)?;
        self.mailer.send(Invitation::new(Self::FROM, email))
    }

    /// The mailer.
    pub fn mailer(&self) -> &M {
        &self.mailer
    }
}

/// The journal that also owns its persistence.
pub mod legacy {
    use std::fmt;
    use std::path::Path;

    use tracing::info;

    use crate::error::Result;

    /// Numbered diary entries plus the code to save them.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Journal {
        entries: Vec<String>,
        count: usize,
    }

    impl Journal {
        /// Create an empty journal.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Append an entry; returns its number.
        pub fn add_entry(&mut self, text: &str) -> usize {
            self.count += 1;
            self.entries.push(format!("{}: {text}", self.count));
            self.count
        }

        /// Write the journal to `path`, replacing whatever is there.
        ///
        /// # Errors
        ///
        /// Returns an error if the file can't be written.
        pub fn save(&self, path: &Path) -> Result<()> {
            std::fs::write(path, self.to_string())?;
            info!(path = %path.display(), entries = self.entries.len(), "Journal saved itself");
            Ok(())
        }
    }

    impl fmt::Display for Journal {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for entry in &self.entries {
                writeln!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}

/// Numbered diary entries, kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; returns its number. Numbers are never reused.
    pub fn add_entry(&mut self, text: &str) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {text}", self.count));
        self.count
    }

    /// Remove the entry at `index` (zero-based position, not its number).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntryOutOfRange`] if there is no such entry.
    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(Error::EntryOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// The entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the journal is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Writes journals to disk so [`Journal`] doesn't have to.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistenceManager;

impl PersistenceManager {
    /// Save `journal` to `path`. An existing file is left alone unless
    /// `overwrite` is set. Returns whether the file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory can't be created or the file
    /// can't be written.
    pub fn save_to_file(&self, journal: &Journal, path: &Path, overwrite: bool) -> Result<bool> {
        if !overwrite && path.exists() {
            debug!(path = %path.display(), "Journal file exists, not overwriting");
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        std::fs::write(path, journal.to_string())?;
        info!(path = %path.display(), entries = journal.len(), "Journal saved");
        Ok(true)
    }
}

/// Sends invitations through both designs and keeps a journal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleResponsibilityDemo;

impl Demo for SingleResponsibilityDemo {
    fn name(&self) -> &'static str {
        "single-responsibility"
    }

    fn title(&self) -> &'static str {
        "Single Responsibility Principle"
    }

    fn category(&self) -> Category {
        Category::Principle
    }

    fn summary(&self) -> &'static str {
        "Split validation, delivery and persistence into types with one job each"
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let journal_config = ctx.config().journal.clone();
        let out = ctx.out();

        writeln!(out, "Before: one service validates and sends")?;
        let invitation =
            ValidateSendInvitationService.send_invite("ada@example.com", "Ada", "Lovelace")?;
        writeln!(out, " sent {invitation}")?;

        writeln!(out, "After: validators and mailer are separate")?;
        let mut service = InvitationService::new(UserNameService, EmailService, Outbox::default());
        let guests = [
            ("grace@example.com", "Grace", "Hopper"),
            ("alan-at-example", "Alan", "Turing"),
            ("edsger@example.com", " ", "Dijkstra"),
        ];
        for (email, first, last) in guests {
            match service.send_invite(email, first, last) {
                Ok(()) => {
                    if let Some(sent) = service.mailer().sent().last() {
                        writeln!(out, " sent {sent}")?;
                    }
                }
                Err(e) if e.is_validation_error() => writeln!(out, " refused: {e}")?,
                Err(e) => return Err(e),
            }
        }

        writeln!(out)?;
        let mut old_journal = legacy::Journal::new();
        old_journal.add_entry("I cried today.");
        writeln!(out, "Before: the journal carries its own save()")?;
        write!(out, " {old_journal}")?;

        writeln!(out, "After: entries here, files in PersistenceManager")?;
        let mut journal = Journal::new();
        journal.add_entry("I cried today.");
        journal.add_entry("I ate a bug.");
        write!(out, "{journal}")?;

        if let Some(path) = journal_config.path {
            let written =
                PersistenceManager.save_to_file(&journal, &path, journal_config.overwrite)?;
            if written {
                writeln!(out, "Journal saved to {}", path.display())?;
            } else {
                writeln!(out, "Journal already exists at {}", path.display())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_validation() {
        let names = UserNameService;
        assert!(names.validate("Ada", "Lovelace").is_ok());
        assert!(matches!(
            names.validate("", "Lovelace"),
            Err(Error::InvalidName { .. })
        ));
        assert!(names.validate("Ada", "   ").is_err());
        assert!(names.validate("\t", "\n").is_err());
    }

    #[test]
    fn test_email_validation() {
        let emails = EmailService;
        assert!(emails.validate("ada@example.com").is_ok());
        assert!(matches!(
            emails.validate("ada.example.com"),
            Err(Error::InvalidEmail { .. })
        ));
        assert!(emails.validate("ada@example").is_err());
        assert!(emails.validate("").is_err());
    }

    #[test]
    fn test_both_designs_agree_on_validation() {
        let cases = [
            ("a@b.c", "A", "B"),
            ("a@b.c", "", "B"),
            ("ab.c", "A", "B"),
            ("a@bc", "A", " "),
        ];
        for (email, first, last) in cases {
            let before = ValidateSendInvitationService.send_invite(email, first, last);
            let mut service =
                InvitationService::new(UserNameService, EmailService, Outbox::default());
            let after = service.send_invite(email, first, last);
            assert_eq!(before.is_ok(), after.is_ok(), "{email} {first} {last}");
        }
    }

    #[test]
    fn test_name_checked_before_email() {
        let mut service = InvitationService::new(UserNameService, EmailService, Outbox::default());
        let err = service.send_invite("bad", "", "").unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_invalid_invite_sends_nothing() {
        let mut service = InvitationService::new(UserNameService, EmailService, Outbox::default());
        assert!(service.send_invite("bad", "Ada", "Lovelace").is_err());
        assert!(service.mailer().sent().is_empty());
    }

    #[test]
    fn test_valid_invite_is_sent() {
        let mut service = InvitationService::new(UserNameService, EmailService, Outbox::default());
        service
            .send_invite("ada@example.com", "Ada", "Lovelace")
            .unwrap();

        let sent = service.mailer().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ada@example.com");
        assert_eq!(sent[0].from, "sitename@invites2you.com");
        assert_eq!(sent[0].subject, INVITATION_SUBJECT);
    }

    #[test]
    fn test_journal_numbering() {
        let mut journal = Journal::new();
        assert_eq!(journal.add_entry("I cried today."), 1);
        assert_eq!(journal.add_entry("I ate a bug."), 2);
        assert_eq!(journal.entries(), ["1: I cried today.", "2: I ate a bug."]);
        assert_eq!(journal.to_string(), "1: I cried today.\n2: I ate a bug.\n");
    }

    #[test]
    fn test_journal_numbers_are_not_reused() {
        let mut journal = Journal::new();
        journal.add_entry("one");
        journal.add_entry("two");
        assert_eq!(journal.remove_entry(1).unwrap(), "2: two");
        assert_eq!(journal.add_entry("three"), 3);
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn test_journal_remove_out_of_range() {
        let mut journal = Journal::new();
        journal.add_entry("one");
        let err = journal.remove_entry(1).unwrap_err();
        assert!(matches!(err, Error::EntryOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("journal.txt");
        let mut journal = Journal::new();
        journal.add_entry("hello");

        assert!(PersistenceManager
            .save_to_file(&journal, &path, false)
            .unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1: hello\n");
    }

    #[test]
    fn test_save_respects_overwrite_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        std::fs::write(&path, "keep me").unwrap();
        let mut journal = Journal::new();
        journal.add_entry("new");

        assert!(!PersistenceManager
            .save_to_file(&journal, &path, false)
            .unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        assert!(PersistenceManager
            .save_to_file(&journal, &path, true)
            .unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1: new\n");
    }

    #[test]
    fn test_legacy_journal_saves_itself() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        std::fs::write(&path, "old").unwrap();

        let mut journal = legacy::Journal::new();
        assert_eq!(journal.add_entry("I cried today."), 1);
        journal.save(&path).unwrap();

        // No overwrite guard: the existing file is replaced.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1: I cried today.\n");
    }

    #[test]
    fn test_legacy_journal_save_fails_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("journal.txt");
        let result = legacy::Journal::new().save(&path);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_demo_without_journal_path_writes_no_file() {
        let config = crate::config::Config::default();
        let mut buf = Vec::new();
        let mut ctx = DemoContext::new(&mut buf, &config);
        SingleResponsibilityDemo.run(&mut ctx).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("sent 'Please join me at my party!' from sitename@invites2you.com to grace@example.com"));
        assert!(output.contains("refused: email is not valid: 'alan-at-example'"));
        assert!(output.contains("refused: name is not valid"));
        assert!(output.contains("Before: the journal carries its own save()\n 1: I cried today.\n"));
        assert!(output.contains("1: I cried today.\n2: I ate a bug.\n"));
        assert!(!output.contains("Journal saved"));
    }

    #[test]
    fn test_demo_saves_journal_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        let mut config = crate::config::Config::default();
        config.journal.path = Some(path.clone());

        let mut buf = Vec::new();
        let mut ctx = DemoContext::new(&mut buf, &config);
        SingleResponsibilityDemo.run(&mut ctx).unwrap();

        assert!(String::from_utf8(buf).unwrap().contains("Journal saved to"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1: I cried today.\n2: I ate a bug.\n"
        );
    }
}
