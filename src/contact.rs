//! Contact form with a simulated submission.
//!
//! There is no backend: `submit` arms a deadline, `poll` resolves it from
//! the UI loop, clears the form and hands back a success toast.

use std::time::{Duration, Instant};

use crate::notify::Toast;

pub const SUCCESS_MESSAGE: &str = "Message sent! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingField(Field),
    AlreadySubmitting,
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::MissingField(field) => write!(f, "{} is required", field),
            ContactError::AlreadySubmitting => write!(f, "a message is already being sent"),
        }
    }
}

impl std::error::Error for ContactError {}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending { until: Instant },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    state: SubmitState,
    delay: Duration,
    toast_duration: Duration,
}

impl ContactForm {
    pub fn new(delay: Duration, toast_duration: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            state: SubmitState::Idle,
            delay,
            toast_duration,
        }
    }

    /// Every field must hold something other than whitespace.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Sending { .. })
    }

    /// Start the simulated send.
    pub fn submit(&mut self, now: Instant) -> Result<(), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.validate()?;
        self.state = SubmitState::Sending {
            until: now + self.delay,
        };
        log::debug!("contact submission started ({} ms)", self.delay.as_millis());
        Ok(())
    }

    /// Resolve a finished send. Returns the toast to show, once.
    pub fn poll(&mut self, now: Instant) -> Option<Toast> {
        match self.state {
            SubmitState::Sending { until } if now >= until => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.state = SubmitState::Idle;
                log::debug!("contact submission delivered");
                Some(Toast::success(SUCCESS_MESSAGE, now, self.toast_duration))
            }
            _ => None,
        }
    }

    /// Time until the pending send resolves.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            SubmitState::Sending { until } => Some(until.saturating_duration_since(now)),
            SubmitState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(Duration::from_secs(2), Duration::from_secs(5));
        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.message = "Let's build something.".into();
        form
    }

    #[test]
    fn blank_fields_are_rejected_in_order() {
        let mut form = filled();
        form.email = "   ".into();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Email)));
        assert_eq!(form.submit(Instant::now()), Err(ContactError::MissingField(Field::Email)));
        assert!(!form.is_submitting());
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "email is required"
        );
    }

    #[test]
    fn submission_resolves_after_delay() {
        let t0 = Instant::now();
        let mut form = filled();
        form.submit(t0).unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.submit(t0), Err(ContactError::AlreadySubmitting));

        assert!(form.poll(t0 + Duration::from_millis(1_999)).is_none());
        let toast = form.poll(t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, SUCCESS_MESSAGE);
        assert_eq!(toast.duration, Duration::from_secs(5));

        assert!(!form.is_submitting());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert!(form.poll(t0 + Duration::from_secs(3)).is_none());
    }
}
