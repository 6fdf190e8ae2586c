//! State of one phone sign-in form.
//!
//! [`PhoneAuthState`] stores only what the user did: the raw phone string,
//! the code, the focus flag of the phone field and the two error flags.
//! Validity, country, error text and button states are recomputed from those
//! fields on every call. Operations that move input focus return a
//! [`FocusRequest`] for the UI to carry out.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::code::{OneTimeCode, CODE_LENGTH};
use crate::content::{content, Content, Language};
use crate::phone::{flag_glyph, LibPhoneNumber, ParsedPhone, PhoneNumbers};

/// Raised by "send code" when the phone field is not ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhoneValidationError {
    #[error("phone number is empty")]
    Empty,
    #[error("phone number is not valid")]
    Invalid,
}

/// Payload of the verification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub phone: String,
    pub code: String,
}

/// Something the UI can focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Phone,
    CodeCell(usize),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    Now(FocusTarget),
    /// Focus `target` once `delay` has passed.
    After(Duration, FocusTarget),
}

/// Where the form is in the sign-in flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    PhoneEntering,
    PhoneValidFocused,
    PhoneValidBlurred,
    CodeEntering,
    CodeComplete,
    Submitting,
    SubmitError,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Empty => "empty",
            Phase::PhoneEntering => "phone-entering",
            Phase::PhoneValidFocused => "phone-valid-focused",
            Phase::PhoneValidBlurred => "phone-valid-blurred",
            Phase::CodeEntering => "code-entering",
            Phase::CodeComplete => "code-complete",
            Phase::Submitting => "submitting",
            Phase::SubmitError => "submit-error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct PhoneAuthState<P = LibPhoneNumber> {
    phones: P,
    language: Language,
    submit_delay: Duration,
    phone: String,
    phone_focused: bool,
    phone_error: Option<PhoneValidationError>,
    code: OneTimeCode,
    auth_failed: bool,
    /// The last attempt failed and nothing was edited since.
    retry_pending: bool,
    submitting: bool,
}

impl PhoneAuthState<LibPhoneNumber> {
    pub fn new(language: Language, submit_delay: Duration) -> Self {
        Self::with_phone_numbers(LibPhoneNumber::new(), language, submit_delay)
    }
}

impl<P: PhoneNumbers> PhoneAuthState<P> {
    pub fn with_phone_numbers(phones: P, language: Language, submit_delay: Duration) -> Self {
        Self {
            phones,
            language,
            submit_delay,
            phone: String::new(),
            phone_focused: false,
            phone_error: None,
            code: OneTimeCode::new(),
            auth_failed: false,
            retry_pending: false,
            submitting: false,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn content(&self) -> &'static Content {
        content(self.language)
    }

    // Phone field

    /// The raw phone string as last typed.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Store a new phone value. Jumps to the first code cell as soon as the
    /// number is valid.
    pub fn input_phone(&mut self, value: &str) -> Option<FocusRequest> {
        self.phone_error = None;
        self.retry_pending = false;
        self.phone = value.to_string();
        if self.phones.is_valid(value) {
            tracing::debug!("phone number complete, moving to code");
            Some(FocusRequest::Now(FocusTarget::CodeCell(0)))
        } else {
            None
        }
    }

    pub fn focus_phone(&mut self) {
        self.phone_focused = true;
    }

    pub fn blur_phone(&mut self) {
        self.phone_focused = false;
    }

    pub fn phone_focused(&self) -> bool {
        self.phone_focused
    }

    /// Gate for requesting a code. Flags the phone field when it is empty or
    /// invalid; the values themselves are left alone. Once the number passes,
    /// focus goes to the first code cell to wait for the code.
    pub fn send_code(&mut self) -> Result<FocusRequest, PhoneValidationError> {
        let refusal = if self.phone.is_empty() {
            PhoneValidationError::Empty
        } else if !self.phones.is_valid(&self.phone) {
            PhoneValidationError::Invalid
        } else {
            tracing::debug!("code requested");
            return Ok(FocusRequest::Now(FocusTarget::CodeCell(0)));
        };
        tracing::debug!(error = %refusal, "send code refused");
        self.phone_error = Some(refusal);
        Err(refusal)
    }

    pub fn display_phone(&self) -> String {
        self.phones.format_as_you_type(&self.phone)
    }

    pub fn phone_is_valid(&self) -> bool {
        !self.phone.is_empty() && self.phones.is_valid(&self.phone)
    }

    pub fn parsed_phone(&self) -> Option<ParsedPhone> {
        self.phones.parse(&self.phone)
    }

    /// Flag of the detected country, or a globe.
    pub fn country_prefix(&self) -> String {
        let country = self.parsed_phone().and_then(|parsed| parsed.country);
        flag_glyph(country.as_deref())
    }

    pub fn shows_checkmark(&self) -> bool {
        self.phone_is_valid()
    }

    /// Message to show under the phone field, if any.
    ///
    /// A flag set by [`send_code`](Self::send_code) wins. Otherwise a
    /// non-empty, unfocused value that is not a valid country-qualified
    /// number gets the missing-country or invalid message.
    pub fn phone_error(&self) -> Option<&'static str> {
        let messages = &self.content().phone.error;
        if self.phone_error.is_some() {
            return Some(messages.incomplete);
        }
        if self.phone.is_empty() || self.phone_focused {
            return None;
        }
        match self.parsed_phone() {
            Some(ParsedPhone {
                country: Some(_),
                ..
            }) if self.phone_is_valid() => None,
            Some(ParsedPhone {
                country: Some(_),
                ..
            }) => Some(messages.invalid),
            _ => Some(messages.missing_country_code),
        }
    }

    // Code grid

    pub fn code(&self) -> &OneTimeCode {
        &self.code
    }

    /// Text of one code cell.
    pub fn code_cell(&self, cell: usize) -> String {
        self.code.cell(cell).map(String::from).unwrap_or_default()
    }

    /// Accept `value` typed into `cell` and move on to the next cell, or to
    /// the submit button after a delay when `cell` is the last one.
    pub fn input_code(&mut self, cell: usize, value: &str) -> Option<FocusRequest> {
        self.retry_pending = false;
        if !self.code.enter(cell, value) {
            return None;
        }
        if cell + 1 < CODE_LENGTH {
            Some(FocusRequest::Now(FocusTarget::CodeCell(cell + 1)))
        } else {
            tracing::debug!("code complete");
            Some(FocusRequest::After(self.submit_delay, FocusTarget::Submit))
        }
    }

    pub fn can_reset(&self) -> bool {
        !self.code.is_empty()
    }

    /// Clear the code and go back to the first cell. Does nothing when the
    /// code is already empty.
    pub fn reset_code(&mut self) -> Option<FocusRequest> {
        if !self.can_reset() {
            return None;
        }
        self.code.clear();
        self.retry_pending = false;
        Some(FocusRequest::Now(FocusTarget::CodeCell(0)))
    }

    pub fn code_is_complete(&self) -> bool {
        self.code.is_complete()
    }

    // Submit

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.phone_is_valid() && self.code_is_complete()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a verification. Returns the payload to send, or `None` when
    /// submitting is not allowed right now.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        Some(Credentials {
            phone: self.phone.clone(),
            code: self.code.as_string(),
        })
    }

    /// Record how the verification went. Any failure, rejected or not
    /// delivered, shows the same message. Returns whether it succeeded.
    pub fn finish_submit<E: fmt::Display>(&mut self, outcome: Result<(), E>) -> bool {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.auth_failed = false;
                self.retry_pending = false;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "verification failed");
                self.auth_failed = true;
                self.retry_pending = true;
                false
            }
        }
    }

    pub fn auth_error(&self) -> Option<&'static str> {
        self.auth_failed.then(|| self.content().btn.error)
    }

    /// Current step of the flow. A failed attempt shows as
    /// [`Phase::SubmitError`] until the phone or code is edited; the error
    /// message itself stays until the next attempt resolves.
    pub fn phase(&self) -> Phase {
        if self.submitting {
            Phase::Submitting
        } else if self.retry_pending {
            Phase::SubmitError
        } else if self.code.is_complete() {
            Phase::CodeComplete
        } else if !self.code.is_empty() {
            Phase::CodeEntering
        } else if self.phone.is_empty() {
            Phase::Empty
        } else if !self.phone_is_valid() {
            Phase::PhoneEntering
        } else if self.phone_focused {
            Phase::PhoneValidFocused
        } else {
            Phase::PhoneValidBlurred
        }
    }
}
