//! Simulated Submission
//!
//! Drives a validated form from `Submitting` to `Succeeded`: waits a fixed
//! delay, mints a reference token and hands it back to the form. The clock
//! and token source are injected so tests never wait on real time.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::form::{Reference, SubmissionTicket};

/// Default simulated network delay
pub const SUBMIT_DELAY: Duration = Duration::from_millis(900);

const REFERENCE_PREFIX: &str = "DD-";
const REFERENCE_LEN: usize = 6;
const REFERENCE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters `encodeURIComponent` leaves alone
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Source of the simulated delay
pub trait Clock {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()>>>;
}

/// Browser timer backed clock
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerClock;

impl Clock for TimerClock {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(millis))
    }
}

/// Mints reference tokens for successful submissions
pub trait ReferenceSource {
    fn next_reference(&mut self) -> Reference;
}

/// `DD-` followed by six random base-36 characters
///
/// Tokens are not checked for uniqueness.
#[derive(Debug, Clone)]
pub struct RandomReferences<R = StdRng> {
    rng: R,
}

impl RandomReferences<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomReferences<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ReferenceSource for RandomReferences<R> {
    fn next_reference(&mut self) -> Reference {
        let token: String = (0..REFERENCE_LEN)
            .map(|_| REFERENCE_ALPHABET[self.rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
            .collect();
        Reference::new(format!("{}{}", REFERENCE_PREFIX, token))
    }
}

/// Wait, mint a reference and offer it to the form through `apply`.
///
/// `apply` reports whether the form took it; a closed or reset form
/// rejects it and nothing else happens.
pub async fn run_submission<C, S, F>(
    ticket: SubmissionTicket,
    clock: &C,
    delay: Duration,
    references: &mut S,
    apply: F,
) -> bool
where
    C: Clock + ?Sized,
    S: ReferenceSource + ?Sized,
    F: FnOnce(SubmissionTicket, Reference) -> bool,
{
    clock.sleep(delay).await;
    let reference = references.next_reference();
    let accepted = apply(ticket, reference);
    if !accepted {
        log::debug!("[SUBMIT] completion arrived after the form went away");
    }
    accepted
}

/// WhatsApp share URL announcing the donation
pub fn share_link(base: &str, reference: &Reference, total_items: u32) -> String {
    let message = format!(
        "I just scheduled a DevDonations pickup. Ref {}. Items: {}",
        reference, total_items
    );
    format!("{}{}", base, utf8_percent_encode(&message, COMPONENT_ENCODE_SET))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryId, ItemKey};
    use crate::form::{DonationForm, Method};

    /// Resolves immediately, recording requested delays
    struct InstantClock {
        requested: std::cell::RefCell<Vec<Duration>>,
    }

    impl InstantClock {
        fn new() -> Self {
            Self { requested: Default::default() }
        }
    }

    impl Clock for InstantClock {
        fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
            self.requested.borrow_mut().push(duration);
            Box::pin(std::future::ready(()))
        }
    }

    struct FixedReferences(&'static str);

    impl ReferenceSource for FixedReferences {
        fn next_reference(&mut self) -> Reference {
            Reference::new(self.0)
        }
    }

    fn ready_form() -> DonationForm {
        let mut form = DonationForm::new();
        form.set_name("Jane Doe".to_string());
        form.set_phone("+14155552671".to_string());
        form.set_method(Method::Dropoff);
        form.mutate_item(ItemKey::new(CategoryId::Tops, "T-shirts").unwrap(), 2);
        form
    }

    #[tokio::test]
    async fn test_submission_reaches_success() {
        let mut form = ready_form();
        let ticket = form.submit().unwrap();
        assert!(form.is_submitting());

        let clock = InstantClock::new();
        let mut refs = FixedReferences("DD-TEST01");
        let accepted = run_submission(ticket, &clock, SUBMIT_DELAY, &mut refs, |t, r| {
            form.complete(t, r)
        })
        .await;

        assert!(accepted);
        assert_eq!(clock.requested.borrow().as_slice(), &[SUBMIT_DELAY]);
        assert_eq!(form.reference().map(Reference::as_str), Some("DD-TEST01"));
    }

    #[tokio::test]
    async fn test_completion_after_reset_is_noop() {
        let mut form = ready_form();
        let ticket = form.submit().unwrap();
        form.reset();

        let mut refs = FixedReferences("DD-LATE01");
        let accepted = run_submission(ticket, &InstantClock::new(), SUBMIT_DELAY, &mut refs, |t, r| {
            form.complete(t, r)
        })
        .await;

        assert!(!accepted);
        assert!(form.is_editing());
        assert!(form.draft().name.is_empty());
    }

    #[test]
    fn test_random_reference_shape() {
        let mut refs = RandomReferences::with_rng(StdRng::seed_from_u64(42));
        let first = refs.next_reference();
        let token = first.as_str();

        assert!(token.starts_with("DD-"));
        assert_eq!(token.len(), 9);
        assert!(token[3..]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
        assert_ne!(first, refs.next_reference());
    }

    #[test]
    fn test_share_link_encoding() {
        let link = share_link("https://wa.me/?text=", &Reference::new("DD-AB12CD"), 3);
        assert_eq!(
            link,
            "https://wa.me/?text=I%20just%20scheduled%20a%20DevDonations%20pickup.%20Ref%20DD-AB12CD.%20Items%3A%203"
        );
    }
}
