//! Synthetic demo data.
//!
//! All names and doctors here are fictional; no external systems are
//! contacted. Randomness is unseeded, so every batch differs.

use frontdesk_core::{Intent, LogRecord, ParsedMessage};
use rand::Rng;

/// Records appended per `/generate-test-data` invocation.
pub const BATCH_SIZE: usize = 10;

const NAMES: [&str; 6] = [
    "Sarah Lim",
    "Mark Bailey",
    "Jenna Moore",
    "Luke Thompson",
    "Amy Tan",
    "James Walker",
];
const DOCTORS: [&str; 4] = ["Dr. Nguyen", "Dr. Patel", "Dr. Singh", "Dr. Wilson"];
const REASONS: [&str; 5] = [
    "checkup",
    "follow-up",
    "referral",
    "results discussion",
    "vaccination",
];
const TIMES: [&str; 5] = [
    "Monday 9am",
    "Tuesday 2pm",
    "Wednesday 11am",
    "Thursday 4pm",
    "Friday 10am",
];

fn pick<'a>(rng: &mut impl Rng, candidates: &[&'a str]) -> &'a str {
    candidates[rng.gen_range(0..candidates.len())]
}

/// Build `count` plausible appointment-request records with randomly
/// selected candidates and a synthesized local-format mobile number.
#[must_use]
pub fn sample_records(count: usize) -> Vec<LogRecord> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let name = pick(&mut rng, &NAMES);
            let doctor = pick(&mut rng, &DOCTORS);
            let reason = pick(&mut rng, &REASONS);
            let preferred_time = pick(&mut rng, &TIMES);
            let phone = format!("04{:08}", rng.gen_range(0..100_000_000u32));

            let message = format!(
                "Hi, I'm {name}. I'd like to see {doctor} for {reason} at {preferred_time}."
            );

            LogRecord::new(
                message,
                ParsedMessage {
                    intent: Intent::AppointmentRequest,
                    name: name.to_string(),
                    phone,
                    doctor: Some(doctor.to_string()),
                    preferred_time: Some(preferred_time.to_string()),
                    reason: Some(reason.to_string()),
                },
            )
        })
        .collect()
}
