use crate::models::Intent;

const BOOKING_KEYWORDS: &[&str] = &["programare", "rezervare", "book", "appointment"];

// First match wins, so order is significant.
const RESPONSES: &[(&str, Intent, &str)] = &[
    (
        "program",
        Intent::Program,
        "Suntem deschiși de luni până vineri, între 09:00 și 18:00.",
    ),
    (
        "locatie",
        Intent::Locatie,
        "Ne găsești pe Strada Exemplu nr. 10, București.",
    ),
    (
        "servicii",
        Intent::Servicii,
        "Oferim: tuns, coafat, manichiură, pedichiură și consultanță de stil.",
    ),
    (
        "preturi",
        Intent::Preturi,
        "Prețurile încep de la 100 RON pentru tuns și 150 RON pentru coafat. Solicitați detalii pentru servicii specifice.",
    ),
];

pub const FALLBACK_REPLY: &str =
    "Nu am înțeles exact. Te pot ajuta cu programul, locația, serviciile sau prețurile noastre.";

/// Classifies a message by plain substring containment.
///
/// Returns `Intent::Booking` with no reply when a booking trigger is present; the
/// caller is expected to hand over to the booking flow. Every other intent carries
/// its canned reply.
pub fn resolve(message: &str) -> (Intent, Option<&'static str>) {
    let normalized = message.to_lowercase();

    if BOOKING_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        return (Intent::Booking, None);
    }

    RESPONSES
        .iter()
        .find(|(keyword, _, _)| normalized.contains(keyword))
        .map(|(_, intent, reply)| (*intent, Some(*reply)))
        .unwrap_or((Intent::Fallback, Some(FALLBACK_REPLY)))
}
