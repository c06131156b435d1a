//! Fixed word pools backing fake names, emails, phones and product
//! names. Uniqueness of emails and phones is enforced by the caller
//! through [`crate::UniquePool`], not by the pools themselves.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aisha", "Alejandro", "Amelia", "Arjun", "Astrid", "Benjamin", "Camille", "Carlos", "Chen",
    "Clara", "Daniel", "Elena", "Emeka", "Fatima", "Felix", "Grace", "Hana", "Henrik", "Ines",
    "Isabella", "Jonas", "Julia", "Kenji", "Laila", "Liam", "Lucia", "Mateo", "Mei", "Nadia",
    "Noah", "Olivia", "Omar", "Priya", "Ravi", "Sofia", "Tariq", "Uma", "Viktor", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Andersson", "Bauer", "Bennett", "Castillo", "Chen", "Costa", "Dubois", "Fischer",
    "Garcia", "Haddad", "Hansen", "Ivanov", "Jensen", "Kapoor", "Kim", "Kowalski", "Larsson",
    "Mbeki", "Mendoza", "Moreau", "Nakamura", "Novak", "Okafor", "Patel", "Ricci", "Rossi",
    "Santos", "Schmidt", "Silva", "Singh", "Suzuki", "Tanaka", "Vargas", "Weber", "Yamamoto",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.example",
    "inbox.example",
];

const COLORS: &[&str] = &[
    "Amber", "Aqua", "Azure", "Beige", "Black", "Blue", "Bronze", "Coral", "Crimson", "Emerald",
    "Gold", "Gray", "Green", "Indigo", "Ivory", "Jade", "Lavender", "Magenta", "Maroon", "Olive",
    "Orange", "Pearl", "Pink", "Plum", "Purple", "Red", "Ruby", "Sage", "Silver", "Teal",
    "Violet", "White",
];

const NOUNS: &[&str] = &[
    "Anchor", "Atlas", "Beacon", "Blossom", "Breeze", "Canyon", "Cascade", "Cedar", "Comet",
    "Compass", "Crest", "Drift", "Ember", "Falcon", "Fern", "Flint", "Glacier", "Harbor",
    "Horizon", "Lantern", "Meadow", "Nimbus", "Orchid", "Pebble", "Quartz", "Ridge", "River",
    "Sparrow", "Summit", "Thistle", "Willow", "Zenith",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// A fake "First Last" display name.
pub(crate) fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// One email candidate; a numeric suffix widens the pool well past any
/// realistic user count.
pub(crate) fn email_candidate<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}{}@{}",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase(),
        rng.random_range(0..10_000u32),
        pick(rng, EMAIL_DOMAINS),
    )
}

/// One MSISDN-style phone candidate: 12 digits, no leading zero.
pub(crate) fn phone_candidate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = String::with_capacity(12);
    digits.push(char::from(b'1' + rng.random_range(0..9u8)));
    for _ in 0..11 {
        digits.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    digits
}

/// A fake "Color Noun" product name.
pub(crate) fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, COLORS), pick(rng, NOUNS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_phone_candidate_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let phone = phone_candidate(&mut rng);
            assert_eq!(phone.len(), 12);
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
            assert!(!phone.starts_with('0'));
        }
    }

    #[test]
    fn test_email_candidate_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let email = email_candidate(&mut rng);
        assert!(email.contains('@'));
        assert_eq!(email, email.to_lowercase());
    }
}
