use std::str::FromStr;

/// Whether `email` is a `local@domain.tld` shaped address.
///
/// The address has to parse as a [`lettre::Address`] and its domain needs at
/// least two non-empty labels, so `user@localhost` is rejected.
pub fn is_valid_email(email: &str) -> bool {
    lettre::Address::from_str(email).is_ok_and(|address| has_tld(address.domain()))
}

fn has_tld(domain: &str) -> bool {
    let mut labels = domain.split('.');
    labels.clone().count() >= 2 && labels.all(|label| !label.is_empty())
}
