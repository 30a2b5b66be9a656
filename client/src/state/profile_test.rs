use super::*;

#[test]
fn default_profile_has_three_socials() {
    let profile = ContactProfile::default();
    assert_eq!(profile.headline, "Get in Touch");
    let networks: Vec<_> = profile.socials.iter().map(|s| s.network).collect();
    assert_eq!(networks, ["LinkedIn", "Twitter", "GitHub"]);
}

#[test]
fn mailto_prefixes_email() {
    assert_eq!(ContactProfile::default().mailto(), "mailto:john.doe@example.com");
}

#[test]
fn tel_strips_formatting() {
    assert_eq!(ContactProfile::default().tel(), "tel:+15551234567");
}

#[test]
fn social_display_joins_network_and_handle() {
    let handle = SocialHandle { network: "GitHub", handle: "@johndoe" };
    assert_eq!(handle.display(), "GitHub: @johndoe");
}
