//! Static contact details shown beside the form.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// One social network handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialHandle {
    pub network: &'static str,
    pub handle: &'static str,
}

/// Content for the "Get in Touch" and "Social Media" cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactProfile {
    pub headline: &'static str,
    pub blurb: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub socials: Vec<SocialHandle>,
}

impl Default for ContactProfile {
    fn default() -> Self {
        Self {
            headline: "Get in Touch",
            blurb: "Feel free to reach out for collaborations or just a friendly hello",
            email: "john.doe@example.com",
            phone: "+1 (555) 123-4567",
            location: "San Francisco, CA",
            socials: vec![
                SocialHandle { network: "LinkedIn", handle: "@johndoe" },
                SocialHandle { network: "Twitter", handle: "@johndoe" },
                SocialHandle { network: "GitHub", handle: "@johndoe" },
            ],
        }
    }
}

impl ContactProfile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with everything but digits and a leading `+` removed.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
            .map(|(_, c)| c)
            .collect();
        format!("tel:{digits}")
    }
}

impl SocialHandle {
    pub fn display(&self) -> String {
        format!("{}: {}", self.network, self.handle)
    }
}
