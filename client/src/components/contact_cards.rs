//! "Get in Touch" and "Social Media" cards beside the contact form.

use leptos::prelude::*;

use crate::state::profile::ContactProfile;

#[component]
pub fn ContactCards(profile: ContactProfile) -> impl IntoView {
    let mailto = profile.mailto();
    let tel = profile.tel();
    let socials = profile
        .socials
        .iter()
        .map(|social| view! { <p>{social.display()}</p> })
        .collect_view();

    view! {
        <div class="contact-card">
            <h3>{profile.headline}</h3>
            <p>{profile.blurb}</p>
            <div class="contact-info">
                <p>"📧 " <a href=mailto>{profile.email}</a></p>
                <p>"📱 " <a href=tel>{profile.phone}</a></p>
                <p>"📍 " {profile.location}</p>
            </div>
        </div>
        <div class="contact-card">
            <h3>"Social Media"</h3>
            <div class="contact-info">{socials}</div>
        </div>
    }
}
