//! Account-area chrome shared by profile routes: sidebar plus content slot.

#[cfg(test)]
#[path = "profile_layout_test.rs"]
mod profile_layout_test;

use leptos::prelude::*;

use crate::net::types::ProfileUser;
use crate::util::query::with_tab;

/// A sidebar entry; its position in [`PROFILE_SECTIONS`] is its tab index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileSection {
    pub label: &'static str,
    pub path: &'static str,
}

pub const PROFILE_SECTIONS: &[ProfileSection] = &[ProfileSection { label: "Payment Methods", path: "/profile/payment" }];

/// Sidebar links with their resolved hrefs and active flag for `tab`.
#[must_use]
pub fn section_links(tab: u32) -> Vec<(ProfileSection, String, bool)> {
    PROFILE_SECTIONS
        .iter()
        .zip(0u32..)
        .map(|(section, index)| (*section, with_tab(section.path, index), index == tab))
        .collect()
}

#[component]
pub fn ProfileLayout(
    #[prop(into)] title: String,
    #[prop(into)] display_name: String,
    user: Option<ProfileUser>,
    tab: u32,
    children: Children,
) -> impl IntoView {
    let email = user.as_ref().and_then(|u| u.email.clone());
    let image = user.and_then(|u| u.image);

    view! {
        <div class="profile-layout">
            <aside class="profile-layout__sidebar">
                <div class="profile-layout__identity">
                    {image.map(|src| view! { <img class="profile-layout__avatar" src=src alt="Avatar"/> })}
                    <span class="profile-layout__name">{display_name}</span>
                    {email.map(|email| view! { <span class="profile-layout__email">{email}</span> })}
                </div>
                <nav class="profile-layout__nav">
                    {section_links(tab)
                        .into_iter()
                        .map(|(section, href, active)| {
                            view! {
                                <a class="profile-layout__link" class:profile-layout__link--active=active href=href>
                                    {section.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
            <main class="profile-layout__content">
                <h1 class="profile-layout__title">{title}</h1>
                {children()}
            </main>
        </div>
    }
}
