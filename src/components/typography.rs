//! Typography Component
//!
//! Shared text styles.

use leptos::prelude::*;

/// Text style variants
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Variant {
    H1,
    H2,
    Body1,
    Label2,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::H1 => "typo-h1",
            Variant::H2 => "typo-h2",
            Variant::Body1 => "typo-body1",
            Variant::Label2 => "typo-label2",
        }
    }
}

#[component]
pub fn Typography(variant: Variant, children: Children) -> impl IntoView {
    view! { <div class=variant.class()>{children()}</div> }
}
