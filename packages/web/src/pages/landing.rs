//! Landing page component

use dioxus::prelude::*;

use crate::components::RegistrationForm;

const ABOUT_STEPS: &[&str] = &[
    "Upload your invoices in jpg, png, or pdf format.",
    "Get a preview of your entry in Tally and edit if you want to.",
    "Click the submit button. Voila!! Your invoice has been entered in your Tally.",
];

const HERO_POINTS: &[&str] = &[
    "Purchase and sales entries in seconds",
    "No errors",
    "End-to-end encrypted",
];

/// Landing page - product pitch and pre-registration
#[component]
pub fn Landing() -> Element {
    rsx! {
        header {
            id: "header",
            class: "header",
            a { href: "#", class: "logo", h1 { class: "sitename", "Flowt" } }
            nav {
                class: "navmenu",
                ul {
                    li { a { href: "#hero", class: "active", "Home" } }
                    li { a { href: "#about", "About" } }
                    li { a { href: "#contact", "Contact" } }
                }
            }
            a { class: "btn-getstarted", href: "#preregistration", "Get Started" }
        }

        main {
            class: "main",

            section {
                id: "hero",
                class: "hero section dark-background",
                h1 { "AI Meets Accounting" }
                ul {
                    for point in HERO_POINTS {
                        li { "{point}" }
                    }
                }
                a { href: "#preregistration", class: "preregisterbtn", "Get Started" }
            }

            section {
                id: "about",
                class: "about section",
                h2 { "About Us" }
                p {
                    "At Flowt, we revolutionize accounting by automating data entry, saving "
                    "accountants hours of manual work. Our intelligent platform enables seamless "
                    "receipt and invoice processing. Just upload your invoices, and we'll handle the rest."
                }
                ul {
                    for step in ABOUT_STEPS {
                        li { "{step}" }
                    }
                }
            }

            section {
                id: "preregistration",
                class: "preregistration section",
                h1 { "Pre-Register Now" }
                p { "Secure your spot by providing your details below." }
                RegistrationForm {}
            }

            section {
                id: "contact",
                class: "contact section",
                h2 { "Contact" }
                div { class: "info-item", h3 { "Address" } p { "IIT Delhi, Hauz Khas, New Delhi, 110016" } }
                div { class: "info-item", h3 { "Call Us" } p { "+91 8770936337" } }
                div { class: "info-item", h3 { "Email Us" } p { "admin@flowt.co.in" } }
            }
        }

        footer {
            id: "footer",
            class: "footer",
            p { "© Flowt. All Rights Reserved" }
        }
    }
}
