//! Acknowledgeable notice banner

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message produced by the registration workflow for the visitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Modal banner that stays until the visitor presses OK
#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };

    rsx! {
        div {
            class: "notice-backdrop",
            div {
                class: "{class}",
                p { "{notice.message}" }
                button {
                    r#type: "button",
                    class: "notice-ok",
                    onclick: move |_| on_dismiss.call(()),
                    "OK"
                }
            }
        }
    }
}
