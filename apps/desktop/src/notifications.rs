//! Stacked transient notifications in the page corner.

use dioxus::prelude::*;

use harvest_core::notify::{NotificationId, Severity};

use crate::state::*;

/// Add a message to the stack and arm its expiry timer. The timer carries
/// only the entry's id; if the user closes the entry first, the late timer
/// finds nothing to dismiss.
pub fn push_notice(message: impl Into<String>, severity: Severity) {
    let (id, ttl) = {
        let mut center = NOTICES.write();
        (center.notify(message, severity), center.ttl())
    };
    spawn(async move {
        tokio::time::sleep(ttl).await;
        NOTICES.write().dismiss(id);
    });
}

/// Fixed-position stack of live notifications, newest at the bottom.
#[component]
pub fn NotificationLayer() -> Element {
    let entries: Vec<(NotificationId, String, String)> = NOTICES
        .read()
        .entries()
        .iter()
        .map(|entry| {
            (
                entry.id(),
                entry.message().to_string(),
                format!("notice notice-{}", entry.severity().as_str()),
            )
        })
        .collect();

    rsx! {
        div {
            class: "notice-stack",
            for (id, message, class) in entries {
                div {
                    class: "{class}",
                    span { class: "notice-message", "{message}" }
                    button {
                        class: "notice-close",
                        onclick: move |_| {
                            NOTICES.write().dismiss(id);
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
