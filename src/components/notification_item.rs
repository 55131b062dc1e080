//! One row in the notification list.

use leptos::prelude::*;

use crate::net::types::Notification;

/// Notification row; clicking an unread item marks it read.
#[component]
pub fn NotificationItem(
    notification: Notification,
    on_read: Callback<String>,
) -> impl IntoView {
    let id = notification.id.clone();
    let unread = !notification.read;
    let class = if unread {
        "notification-item notification-item--unread"
    } else {
        "notification-item"
    };

    view! {
        <div
            class=class
            on:click=move |_| {
                if unread {
                    on_read.run(id.clone());
                }
            }
        >
            <span class="notification-item__title">{notification.title}</span>
            <span class="notification-item__body">{notification.body}</span>
            <span class="notification-item__time">{notification.created_at}</span>
        </div>
    }
}
