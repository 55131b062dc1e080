//! Notification list page.

use leptos::prelude::*;

use crate::components::notification_item::NotificationItem;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let notifications = LocalResource::new(|| async {
        crate::net::api::fetch_notifications().await.unwrap_or_default()
    });

    // Ids marked read locally this visit, so rows restyle without a refetch.
    let read_locally = RwSignal::new(Vec::<String>::new());

    let on_read = Callback::new(move |id: String| {
        read_locally.update(|list| {
            if !list.contains(&id) {
                list.push(id.clone());
            }
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::mark_notification_read(&id).await {
                leptos::logging::warn!("mark-read failed (ignored): {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="notifications-page">
            <h1>"Notifications"</h1>
            <Suspense fallback=move || view! { <p>"Loading notifications..."</p> }>
                {move || {
                    notifications.get().map(|list| {
                        if list.is_empty() {
                            view! { <p>"You're all caught up."</p> }.into_any()
                        } else {
                            let read = read_locally.get();
                            view! {
                                <div class="notifications-page__list">
                                    {list
                                        .into_iter()
                                        .map(|mut notification| {
                                            if read.contains(&notification.id) {
                                                notification.read = true;
                                            }
                                            view! {
                                                <NotificationItem
                                                    notification=notification
                                                    on_read=on_read
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
