// Contact section: details, social links, the form and its toast

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::links::{contact_details, social_links};
use portfolio_core::{
    ContactForm, ContactTransport, Field, Notification, NotificationKind, Section, SubmitError,
};

use super::link_view;
use crate::state::use_portfolio;
use crate::transport::SiteTransport;

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Latest pending dismissal timer; replacing it hands back the older one
/// so it can be cleared before it hides a newer toast.
#[derive(Debug)]
pub(crate) struct PendingTimer<H> {
    handle: Option<H>,
}

impl<H> Default for PendingTimer<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> PendingTimer<H> {
    pub(crate) fn replace(&mut self, next: H) -> Option<H> {
        self.handle.replace(next)
    }

    pub(crate) fn take(&mut self) -> Option<H> {
        self.handle.take()
    }
}

fn log_failure(cause: &str) {
    web_sys::console::error_1(&format!("Error sending message: {cause}").into());
}

#[component]
pub fn Contact() -> impl IntoView {
    let data = use_portfolio();
    let form = RwSignal::new(ContactForm::new());
    let toast = RwSignal::new(None::<Notification>);
    let transport = StoredValue::new(SiteTransport::from_config());
    let dismissal = StoredValue::new(PendingTimer::<TimeoutHandle>::default());

    let show_toast = move |notification: Notification| {
        if let Some(previous) = dismissal.try_update_value(|timer| timer.take()).flatten() {
            previous.clear();
        }
        toast.set(Some(notification));
        match set_timeout_with_handle(move || toast.set(None), TOAST_DURATION) {
            Ok(handle) => {
                dismissal.update_value(|timer| {
                    timer.replace(handle);
                });
            }
            Err(err) => web_sys::console::error_1(&err),
        }
    };

    let value_of = move |field: Field| move || form.with(|f| f.field(field).to_string());
    let on_input = move |field: Field| {
        move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(SubmitError::InFlight)) | None => return,
            Some(Err(err)) => {
                log_failure(&err.to_string());
                return;
            }
        };
        let transport = transport.get_value();
        spawn_local(async move {
            let outcome = transport.send(request).await;
            match &outcome {
                Err(err) => log_failure(&err.to_string()),
                Ok(response) if !response.success => log_failure(&response.message),
                Ok(_) => {}
            }
            if let Some(notification) = form.try_update(|f| f.complete(outcome)) {
                show_toast(notification);
            }
        });
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <section id=Section::Contact.anchor_id()>
            <h2>"Get In Touch"</h2>
            <div class="grid">
                <div>
                    <h3>"Let's Connect"</h3>
                    <div class="contact-details">
                        {contact_details(&data.personal)
                            .into_iter()
                            .map(|link| link_view(link, true))
                            .collect_view()}
                    </div>
                    <div class="contact-social">
                        {social_links(&data.personal)
                            .into_iter()
                            .map(|link| link_view(link, false))
                            .collect_view()}
                    </div>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <input
                        type="text"
                        name=Field::Name.as_str()
                        placeholder="Your Name"
                        required
                        prop:value=value_of(Field::Name)
                        on:input=on_input(Field::Name)
                    />
                    <input
                        type="email"
                        name=Field::Email.as_str()
                        placeholder="Your Email"
                        required
                        prop:value=value_of(Field::Email)
                        on:input=on_input(Field::Email)
                    />
                    <input
                        type="text"
                        name=Field::Subject.as_str()
                        placeholder="Subject"
                        required
                        prop:value=value_of(Field::Subject)
                        on:input=on_input(Field::Subject)
                    />
                    <textarea
                        name=Field::Message.as_str()
                        placeholder="Your Message"
                        rows="6"
                        required
                        prop:value=value_of(Field::Message)
                        on:input=on_input(Field::Message)
                    ></textarea>
                    <button type="submit" class="btn" disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>

            {move || toast.get().map(|note| view! { <Toast note /> })}
        </section>
    }
}

#[component]
fn Toast(note: Notification) -> impl IntoView {
    let class = match note.kind {
        NotificationKind::Success => "toast",
        NotificationKind::Error => "toast error",
    };
    view! {
        <div class=class role="status">
            <div class="toast-title">{note.title}</div>
            <div>{note.description}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_timer_supersedes_older() {
        let mut timer = PendingTimer::default();
        assert_eq!(timer.replace(1), None);
        assert_eq!(timer.replace(2), Some(1));
        assert_eq!(timer.take(), Some(2));
        assert_eq!(timer.take(), None);
    }
}
