use leptos::{
    either::Either,
    ev::{Event, FocusEvent, SubmitEvent},
    html,
    prelude::*,
    task::spawn_local,
};

use super::reveal::{use_reveal, Reveal, SectionTitle};
use super::toast::Toasts;
use crate::contact::{ContactForm, ContactMessage, Field, Notice, Submission};
use crate::content::PROFILE;
use crate::motion::{Entrance, Motion, Stagger};
use crate::relay::{MailRelay, RelayError};

/// `honeypot` carries the hidden form field and is never forwarded.
#[server]
pub async fn send_contact_message(
    message: ContactMessage,
    #[server(default)] honeypot: String,
) -> Result<(), ServerFnError> {
    use crate::contact::screen;
    use crate::relay::EmailJs;

    let message = match screen(&honeypot, message) {
        Submission::Ready(message) => message,
        Submission::Discarded | Submission::Busy => return Ok(()),
        Submission::Incomplete(missing) => {
            let names = missing.iter().map(|f| f.label()).collect::<Vec<_>>();
            tracing::warn!("rejected incomplete contact message: {}", names.join(", "));
            return Err(ServerFnError::new(format!(
                "missing fields: {}",
                names.join(", ")
            )));
        }
    };
    let relay = use_context::<EmailJs>()
        .ok_or_else(|| ServerFnError::new("mail relay is not configured"))?;
    relay.send(&message).await.map_err(|e| {
        tracing::error!("EmailJS error: {e}");
        ServerFnError::new(e)
    })
}

/// Relays messages through [`send_contact_message`].
pub struct ServerRelay;

impl MailRelay for ServerRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        send_contact_message(message.clone(), String::new())
            .await
            .map_err(|e| RelayError::Server(e.to_string()))
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let visible = use_reveal(container);
    let details = Stagger::new(0.3, 0.1);
    let socials = Stagger::new(0.7, 0.1);

    view! {
        <section id="contact" class="section relative">
            <div class="container mx-auto" node_ref=container>
                <SectionTitle title="Get In Touch" visible />

                <div class="grid lg:grid-cols-2 gap-16 max-w-6xl mx-auto">
                    <Reveal
                        motion=Motion::new(Entrance::SlideLeft).duration(0.8).delay(0.2)
                        visible
                        class="space-y-8"
                    >
                        <div>
                            <h3 class="text-2xl font-display font-semibold mb-4">
                                "Let's work together!"
                            </h3>
                            <p class="text-muted-foreground">
                                "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision. Feel free to reach out!"
                            </p>
                        </div>

                        <div class="space-y-6">
                            {PROFILE
                                .contact_details()
                                .into_iter()
                                .enumerate()
                                .map(|(i, info)| {
                                    view! {
                                        <Reveal
                                            motion=Motion::new(Entrance::SlideLeft).duration(0.5).delay(details.delay(i))
                                            visible
                                        >
                                            <a
                                                href=info.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-4 group transition-transform hover:translate-x-2"
                                            >
                                                <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-primary/20 to-accent/20 flex items-center justify-center transition-transform group-hover:scale-110 group-hover:rotate-12">
                                                    {info.icon}
                                                </div>
                                                <div>
                                                    <p class="text-sm text-muted-foreground">{info.label}</p>
                                                    <p class="font-medium group-hover:text-primary transition-colors">
                                                        {info.value}
                                                    </p>
                                                </div>
                                            </a>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <Reveal
                            motion=Motion::new(Entrance::FadeUp).duration(0.5).delay(0.6)
                            visible
                            class="pt-8 border-t border-border"
                        >
                            <p class="text-sm text-muted-foreground mb-4">"Follow me on"</p>
                            <div class="flex gap-4">
                                {PROFILE
                                    .socials
                                    .iter()
                                    .enumerate()
                                    .map(|(i, social)| {
                                        view! {
                                            <Reveal
                                                motion=Motion::new(Entrance::Pop).duration(0.4).delay(socials.delay(i))
                                                visible
                                            >
                                                <a
                                                    href=social.href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label=social.label
                                                    class="w-12 h-12 glass-hover rounded-xl flex items-center justify-center text-muted-foreground hover:text-primary hover:scale-110 hover:-translate-y-1 transition-all"
                                                >
                                                    <i class=social.icon />
                                                </a>
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>

                        <Reveal motion=Motion::new(Entrance::FadeUp).duration(0.5).delay(0.8) visible>
                            <a
                                href=PROFILE.resume
                                download=""
                                class="inline-flex items-center gap-3 px-8 py-4 bg-gradient-to-r from-primary via-accent to-secondary rounded-full font-semibold text-primary-foreground pulse-glow hover:scale-[1.02] active:scale-[0.98] transition-transform"
                            >
                                "⬇ Download Resume"
                            </a>
                        </Reveal>
                    </Reveal>

                    <Reveal motion=Motion::new(Entrance::SlideRight).duration(0.8).delay(0.4) visible>
                        <ContactFormView />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let toasts = expect_context::<Toasts>();
    let submitting = move || form.with(ContactForm::is_submit_disabled);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(Submission::Ready(message)) => {
                spawn_local(async move {
                    let result = ServerRelay.send(&message).await;
                    if let Some(notice) = form.try_update(move |f| f.finish(result)) {
                        toasts.push(notice);
                    }
                });
            }
            Some(Submission::Incomplete(missing)) => {
                let names = missing.iter().map(|f| f.label()).collect::<Vec<_>>();
                toasts.push(Notice::error(
                    "Please fill in every field",
                    format!("Missing: {}", names.join(", ")),
                ));
            }
            // bots and double clicks get no feedback
            Some(Submission::Discarded) | Some(Submission::Busy) | None => {}
        }
    };

    view! {
        <form on:submit=on_submit class="glass p-8 space-y-6">
            // hidden from people, bots fill it in
            <input
                type="text"
                name="website"
                style="display: none"
                tabindex="-1"
                autocomplete="off"
                prop:value=move || form.with(|f| f.honeypot().to_string())
                on:input=move |ev| form.update(|f| f.set_honeypot(event_target_value(&ev)))
            />
            <FloatingField form field=Field::Name />
            <FloatingField form field=Field::Email />
            <FloatingField form field=Field::Message />
            <button
                type="submit"
                disabled=submitting
                class="w-full flex items-center justify-center gap-2 py-4 bg-primary text-primary-foreground rounded-xl font-semibold group enabled:hover:scale-[1.02] enabled:active:scale-[0.98] transition-transform disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {move || {
                    if submitting() {
                        Either::Left(
                            view! {
                                <span class="w-5 h-5 rounded-full border-2 border-primary-foreground border-t-transparent animate-spin" />
                                "Sending..."
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                "Send Message"
                                <span class="animate-nudge">"➤"</span>
                            },
                        )
                    }
                }}
            </button>
        </form>
    }
}

#[component]
fn FloatingField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let label_class = move || {
        let (raised, focused) = form.with(|f| (f.label_raised(field), f.focused() == Some(field)));
        format!(
            "absolute left-4 origin-left pointer-events-none z-10 transition-all duration-200 {} {}",
            if raised { "top-1 scale-75" } else { "top-5 scale-100" },
            if focused { "text-primary" } else { "text-muted-foreground" },
        )
    };
    let input_class = "w-full pt-7 pb-2 px-4 bg-muted/50 border border-border rounded-xl focus:border-primary focus:outline-none transition-colors";
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let on_focus = move |_: FocusEvent| form.update(|f| f.focus(field));
    let on_blur = move |_: FocusEvent| form.update(|f| f.blur(field));

    let input_type = if field == Field::Email { "email" } else { "text" };

    let control = match field {
        Field::Message => Either::Left(view! {
            <textarea
                rows=5
                required=true
                class=format!("{input_class} resize-none")
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            />
        }),
        Field::Name | Field::Email => Either::Right(view! {
            <input
                type=input_type
                required=true
                class=input_class
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
            />
        }),
    };

    view! {
        <div class="relative">
            <label class=label_class>{field.label()}</label>
            {control}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::contact::{FormStatus, Tone};
    use crate::relay::{
        EmailJs, RelayConfig, ENDPOINT_VAR, PUBLIC_KEY_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR,
    };
    use httpmock::prelude::*;

    const PATH: &str = "/api/v1.0/email/send";

    fn message() -> ContactMessage {
        ContactMessage {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    /// Makes an owner current for this test thread, with a relay aimed at `server`.
    fn provide_relay(server: &MockServer) -> Owner {
        let endpoint = server.url(PATH);
        let config = RelayConfig::from_lookup(|key| match key {
            SERVICE_ID_VAR => Some("service_abc".to_string()),
            TEMPLATE_ID_VAR => Some("template_xyz".to_string()),
            PUBLIC_KEY_VAR => Some("pk_123".to_string()),
            ENDPOINT_VAR => Some(endpoint.clone()),
            _ => None,
        })
        .unwrap();
        let owner = Owner::new();
        owner.set();
        provide_context(EmailJs::new(config));
        owner
    }

    async fn mock_relay(server: &MockServer) -> httpmock::Mock<'_> {
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).body("OK");
            })
            .await
    }

    #[tokio::test]
    async fn test_without_relay_reports_failure() {
        let owner = Owner::new();
        owner.set();

        assert!(send_contact_message(message(), String::new()).await.is_err());

        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Message, "Hello there");
        let Submission::Ready(message) = form.begin_submit() else {
            panic!("form should be ready");
        };
        let result = ServerRelay.send(&message).await;
        assert!(matches!(result, Err(RelayError::Server(_))));

        let notice = form.finish(result);
        assert_eq!(notice.tone, Tone::Error);
        assert_eq!(form.status(), FormStatus::Failed);
    }

    #[tokio::test]
    async fn test_honeypot_is_dropped_silently() {
        let server = MockServer::start_async().await;
        let mock = mock_relay(&server).await;
        let _owner = provide_relay(&server);

        let result = send_contact_message(message(), "https://spam.example".to_string()).await;
        assert!(result.is_ok());
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let server = MockServer::start_async().await;
        let mock = mock_relay(&server).await;
        let _owner = provide_relay(&server);

        let blank = ContactMessage {
            from_name: String::new(),
            from_email: "   ".to_string(),
            message: String::new(),
        };
        assert!(send_contact_message(blank, String::new()).await.is_err());

        let mut partial = message();
        partial.message = " \n ".to_string();
        assert!(send_contact_message(partial, String::new()).await.is_err());

        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_valid_message_is_relayed_once() {
        let server = MockServer::start_async().await;
        let mock = mock_relay(&server).await;
        let _owner = provide_relay(&server);

        send_contact_message(message(), String::new()).await.unwrap();
        mock.assert_hits_async(1).await;
    }
}
